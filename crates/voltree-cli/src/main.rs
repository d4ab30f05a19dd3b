//! voltree CLI - behaviour-tree driven EV charging procedure.
//!
//! - `voltree run` - tick the charging tree to a terminal status
//! - `voltree config` - print the effective configuration

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use voltree_bt::FinalStatus;
use voltree_charging::{run_procedure, ChargingConfig, ChargingState, LogTraceSink};

#[derive(Parser)]
#[command(name = "voltree")]
#[command(about = "Behaviour-tree driven EV charging procedure", version)]
struct Cli {
    /// Verbose output (per-node trace lines)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the charging procedure
    Run {
        /// Path to a YAML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Starting battery level, percent
        #[arg(long)]
        battery: Option<f32>,

        /// Override the tick budget
        #[arg(long)]
        max_ticks: Option<u64>,

        /// Start with the vehicle link down
        #[arg(long)]
        no_comm: bool,
    },

    /// Print the effective configuration as YAML
    Config {
        /// Path to a YAML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    match cli.command {
        Commands::Run {
            config,
            battery,
            max_ticks,
            no_comm,
        } => run(config, battery, max_ticks, no_comm),
        Commands::Config { config } => show_config(config),
    }
}

fn load_config(path: Option<PathBuf>) -> Result<ChargingConfig> {
    match path {
        Some(path) => {
            let config = ChargingConfig::load(&path)?;
            tracing::debug!(path = %path.display(), "Loaded configuration");
            Ok(config)
        }
        None => Ok(ChargingConfig::default()),
    }
}

fn run(
    config: Option<PathBuf>,
    battery: Option<f32>,
    max_ticks: Option<u64>,
    no_comm: bool,
) -> Result<()> {
    let mut config = load_config(config)?;
    if let Some(max_ticks) = max_ticks {
        config.max_ticks = max_ticks;
    }

    let mut state = ChargingState::default();
    if let Some(battery) = battery {
        state.battery_level = battery;
    }
    if no_comm {
        state.communication_ok = false;
    }

    let report = run_procedure(&mut state, &config, &mut LogTraceSink)?;

    match report.status {
        FinalStatus::Succeeded => {
            println!("Charging procedure completed in {} ticks.", report.ticks)
        }
        FinalStatus::Failed => {
            println!("Charging procedure failed after {} ticks.", report.ticks)
        }
        FinalStatus::OutOfTicks => {
            println!("Charging procedure stopped: tick budget exhausted.")
        }
    }
    Ok(())
}

fn show_config(path: Option<PathBuf>) -> Result<()> {
    let config = load_config(path)?;
    print!("{}", serde_yaml::to_string(&config)?);
    Ok(())
}
