use thiserror::Error;
use voltree_bt::{Driver, FinalStatus, RunOutcome, TraceSink, TreeError};

use crate::config::{ChargingConfig, ConfigError};
use crate::state::ChargingState;
use crate::topology;

/// Build-time failures; nothing is ticked when one of these comes back.
#[derive(Debug, Error)]
pub enum ProcedureError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Tree(#[from] TreeError),
}

/// Final report of one charging run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcedureReport {
    pub status: FinalStatus,
    pub ticks: u64,
}

/// Validate the configuration, build the tree, and tick it at the
/// configured rate until it settles or the tick budget runs out.
pub fn run_procedure(
    state: &mut ChargingState,
    config: &ChargingConfig,
    trace: &mut dyn TraceSink,
) -> Result<ProcedureReport, ProcedureError> {
    config.validate()?;
    let root = topology::build_tree(config)?;
    let mut driver = Driver::new(root);

    tracing::info!(
        tick_hz = %config.tick_hz,
        max_ticks = %config.max_ticks,
        battery_pct = %state.battery_level,
        "Starting charging procedure"
    );

    let RunOutcome { status, ticks } = driver.run(state, trace, &config.budget());

    match status {
        FinalStatus::Succeeded => {
            tracing::info!(ticks = %ticks, "Charging procedure completed")
        }
        FinalStatus::Failed => {
            tracing::warn!(ticks = %ticks, "Charging procedure failed")
        }
        FinalStatus::OutOfTicks => {
            tracing::warn!(ticks = %ticks, "Charging procedure ran out of ticks")
        }
    }

    Ok(ProcedureReport { status, ticks })
}
