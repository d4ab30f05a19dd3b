//! Electric-vehicle charging procedure built on the voltree runtime.
//!
//! The tree re-tests world state from the top of each active stage every
//! tick: a communication guard first, then condition/recovery stages for
//! navigation, alignment, docking and charging health, finished by an
//! undocking sequence. Multi-tick recoveries return `Running` until their
//! effect is visible to the paired condition.

#![forbid(unsafe_code)]

pub mod config;
pub mod leaves;
pub mod procedure;
pub mod state;
pub mod topology;
pub mod trace;

pub use config::{AlertPolicy, ChargingConfig, ConfigError};
pub use procedure::{run_procedure, ProcedureError, ProcedureReport};
pub use state::ChargingState;
pub use topology::build_tree;
pub use trace::LogTraceSink;
