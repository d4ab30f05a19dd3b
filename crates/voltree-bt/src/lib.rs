//! Reactive behaviour tree runtime for tick-driven procedures.
//!
//! A tree is evaluated ("ticked") repeatedly by a driver loop. Each pass
//! returns one of three statuses: `Success`, `Failure`, or `Running`, where
//! `Running` means "call me again next tick, I kept my place". Composites
//! restart from their first child on every tick, so world state is re-tested
//! from the top of each active stage and a change between ticks (a dropped
//! link, say) is noticed immediately.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod driver;
pub mod error;
pub mod node;
pub mod nodes;
pub mod status;
pub mod tick;
pub mod trace;

pub use driver::{Driver, FinalStatus, RunOutcome, TickBudget};
pub use error::TreeError;
pub use node::BtNode;
pub use nodes::{Action, Condition, Fallback, Sequence};
pub use status::BtStatus;
pub use tick::TickContext;
pub use trace::{NullTraceSink, TraceEvent, TracePhase, TraceSink, VecTraceSink};
