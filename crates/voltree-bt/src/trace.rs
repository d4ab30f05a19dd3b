use std::borrow::Cow;

use crate::status::BtStatus;

/// A small, allocation-friendly trace event.
///
/// Intentionally "dumb data": recorded during evaluation, rendered later by
/// whatever sink is attached. This is an observability side-channel only;
/// control logic never reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraceEvent {
    pub tick: u64,
    pub node: Cow<'static, str>,
    pub phase: TracePhase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TracePhase {
    /// A composite started reducing its children.
    Enter,
    /// A node settled on its status for this tick.
    Resolved(BtStatus),
}

impl TraceEvent {
    pub fn enter(tick: u64, node: impl Into<Cow<'static, str>>) -> Self {
        Self {
            tick,
            node: node.into(),
            phase: TracePhase::Enter,
        }
    }

    pub fn resolved(tick: u64, node: impl Into<Cow<'static, str>>, status: BtStatus) -> Self {
        Self {
            tick,
            node: node.into(),
            phase: TracePhase::Resolved(status),
        }
    }
}

pub trait TraceSink {
    fn emit(&mut self, event: TraceEvent);
}

#[derive(Debug, Default)]
pub struct NullTraceSink;

impl TraceSink for NullTraceSink {
    fn emit(&mut self, _event: TraceEvent) {}
}

/// Collects events in memory. Used by tests and offline tooling.
#[derive(Debug, Default)]
pub struct VecTraceSink {
    pub events: Vec<TraceEvent>,
}

impl TraceSink for VecTraceSink {
    fn emit(&mut self, event: TraceEvent) {
        self.events.push(event);
    }
}
