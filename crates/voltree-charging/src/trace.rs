use voltree_bt::{TraceEvent, TracePhase, TraceSink};

/// Forwards tree trace events to `tracing` at debug level.
///
/// The tree's own trace channel stays dumb data; this sink is the bridge
/// into the process-wide subscriber.
#[derive(Debug, Default)]
pub struct LogTraceSink;

impl TraceSink for LogTraceSink {
    fn emit(&mut self, event: TraceEvent) {
        match event.phase {
            TracePhase::Enter => {
                tracing::debug!(tick = %event.tick, node = %event.node, "enter")
            }
            TracePhase::Resolved(status) => {
                tracing::debug!(
                    tick = %event.tick,
                    node = %event.node,
                    status = ?status,
                    "resolved"
                )
            }
        }
    }
}
