/// Per-cycle context handed to every node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickContext {
    pub tick: u64,
    /// Tick period in seconds. Derived once from the driver's rate; leaves
    /// that integrate progress over time must use this value, never their
    /// own notion of the period.
    pub dt_seconds: f32,
}
