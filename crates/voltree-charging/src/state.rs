/// Everything the charging leaves read and write, in one explicit record.
///
/// Leaves receive a reference to this instead of closing over ambient
/// globals, so data dependencies stay visible and each field has a single
/// writer at a time: only the active leaf for a field mutates it, during
/// its own call.
#[derive(Debug, Clone, PartialEq)]
pub struct ChargingState {
    /// Battery charge, percent.
    pub battery_level: f32,
    pub communication_ok: bool,
    pub charger_visible: bool,
    pub vehicle_aligned: bool,
    pub docked: bool,
    pub charging_fault: bool,

    /// Remaining approach distance to the charging station, metres.
    pub nav_remaining_m: f32,
    /// Remaining fine-alignment distance, metres.
    pub align_remaining_m: f32,
    /// Remaining docking actuation time, seconds.
    pub dock_remaining_s: f32,
    /// Remaining undocking actuation time, seconds.
    pub undock_remaining_s: f32,
}

impl ChargingState {
    pub fn new(battery_level: f32, communication_ok: bool) -> Self {
        Self {
            battery_level,
            communication_ok,
            charger_visible: false,
            vehicle_aligned: false,
            docked: false,
            charging_fault: false,
            nav_remaining_m: 5.0,
            align_remaining_m: 1.0,
            dock_remaining_s: 2.0,
            undock_remaining_s: 1.0,
        }
    }
}

impl Default for ChargingState {
    fn default() -> Self {
        Self::new(20.0, true)
    }
}
