//! The charging tree topology.
//!
//! The shape is data: a guard, an ordered list of condition/recovery stage
//! bindings, and a finish stage, folded into composites by [`build_tree`].
//! Topology variants are made by editing the stage list, not by writing
//! another tree by hand.

use voltree_bt::{BtNode, Fallback, Sequence, TreeError};

use crate::config::ChargingConfig;
use crate::leaves;
use crate::state::ChargingState;

type Node = Box<dyn BtNode<ChargingState>>;

/// A body stage: a condition paired with the recovery that makes it true.
///
/// Each tick the condition is re-tested first; while it fails, the recovery
/// runs (returning `Running` for multi-tick work) until the condition
/// observes the updated state on a later tick.
struct Stage {
    name: &'static str,
    condition: Node,
    recovery: Node,
}

fn body_stages(config: &ChargingConfig) -> Vec<Stage> {
    vec![
        Stage {
            name: "battery_check",
            condition: leaves::battery_needs_charge(config.battery_lower_pct),
            recovery: leaves::go_to_charging_station(config.nav_speed_mps),
        },
        Stage {
            name: "approach_charger",
            condition: leaves::close_enough_to_charger(),
            recovery: leaves::fine_align(config.align_speed_mps),
        },
        Stage {
            name: "docking",
            condition: leaves::vehicle_docked(),
            recovery: leaves::dock_vehicle(),
        },
        Stage {
            name: "charging_check",
            condition: leaves::charging_healthy(),
            recovery: leaves::alert_charging_fault(config.fault_alert),
        },
    ]
}

/// Build the full charging tree: communication guard, body stages, and the
/// undocking finish, rooted in one sequence.
pub fn build_tree(config: &ChargingConfig) -> Result<Node, TreeError> {
    let guard = Fallback::new(vec![
        leaves::communication_ok(),
        leaves::alert_communication_error(config.comm_alert),
    ])?
    .with_name("communication_guard");

    let mut body: Vec<Node> = Vec::new();
    for stage in body_stages(config) {
        body.push(Box::new(
            Fallback::new(vec![stage.condition, stage.recovery])?.with_name(stage.name),
        ));
    }

    body.push(Box::new(
        Sequence::new(vec![
            leaves::done_charging(config.battery_upper_pct),
            leaves::undock_vehicle(),
        ])?
        .with_name("undocking"),
    ));

    let procedure = Sequence::new(body)?.with_name("charging_procedure");
    let root = Sequence::new(vec![
        Box::new(guard) as Node,
        Box::new(procedure) as Node,
    ])?
    .with_name("root");

    Ok(Box::new(root))
}
