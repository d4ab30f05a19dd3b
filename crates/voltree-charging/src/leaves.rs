//! Leaf callbacks of the charging procedure.
//!
//! Condition leaves are read-only with respect to [`ChargingState`]. Action
//! leaves advance their effect by `speed * dt` per tick and return
//! `Running` until the effect is complete; faults are translated into
//! `Failure` here, never raised past the leaf.

use voltree_bt::{Action, BtNode, BtStatus, Condition, TickContext};

use crate::config::AlertPolicy;
use crate::state::ChargingState;

fn alert_status(policy: AlertPolicy) -> BtStatus {
    match policy {
        AlertPolicy::ReportFailure => BtStatus::Failure,
        AlertPolicy::ReportHandled => BtStatus::Success,
    }
}

pub fn communication_ok() -> Box<dyn BtNode<ChargingState>> {
    Box::new(Condition::new(
        "communication_ok",
        |_: &TickContext, state: &ChargingState| state.communication_ok,
    ))
}

pub fn alert_communication_error(policy: AlertPolicy) -> Box<dyn BtNode<ChargingState>> {
    Box::new(Action::new(
        "alert_communication_error",
        move |_: &TickContext, _: &mut ChargingState| {
            tracing::warn!("Communication with the vehicle is down");
            alert_status(policy)
        },
    ))
}

pub fn battery_needs_charge(lower_pct: f32) -> Box<dyn BtNode<ChargingState>> {
    Box::new(Condition::new(
        "battery_needs_charge",
        move |_: &TickContext, state: &ChargingState| state.battery_level < lower_pct,
    ))
}

pub fn go_to_charging_station(speed_mps: f32) -> Box<dyn BtNode<ChargingState>> {
    Box::new(Action::new(
        "go_to_charging_station",
        move |ctx: &TickContext, state: &mut ChargingState| {
            if state.charger_visible {
                return BtStatus::Success;
            }

            let dt = ctx.dt_seconds.max(0.0);
            state.nav_remaining_m = (state.nav_remaining_m - speed_mps.max(0.0) * dt).max(0.0);
            if state.nav_remaining_m <= 0.0 {
                state.charger_visible = true;
                tracing::info!("Charger in sight");
                return BtStatus::Success;
            }

            tracing::debug!(
                remaining_m = %state.nav_remaining_m,
                "Driving to the charging station"
            );
            BtStatus::Running
        },
    ))
}

pub fn close_enough_to_charger() -> Box<dyn BtNode<ChargingState>> {
    Box::new(Condition::new(
        "close_enough_to_charger",
        |_: &TickContext, state: &ChargingState| state.vehicle_aligned,
    ))
}

pub fn fine_align(speed_mps: f32) -> Box<dyn BtNode<ChargingState>> {
    Box::new(Action::new(
        "fine_align",
        move |ctx: &TickContext, state: &mut ChargingState| {
            if state.vehicle_aligned {
                return BtStatus::Success;
            }

            let dt = ctx.dt_seconds.max(0.0);
            state.align_remaining_m = (state.align_remaining_m - speed_mps.max(0.0) * dt).max(0.0);
            if state.align_remaining_m <= 0.0 {
                state.vehicle_aligned = true;
                tracing::info!("Vehicle aligned with the charger");
                return BtStatus::Success;
            }

            tracing::debug!(
                remaining_m = %state.align_remaining_m,
                "Fine aligning with the charger"
            );
            BtStatus::Running
        },
    ))
}

pub fn vehicle_docked() -> Box<dyn BtNode<ChargingState>> {
    Box::new(Condition::new(
        "vehicle_docked",
        |_: &TickContext, state: &ChargingState| state.docked,
    ))
}

pub fn dock_vehicle() -> Box<dyn BtNode<ChargingState>> {
    Box::new(Action::new(
        "dock_vehicle",
        |ctx: &TickContext, state: &mut ChargingState| {
            if state.docked {
                return BtStatus::Success;
            }

            state.dock_remaining_s = (state.dock_remaining_s - ctx.dt_seconds.max(0.0)).max(0.0);
            if state.dock_remaining_s <= 0.0 {
                state.docked = true;
                tracing::info!("Vehicle docked with the charger");
                return BtStatus::Success;
            }

            tracing::debug!(remaining_s = %state.dock_remaining_s, "Docking with the charger");
            BtStatus::Running
        },
    ))
}

pub fn charging_healthy() -> Box<dyn BtNode<ChargingState>> {
    Box::new(Condition::new(
        "charging_healthy",
        |_: &TickContext, state: &ChargingState| !state.charging_fault,
    ))
}

pub fn alert_charging_fault(policy: AlertPolicy) -> Box<dyn BtNode<ChargingState>> {
    Box::new(Action::new(
        "alert_charging_fault",
        move |_: &TickContext, _: &mut ChargingState| {
            tracing::warn!("Charging process fault detected");
            alert_status(policy)
        },
    ))
}

pub fn done_charging(upper_pct: f32) -> Box<dyn BtNode<ChargingState>> {
    Box::new(Condition::new(
        "done_charging",
        move |_: &TickContext, state: &ChargingState| state.battery_level >= upper_pct,
    ))
}

pub fn undock_vehicle() -> Box<dyn BtNode<ChargingState>> {
    Box::new(Action::new(
        "undock_vehicle",
        |ctx: &TickContext, state: &mut ChargingState| {
            if !state.docked {
                return BtStatus::Success;
            }

            state.undock_remaining_s =
                (state.undock_remaining_s - ctx.dt_seconds.max(0.0)).max(0.0);
            if state.undock_remaining_s <= 0.0 {
                state.docked = false;
                tracing::info!("Vehicle undocked from the charger");
                return BtStatus::Success;
            }

            tracing::debug!(
                remaining_s = %state.undock_remaining_s,
                "Undocking from the charger"
            );
            BtStatus::Running
        },
    ))
}
