use serde::{Deserialize, Serialize};

pub(crate) const ON_TRACK_STATUS: &str = "On track to meet the combined target across both channels.";
pub(crate) const ON_TRACK_ACTION: &str =
    "Will rebalance banner ad spend if early closing of allocations occurs.";
pub(crate) const FALLING_SHORT_ACTION: &str =
    "Will focus the remaining hours on securing product resources and efficiency gains.";
pub(crate) const NO_FIXED_SLOT: &str = "No special items today; operating as planned,";

/// Free-text lines for the real-time report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusMessages {
    pub status: String,
    pub action: String,
    pub fixed_slot: String,
    /// Always empty; the fixed-slot line already carries the action.
    pub fixed_slot_action: String,
}

pub(crate) fn select_status(on_track: bool, target_18: i64, estimate_18: i64) -> (String, String) {
    if on_track {
        (ON_TRACK_STATUS.to_string(), ON_TRACK_ACTION.to_string())
    } else {
        (
            format!(
                "Expected to fall short of the in-house target by about {} units; will concentrate effort.",
                target_18 - estimate_18
            ),
            FALLING_SHORT_ACTION.to_string(),
        )
    }
}

pub(crate) fn fixed_slot_message(active: bool, description: &str) -> String {
    if active {
        description.to_string()
    } else {
        NO_FIXED_SLOT.to_string()
    }
}

pub(crate) fn build(
    on_track: bool,
    target_18: i64,
    estimate_18: i64,
    fixed_slot_active: bool,
    fixed_slot_description: &str,
) -> StatusMessages {
    let (status, action) = select_status(on_track, target_18, estimate_18);
    StatusMessages {
        status,
        action,
        fixed_slot: fixed_slot_message(fixed_slot_active, fixed_slot_description),
        fixed_slot_action: String::new(),
    }
}
