use super::messages::StatusMessages;
use super::rounding::round_count;
use serde::{Deserialize, Serialize};

/// A volume divided between the primary and secondary channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelSplit {
    pub primary: i64,
    pub secondary: i64,
}

impl ChannelSplit {
    /// Each side is rounded on its own, so the parts may differ from
    /// `volume` by one.
    pub fn of(volume: i64, ratio_primary: f64, ratio_secondary: f64) -> Self {
        Self {
            primary: round_count(volume as f64 * ratio_primary),
            secondary: round_count(volume as f64 * ratio_secondary),
        }
    }
}

/// How the 18:00 estimate was adjusted after the raw projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstimateClamp {
    None,
    SnappedHigh,
    SnappedLow,
}

/// Cost per acquisition, in ten-thousands of the currency unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CpaFigures {
    pub total: f64,
    pub primary: f64,
    pub secondary: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NextDayPlan {
    pub per_person: f64,
    pub member_count: u32,
    pub total_target: i64,
    pub partner_estimate_morning: i64,
    /// Volume the team must secure itself after the partner channel.
    pub primary_target: i64,
    pub split: ChannelSplit,
}

/// Everything derived for one report run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationResult {
    pub ratio_primary: f64,
    pub ratio_secondary: f64,
    pub day_weight: f64,

    pub target_17: i64,
    pub target_18: i64,
    pub hourly_gap: i64,
    pub total_resource_17: i64,
    pub total_resource_18: i64,
    pub per_person_17: f64,
    pub per_person_18: f64,
    pub split_17: ChannelSplit,
    pub split_18: ChannelSplit,

    pub hourly_pace: f64,
    pub projected_increase: i64,
    pub estimate_18: i64,
    pub estimate_clamp: EstimateClamp,
    pub estimate_24: i64,
    pub estimate_per_person: f64,
    pub estimate_split: ChannelSplit,
    pub achieve_rate: f64,

    pub cpa: CpaFigures,
    pub messages: StatusMessages,
    pub next_day: NextDayPlan,
}

impl AllocationResult {
    /// Units the estimate trails the 18:00 target by, zero when ahead.
    pub fn shortfall(&self) -> i64 {
        (self.target_18 - self.estimate_18).max(0)
    }
}
