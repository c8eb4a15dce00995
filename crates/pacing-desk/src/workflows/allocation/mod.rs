//! Daily allocation workflow: checkpoint targets, channel splits, the
//! real-time pacing projection and the next-day plan, plus the text reports
//! the operations team circulates.

mod calculator;
mod constants;
pub mod domain;
mod messages;
pub mod report;
mod result;
pub mod rounding;

#[cfg(test)]
mod tests;

pub use calculator::AllocationCalculator;
pub use constants::{PacingConstants, HOURLY_LABELS, HOURLY_WEIGHTS};
pub use domain::{AllocationError, AllocationInput, DayOfWeek, OperatingMode};
pub use messages::StatusMessages;
pub use report::{
    render_morning, render_next_day, render_realtime, HourlyAllocationTable, ReportBundle,
    ReportContext, ReportKind,
};
pub use result::{AllocationResult, ChannelSplit, CpaFigures, EstimateClamp, NextDayPlan};
