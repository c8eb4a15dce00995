use chrono::NaiveDate;

use crate::workflows::allocation::{
    AllocationCalculator, AllocationInput, AllocationResult, DayOfWeek, OperatingMode,
    ReportContext,
};

/// Efficiency-mode Monday with a 1,456 in-house target.
pub(super) fn monday_input() -> AllocationInput {
    AllocationInput {
        day_of_week: DayOfWeek::Monday,
        operating_mode: OperatingMode::Efficiency,
        active_member_count: 359,
        advertiser_target_total: 2539,
        partner_estimate_17: 1000,
        partner_estimate_18: 1083,
        buffer_target: 0,
        start_resource_morning: 300,
        current_total: 1200,
        current_primary_channel: 1100,
        current_secondary_channel: 100,
        cost_total: 14_400_000,
        cost_primary_channel: 12_100_000,
        cost_secondary_channel: 2_300_000,
        fixed_slot_active: false,
        fixed_slot_description: String::new(),
        tomorrow_member_count: 360,
        tomorrow_partner_estimate_morning: 500,
    }
}

/// Target and partner figures giving a 1,000 unit in-house target with no
/// partner volume at 18:00.
pub(super) fn thousand_target_input(current_total: i64) -> AllocationInput {
    AllocationInput {
        advertiser_target_total: 1000,
        partner_estimate_18: 0,
        current_total,
        ..monday_input()
    }
}

pub(super) fn compute(input: &AllocationInput) -> AllocationResult {
    AllocationCalculator::default()
        .compute(input)
        .expect("allocation computes")
}

pub(super) fn report_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid report date")
}

pub(super) fn context(input: &AllocationInput) -> ReportContext {
    ReportContext::new(report_date(), input)
}

pub(super) fn decimals(value: f64) -> usize {
    value
        .to_string()
        .split('.')
        .nth(1)
        .map_or(0, |fraction| fraction.len())
}
