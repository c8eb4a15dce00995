use serde::{Deserialize, Serialize};

/// Share of the remaining in-house volume expected in each reporting hour.
/// The first column carries the morning start figure only.
pub const HOURLY_WEIGHTS: [f64; 9] = [0.0, 0.40, 0.40, 0.80, 0.33, 0.80, 0.40, 0.34, 0.23];

pub const HOURLY_LABELS: [&str; 9] = [
    "10:00", "11:00", "12:00", "13:00", "14:00", "15:00", "16:00", "17:00", "18:00",
];

/// Tunable figures behind the pacing projection and the next-day plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PacingConstants {
    /// Hourly intake while a fixed-placement campaign runs.
    pub fixed_slot_hourly_rate: f64,
    pub base_hourly_rate: f64,
    /// Reporting hours left between the real-time report and 18:00.
    pub remaining_hours: f64,
    /// End-of-day volume relative to the 18:00 checkpoint.
    pub end_of_day_multiplier: f64,
    /// Fraction of the 18:00 target that arrives between 17:00 and 18:00.
    pub hourly_gap_fraction: f64,
    pub clamp_upper_band: i64,
    pub clamp_lower_band: i64,
    pub clamp_snap_offset: i64,
    pub on_track_threshold: f64,
    pub next_day_ratio_threshold: f64,
    pub next_day_per_person_high: f64,
    pub next_day_per_person_low: f64,
    /// CPA figures are reported in units of ten thousand.
    pub cpa_unit_divisor: f64,
}

impl Default for PacingConstants {
    fn default() -> Self {
        Self {
            fixed_slot_hourly_rate: 195.0,
            base_hourly_rate: 140.0,
            remaining_hours: 4.0,
            end_of_day_multiplier: 1.35,
            hourly_gap_fraction: 0.04,
            clamp_upper_band: 150,
            clamp_lower_band: 200,
            clamp_snap_offset: 50,
            on_track_threshold: 0.99,
            next_day_ratio_threshold: 0.98,
            next_day_per_person_high: 4.8,
            next_day_per_person_low: 4.4,
            cpa_unit_divisor: 10_000.0,
        }
    }
}
