use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Weekday selecting the pacing weight. Weekends and unknown labels pace at
/// the neutral weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    #[default]
    Unrecognized,
}

impl DayOfWeek {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Monday,
            Self::Tuesday,
            Self::Wednesday,
            Self::Thursday,
            Self::Friday,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Monday => "Mon",
            Self::Tuesday => "Tue",
            Self::Wednesday => "Wed",
            Self::Thursday => "Thu",
            Self::Friday => "Fri",
            Self::Unrecognized => "-",
        }
    }

    pub const fn pacing_weight(self) -> f64 {
        match self {
            Self::Monday => 1.1,
            Self::Tuesday | Self::Wednesday => 1.0,
            Self::Thursday => 0.95,
            Self::Friday => 0.85,
            Self::Unrecognized => 1.0,
        }
    }

    /// Accepts English names and abbreviations as well as the single
    /// character Korean labels used on the intake form.
    pub fn from_label(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "mon" | "monday" | "월" | "월요일" => Self::Monday,
            "tue" | "tues" | "tuesday" | "화" | "화요일" => Self::Tuesday,
            "wed" | "wednesday" | "수" | "수요일" => Self::Wednesday,
            "thu" | "thur" | "thurs" | "thursday" | "목" | "목요일" => Self::Thursday,
            "fri" | "friday" | "금" | "금요일" => Self::Friday,
            _ => Self::Unrecognized,
        }
    }
}

impl From<String> for DayOfWeek {
    fn from(value: String) -> Self {
        Self::from_label(&value)
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(value: Weekday) -> Self {
        match value {
            Weekday::Mon => Self::Monday,
            Weekday::Tue => Self::Tuesday,
            Weekday::Wed => Self::Wednesday,
            Weekday::Thu => Self::Thursday,
            Weekday::Fri => Self::Friday,
            Weekday::Sat | Weekday::Sun => Self::Unrecognized,
        }
    }
}

/// Operating stance for the day, deciding how the in-house target is split
/// between the primary and secondary channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum OperatingMode {
    #[default]
    Normal,
    ProductFocus,
    Efficiency,
}

impl OperatingMode {
    pub const fn ordered() -> [Self; 3] {
        [Self::Normal, Self::ProductFocus, Self::Efficiency]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::ProductFocus => "Product focus",
            Self::Efficiency => "Efficiency",
        }
    }

    /// Share of the in-house target assigned to the primary channel.
    pub const fn primary_ratio(self) -> f64 {
        match self {
            Self::ProductFocus => 0.84,
            Self::Efficiency => 0.915,
            Self::Normal => 0.898,
        }
    }

    pub fn from_label(value: &str) -> Self {
        let normalized: String = value
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect();
        match normalized.as_str() {
            "productfocus" | "product" | "상품증대" => Self::ProductFocus,
            "efficiency" | "효율화" => Self::Efficiency,
            _ => Self::Normal,
        }
    }
}

impl From<String> for OperatingMode {
    fn from(value: String) -> Self {
        Self::from_label(&value)
    }
}

/// Manually entered counters for one report run.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AllocationInput {
    pub day_of_week: DayOfWeek,
    pub operating_mode: OperatingMode,
    pub active_member_count: u32,
    pub advertiser_target_total: i64,
    pub partner_estimate_17: i64,
    pub partner_estimate_18: i64,
    pub buffer_target: i64,
    pub start_resource_morning: i64,
    pub current_total: i64,
    pub current_primary_channel: i64,
    pub current_secondary_channel: i64,
    pub cost_total: i64,
    pub cost_primary_channel: i64,
    pub cost_secondary_channel: i64,
    pub fixed_slot_active: bool,
    pub fixed_slot_description: String,
    pub tomorrow_member_count: u32,
    pub tomorrow_partner_estimate_morning: i64,
}

/// Malformed input detected while computing allocations. No partial result
/// is produced when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AllocationError {
    #[error("active member count must be greater than zero")]
    ZeroMemberCount,
    #[error("18:00 in-house target is zero; achieve rate is undefined")]
    ZeroCheckpointTarget,
    #[error(
        "18:00 combined resource is zero (target {target_18}, partner estimate {partner_estimate_18}); next-day pacing ratio is undefined"
    )]
    ZeroCheckpointResource {
        target_18: i64,
        partner_estimate_18: i64,
    },
    #[error("{figure} does not fit in a 64-bit count")]
    ArithmeticOverflow { figure: &'static str },
}
