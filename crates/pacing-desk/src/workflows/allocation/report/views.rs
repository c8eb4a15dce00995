use super::super::domain::{AllocationInput, DayOfWeek, OperatingMode};
use super::super::result::ChannelSplit;
use chrono::NaiveDate;
use serde::Serialize;

/// Header details shared by every template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportContext {
    pub report_date: NaiveDate,
    pub day_of_week: DayOfWeek,
    pub operating_mode: OperatingMode,
}

impl ReportContext {
    pub fn new(report_date: NaiveDate, input: &AllocationInput) -> Self {
        Self {
            report_date,
            day_of_week: input.day_of_week,
            operating_mode: input.operating_mode,
        }
    }

    pub(crate) fn header(&self, title: &str) -> String {
        format!(
            "[{title}] {} ({}) | Mode: {}",
            self.report_date.format("%Y-%m-%d"),
            self.day_of_week.label(),
            self.operating_mode.label()
        )
    }
}

pub(crate) const SECTION: &str = "■";
pub(crate) const BULLET: &str = "-";

/// Formats a count with comma thousands separators.
pub fn format_count(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

pub(crate) fn section(title: &str) -> String {
    format!("{SECTION} {title}")
}

pub(crate) fn bullet(text: impl AsRef<str>) -> String {
    format!("{BULLET} {}", text.as_ref())
}

pub(crate) fn split_line(split: &ChannelSplit) -> String {
    bullet(format!(
        "Guarantee/analysis: {} | Product: {}",
        format_count(split.primary),
        format_count(split.secondary)
    ))
}
