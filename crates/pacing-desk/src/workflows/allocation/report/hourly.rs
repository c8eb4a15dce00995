use super::super::constants::{HOURLY_LABELS, HOURLY_WEIGHTS};
use super::super::domain::AllocationError;
use super::super::result::AllocationResult;
use super::super::rounding::{add_counts, checked_round_count, per_head, sub_counts};
use super::views::format_count;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlyColumn {
    pub label: &'static str,
    pub weight: f64,
    pub increment: i64,
    pub cumulative: i64,
    pub per_person: f64,
}

/// Spreads the volume still needed after the morning start across the
/// reporting hours up to 18:00.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlyAllocationTable {
    pub start_resource_morning: i64,
    pub remaining: i64,
    pub columns: Vec<HourlyColumn>,
}

impl HourlyAllocationTable {
    /// Cumulative values are rounded from the running weight share, so the
    /// final column always lands on the 18:00 target.
    pub fn build(
        result: &AllocationResult,
        start_resource_morning: i64,
        member_count: u32,
    ) -> Result<Self, AllocationError> {
        if member_count == 0 {
            return Err(AllocationError::ZeroMemberCount);
        }

        let remaining =
            sub_counts("remaining volume", result.target_18, start_resource_morning)?;
        let total_weight: f64 = HOURLY_WEIGHTS.iter().sum();

        let mut columns = Vec::with_capacity(HOURLY_WEIGHTS.len());
        let mut running_weight = 0.0;
        let mut previous = start_resource_morning;
        for (index, (label, weight)) in HOURLY_LABELS.into_iter().zip(HOURLY_WEIGHTS).enumerate() {
            running_weight += weight;
            let cumulative = if index + 1 == HOURLY_WEIGHTS.len() {
                result.target_18
            } else {
                add_counts(
                    "hourly cumulative",
                    start_resource_morning,
                    checked_round_count(
                        "hourly cumulative",
                        remaining as f64 * running_weight / total_weight,
                    )?,
                )?
            };
            columns.push(HourlyColumn {
                label,
                weight,
                increment: sub_counts("hourly increment", cumulative, previous)?,
                cumulative,
                per_person: per_head(cumulative, member_count),
            });
            previous = cumulative;
        }

        Ok(Self {
            start_resource_morning,
            remaining,
            columns,
        })
    }

    pub fn render_text(&self) -> String {
        let mut hour = format!("{:<12}", "Hour");
        let mut weight = format!("{:<12}", "Weight");
        let mut increment = format!("{:<12}", "Allocation");
        let mut cumulative = format!("{:<12}", "Cumulative");
        let mut per_person = format!("{:<12}", "Per person");
        for column in &self.columns {
            hour.push_str(&format!("{:>8}", column.label));
            weight.push_str(&format!("{:>8.2}", column.weight));
            increment.push_str(&format!("{:>8}", format_count(column.increment)));
            cumulative.push_str(&format!("{:>8}", format_count(column.cumulative)));
            per_person.push_str(&format!("{:>8.1}", column.per_person));
        }
        [hour, weight, increment, cumulative, per_person].join("\n")
    }

    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), csv::Error> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        write_row(
            &mut csv_writer,
            "row",
            self.columns.iter().map(|column| column.label.to_string()),
        )?;
        write_row(
            &mut csv_writer,
            "weight",
            self.columns.iter().map(|column| format!("{:.2}", column.weight)),
        )?;
        write_row(
            &mut csv_writer,
            "allocation",
            self.columns.iter().map(|column| column.increment.to_string()),
        )?;
        write_row(
            &mut csv_writer,
            "cumulative",
            self.columns.iter().map(|column| column.cumulative.to_string()),
        )?;
        write_row(
            &mut csv_writer,
            "per_person",
            self.columns
                .iter()
                .map(|column| format!("{:.1}", column.per_person)),
        )?;

        csv_writer.flush()?;
        Ok(())
    }
}

fn write_row<W: Write>(
    writer: &mut csv::Writer<W>,
    name: &str,
    cells: impl Iterator<Item = String>,
) -> Result<(), csv::Error> {
    let mut record = vec![name.to_string()];
    record.extend(cells);
    writer.write_record(&record)
}
