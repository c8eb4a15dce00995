use crate::routes::AllocationReportResponse;
use chrono::{Datelike, Local, NaiveDate};
use clap::{Args, ValueEnum};
use pacing_desk::config::AppConfig;
use pacing_desk::error::AppError;
use pacing_desk::telemetry::{self, LogSink};
use pacing_desk::workflows::allocation::{
    AllocationCalculator, AllocationInput, DayOfWeek, HourlyAllocationTable, OperatingMode,
    ReportKind,
};
use pacing_desk::workflows::sheet::AllocationSheetImporter;
use std::path::PathBuf;
use tracing::info;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum ReportSelection {
    #[default]
    All,
    Morning,
    Realtime,
    NextDay,
}

impl ReportSelection {
    fn kinds(self) -> Vec<ReportKind> {
        match self {
            Self::All => ReportKind::ordered().to_vec(),
            Self::Morning => vec![ReportKind::Morning],
            Self::Realtime => vec![ReportKind::Realtime],
            Self::NextDay => vec![ReportKind::NextDay],
        }
    }
}

/// Counters entered by hand when no sheet is supplied.
#[derive(Args, Debug, Default)]
pub(crate) struct InputArgs {
    /// Day of week label (mon..fri or 월..금). Defaults to the report date's weekday.
    #[arg(long)]
    pub(crate) day: Option<String>,
    /// Operating mode: normal, product-focus or efficiency
    #[arg(long, default_value = "normal")]
    pub(crate) mode: String,
    /// Active member headcount
    #[arg(long, default_value_t = 0)]
    pub(crate) members: u32,
    /// Advertiser committed total
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub(crate) advertiser_target: i64,
    /// Partner channel estimate at 17:00
    #[arg(long = "partner-17", default_value_t = 0, allow_negative_numbers = true)]
    pub(crate) partner_17: i64,
    /// Partner channel estimate at 18:00
    #[arg(long = "partner-18", default_value_t = 0, allow_negative_numbers = true)]
    pub(crate) partner_18: i64,
    /// Manual adjustment added to the in-house target
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub(crate) buffer: i64,
    /// Volume secured before the planning window
    #[arg(long, default_value_t = 0)]
    pub(crate) start_morning: i64,
    /// Current combined volume
    #[arg(long, default_value_t = 0)]
    pub(crate) current_total: i64,
    #[arg(long, default_value_t = 0)]
    pub(crate) current_primary: i64,
    #[arg(long, default_value_t = 0)]
    pub(crate) current_secondary: i64,
    /// Spend so far in the smallest currency unit
    #[arg(long, default_value_t = 0)]
    pub(crate) cost_total: i64,
    #[arg(long, default_value_t = 0)]
    pub(crate) cost_primary: i64,
    #[arg(long, default_value_t = 0)]
    pub(crate) cost_secondary: i64,
    /// Describe today's fixed slot; marks the slot active
    #[arg(long)]
    pub(crate) fixed_slot: Option<String>,
    /// Headcount planned for tomorrow
    #[arg(long, default_value_t = 0)]
    pub(crate) tomorrow_members: u32,
    /// Partner channel estimate for tomorrow morning
    #[arg(long, default_value_t = 0)]
    pub(crate) tomorrow_partner_morning: i64,
}

impl InputArgs {
    pub(crate) fn into_input(self, fallback_day: DayOfWeek) -> AllocationInput {
        let day_of_week = self
            .day
            .as_deref()
            .map(DayOfWeek::from_label)
            .unwrap_or(fallback_day);

        AllocationInput {
            day_of_week,
            operating_mode: OperatingMode::from_label(&self.mode),
            active_member_count: self.members,
            advertiser_target_total: self.advertiser_target,
            partner_estimate_17: self.partner_17,
            partner_estimate_18: self.partner_18,
            buffer_target: self.buffer,
            start_resource_morning: self.start_morning,
            current_total: self.current_total,
            current_primary_channel: self.current_primary,
            current_secondary_channel: self.current_secondary,
            cost_total: self.cost_total,
            cost_primary_channel: self.cost_primary,
            cost_secondary_channel: self.cost_secondary,
            fixed_slot_active: self.fixed_slot.is_some(),
            fixed_slot_description: self.fixed_slot.unwrap_or_default(),
            tomorrow_member_count: self.tomorrow_members,
            tomorrow_partner_estimate_morning: self.tomorrow_partner_morning,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    /// JSON or CSV intake sheet. Input flags are ignored when a sheet is given.
    #[arg(long)]
    pub(crate) input: Option<PathBuf>,
    #[command(flatten)]
    pub(crate) fields: InputArgs,
    /// Which report template to print
    #[arg(long, value_enum, default_value_t = ReportSelection::All)]
    pub(crate) kind: ReportSelection,
    /// Report date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) date: Option<NaiveDate>,
    /// Append the hourly allocation table
    #[arg(long)]
    pub(crate) hourly: bool,
    /// Write the hourly allocation table as CSV to this path
    #[arg(long)]
    pub(crate) hourly_csv: Option<PathBuf>,
    /// Print the result and reports as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Report date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) date: Option<NaiveDate>,
    /// Append the hourly allocation table
    #[arg(long)]
    pub(crate) hourly: bool,
}

pub(crate) fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let ReportArgs {
        input,
        fields,
        kind,
        date,
        hourly,
        hourly_csv,
        json,
    } = args;

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry, LogSink::Stderr)?;

    let report_date = date.unwrap_or_else(|| Local::now().date_naive());
    let input = match input {
        Some(path) => AllocationSheetImporter::from_path(path)?,
        None => fields.into_input(DayOfWeek::from(report_date.weekday())),
    };

    let calculator = AllocationCalculator::new(config.pacing);
    let include_hourly = hourly || hourly_csv.is_some();
    let response =
        AllocationReportResponse::build(&calculator, &input, report_date, include_hourly)?;
    info!(%report_date, kind = ?kind, "allocation report generated");

    if let (Some(path), Some(table)) = (hourly_csv, response.hourly.as_ref()) {
        let file = std::fs::File::create(&path)?;
        table.write_csv(file)?;
        info!(path = %path.display(), "hourly allocation table written");
    }

    if json {
        println!("{}", render_json(&response)?);
        return Ok(());
    }

    print_reports(&response, kind, hourly);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { date, hourly } = args;
    let report_date = date.unwrap_or_else(|| Local::now().date_naive());
    let input = demo_input(DayOfWeek::from(report_date.weekday()));

    println!("Pacing desk demo");
    println!(
        "Scenario: advertiser target {} | partner 17:00 {} / 18:00 {} | buffer {} | {} members",
        input.advertiser_target_total,
        input.partner_estimate_17,
        input.partner_estimate_18,
        input.buffer_target,
        input.active_member_count
    );
    println!();

    let calculator = AllocationCalculator::default();
    let response = AllocationReportResponse::build(&calculator, &input, report_date, hourly)?;
    print_reports(&response, ReportSelection::All, hourly);
    Ok(())
}

fn render_json(response: &AllocationReportResponse) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(response)?)
}

fn print_reports(response: &AllocationReportResponse, selection: ReportSelection, hourly: bool) {
    let texts: Vec<&str> = selection
        .kinds()
        .into_iter()
        .map(|kind| response.reports.text(kind))
        .collect();
    println!("{}", texts.join("\n\n"));

    if hourly {
        if let Some(table) = response.hourly.as_ref() {
            println!("\n{}", render_hourly(table));
        }
    }
}

fn render_hourly(table: &HourlyAllocationTable) -> String {
    format!(
        "Hourly allocation (from {} in the morning, {} to go)\n{}",
        table.start_resource_morning,
        table.remaining,
        table.render_text()
    )
}

fn demo_input(day_of_week: DayOfWeek) -> AllocationInput {
    AllocationInput {
        day_of_week,
        operating_mode: OperatingMode::Efficiency,
        active_member_count: 365,
        advertiser_target_total: 3530,
        partner_estimate_17: 1392,
        partner_estimate_18: 1443,
        buffer_target: 30,
        start_resource_morning: 420,
        current_total: 1600,
        current_primary_channel: 1460,
        current_secondary_channel: 140,
        cost_total: 15_800_000,
        cost_primary_channel: 13_200_000,
        cost_secondary_channel: 2_600_000,
        fixed_slot_active: false,
        fixed_slot_description: String::new(),
        tomorrow_member_count: 368,
        tomorrow_partner_estimate_morning: 520,
    }
}
