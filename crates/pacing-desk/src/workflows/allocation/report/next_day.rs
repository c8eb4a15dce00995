use super::super::result::AllocationResult;
use super::views::{bullet, format_count, split_line, ReportContext};
use chrono::Days;

pub fn render_next_day(result: &AllocationResult, context: &ReportContext) -> String {
    let plan = &result.next_day;
    let header = match context.report_date.checked_add_days(Days::new(1)) {
        Some(date) => format!("[Next-day resource plan] {}", date.format("%Y-%m-%d (%a)")),
        None => "[Next-day resource plan]".to_string(),
    };

    [
        header,
        bullet(format!(
            "Members: {} x {:.1} = {}",
            plan.member_count,
            plan.per_person,
            format_count(plan.total_target)
        )),
        bullet(format!(
            "Partner morning estimate: {}",
            format_count(plan.partner_estimate_morning)
        )),
        bullet(format!("In-house target: {}", format_count(plan.primary_target))),
        split_line(&plan.split),
    ]
    .join("\n")
}
