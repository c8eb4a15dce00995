use super::super::result::{AllocationResult, EstimateClamp};
use super::views::{bullet, format_count, section, split_line, ReportContext};

pub fn render_realtime(result: &AllocationResult, context: &ReportContext) -> String {
    let mut lines = vec![
        context.header("Real-time status"),
        section("18:00 projection"),
        bullet(format!(
            "Estimated close: {} vs in-house target {} ({:.1}%)",
            format_count(result.estimate_18),
            format_count(result.target_18),
            result.achieve_rate * 100.0
        )),
        bullet(format!("Per person: {:.1}", result.estimate_per_person)),
        split_line(&result.estimate_split),
    ];

    match result.estimate_clamp {
        EstimateClamp::None => {}
        EstimateClamp::SnappedHigh => lines.push(bullet(
            "Raw projection ran well above target and was tempered",
        )),
        EstimateClamp::SnappedLow => lines.push(bullet(
            "Raw projection ran well below target and was lifted",
        )),
    }

    lines.push(bullet(format!(
        "Projected end of day: {}",
        format_count(result.estimate_24)
    )));

    lines.push(section("CPA (10k units)"));
    lines.push(bullet(format!(
        "Total: {:.1} | Guarantee/analysis: {:.1} | Product: {:.1}",
        result.cpa.total, result.cpa.primary, result.cpa.secondary
    )));

    let messages = &result.messages;
    lines.push(section("Status"));
    lines.push(bullet(format!("{} {}", messages.fixed_slot, messages.status)));
    if !messages.fixed_slot_action.is_empty() {
        lines.push(bullet(&messages.fixed_slot_action));
    }
    lines.push(bullet(&messages.action));
    lines.join("\n")
}
