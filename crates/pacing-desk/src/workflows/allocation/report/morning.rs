use super::super::result::AllocationResult;
use super::views::{bullet, format_count, section, split_line, ReportContext};

pub fn render_morning(result: &AllocationResult, context: &ReportContext) -> String {
    let checkpoints = [
        (
            "17:00",
            result.total_resource_17,
            result.target_17,
            result.per_person_17,
            &result.split_17,
        ),
        (
            "18:00",
            result.total_resource_18,
            result.target_18,
            result.per_person_18,
            &result.split_18,
        ),
    ];

    let mut lines = vec![context.header("Morning target briefing")];
    for (label, total, target, per_person, split) in checkpoints {
        lines.push(section(&format!("{label} checkpoint")));
        lines.push(bullet(format!(
            "Combined resource (incl. partner): {}",
            format_count(total)
        )));
        lines.push(bullet(format!(
            "In-house target: {} ({:.1} per person)",
            format_count(target),
            per_person
        )));
        lines.push(split_line(split));
    }

    lines.push(section("Notes"));
    lines.push(bullet(&result.messages.fixed_slot));
    lines.join("\n")
}
