use crate::model::tiers::{ConfidenceBand, tier_order};
use crate::report::{Report, format_f64_1, group_by_tier};

pub fn render_report_text(report: &Report) -> String {
    let mut out = String::new();

    out.push_str("Essential Oil Activity Prediction Report\n");
    out.push_str("========================================\n\n");

    out.push_str(&format!("{} {}\n", report.tool_name, report.tool_version));
    out.push_str(&format!("{}\n\n", randomness_line(report)));

    out.push_str("1. Input parameters\n");
    for entry in &report.inputs {
        let note = if entry.clamped { " (clamped)" } else { "" };
        out.push_str(&format!("{}: {}{}\n", entry.label, format_f64_1(entry.value), note));
    }
    out.push('\n');

    out.push_str("2. Predicted activities\n");
    let groups = group_by_tier(&report.predictions);
    if groups.is_empty() {
        out.push_str(&format!(
            "No activity scored above the {}% reporting floor.\n",
            format_f64_1(report.report_above)
        ));
    }
    for &tier in tier_order() {
        let members = groups.get(tier);
        if members.is_empty() {
            continue;
        }
        out.push_str(&format!("{}\n", tier.title()));
        for p in members {
            out.push_str(&format!(
                "  {:<18} {:>5}%  [{}]\n",
                p.activity.label(),
                format_f64_1(p.confidence),
                ConfidenceBand::of(p.confidence).name()
            ));
        }
    }
    out.push('\n');

    out.push_str("3. Interpretation guide\n");
    for &tier in tier_order() {
        out.push_str(&format!("{}: {}\n", tier.title(), tier.guidance()));
    }

    out
}

fn randomness_line(report: &Report) -> String {
    if report.jitter_half_width <= 0.0 {
        return "Jitter: disabled (deterministic)".to_string();
    }
    let width = format_f64_1(report.jitter_half_width);
    match report.seed {
        Some(seed) => format!("Jitter: +/-{width}, seed {seed}"),
        None => format!("Jitter: +/-{width}"),
    }
}
