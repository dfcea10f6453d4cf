use serde::Serialize;

use crate::model::activity::Activity;
use crate::model::tiers::{ConfidenceBand, ConfidenceTier};
use crate::report::{Report, group_by_tier};

#[derive(Debug, Serialize)]
struct ReportJson<'a> {
    tool: &'a str,
    version: &'a str,
    seed: Option<u64>,
    jitter_half_width: f64,
    report_above: f64,
    inputs: Vec<InputJson<'a>>,
    predictions: Vec<PredictionJson>,
    tiers: TiersJson,
}

#[derive(Debug, Serialize)]
struct InputJson<'a> {
    label: &'a str,
    value: f64,
    clamped: bool,
}

#[derive(Debug, Serialize)]
struct PredictionJson {
    activity: Activity,
    confidence: f64,
    tier: ConfidenceTier,
    band: ConfidenceBand,
}

#[derive(Debug, Serialize)]
struct TiersJson {
    high: Vec<Activity>,
    medium: Vec<Activity>,
    low: Vec<Activity>,
}

pub fn render_report_json(report: &Report) -> Result<String, serde_json::Error> {
    let groups = group_by_tier(&report.predictions);
    let activities = |tier: ConfidenceTier| {
        groups
            .get(tier)
            .iter()
            .map(|p| p.activity)
            .collect::<Vec<_>>()
    };

    let doc = ReportJson {
        tool: &report.tool_name,
        version: &report.tool_version,
        seed: report.seed,
        jitter_half_width: report.jitter_half_width,
        report_above: report.report_above,
        inputs: report
            .inputs
            .iter()
            .map(|e| InputJson {
                label: &e.label,
                value: e.value,
                clamped: e.clamped,
            })
            .collect(),
        predictions: report
            .predictions
            .iter()
            .map(|p| PredictionJson {
                activity: p.activity,
                confidence: p.confidence,
                tier: ConfidenceTier::of(p.confidence),
                band: ConfidenceBand::of(p.confidence),
            })
            .collect(),
        tiers: TiersJson {
            high: activities(ConfidenceTier::High),
            medium: activities(ConfidenceTier::Medium),
            low: activities(ConfidenceTier::Low),
        },
    };

    serde_json::to_string_pretty(&doc)
}
