pub mod json;
pub mod text;

use crate::model::prediction::Prediction;
use crate::model::tiers::ConfidenceTier;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportMode {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct InputEntry {
    pub label: String,
    pub value: f64,
    pub clamped: bool,
}

#[derive(Debug, Clone)]
pub struct Report {
    pub tool_name: String,
    pub tool_version: String,
    pub seed: Option<u64>,
    pub jitter_half_width: f64,
    pub report_above: f64,
    pub inputs: Vec<InputEntry>,
    pub predictions: Vec<Prediction>,
}

#[derive(Debug, Clone, Default)]
pub struct TierGroups {
    pub high: Vec<Prediction>,
    pub medium: Vec<Prediction>,
    pub low: Vec<Prediction>,
}

impl TierGroups {
    pub fn get(&self, tier: ConfidenceTier) -> &[Prediction] {
        match tier {
            ConfidenceTier::High => &self.high,
            ConfidenceTier::Medium => &self.medium,
            ConfidenceTier::Low => &self.low,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.high.is_empty() && self.medium.is_empty() && self.low.is_empty()
    }
}

/// Splits predictions by tier; each group keeps the incoming order.
pub fn group_by_tier(predictions: &[Prediction]) -> TierGroups {
    let mut groups = TierGroups::default();
    for p in predictions {
        match ConfidenceTier::of(p.confidence) {
            ConfidenceTier::High => groups.high.push(*p),
            ConfidenceTier::Medium => groups.medium.push(*p),
            ConfidenceTier::Low => groups.low.push(*p),
        }
    }
    groups
}

pub fn render(report: &Report, mode: ReportMode) -> Result<String, serde_json::Error> {
    match mode {
        ReportMode::Text => Ok(text::render_report_text(report)),
        ReportMode::Json => json::render_report_json(report),
    }
}

pub fn format_f64_1(v: f64) -> String {
    format!("{:.1}", v)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
