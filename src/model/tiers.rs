use serde::Serialize;

pub const HIGH_TIER_MIN: f64 = 50.0;
pub const MEDIUM_TIER_MIN: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceTier {
    High,
    Medium,
    Low,
}

impl ConfidenceTier {
    pub fn of(confidence: f64) -> Self {
        if confidence >= HIGH_TIER_MIN {
            ConfidenceTier::High
        } else if confidence >= MEDIUM_TIER_MIN {
            ConfidenceTier::Medium
        } else {
            ConfidenceTier::Low
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ConfidenceTier::High => "High confidence (>= 50%)",
            ConfidenceTier::Medium => "Medium confidence (20-49%)",
            ConfidenceTier::Low => "Low confidence (< 20%)",
        }
    }

    pub fn guidance(self) -> &'static str {
        match self {
            ConfidenceTier::High => {
                "Strong evidence for these activities based on the composition."
            }
            ConfidenceTier::Medium => {
                "Moderate likelihood; candidates for further investigation."
            }
            ConfidenceTier::Low => "Lower probability, noted for completeness.",
        }
    }
}

pub fn tier_order() -> &'static [ConfidenceTier] {
    &[ConfidenceTier::High, ConfidenceTier::Medium, ConfidenceTier::Low]
}

/// Finer label used next to each score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceBand {
    Strong,
    Moderate,
    Weak,
    Marginal,
}

impl ConfidenceBand {
    pub fn of(confidence: f64) -> Self {
        if confidence >= 70.0 {
            ConfidenceBand::Strong
        } else if confidence >= 50.0 {
            ConfidenceBand::Moderate
        } else if confidence >= 30.0 {
            ConfidenceBand::Weak
        } else {
            ConfidenceBand::Marginal
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ConfidenceBand::Strong => "strong",
            ConfidenceBand::Moderate => "moderate",
            ConfidenceBand::Weak => "weak",
            ConfidenceBand::Marginal => "marginal",
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/tiers.rs"]
mod tests;
