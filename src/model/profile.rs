/// Constants driving confidence post-processing.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringProfile {
    /// Jitter is drawn uniformly from `[-jitter_half_width, +jitter_half_width]`.
    pub jitter_half_width: f64,
    pub floor: f64,
    pub ceiling: f64,
    /// Only confidences strictly above this value are reported.
    pub report_above: f64,
    pub decimals: i32,
}

impl ScoringProfile {
    pub fn default_v1() -> Self {
        Self {
            jitter_half_width: 7.5,
            floor: 5.0,
            ceiling: 95.0,
            report_above: 5.0,
            decimals: 1,
        }
    }

    pub fn deterministic_v1() -> Self {
        let mut base = Self::default_v1();
        base.jitter_half_width = 0.0;
        base
    }

    pub fn is_deterministic(&self) -> bool {
        self.jitter_half_width <= 0.0
    }
}

impl Default for ScoringProfile {
    fn default() -> Self {
        Self::default_v1()
    }
}
