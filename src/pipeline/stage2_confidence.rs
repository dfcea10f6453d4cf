use rand::Rng;

use crate::model::ScoringProfile;
use crate::model::prediction::Prediction;
use crate::pipeline::stage1_base::BaseScore;

pub fn run_stage2<R: Rng + ?Sized>(
    scores: &[BaseScore],
    profile: &ScoringProfile,
    rng: &mut R,
) -> Vec<Prediction> {
    let mut out = Vec::with_capacity(scores.len());
    for score in scores {
        let jitter = draw_jitter(profile.jitter_half_width, rng);
        let confidence = round_to(
            clip(score.base + jitter, profile.floor, profile.ceiling),
            profile.decimals,
        );
        tracing::trace!(
            activity = score.activity.label(),
            base = score.base,
            jitter,
            confidence,
            "scored activity"
        );
        out.push(Prediction {
            activity: score.activity,
            confidence,
        });
    }
    out
}

/// Uniform draw from `[-half_width, +half_width]`; no draw when the width is not positive.
pub fn draw_jitter<R: Rng + ?Sized>(half_width: f64, rng: &mut R) -> f64 {
    if half_width.is_nan() || half_width <= 0.0 {
        return 0.0;
    }
    rng.random_range(-half_width..=half_width)
}

/// NaN passes through unchanged.
pub fn clip(x: f64, lo: f64, hi: f64) -> f64 {
    if x < lo {
        lo
    } else if x > hi {
        hi
    } else {
        x
    }
}

/// Rounds half away from zero.
pub fn round_to(x: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (x * scale).round() / scale
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_confidence.rs"]
mod tests;
