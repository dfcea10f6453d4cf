pub mod stage1_base;
pub mod stage2_confidence;
pub mod stage3_rank;

use rand::Rng;
use thiserror::Error;

use crate::model::prediction::Prediction;
use crate::model::{N_PARAMETERS, ScoringProfile};
use stage1_base::base_scores;
use stage2_confidence::run_stage2;
use stage3_rank::run_stage3;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("invalid input: expected {expected} parameters, got {actual}")]
    InvalidInput { expected: usize, actual: usize },
}

/// Scores `input` with the default profile.
pub fn predict<R: Rng + ?Sized>(
    input: &[f64],
    rng: &mut R,
) -> Result<Vec<Prediction>, ScoreError> {
    predict_with(input, &ScoringProfile::default_v1(), rng)
}

pub fn predict_with<R: Rng + ?Sized>(
    input: &[f64],
    profile: &ScoringProfile,
    rng: &mut R,
) -> Result<Vec<Prediction>, ScoreError> {
    if input.len() != N_PARAMETERS {
        return Err(ScoreError::InvalidInput {
            expected: N_PARAMETERS,
            actual: input.len(),
        });
    }

    let base = base_scores(input);
    let scored = run_stage2(&base, profile, rng);
    let ranked = run_stage3(scored, profile.report_above);
    tracing::debug!(
        reported = ranked.len(),
        deterministic = profile.is_deterministic(),
        "prediction complete"
    );
    Ok(ranked)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/predict.rs"]
mod tests;
