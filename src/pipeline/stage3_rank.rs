use std::cmp::Ordering;

use crate::model::prediction::Prediction;

/// Drops scores at or below `report_above` and orders the rest by
/// descending confidence. The sort is stable, so ties keep table order.
pub fn run_stage3(mut predictions: Vec<Prediction>, report_above: f64) -> Vec<Prediction> {
    predictions.retain(|p| p.confidence > report_above);
    predictions.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(Ordering::Equal)
    });
    predictions
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_rank.rs"]
mod tests;
