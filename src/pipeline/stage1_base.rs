use crate::model::N_ACTIVITIES;
use crate::model::activity::{Activity, ActivityDef, builtin_activities};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseScore {
    pub activity: Activity,
    pub base: f64,
}

/// Pre-jitter score for every activity, in table order.
///
/// `input` must already be length-checked; positions come from the static
/// weight table and are all below the parameter count.
pub fn base_scores(input: &[f64]) -> Vec<BaseScore> {
    let defs = builtin_activities();
    let mut out = Vec::with_capacity(N_ACTIVITIES);
    for def in defs {
        out.push(BaseScore {
            activity: def.activity,
            base: weighted_mean(def, input),
        });
    }
    out
}

fn weighted_mean(def: &ActivityDef, input: &[f64]) -> f64 {
    let mut sum = 0.0f64;
    for t in &def.terms {
        sum += input[t.position] * t.weight;
    }
    sum / def.terms.len() as f64
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_base.rs"]
mod tests;
