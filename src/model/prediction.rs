use serde::Serialize;

use crate::model::Activity;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Prediction {
    pub activity: Activity,
    pub confidence: f64,
}
