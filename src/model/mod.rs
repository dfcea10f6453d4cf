pub mod activity;
pub mod prediction;
pub mod profile;
pub mod tiers;

pub use activity::{Activity, N_ACTIVITIES, N_PARAMETERS};
pub use prediction::Prediction;
pub use profile::ScoringProfile;
