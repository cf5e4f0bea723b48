//! Core types for the scoring engine.

mod error;
mod score_data;

pub use error::{Error, Result};
pub use score_data::AssessmentScore;
