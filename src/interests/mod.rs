pub mod calculator;
pub mod histogram;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid interests payload: {0}")]
    Json(#[from] serde_json::Error),
}

pub use calculator::{ratios_or_empty, InterestRatios, InterestsCalculator};
pub use histogram::TagHistogram;
