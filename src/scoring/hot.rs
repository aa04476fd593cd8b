use serde::{Deserialize, Serialize};

use crate::MicroblogSnapshot;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotWeights {
    pub time_divisor: f64,
}

impl Default for HotWeights {
    fn default() -> Self {
        Self {
            time_divisor: 45000.0,
        }
    }
}

/// Front-page ordering score for microblog entries: log2 of the vote mass
/// plus a creation-time term, truncated to an integer sort key.
#[derive(Debug, Clone)]
pub struct HotScorer {
    weights: HotWeights,
}

impl HotScorer {
    pub fn new(weights: HotWeights) -> Self {
        Self { weights }
    }

    pub fn score(&self, entry: &MicroblogSnapshot, now: i64) -> i64 {
        let votes = entry.votes + entry.bonus;
        let log = if votes > 0 { (votes as f64).log2() } else { 0.0 };
        let created_at = entry.created_at.unwrap_or(now);

        (log + created_at as f64 / self.weights.time_divisor) as i64
    }
}
