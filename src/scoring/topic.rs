use serde::{Deserialize, Serialize};

use crate::TopicSnapshot;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankWeights {
    pub score_factor: f64,
    pub reply_factor: f64,
    pub view_factor: f64,
    pub term_cap: f64,
    pub last_post_decay: f64,
    pub age_decay: f64,
}

impl Default for RankWeights {
    fn default() -> Self {
        Self {
            score_factor: 200.0,
            reply_factor: 100.0,
            view_factor: 15.0,
            term_cap: 1000.0,
            last_post_decay: 4500.0,
            age_decay: 1000.0,
        }
    }
}

/// Recency-decayed popularity rank for forum topics. Each popularity term is
/// capped so no single factor dominates; the decay terms are unbounded, so
/// the rank of stale content keeps falling and may go negative.
#[derive(Debug, Clone)]
pub struct TopicRanker {
    weights: RankWeights,
}

impl TopicRanker {
    pub fn new(weights: RankWeights) -> Self {
        Self { weights }
    }

    pub fn rank(&self, topic: &TopicSnapshot, now: i64) -> f64 {
        let weights = &self.weights;
        let last_post_at = topic.last_post_at.unwrap_or(now);
        let created_at = topic.created_at.unwrap_or(now);

        weights.term_cap.min(weights.score_factor * topic.score as f64)
            + weights.term_cap.min(weights.reply_factor * topic.replies as f64)
            + weights.term_cap.min(weights.view_factor * topic.views as f64)
            - ((now - last_post_at) as f64 / weights.last_post_decay)
            - ((now - created_at) as f64 / weights.age_decay)
    }
}
