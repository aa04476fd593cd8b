use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::scoring::TopicRanker;
use crate::TopicSnapshot;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedTopic {
    pub topic_id: String,
    #[serde(flatten)]
    pub snapshot: TopicSnapshot,
    #[serde(default)]
    pub rank: f64,
}

impl RankedTopic {
    pub fn new(topic_id: String, snapshot: TopicSnapshot) -> Self {
        Self {
            topic_id,
            snapshot,
            rank: 0.0,
        }
    }
}

/// Batch counterpart of [`TopicRanker`]: recomputes every rank against a
/// single `now` and sorts the slice best-first, the shape of the periodic
/// rank-refresh job that feeds topic listings.
#[derive(Debug, Clone)]
pub struct RankingPipeline {
    ranker: TopicRanker,
}

impl RankingPipeline {
    pub fn new(ranker: TopicRanker) -> Self {
        Self { ranker }
    }

    pub fn rank(&self, candidates: &mut [RankedTopic], now: i64) {
        tracing::debug!(candidates = candidates.len(), "ranking topic batch");

        for candidate in candidates.iter_mut() {
            candidate.rank = self.ranker.rank(&candidate.snapshot, now);
        }

        candidates.sort_by(|a, b| b.rank.partial_cmp(&a.rank).unwrap_or(Ordering::Equal));
    }
}
