use indexmap::IndexMap;
use serde::Serialize;

use crate::interests::{DecodeError, TagHistogram};

#[derive(Debug, Clone, Serialize)]
pub struct InterestRatios {
    pub ratio: IndexMap<String, f64>,
}

/// Normalizes a tag histogram into per-tag affinity ratios: each count is
/// divided by the maximum count, so the most-used tag maps to exactly 1.0
/// and ties all map to 1.0. An empty histogram yields an empty map.
#[derive(Debug, Clone)]
pub struct InterestsCalculator {
    histogram: TagHistogram,
}

impl InterestsCalculator {
    pub fn new(histogram: TagHistogram) -> Self {
        Self { histogram }
    }

    pub fn from_json(payload: &str) -> Result<Self, DecodeError> {
        Ok(Self::new(TagHistogram::from_json(payload)?))
    }

    pub fn ratios(&self) -> IndexMap<String, f64> {
        let max = self
            .histogram
            .counts()
            .values()
            .copied()
            .max()
            .unwrap_or(0);
        if max == 0 {
            return IndexMap::new();
        }

        self.histogram
            .counts()
            .iter()
            .map(|(tag, count)| (tag.clone(), *count as f64 / max as f64))
            .collect()
    }

    pub fn to_ratios(&self) -> InterestRatios {
        InterestRatios {
            ratio: self.ratios(),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.to_ratios()).unwrap_or_default()
    }
}

/// Decode-tolerant variant for callers that must treat a broken histogram as
/// "no interests" instead of failing the whole request. Returns the decode
/// error alongside the empty map so the caller can surface a warning.
pub fn ratios_or_empty(payload: &str) -> (IndexMap<String, f64>, Option<DecodeError>) {
    match InterestsCalculator::from_json(payload) {
        Ok(calculator) => (calculator.ratios(), None),
        Err(err) => (IndexMap::new(), Some(err)),
    }
}
