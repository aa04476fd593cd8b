use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::interests::DecodeError;

/// Insertion-ordered tag usage counts built from a user's interaction log
/// (job views, tag clicks). Counts only grow within a session; merging
/// across sessions belongs to the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagHistogram {
    tags: IndexMap<String, u64>,
}

impl TagHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, tag: &str) {
        *self.tags.entry(tag.to_string()).or_insert(0) += 1;
    }

    pub fn count(&self, tag: &str) -> u64 {
        self.tags.get(tag).copied().unwrap_or(0)
    }

    pub fn counts(&self) -> &IndexMap<String, u64> {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn from_json(payload: &str) -> Result<Self, DecodeError> {
        Ok(serde_json::from_str(payload)?)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}
