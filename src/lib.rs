pub mod config;
pub mod interests;
pub mod scoring;

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::config::RankingConfig;
use crate::scoring::{HotScorer, JobScorer, ScoreBreakdown, TopicRanker};

/// Attribute snapshot of a job posting. Tag/feature counts are pre-fetched by
/// the caller so scoring stays a pure function over this value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobSnapshot {
    pub salary_from: Option<i64>,
    pub salary_to: Option<i64>,
    pub city: Option<String>,
    pub seniority: Option<String>,
    #[serde(default)]
    pub tag_count: u32,
    #[serde(default)]
    pub checked_feature_count: u32,
    pub firm: Option<FirmSnapshot>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FirmSnapshot {
    pub name: Option<String>,
    pub logo: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub benefit_count: u32,
    #[serde(default)]
    pub is_agency: bool,
}

/// Forum topic snapshot. Timestamps are unix seconds; `None` means the topic
/// has not been saved yet and resolves to `now` when ranked.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TopicSnapshot {
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub replies: i64,
    #[serde(default)]
    pub views: i64,
    pub last_post_at: Option<i64>,
    pub created_at: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MicroblogSnapshot {
    #[serde(default)]
    pub votes: i64,
    #[serde(default)]
    pub bonus: i64,
    pub created_at: Option<i64>,
}

pub fn score_job(job: &JobSnapshot, config: &RankingConfig) -> i64 {
    JobScorer::new(config.score.clone()).score(job)
}

pub fn job_breakdown(job: &JobSnapshot, config: &RankingConfig) -> ScoreBreakdown {
    JobScorer::new(config.score.clone()).breakdown(job)
}

pub fn rank_topic(topic: &TopicSnapshot, now: i64, config: &RankingConfig) -> f64 {
    TopicRanker::new(config.rank.clone()).rank(topic, now)
}

pub fn hot_score(entry: &MicroblogSnapshot, now: i64, config: &RankingConfig) -> i64 {
    HotScorer::new(config.hot.clone()).score(entry, now)
}

pub fn now_timestamp() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_secs() as i64)
        .unwrap_or(0)
}

pub fn format_float(value: f64, digits: usize) -> String {
    format!("{:.1$}", value, digits)
}
