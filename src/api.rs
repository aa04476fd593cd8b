use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use content_rank::scoring::ScoreBreakdown;
use content_rank::{FirmSnapshot, JobSnapshot, MicroblogSnapshot, TopicSnapshot};

#[derive(Debug, Deserialize)]
pub struct JobScoreRequest {
    pub salary_from: Option<i64>,
    pub salary_to: Option<i64>,
    pub city: Option<String>,
    pub seniority: Option<String>,
    pub tag_count: Option<u32>,
    pub checked_feature_count: Option<u32>,
    pub firm: Option<FirmRequest>,
}

#[derive(Debug, Deserialize)]
pub struct FirmRequest {
    pub name: Option<String>,
    pub logo: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
    pub benefit_count: Option<u32>,
    pub is_agency: Option<bool>,
}

impl JobScoreRequest {
    pub fn into_snapshot(self) -> JobSnapshot {
        JobSnapshot {
            salary_from: self.salary_from,
            salary_to: self.salary_to,
            city: self.city,
            seniority: self.seniority,
            tag_count: self.tag_count.unwrap_or(0),
            checked_feature_count: self.checked_feature_count.unwrap_or(0),
            firm: self.firm.map(FirmRequest::into_snapshot),
        }
    }
}

impl FirmRequest {
    fn into_snapshot(self) -> FirmSnapshot {
        FirmSnapshot {
            name: self.name,
            logo: self.logo,
            website: self.website,
            description: self.description,
            benefit_count: self.benefit_count.unwrap_or(0),
            is_agency: self.is_agency.unwrap_or(false),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct JobScoreResponse {
    pub score: i64,
    pub breakdown: ScoreBreakdown,
}

#[derive(Debug, Deserialize)]
pub struct TopicRankRequest {
    pub score: Option<i64>,
    pub replies: Option<i64>,
    pub views: Option<i64>,
    pub last_post_at: Option<i64>,
    pub created_at: Option<i64>,
    pub now: Option<i64>,
}

impl TopicRankRequest {
    pub fn into_snapshot(self) -> TopicSnapshot {
        TopicSnapshot {
            score: self.score.unwrap_or(0),
            replies: self.replies.unwrap_or(0),
            views: self.views.unwrap_or(0),
            last_post_at: self.last_post_at,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TopicRankResponse {
    pub rank: f64,
}

#[derive(Debug, Deserialize)]
pub struct HotScoreRequest {
    pub votes: Option<i64>,
    pub bonus: Option<i64>,
    pub created_at: Option<i64>,
    pub now: Option<i64>,
}

impl HotScoreRequest {
    pub fn into_snapshot(self) -> MicroblogSnapshot {
        MicroblogSnapshot {
            votes: self.votes.unwrap_or(0),
            bonus: self.bonus.unwrap_or(0),
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HotScoreResponse {
    pub score: i64,
}

#[derive(Debug, Deserialize)]
pub struct InterestsRequest {
    pub payload: Option<String>,
}

impl InterestsRequest {
    pub fn into_payload(self) -> Result<String, String> {
        let payload = self.payload.unwrap_or_default();
        if payload.trim().is_empty() {
            return Err("payload is required".to_string());
        }
        Ok(payload)
    }
}

#[derive(Debug, Serialize)]
pub struct InterestsResponse {
    pub ratio: IndexMap<String, f64>,
    pub warnings: Vec<String>,
}
