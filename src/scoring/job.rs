use serde::{Deserialize, Serialize};

use crate::{FirmSnapshot, JobSnapshot};

/// Points granted per filled job field. 70 points maximum with the defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobFieldPoints {
    pub salary_from: i64,
    pub salary_to: i64,
    pub city: i64,
    pub seniority: i64,
}

impl Default for JobFieldPoints {
    fn default() -> Self {
        Self {
            salary_from: 25,
            salary_to: 25,
            city: 15,
            seniority: 5,
        }
    }
}

/// Points granted per filled firm field. 26 points maximum with the defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FirmFieldPoints {
    pub name: i64,
    pub logo: i64,
    pub website: i64,
    pub description: i64,
}

impl Default for FirmFieldPoints {
    fn default() -> Self {
        Self {
            name: 15,
            logo: 5,
            website: 1,
            description: 5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub job: JobFieldPoints,
    pub firm: FirmFieldPoints,
    pub tag_points: i64,
    pub tag_cap: i64,
    pub feature_points: i64,
    pub feature_cap: i64,
    pub benefit_points: i64,
    pub benefit_cap: i64,
    pub agency_penalty: i64,
    pub no_firm_penalty: i64,
    pub minimum: i64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            job: JobFieldPoints::default(),
            firm: FirmFieldPoints::default(),
            tag_points: 10,
            tag_cap: 30,
            feature_points: 5,
            feature_cap: 50,
            benefit_points: 5,
            benefit_cap: 25,
            agency_penalty: 15,
            no_firm_penalty: 15,
            minimum: 1,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ScoreBreakdown {
    pub fields: i64,
    pub tags: i64,
    pub features: i64,
    pub firm_fields: i64,
    pub benefits: i64,
    pub penalty: i64,
    pub total: i64,
}

#[derive(Debug, Clone)]
pub struct JobScorer {
    weights: ScoreWeights,
}

impl JobScorer {
    pub fn new(weights: ScoreWeights) -> Self {
        Self { weights }
    }

    pub fn score(&self, job: &JobSnapshot) -> i64 {
        self.breakdown(job).total
    }

    pub fn breakdown(&self, job: &JobSnapshot) -> ScoreBreakdown {
        let weights = &self.weights;

        let mut fields = 0;
        if has_amount(job.salary_from) {
            fields += weights.job.salary_from;
        }
        if has_amount(job.salary_to) {
            fields += weights.job.salary_to;
        }
        if has_text(&job.city) {
            fields += weights.job.city;
        }
        if has_text(&job.seniority) {
            fields += weights.job.seniority;
        }

        let tags = weights.tag_cap.min(i64::from(job.tag_count) * weights.tag_points);
        let features = weights
            .feature_cap
            .min(i64::from(job.checked_feature_count) * weights.feature_points);

        let mut firm_fields = 0;
        let mut benefits = 0;
        let mut penalty = 0;
        match &job.firm {
            Some(firm) => {
                firm_fields = self.firm_fields(firm);
                benefits = weights
                    .benefit_cap
                    .min(i64::from(firm.benefit_count) * weights.benefit_points);
                if firm.is_agency {
                    penalty = weights.agency_penalty;
                }
            }
            None => penalty = weights.no_firm_penalty,
        }

        let raw = fields + tags + features + firm_fields + benefits - penalty;

        // The rank formula downstream treats the score as a positive weight,
        // so the total never drops below the configured minimum.
        ScoreBreakdown {
            fields,
            tags,
            features,
            firm_fields,
            benefits,
            penalty,
            total: raw.max(weights.minimum),
        }
    }

    fn firm_fields(&self, firm: &FirmSnapshot) -> i64 {
        let points = &self.weights.firm;
        let mut total = 0;
        if has_text(&firm.name) {
            total += points.name;
        }
        if has_text(&firm.logo) {
            total += points.logo;
        }
        if has_text(&firm.website) {
            total += points.website;
        }
        if has_text(&firm.description) {
            total += points.description;
        }
        total
    }
}

// Mirrors the original's truthiness check: zero is empty, any other
// number counts as filled.
fn has_amount(value: Option<i64>) -> bool {
    value.map(|amount| amount != 0).unwrap_or(false)
}

fn has_text(value: &Option<String>) -> bool {
    value
        .as_deref()
        .map(|text| !text.trim().is_empty())
        .unwrap_or(false)
}
