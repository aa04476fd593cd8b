pub mod hot;
pub mod job;
pub mod pipeline;
pub mod topic;

pub use hot::{HotScorer, HotWeights};
pub use job::{FirmFieldPoints, JobFieldPoints, JobScorer, ScoreBreakdown, ScoreWeights};
pub use pipeline::{RankedTopic, RankingPipeline};
pub use topic::{RankWeights, TopicRanker};
