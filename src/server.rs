use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use std::{net::SocketAddr, sync::Arc};

use crate::api::{
    HotScoreRequest, HotScoreResponse, InterestsRequest, InterestsResponse, JobScoreRequest,
    JobScoreResponse, TopicRankRequest, TopicRankResponse,
};
use content_rank::config::RankingConfig;
use content_rank::interests::ratios_or_empty;
use content_rank::now_timestamp;
use content_rank::scoring::{HotScorer, JobScorer, TopicRanker};

#[derive(Clone)]
struct AppState {
    config: Arc<RankingConfig>,
}

pub async fn serve(args: crate::ServeArgs) -> Result<(), String> {
    let (config, config_path) = RankingConfig::load(None)?;
    if let Some(path) = config_path.as_ref() {
        tracing::info!(path = %path.display(), "loaded ranking config");
    }

    let state = AppState {
        config: Arc::new(config),
    };

    let app = Router::new()
        .route("/api/health", get(health))
        .route("/api/score/job", post(score_job_handler))
        .route("/api/rank/topic", post(rank_topic_handler))
        .route("/api/rank/hot", post(hot_score_handler))
        .route("/api/interests", post(interests_handler))
        .with_state(state);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|err| format!("invalid bind address: {}", err))?;

    tracing::info!(%addr, "ranking server listening");

    axum::serve(
        tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|err| format!("failed to bind server: {}", err))?,
        app,
    )
    .await
    .map_err(|err| format!("server error: {}", err))?;

    Ok(())
}

async fn health() -> impl IntoResponse {
    StatusCode::OK
}

async fn score_job_handler(
    State(state): State<AppState>,
    Json(request): Json<JobScoreRequest>,
) -> Json<JobScoreResponse> {
    let snapshot = request.into_snapshot();
    let scorer = JobScorer::new(state.config.score.clone());
    let breakdown = scorer.breakdown(&snapshot);
    Json(JobScoreResponse {
        score: breakdown.total,
        breakdown,
    })
}

async fn rank_topic_handler(
    State(state): State<AppState>,
    Json(request): Json<TopicRankRequest>,
) -> Json<TopicRankResponse> {
    let now = request.now.unwrap_or_else(now_timestamp);
    let snapshot = request.into_snapshot();
    let rank = TopicRanker::new(state.config.rank.clone()).rank(&snapshot, now);
    Json(TopicRankResponse { rank })
}

async fn hot_score_handler(
    State(state): State<AppState>,
    Json(request): Json<HotScoreRequest>,
) -> Json<HotScoreResponse> {
    let now = request.now.unwrap_or_else(now_timestamp);
    let snapshot = request.into_snapshot();
    let score = HotScorer::new(state.config.hot.clone()).score(&snapshot, now);
    Json(HotScoreResponse { score })
}

async fn interests_handler(
    State(_state): State<AppState>,
    Json(request): Json<InterestsRequest>,
) -> Result<Json<InterestsResponse>, (StatusCode, String)> {
    let payload = request
        .into_payload()
        .map_err(|err| (StatusCode::BAD_REQUEST, err))?;

    // A broken histogram means "no interests", not a failed request.
    let mut warnings = Vec::new();
    let (ratio, decode_error) = ratios_or_empty(&payload);
    if let Some(err) = decode_error {
        tracing::warn!(error = %err, "interests payload rejected");
        warnings.push(format!("interests decode failed: {}", err));
    }

    Ok(Json(InterestsResponse { ratio, warnings }))
}
