// POST /recommend: rank influencers for a business description.
//
// Request:  { "business_description": "...", "top_n": 5, "data_file_path": "..." }
// Response: { "success": true, "message": "...", "recommendations": [...] }
//
// Only the raw similarity is returned per influencer; the blended score is
// the ordering, not a field.

use std::path::PathBuf;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::scoring::ranking::RankedResult;
use crate::web::{api_error, error_response, AppState};

#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    pub business_description: String,
    /// Negative values are treated as 0 (empty result)
    pub top_n: Option<i64>,
    pub data_file_path: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct InfluencerRecommendation {
    pub username: String,
    pub similarity_score: f64,
    pub avg_likes: f64,
    pub avg_comments: f64,
}

impl From<RankedResult> for InfluencerRecommendation {
    fn from(r: RankedResult) -> Self {
        Self {
            username: r.username,
            similarity_score: r.similarity_score,
            avg_likes: r.avg_likes,
            avg_comments: r.avg_comments,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub success: bool,
    pub message: String,
    pub recommendations: Vec<InfluencerRecommendation>,
}

/// POST /recommend: run the pipeline against the requested data file.
pub async fn recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendationRequest>,
) -> Response {
    let default_top_n = state.config.default_top_n;
    let top_n = request
        .top_n
        .map(|n| usize::try_from(n).unwrap_or(0))
        .unwrap_or(default_top_n);
    let data_path = request
        .data_file_path
        .map(PathBuf::from)
        .unwrap_or_else(|| state.config.data_path.clone());

    let recommender = state.recommender.clone();
    let description = request.business_description;
    let path_for_log = data_path.clone();

    let outcome = tokio::task::spawn_blocking(move || {
        recommender.recommend_file(&data_path, &description, top_n)
    })
    .await;

    match outcome {
        Ok(Ok(results)) => {
            let message = if results.is_empty() {
                "No recommendations found for the given description".to_string()
            } else {
                format!("Found {} recommendations", results.len())
            };
            Json(RecommendationResponse {
                success: true,
                message,
                recommendations: results.into_iter().map(Into::into).collect(),
            })
            .into_response()
        }
        Ok(Err(e)) => {
            error!(error = %e, path = %path_for_log.display(), "Recommendation failed");
            error_response(&e)
        }
        Err(e) => {
            error!(error = %e, "Recommendation task panicked");
            api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "An error occurred during recommendation",
            )
        }
    }
}
