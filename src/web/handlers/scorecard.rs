// GET /getScoreByInfluencer?influencer_name=...: precomputed scorecard lookup.
//
// Does not touch the ranking pipeline. A username that isn't in the table is
// a normal 200 response with success = false; only a missing table file is
// an HTTP error.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::data::scorecard::{InfluencerScoreRecord, ScorecardTable};
use crate::error::RecommendError;
use crate::web::{api_error, error_response, AppState};

#[derive(Debug, Deserialize)]
pub struct ScoreQuery {
    /// Username to look up (case-insensitive)
    pub influencer_name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct InfluencerScoreResponse {
    pub success: bool,
    pub message: String,
    pub influencer_data: Option<InfluencerScoreRecord>,
}

/// GET /getScoreByInfluencer: look up one influencer's scorecard.
pub async fn get_score_by_influencer(
    State(state): State<AppState>,
    Query(params): Query<ScoreQuery>,
) -> Response {
    let path = state.config.scores_path.clone();
    let outcome = tokio::task::spawn_blocking(move || ScorecardTable::load(&path)).await;

    let table = match outcome {
        Ok(Ok(table)) => table,
        Ok(Err(RecommendError::DataSourceNotFound(_))) => {
            return api_error(
                StatusCode::NOT_FOUND,
                "Influencer scores data file not found. Please ensure the data has been processed.",
            );
        }
        Ok(Err(e)) => {
            error!(error = %e, "Failed to load scorecards");
            return error_response(&e);
        }
        Err(e) => {
            error!(error = %e, "Scorecard task panicked");
            return api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "An error occurred while retrieving influencer data",
            );
        }
    };

    let response = match table.lookup(&params.influencer_name) {
        Some(record) => InfluencerScoreResponse {
            success: true,
            message: format!("Successfully retrieved data for @{}", record.username),
            influencer_data: Some(record.clone()),
        },
        None => InfluencerScoreResponse {
            success: false,
            message: format!(
                "Influencer '{}' not found in the dataset",
                params.influencer_name
            ),
            influencer_data: None,
        },
    };

    Json(response).into_response()
}
