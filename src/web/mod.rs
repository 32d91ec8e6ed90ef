// Web server: Axum JSON API in front of the recommendation pipeline.
//
// Handlers stay thin: parse the request, run the pipeline on a blocking
// worker (it reads files and does CPU work), and map the outcome to JSON.
// No state is shared between requests beyond immutable configuration.

use std::sync::Arc;

use anyhow::Result;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::error::RecommendError;
use crate::pipeline::recommend::Recommender;

pub mod handlers;

/// Shared application state threaded through all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub recommender: Arc<Recommender>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let recommender = Recommender::from_config(&config);
        Self {
            config: Arc::new(config),
            recommender: Arc::new(recommender),
        }
    }
}

/// Start the Axum web server and block until it exits.
pub async fn run_server(config: Config, port: u16, bind: &str) -> Result<()> {
    let app = build_router(AppState::new(config));

    let addr = format!("{bind}:{port}");
    info!("Influencer recommendation API listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/recommend", post(handlers::recommend::recommend))
        .route(
            "/getScoreByInfluencer",
            get(handlers::scorecard::get_score_by_influencer),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "message": "Influencer Recommendation API",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Liveness check: always returns 200 OK.
async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        axum::Json(serde_json::json!({ "status": "healthy", "message": "API is running" })),
    )
}

/// Typed JSON error response helper.
pub fn api_error(status: StatusCode, message: &str) -> Response {
    (status, axum::Json(serde_json::json!({ "error": message }))).into_response()
}

/// Map a pipeline error to its HTTP response: missing data is 404,
/// everything else is 500.
pub fn error_response(err: &RecommendError) -> Response {
    let status = if err.is_not_found() {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    api_error(status, &err.to_string())
}
