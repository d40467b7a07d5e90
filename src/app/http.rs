use crate::adapters::LocalStorage;
use crate::app::request::GenerateForm;
use crate::config::ServerConfig;
use crate::core::engine::GenerateEngine;
use crate::utils::error::QrError;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use tracing::instrument;

/// Uploaded logos can be sizeable; the axum default of 2 MiB is too tight.
const MAX_BODY_BYTES: usize = 8 * 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<GenerateEngine<LocalStorage, ServerConfig>>,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub png: String,
    pub svg: String,
}

pub fn create_router(engine: GenerateEngine<LocalStorage, ServerConfig>) -> Router {
    let state = AppState {
        engine: Arc::new(engine),
    };

    Router::new()
        .route("/health", get(health_check))
        .route("/generate", post(generate))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}

#[instrument(skip_all)]
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

#[instrument(skip_all)]
async fn generate(State(state): State<AppState>, form: GenerateForm) -> Response {
    let request = match form.into_request() {
        Ok(request) => request,
        Err(err) => return err.into_response(),
    };

    match state.engine.run(&request).await {
        Ok(artifacts) => (
            StatusCode::OK,
            Json(GenerateResponse {
                png: artifacts.png.path,
                svg: artifacts.svg.path,
            }),
        )
            .into_response(),
        Err(err) => err.into_response(),
    }
}

/// Every stage failure surfaces uniformly as a plain-text server error.
impl IntoResponse for QrError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Error generating QR code: {}", self),
        )
            .into_response()
    }
}
