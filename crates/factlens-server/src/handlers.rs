//! HTTP request handlers for the fact-check service.
//!
//! Implements the fact-check endpoint, its CORS preflight, the results page
//! backing routes and a health check using axum.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderName, StatusCode, Uri},
    response::{IntoResponse, Json, Redirect, Response},
    routing::{get, post},
    Router,
};
use factlens_channel::ResultChannel;
use factlens_domain::{FactCheckRequest, FactCheckResult, ModelProvider};
use factlens_extractor::{FactCheckError, FactChecker};
use factlens_llm::PROMPT_VERSION;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info, warn};
use url::Url;

/// Headers sent on every fact-check endpoint response
const CORS_HEADERS: [(HeaderName, &str); 3] = [
    (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
    (header::ACCESS_CONTROL_ALLOW_METHODS, "POST, OPTIONS"),
    (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
];

/// Detail attached to every server-side failure
const FAILURE_DETAILS: &str = "Failed to process fact-check request";

/// Shared application state
pub struct AppState<P> {
    /// Fact-check pipeline
    pub checker: Arc<FactChecker<P>>,
    /// Latest-result channel consumed by the results page
    pub channel: ResultChannel,
    /// Public base URL used to rebuild absolute results addresses
    pub public_url: Url,
}

impl<P> Clone for AppState<P> {
    fn clone(&self) -> Self {
        Self {
            checker: Arc::clone(&self.checker),
            channel: self.channel.clone(),
            public_url: self.public_url.clone(),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthCheckResponse {
    /// Overall health status
    pub status: String,
    /// Model the provider calls
    pub model: String,
    /// Version of the system instruction in use
    pub prompt_version: String,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Additional context, present on server-side failures
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Fact-check pipeline error
    FactCheck(FactCheckError),
    /// Request body could not be read
    BadRequest(String),
    /// Nothing to return
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, details) = match self {
            AppError::FactCheck(e @ FactCheckError::Validation(_)) => {
                (StatusCode::BAD_REQUEST, e.to_string(), None)
            }
            AppError::FactCheck(e) => {
                error!("Fact-check failed: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    e.to_string(),
                    Some(FAILURE_DETAILS.to_string()),
                )
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, None),
        };

        let body = Json(ErrorResponse {
            error: message,
            details,
        });
        (status, CORS_HEADERS, body).into_response()
    }
}

impl From<FactCheckError> for AppError {
    fn from(e: FactCheckError) -> Self {
        AppError::FactCheck(e)
    }
}

/// POST /api/fact-check - Fact-check text, a URL and/or images
///
/// A successful result is also published to the result channel.
async fn fact_check<P>(
    State(state): State<AppState<P>>,
    payload: Result<Json<FactCheckRequest>, JsonRejection>,
) -> Result<Response, AppError>
where
    P: ModelProvider + Send + Sync + 'static,
    P::Error: Into<FactCheckError>,
{
    let Json(request) = payload.map_err(|e| {
        warn!("Rejected fact-check body: {}", e);
        AppError::BadRequest(e.body_text())
    })?;

    let result = state.checker.check(&request).await?;
    state.channel.publish(result.clone());

    Ok((CORS_HEADERS, Json(result)).into_response())
}

/// OPTIONS /api/fact-check - CORS preflight
async fn preflight() -> impl IntoResponse {
    (StatusCode::NO_CONTENT, CORS_HEADERS)
}

/// GET /health - Liveness and model information
async fn health_check<P>(State(state): State<AppState<P>>) -> Json<HealthCheckResponse>
where
    P: ModelProvider + Send + Sync + 'static,
    P::Error: Into<FactCheckError>,
{
    Json(HealthCheckResponse {
        status: "healthy".to_string(),
        model: state.checker.provider().model_name().to_string(),
        prompt_version: PROMPT_VERSION.to_string(),
    })
}

/// GET /results - Latest result, or absorb one carried in `extensionData`
///
/// An address carrying a payload is answered with a redirect to the same
/// address without it, so the payload is applied once.
async fn get_results<P>(State(state): State<AppState<P>>, uri: Uri) -> Result<Response, AppError> {
    let url = state
        .public_url
        .join(&uri.to_string())
        .map_err(|e| AppError::BadRequest(format!("Invalid results address: {}", e)))?;

    let received = state.channel.receive(&url);

    if let Some(clean) = received.clean_url {
        let location = match clean.query() {
            Some(query) => format!("{}?{}", clean.path(), query),
            None => clean.path().to_string(),
        };
        info!(stored = received.result.is_some(), "Redirecting to clean results address");
        return Ok(Redirect::to(&location).into_response());
    }

    received
        .result
        .map(|result: FactCheckResult| Json(result).into_response())
        .ok_or_else(|| AppError::NotFound("No fact-check result available".to_string()))
}

/// DELETE /results - Forget the latest result
async fn clear_results<P>(State(state): State<AppState<P>>) -> StatusCode {
    state.channel.clear();
    info!("Cleared stored result");
    StatusCode::NO_CONTENT
}

/// Create the axum router with all routes
pub fn create_router<P>(state: AppState<P>) -> Router
where
    P: ModelProvider + Send + Sync + 'static,
    P::Error: Into<FactCheckError>,
{
    Router::new()
        .route("/api/fact-check", post(fact_check::<P>).options(preflight))
        .route("/health", get(health_check::<P>))
        .route("/results", get(get_results::<P>).delete(clear_results::<P>))
        .with_state(state)
}
