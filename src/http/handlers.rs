//! HTTP handlers for the REST API.
//!
//! Each handler parses its input, delegates to the classifier and the fact
//! provider, and serializes the combined result.

use axum::{
    extract::{Query, State},
    Json,
};

use super::dto::{ClassificationResponse, ClassifyQuery, HealthResponse};
use super::error::AppError;
use super::state::AppState;
use crate::classifier;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// GET /health
///
/// Health check endpoint to verify the service is running.
pub async fn health_check() -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
    }))
}

/// GET /api/classify-number?number=<value>
///
/// Classify a number by its mathematical properties and attach a fun fact.
/// Returns 400 with the raw value echoed back when the input does not parse
/// as an integer.
pub async fn classify_number(
    State(state): State<AppState>,
    Query(query): Query<ClassifyQuery>,
) -> HandlerResult<ClassificationResponse> {
    let number = parse_number(&query)?;

    // Predicates are CPU-bound, so run them off the async worker threads;
    // the fact lookup proceeds concurrently and is bounded by the provider's
    // own timeout.
    let classification = tokio::task::spawn_blocking(move || classifier::classify(number));
    let (classification, fun_fact) = tokio::join!(classification, state.facts.fun_fact(number));
    let classification =
        classification.map_err(|e| AppError::Internal(format!("Task join error: {}", e)))?;

    Ok(Json(ClassificationResponse::new(classification, fun_fact)))
}

/// Parse the raw query value into an integer, trimming surrounding
/// whitespace first.
fn parse_number(query: &ClassifyQuery) -> Result<i64, AppError> {
    let raw = query.number.as_ref().ok_or(AppError::InvalidNumber(None))?;
    raw.trim()
        .parse()
        .map_err(|_| AppError::InvalidNumber(Some(raw.clone())))
}
