//! HTTP request handlers for the Weekly Pay Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse, CalculationResponse, RuleSetSummary};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/rule-sets", get(rule_sets_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Out-of-range inputs are not HTTP errors: they come back with status 200
/// and a non-accepted calculation status.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let engine = match state.registry().get(&request.rule_set) {
        Ok(engine) => engine,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                rule_set = %request.rule_set,
                "Rule set not found"
            );
            let api_error: ApiErrorResponse = err.into();
            return (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response();
        }
    };

    let start_time = Instant::now();
    let result = engine.evaluate(request.base_pay, request.hours);
    let duration = start_time.elapsed();

    info!(
        correlation_id = %correlation_id,
        rule_set = %request.rule_set,
        status = %result.status(),
        total_pay = %result.total_pay(),
        duration_us = duration.as_micros(),
        "Calculation completed"
    );

    let response =
        CalculationResponse::new(request.rule_set, request.base_pay, request.hours, result);
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

/// Handler for GET /rule-sets endpoint.
async fn rule_sets_handler(State(state): State<AppState>) -> impl IntoResponse {
    let summaries: Vec<RuleSetSummary> = state
        .registry()
        .iter_sorted()
        .into_iter()
        .map(|(name, engine)| RuleSetSummary::new(name, engine))
        .collect();

    (StatusCode::OK, Json(summaries))
}
