//! Response types for the Weekly Pay Engine API.
//!
//! This module defines the success and error response structures for the
//! HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::{PayRuleEngine, PayStrategy};
use crate::error::EngineError;
use crate::models::{CalculationResult, CalculationStatus, RuleParameters};

/// Response body for a successful `/calculate` request.
#[derive(Debug, Clone, Serialize)]
pub struct CalculationResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The rule set the inputs were evaluated against.
    pub rule_set: String,
    /// The base hourly rate from the request.
    pub base_pay: Decimal,
    /// The hours worked from the request.
    pub hours: i32,
    /// The calculation status.
    pub status: CalculationStatus,
    /// The total pay for the week.
    pub total_pay: Decimal,
}

impl CalculationResponse {
    /// Wraps an engine result with request metadata.
    pub fn new(rule_set: String, base_pay: Decimal, hours: i32, result: CalculationResult) -> Self {
        Self {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            rule_set,
            base_pay,
            hours,
            status: result.status(),
            total_pay: result.total_pay(),
        }
    }
}

/// One entry of the `/rule-sets` listing.
#[derive(Debug, Clone, Serialize)]
pub struct RuleSetSummary {
    /// The rule-set name.
    pub name: String,
    /// The rule parameters.
    pub parameters: RuleParameters,
    /// The pay computation strategy.
    pub strategy: PayStrategy,
}

impl RuleSetSummary {
    /// Summarizes a registered engine.
    pub fn new(name: &str, engine: &PayRuleEngine) -> Self {
        Self {
            name: name.to_string(),
            parameters: *engine.parameters(),
            strategy: *engine.strategy(),
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a rule set not found error response.
    pub fn rule_set_not_found(name: &str) -> Self {
        Self::with_details(
            "RULE_SET_NOT_FOUND",
            format!("Rule set not found: {}", name),
            format!("The rule set '{}' is not registered with this engine", name),
        )
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::RuleSetNotFound { name } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::rule_set_not_found(&name),
            },
            EngineError::DuplicateRuleSet { name } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Rule set already registered: {}", name),
                ),
            },
            EngineError::InvalidRuleParameter { field, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Invalid rule parameter '{}': {}", field, message),
                ),
            },
        }
    }
}
