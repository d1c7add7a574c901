//! HTTP API module for the Weekly Pay Engine.
//!
//! This module exposes the rule-set registry over HTTP: `POST /calculate`
//! evaluates one base rate and hours pair, `GET /rule-sets` lists the
//! registered rule sets.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CalculationRequest;
pub use response::{ApiError, CalculationResponse, RuleSetSummary};
pub use state::AppState;
