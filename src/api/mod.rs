//! HTTP API module for the Salary Engine.
//!
//! This module provides the REST API endpoints for calculating compensation
//! and browsing the salary table.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{FALLBACK_WARNING_CODE, create_router};
pub use request::CompensationQuery;
pub use response::{ApiError, ApiErrorResponse, ScalesResponse, StepsResponse};
pub use state::AppState;
