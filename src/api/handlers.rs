//! HTTP request handlers for the Salary Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate_compensation;
use crate::models::{AuditWarning, CompensationInput};

use super::request::CompensationQuery;
use super::response::{ApiError, ApiErrorResponse, ScalesResponse, StepsResponse};
use super::state::AppState;

/// Warning code attached when the requested scale/step was replaced by the default.
pub const FALLBACK_WARNING_CODE: &str = "FALLBACK_TO_DEFAULT";

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/compensation", get(compensation_handler))
        .route("/scales", get(scales_handler))
        .route("/scales/:scale/steps", get(steps_handler))
        .route("/agreement", get(agreement_handler))
        .with_state(state)
}

/// Handler for GET /compensation.
///
/// Resolves the query against the agreement defaults and returns the
/// calculated compensation. A scale/step pair absent from the table is
/// replaced by the default pair and flagged with a warning.
async fn compensation_handler(
    State(state): State<AppState>,
    query: Result<Query<CompensationQuery>, QueryRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing compensation request");

    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            warn!(
                correlation_id = %correlation_id,
                error = %rejection.body_text(),
                "Query rejected"
            );
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(ApiError::malformed_query(rejection.body_text())),
            )
                .into_response();
        }
    };

    let config = state.config();
    let defaults = config.config().defaults();

    let requested = match query.resolve(&defaults) {
        Ok(input) => input,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Invalid query");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let mut fallback_warning = None;
    let input = if config.salary_table().contains(requested.scale, requested.step) {
        requested
    } else {
        warn!(
            correlation_id = %correlation_id,
            scale = requested.scale,
            step = requested.step,
            "Scale/step not in table, falling back to default"
        );
        fallback_warning = Some(AuditWarning {
            code: FALLBACK_WARNING_CODE.to_string(),
            message: format!(
                "Scale {}, step {} is not in the salary table; showing scale {}, step {} instead",
                requested.scale, requested.step, defaults.scale, defaults.step
            ),
            severity: "low".to_string(),
        });
        CompensationInput {
            scale: defaults.scale,
            step: defaults.step,
            contracted_hours: requested.contracted_hours,
        }
    };

    match calculate_compensation(config, &input) {
        Ok(mut result) => {
            result.audit_trace.warnings.extend(fallback_warning);
            info!(
                correlation_id = %correlation_id,
                scale = input.scale,
                step = input.step,
                hours = %input.contracted_hours,
                total_compensation = %result.breakdown.total_compensation.round_dp(2),
                duration_us = result.audit_trace.duration_us,
                "Calculation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /scales.
async fn scales_handler(State(state): State<AppState>) -> Json<ScalesResponse> {
    Json(ScalesResponse {
        scales: state.config().salary_table().available_scales(),
    })
}

/// Handler for GET /scales/:scale/steps.
///
/// A scale segment that is not a `u32` answers 400 with the JSON error body.
async fn steps_handler(
    State(state): State<AppState>,
    path: Result<Path<u32>, PathRejection>,
) -> Result<Json<StepsResponse>, ApiErrorResponse> {
    let Path(scale) = path.map_err(|rejection| {
        warn!(error = %rejection.body_text(), "Path rejected");
        ApiErrorResponse {
            status: StatusCode::BAD_REQUEST,
            error: ApiError::malformed_path(rejection.body_text()),
        }
    })?;

    let steps = state
        .config()
        .salary_table()
        .available_steps(scale)
        .inspect_err(|err| warn!(scale, error = %err, "Steps lookup failed"))?;

    Ok(Json(StepsResponse { scale, steps }))
}

/// Handler for GET /agreement.
async fn agreement_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.config().agreement().clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use crate::models::CompensationResult;
    use axum::{body::Body, http::Request};
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        AppState::new(ConfigLoader::embedded().expect("Failed to load config"))
    }

    async fn send_get(uri: &str) -> (StatusCode, Vec<u8>) {
        let router = create_router(create_test_state());
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn test_compensation_returns_result() {
        let (status, body) = send_get("/compensation?scale=11&step=5&hours=36").await;
        assert_eq!(status, StatusCode::OK);

        let result: CompensationResult = serde_json::from_slice(&body).unwrap();
        assert_eq!(result.input.scale, 11);
        assert_eq!(result.input.step, 5);
        assert_eq!(result.breakdown.total_compensation.normalize().to_string(), "64992");
        assert!(result.audit_trace.warnings.is_empty());
    }

    #[tokio::test]
    async fn test_compensation_unknown_pair_falls_back() {
        let (status, body) = send_get("/compensation?scale=2&step=11").await;
        assert_eq!(status, StatusCode::OK);

        let result: CompensationResult = serde_json::from_slice(&body).unwrap();
        assert_eq!(result.input.scale, 11);
        assert_eq!(result.input.step, 5);
        assert!(result.audit_trace.has_warning(FALLBACK_WARNING_CODE));
    }

    #[tokio::test]
    async fn test_compensation_zero_hours_is_bad_request() {
        let (status, body) = send_get("/compensation?scale=11&step=5&hours=0").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "INVALID_HOURS");
    }

    #[tokio::test]
    async fn test_steps_unknown_scale_is_not_found() {
        let (status, body) = send_get("/scales/42/steps").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "SCALE_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_steps_non_numeric_scale_is_bad_request() {
        let (status, body) = send_get("/scales/abc/steps").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MALFORMED_PATH");
    }
}
