//! HTTP request handlers for the Payroll Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{PayrollInput, calculate_payroll, compute_hours_breakdown, compute_taxes};
use crate::error::EngineError;

use super::request::{HoursRequest, PayrollRequest, TaxRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/payroll/calculate", post(calculate_handler))
        .route("/payroll/hours", post(hours_handler))
        .route("/payroll/taxes", post(taxes_handler))
        .with_state(state)
}

/// Handler for POST /payroll/calculate.
///
/// Runs payroll for one worker and pay period and returns the full result.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let input: PayrollInput = request.into();
    let start_time = Instant::now();

    match calculate_payroll(&input, state.config()) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                worker_id = %input.worker.id,
                gross_pay = %result.gross_pay,
                net_pay = %result.net_pay,
                duration_us = start_time.elapsed().as_micros(),
                "Payroll calculated successfully"
            );
            json_response(StatusCode::OK, &result)
        }
        Err(err) => engine_error_response(err, correlation_id),
    }
}

/// Handler for POST /payroll/hours.
async fn hours_handler(payload: Result<Json<HoursRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    match compute_hours_breakdown(request.total_hours, 1) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                total_hours = %request.total_hours,
                "Hours tiered"
            );
            json_response(StatusCode::OK, &result.breakdown)
        }
        Err(err) => engine_error_response(err, correlation_id),
    }
}

/// Handler for POST /payroll/taxes.
///
/// Applies the tax table effective on the request's pay date.
async fn taxes_handler(
    State(state): State<AppState>,
    payload: Result<Json<TaxRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let result = state
        .config()
        .get_tax_config(request.pay_date)
        .and_then(|tax_config| {
            compute_taxes(request.gross_pay, request.ytd_gross, tax_config, 1)
        });

    match result {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                gross_pay = %request.gross_pay,
                total_withholding = %result.breakdown.total(),
                "Taxes computed"
            );
            json_response(StatusCode::OK, &result.breakdown)
        }
        Err(err) => engine_error_response(err, correlation_id),
    }
}

fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn engine_error_response(err: EngineError, correlation_id: Uuid) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Calculation failed"
    );
    let api_error: ApiErrorResponse = err.into();
    json_response(api_error.status, &api_error.error)
}

fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
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

    json_response(StatusCode::BAD_REQUEST, &error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use axum::{body::Body, http::Request};
    use rust_decimal::Decimal;
    use serde_json::{Value, json};
    use std::str::FromStr;
    use tower::ServiceExt;

    fn create_test_router() -> Router {
        let config = ConfigLoader::load("./config/us_default").unwrap();
        create_router(AppState::new(config))
    }

    async fn post_json(uri: &str, body: String) -> (StatusCode, Value) {
        let response = create_test_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn dec_field(value: &Value, field: &str) -> Decimal {
        Decimal::from_str(value[field].as_str().unwrap()).unwrap()
    }

    #[tokio::test]
    async fn test_calculate_returns_200() {
        let body = json!({
            "worker": { "id": "wkr_001", "hourly_rate": "20" },
            "pay_period": {
                "start_date": "2023-06-05",
                "end_date": "2023-06-11",
                "pay_date": "2023-06-16"
            },
            "total_hours": "50"
        });

        let (status, json) = post_json("/payroll/calculate", body.to_string()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(dec_field(&json, "gross_pay"), Decimal::from(1100));
        assert_eq!(json["worker_id"], "wkr_001");
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let (status, json) = post_json("/payroll/calculate", "{ not json".to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_field_returns_validation_error() {
        let (status, json) = post_json("/payroll/hours", "{}".to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_hours_endpoint() {
        let body = json!({ "total_hours": "45.125" });
        let (status, json) = post_json("/payroll/hours", body.to_string()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(dec_field(&json, "overtime_hours"), Decimal::from_str("5.13").unwrap());
    }

    #[tokio::test]
    async fn test_taxes_endpoint_negative_gross_returns_400() {
        let body = json!({ "gross_pay": "-5", "ytd_gross": "0", "pay_date": "2023-06-16" });
        let (status, json) = post_json("/payroll/taxes", body.to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "VALIDATION_ERROR");
    }
}
