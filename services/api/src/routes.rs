use crate::infra::{deserialize_optional_date, AppState};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::{Local, NaiveDate};
use pacing_desk::error::AppError;
use pacing_desk::workflows::allocation::{
    AllocationCalculator, AllocationInput, AllocationResult, HourlyAllocationTable, ReportBundle,
    ReportContext,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

#[derive(Debug, Deserialize)]
pub(crate) struct AllocationReportRequest {
    pub(crate) input: AllocationInput,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub(crate) report_date: Option<NaiveDate>,
    #[serde(default)]
    pub(crate) include_hourly: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct AllocationReportResponse {
    pub(crate) report_date: NaiveDate,
    pub(crate) result: AllocationResult,
    pub(crate) reports: ReportBundle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) hourly: Option<HourlyAllocationTable>,
}

impl AllocationReportResponse {
    pub(crate) fn build(
        calculator: &AllocationCalculator,
        input: &AllocationInput,
        report_date: NaiveDate,
        include_hourly: bool,
    ) -> Result<Self, AppError> {
        let result = calculator.compute(input)?;
        let context = ReportContext::new(report_date, input);
        let reports = ReportBundle::build(&result, &context);
        let hourly = if include_hourly {
            Some(HourlyAllocationTable::build(
                &result,
                input.start_resource_morning,
                input.active_member_count,
            )?)
        } else {
            None
        };

        Ok(Self {
            report_date,
            result,
            reports,
            hourly,
        })
    }
}

pub(crate) fn router() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/allocation/report", post(allocation_report_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn allocation_report_endpoint(
    Extension(calculator): Extension<AllocationCalculator>,
    Json(payload): Json<AllocationReportRequest>,
) -> Result<Json<AllocationReportResponse>, AppError> {
    let AllocationReportRequest {
        input,
        report_date,
        include_hourly,
    } = payload;

    let report_date = report_date.unwrap_or_else(|| Local::now().date_naive());
    let response =
        AllocationReportResponse::build(&calculator, &input, report_date, include_hourly)?;
    info!(
        %report_date,
        target_18 = response.result.target_18,
        estimate_18 = response.result.estimate_18,
        "allocation report served"
    );

    Ok(Json(response))
}
