//! Liveness check that also reports how many tools are currently out

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::infrastructure::AppState;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    /// `ok`, or `unavailable` when storage cannot be read
    pub status: String,
    pub service: String,
    pub version: String,
    pub open_loans: Option<usize>,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service and storage are reachable", body = HealthReport),
        (status = 503, description = "Storage cannot be read", body = HealthReport)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthReport>) {
    let open_loans = match state.loan_repo.find_all_with_names().await {
        Ok(loans) => Some(loans.iter().filter(|l| l.return_date.is_none()).count()),
        Err(e) => {
            tracing::warn!("Health check could not read loans: {}", e);
            None
        }
    };

    let (code, status) = match open_loans {
        Some(_) => (StatusCode::OK, "ok"),
        None => (StatusCode::SERVICE_UNAVAILABLE, "unavailable"),
    };

    (
        code,
        Json(HealthReport {
            status: status.to_string(),
            service: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            open_loans,
        }),
    )
}
