//! Loan API handlers

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};

use super::error::ApiResult;
use crate::infrastructure::AppState;
use crate::models::loan::{CreateLoanRequest, Loan, LoanDetails, UpdateLoanRequest};
use crate::models::optional_text;
use crate::services::loan_service;

#[utoipa::path(
    get,
    path = "/loans",
    responses((status = 200, description = "Loans with tool and member names", body = [LoanDetails]))
)]
pub async fn list_loans(State(state): State<AppState>) -> ApiResult<Json<Vec<LoanDetails>>> {
    let loans = loan_service::list_loans(state.loan_repo.as_ref()).await?;
    Ok(Json(loans))
}

#[utoipa::path(
    get,
    path = "/loans/{id}",
    params(("id" = i32, Path, description = "Loan id")),
    responses(
        (status = 200, body = Loan),
        (status = 404, description = "Loan not found")
    )
)]
pub async fn get_loan(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> ApiResult<Json<Loan>> {
    let Path(id) = path?;
    let loan = loan_service::get_loan(state.loan_repo.as_ref(), id).await?;
    Ok(Json(loan))
}

#[utoipa::path(
    post,
    path = "/loans",
    request_body = CreateLoanRequest,
    responses(
        (status = 201, description = "Loan opened today", body = Loan),
        (status = 400, description = "toolId or memberId missing"),
        (status = 500, description = "Unknown tool or member, or storage failure")
    )
)]
pub async fn create_loan(
    State(state): State<AppState>,
    payload: Result<Json<CreateLoanRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Loan>)> {
    let Json(payload) = payload?;
    let loan = loan_service::create_loan(state.loan_repo.as_ref(), payload.validate()?).await?;
    Ok((StatusCode::CREATED, Json(loan)))
}

#[utoipa::path(
    put,
    path = "/loans/{id}",
    params(("id" = i32, Path, description = "Loan id")),
    request_body = UpdateLoanRequest,
    responses(
        (status = 200, body = Loan),
        (status = 404, description = "Loan not found")
    )
)]
pub async fn update_loan(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateLoanRequest>, JsonRejection>,
) -> ApiResult<Json<Loan>> {
    let Path(id) = path?;
    let Json(payload) = payload?;
    let loan = loan_service::update_observations(
        state.loan_repo.as_ref(),
        id,
        optional_text(payload.observations),
    )
    .await?;
    Ok(Json(loan))
}

#[utoipa::path(
    put,
    path = "/loans/{id}/return",
    params(("id" = i32, Path, description = "Loan id")),
    responses(
        (status = 200, description = "Return date set to today", body = Loan),
        (status = 404, description = "Loan not found")
    )
)]
pub async fn return_loan(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> ApiResult<Json<Loan>> {
    let Path(id) = path?;
    let loan = loan_service::mark_returned(state.loan_repo.as_ref(), id).await?;
    Ok(Json(loan))
}

#[utoipa::path(
    delete,
    path = "/loans/{id}",
    params(("id" = i32, Path, description = "Loan id")),
    responses(
        (status = 204, description = "Loan deleted"),
        (status = 404, description = "Loan not found")
    )
)]
pub async fn delete_loan(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path(id) = path?;
    loan_service::delete_loan(state.loan_repo.as_ref(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
