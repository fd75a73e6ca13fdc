//! Member API handlers

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
use crate::models::member::{CreateMemberRequest, Member, UpdateMemberRequest};
use crate::services::member_service;

#[utoipa::path(
    get,
    path = "/members",
    responses((status = 200, body = [Member]))
)]
pub async fn list_members(State(state): State<AppState>) -> ApiResult<Json<Vec<Member>>> {
    let members = member_service::list_members(state.member_repo.as_ref()).await?;
    Ok(Json(members))
}

#[utoipa::path(
    get,
    path = "/members/{id}",
    params(("id" = i32, Path, description = "Member id")),
    responses(
        (status = 200, body = Member),
        (status = 404, description = "Member not found")
    )
)]
pub async fn get_member(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> ApiResult<Json<Member>> {
    let Path(id) = path?;
    let member = member_service::get_member(state.member_repo.as_ref(), id).await?;
    Ok(Json(member))
}

#[utoipa::path(
    post,
    path = "/members",
    request_body = CreateMemberRequest,
    responses(
        (status = 201, body = Member),
        (status = 400, description = "Invalid fields or duplicate document")
    )
)]
pub async fn create_member(
    State(state): State<AppState>,
    payload: Result<Json<CreateMemberRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Member>)> {
    let Json(payload) = payload?;
    let member =
        member_service::create_member(state.member_repo.as_ref(), payload.validate()?).await?;
    Ok((StatusCode::CREATED, Json(member)))
}

#[utoipa::path(
    put,
    path = "/members/{id}",
    params(("id" = i32, Path, description = "Member id")),
    request_body = UpdateMemberRequest,
    responses(
        (status = 200, body = Member),
        (status = 400, description = "Invalid fields or duplicate document"),
        (status = 404, description = "Member not found")
    )
)]
pub async fn update_member(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateMemberRequest>, JsonRejection>,
) -> ApiResult<Json<Member>> {
    let Path(id) = path?;
    let Json(payload) = payload?;
    let member =
        member_service::update_member(state.member_repo.as_ref(), id, payload.validate()?)
            .await?;
    Ok(Json(member))
}

#[utoipa::path(
    delete,
    path = "/members/{id}",
    params(("id" = i32, Path, description = "Member id")),
    responses(
        (status = 204, description = "Member deleted"),
        (status = 404, description = "Member not found"),
        (status = 409, description = "Member has an active loan")
    )
)]
pub async fn delete_member(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path(id) = path?;
    member_service::delete_member(state.member_repo.as_ref(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
