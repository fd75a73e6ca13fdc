//! Tool API handlers

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
use crate::models::tool::{CreateToolRequest, Tool, UpdateToolRequest};
use crate::services::tool_service;

#[utoipa::path(
    get,
    path = "/tools",
    responses((status = 200, description = "All tools ordered by id", body = [Tool]))
)]
pub async fn list_tools(State(state): State<AppState>) -> ApiResult<Json<Vec<Tool>>> {
    let tools = tool_service::list_tools(state.tool_repo.as_ref()).await?;
    Ok(Json(tools))
}

#[utoipa::path(
    get,
    path = "/tools/{id}",
    params(("id" = i32, Path, description = "Tool id")),
    responses(
        (status = 200, body = Tool),
        (status = 404, description = "Tool not found")
    )
)]
pub async fn get_tool(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> ApiResult<Json<Tool>> {
    let Path(id) = path?;
    let tool = tool_service::get_tool(state.tool_repo.as_ref(), id).await?;
    Ok(Json(tool))
}

#[utoipa::path(
    post,
    path = "/tools",
    request_body = CreateToolRequest,
    responses(
        (status = 201, body = Tool),
        (status = 400, description = "Missing or invalid fields")
    )
)]
pub async fn create_tool(
    State(state): State<AppState>,
    payload: Result<Json<CreateToolRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Tool>)> {
    let Json(payload) = payload?;
    let tool = tool_service::create_tool(state.tool_repo.as_ref(), payload.validate()?).await?;
    Ok((StatusCode::CREATED, Json(tool)))
}

#[utoipa::path(
    put,
    path = "/tools/{id}",
    params(("id" = i32, Path, description = "Tool id")),
    request_body = UpdateToolRequest,
    responses(
        (status = 200, body = Tool),
        (status = 400, description = "Invalid fields"),
        (status = 404, description = "Tool not found")
    )
)]
pub async fn update_tool(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateToolRequest>, JsonRejection>,
) -> ApiResult<Json<Tool>> {
    let Path(id) = path?;
    let Json(payload) = payload?;
    let tool = tool_service::update_tool(state.tool_repo.as_ref(), id, payload.validate()?).await?;
    Ok(Json(tool))
}

#[utoipa::path(
    delete,
    path = "/tools/{id}",
    params(("id" = i32, Path, description = "Tool id")),
    responses(
        (status = 204, description = "Tool deleted"),
        (status = 404, description = "Tool not found"),
        (status = 409, description = "Tool has an active loan")
    )
)]
pub async fn delete_tool(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path(id) = path?;
    tool_service::delete_tool(state.tool_repo.as_ref(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
