//! # Idea API Handlers
//!
//! Endpoints for submitting, listing, editing, commenting on, and
//! responding to ideas. Every write funnels through the action pipeline.

use axum::{
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
};

use crate::actions;
use crate::auth::{CurrentTenant, CurrentUser};
use crate::error::ApiError;
use crate::server::AppState;
use crate::services::Services;

use super::types::{CommentResponse, IdeaResponse};
use crate::actions::idea::{NewComment, NewIdea, SetResponseInput, UpdateIdeaInput};

/// Submit a new idea
#[utoipa::path(
    post,
    path = "/api/v1/ideas",
    security(("bearer_auth" = [])),
    request_body = NewIdea,
    responses(
        (status = 201, description = "Idea created", body = IdeaResponse),
        (status = 400, description = "Bind or validation failure", body = ApiError),
        (status = 401, description = "Authentication required", body = ApiError)
    ),
    tag = "ideas"
)]
pub async fn create_idea(
    State(state): State<AppState>,
    CurrentTenant(tenant): CurrentTenant,
    CurrentUser(user): CurrentUser,
    payload: Result<Json<NewIdea>, JsonRejection>,
) -> Result<(StatusCode, Json<IdeaResponse>), ApiError> {
    let Json(input) = payload?;
    let services = Services::for_tenant(state.db.clone(), tenant.id);

    let action = actions::CreateIdea { input };
    let idea = actions::run(&action, user.as_ref(), &services).await?;

    Ok((StatusCode::CREATED, Json(idea.into())))
}

/// List the tenant's ideas, newest first
#[utoipa::path(
    get,
    path = "/api/v1/ideas",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Ideas for the tenant", body = [IdeaResponse])
    ),
    tag = "ideas"
)]
pub async fn list_ideas(
    State(state): State<AppState>,
    CurrentTenant(tenant): CurrentTenant,
) -> Result<Json<Vec<IdeaResponse>>, ApiError> {
    let services = Services::for_tenant(state.db.clone(), tenant.id);
    let ideas = services.ideas.list().await?;

    Ok(Json(ideas.into_iter().map(IdeaResponse::from).collect()))
}

/// Get a single idea by its number
#[utoipa::path(
    get,
    path = "/api/v1/ideas/{number}",
    security(("bearer_auth" = [])),
    params(("number" = i32, Path, description = "Tenant-scoped idea number")),
    responses(
        (status = 200, description = "The idea", body = IdeaResponse),
        (status = 404, description = "No idea with that number", body = ApiError)
    ),
    tag = "ideas"
)]
pub async fn get_idea(
    State(state): State<AppState>,
    CurrentTenant(tenant): CurrentTenant,
    Path(number): Path<i32>,
) -> Result<Json<IdeaResponse>, ApiError> {
    let services = Services::for_tenant(state.db.clone(), tenant.id);
    let idea = services.ideas.get_by_number(number).await?;

    Ok(Json(idea.into()))
}

/// Edit an existing idea's title and description
#[utoipa::path(
    put,
    path = "/api/v1/ideas/{number}",
    security(("bearer_auth" = [])),
    params(("number" = i32, Path, description = "Tenant-scoped idea number")),
    request_body = UpdateIdeaInput,
    responses(
        (status = 200, description = "Idea updated", body = IdeaResponse),
        (status = 403, description = "Collaborator role required", body = ApiError),
        (status = 404, description = "No idea with that number", body = ApiError)
    ),
    tag = "ideas"
)]
pub async fn update_idea(
    State(state): State<AppState>,
    CurrentTenant(tenant): CurrentTenant,
    CurrentUser(user): CurrentUser,
    Path(number): Path<i32>,
    payload: Result<Json<UpdateIdeaInput>, JsonRejection>,
) -> Result<Json<IdeaResponse>, ApiError> {
    let Json(input) = payload?;
    let services = Services::for_tenant(state.db.clone(), tenant.id);

    let action = actions::UpdateIdea { number, input };
    let idea = actions::run(&action, user.as_ref(), &services).await?;

    Ok(Json(idea.into()))
}

/// Set an idea's status and official response
#[utoipa::path(
    put,
    path = "/api/v1/ideas/{number}/status",
    security(("bearer_auth" = [])),
    params(("number" = i32, Path, description = "Tenant-scoped idea number")),
    request_body = SetResponseInput,
    responses(
        (status = 200, description = "Response set", body = IdeaResponse),
        (status = 400, description = "Validation failure", body = ApiError),
        (status = 403, description = "Collaborator role required", body = ApiError)
    ),
    tag = "ideas"
)]
pub async fn set_response(
    State(state): State<AppState>,
    CurrentTenant(tenant): CurrentTenant,
    CurrentUser(user): CurrentUser,
    Path(number): Path<i32>,
    payload: Result<Json<SetResponseInput>, JsonRejection>,
) -> Result<Json<IdeaResponse>, ApiError> {
    let Json(input) = payload?;
    let services = Services::for_tenant(state.db.clone(), tenant.id);

    let action = actions::SetResponse { number, input };
    let idea = actions::run(&action, user.as_ref(), &services).await?;

    Ok(Json(idea.into()))
}

/// Comment on an idea
#[utoipa::path(
    post,
    path = "/api/v1/ideas/{number}/comments",
    security(("bearer_auth" = [])),
    params(("number" = i32, Path, description = "Tenant-scoped idea number")),
    request_body = NewComment,
    responses(
        (status = 201, description = "Comment added", body = CommentResponse),
        (status = 400, description = "Validation failure", body = ApiError),
        (status = 404, description = "No idea with that number", body = ApiError)
    ),
    tag = "ideas"
)]
pub async fn add_comment(
    State(state): State<AppState>,
    CurrentTenant(tenant): CurrentTenant,
    CurrentUser(user): CurrentUser,
    Path(number): Path<i32>,
    payload: Result<Json<NewComment>, JsonRejection>,
) -> Result<(StatusCode, Json<CommentResponse>), ApiError> {
    let Json(input) = payload?;
    let services = Services::for_tenant(state.db.clone(), tenant.id);

    let action = actions::AddComment { number, input };
    let comment = actions::run(&action, user.as_ref(), &services).await?;

    Ok((StatusCode::CREATED, Json(comment.into())))
}

/// List an idea's comments in conversation order
#[utoipa::path(
    get,
    path = "/api/v1/ideas/{number}/comments",
    security(("bearer_auth" = [])),
    params(("number" = i32, Path, description = "Tenant-scoped idea number")),
    responses(
        (status = 200, description = "Comments for the idea", body = [CommentResponse]),
        (status = 404, description = "No idea with that number", body = ApiError)
    ),
    tag = "ideas"
)]
pub async fn list_comments(
    State(state): State<AppState>,
    CurrentTenant(tenant): CurrentTenant,
    Path(number): Path<i32>,
) -> Result<Json<Vec<CommentResponse>>, ApiError> {
    let services = Services::for_tenant(state.db.clone(), tenant.id);
    let idea = services.ideas.get_by_number(number).await?;
    let comments = services.comments.for_idea(idea.id).await?;

    Ok(Json(comments.into_iter().map(CommentResponse::from).collect()))
}
