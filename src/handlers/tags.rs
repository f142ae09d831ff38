//! # Tag API Handlers
//!
//! Endpoints for managing tags and their assignment to ideas. The tag
//! named by the slug path parameter (and, for assignment, the idea named
//! by its number) is resolved during binding; the action pipeline then
//! authorizes and validates before any write happens.

use axum::{
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
};
use serde_json::json;

use crate::actions;
use crate::auth::{CurrentTenant, CurrentUser};
use crate::error::ApiError;
use crate::server::AppState;
use crate::services::Services;

use super::types::TagResponse;
use crate::actions::tag::TagInput;

/// List the tenant's tags
#[utoipa::path(
    get,
    path = "/api/v1/tags",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Tags for the tenant", body = [TagResponse])
    ),
    tag = "tags"
)]
pub async fn list_tags(
    State(state): State<AppState>,
    CurrentTenant(tenant): CurrentTenant,
) -> Result<Json<Vec<TagResponse>>, ApiError> {
    let services = Services::for_tenant(state.db.clone(), tenant.id);
    let tags = services.tags.list().await?;

    Ok(Json(tags.into_iter().map(TagResponse::from).collect()))
}

/// Create a new tag
#[utoipa::path(
    post,
    path = "/api/v1/tags",
    security(("bearer_auth" = [])),
    request_body = TagInput,
    responses(
        (status = 201, description = "Tag created", body = TagResponse),
        (status = 400, description = "Validation failure", body = ApiError),
        (status = 403, description = "Collaborator role required", body = ApiError),
        (status = 409, description = "A tag with the same slug exists", body = ApiError)
    ),
    tag = "tags"
)]
pub async fn create_tag(
    State(state): State<AppState>,
    CurrentTenant(tenant): CurrentTenant,
    CurrentUser(user): CurrentUser,
    payload: Result<Json<TagInput>, JsonRejection>,
) -> Result<(StatusCode, Json<TagResponse>), ApiError> {
    let Json(input) = payload?;
    let services = Services::for_tenant(state.db.clone(), tenant.id);

    let action = actions::CreateEditTag {
        existing: None,
        input,
    };
    let tag = actions::run(&action, user.as_ref(), &services).await?;

    Ok((StatusCode::CREATED, Json(tag.into())))
}

/// Edit an existing tag
#[utoipa::path(
    put,
    path = "/api/v1/tags/{slug}",
    security(("bearer_auth" = [])),
    params(("slug" = String, Path, description = "Tag slug")),
    request_body = TagInput,
    responses(
        (status = 200, description = "Tag updated", body = TagResponse),
        (status = 404, description = "No tag with that slug", body = ApiError),
        (status = 409, description = "A tag with the same slug exists", body = ApiError)
    ),
    tag = "tags"
)]
pub async fn update_tag(
    State(state): State<AppState>,
    CurrentTenant(tenant): CurrentTenant,
    CurrentUser(user): CurrentUser,
    Path(slug): Path<String>,
    payload: Result<Json<TagInput>, JsonRejection>,
) -> Result<Json<TagResponse>, ApiError> {
    let Json(input) = payload?;
    let services = Services::for_tenant(state.db.clone(), tenant.id);
    let existing = services.tags.get_by_slug(&slug).await?;

    let action = actions::CreateEditTag {
        existing: Some(existing),
        input,
    };
    let tag = actions::run(&action, user.as_ref(), &services).await?;

    Ok(Json(tag.into()))
}

/// Delete a tag and all of its assignments
#[utoipa::path(
    delete,
    path = "/api/v1/tags/{slug}",
    security(("bearer_auth" = [])),
    params(("slug" = String, Path, description = "Tag slug")),
    responses(
        (status = 200, description = "Tag removed"),
        (status = 403, description = "Collaborator role required", body = ApiError),
        (status = 404, description = "No tag with that slug", body = ApiError)
    ),
    tag = "tags"
)]
pub async fn delete_tag(
    State(state): State<AppState>,
    CurrentTenant(tenant): CurrentTenant,
    CurrentUser(user): CurrentUser,
    Path(slug): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let services = Services::for_tenant(state.db.clone(), tenant.id);
    let tag = services.tags.get_by_slug(&slug).await?;

    let action = actions::RemoveTag { tag };
    actions::run(&action, user.as_ref(), &services).await?;

    Ok(Json(json!({})))
}

/// Tags assigned to an idea, most recently assigned first
#[utoipa::path(
    get,
    path = "/api/v1/ideas/{number}/tags",
    security(("bearer_auth" = [])),
    params(("number" = i32, Path, description = "Tenant-scoped idea number")),
    responses(
        (status = 200, description = "Assigned tags", body = [TagResponse]),
        (status = 404, description = "No idea with that number", body = ApiError)
    ),
    tag = "tags"
)]
pub async fn list_idea_tags(
    State(state): State<AppState>,
    CurrentTenant(tenant): CurrentTenant,
    Path(number): Path<i32>,
) -> Result<Json<Vec<TagResponse>>, ApiError> {
    let services = Services::for_tenant(state.db.clone(), tenant.id);
    let idea = services.ideas.get_by_number(number).await?;
    let tags = services.tags.get_assigned(idea.id).await?;

    Ok(Json(tags.into_iter().map(TagResponse::from).collect()))
}

/// Assign a tag to an idea (idempotent)
#[utoipa::path(
    post,
    path = "/api/v1/ideas/{number}/tags/{slug}",
    security(("bearer_auth" = [])),
    params(
        ("number" = i32, Path, description = "Tenant-scoped idea number"),
        ("slug" = String, Path, description = "Tag slug")
    ),
    responses(
        (status = 200, description = "Tag assigned"),
        (status = 403, description = "Collaborator role required", body = ApiError),
        (status = 404, description = "Idea or tag not found", body = ApiError)
    ),
    tag = "tags"
)]
pub async fn assign_tag(
    State(state): State<AppState>,
    CurrentTenant(tenant): CurrentTenant,
    CurrentUser(user): CurrentUser,
    Path((number, slug)): Path<(i32, String)>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let services = Services::for_tenant(state.db.clone(), tenant.id);
    let tag = services.tags.get_by_slug(&slug).await?;
    let idea = services.ideas.get_by_number(number).await?;

    let action = actions::AssignTag { tag, idea };
    actions::run(&action, user.as_ref(), &services).await?;

    Ok(Json(json!({})))
}

/// Unassign a tag from an idea (idempotent)
#[utoipa::path(
    delete,
    path = "/api/v1/ideas/{number}/tags/{slug}",
    security(("bearer_auth" = [])),
    params(
        ("number" = i32, Path, description = "Tenant-scoped idea number"),
        ("slug" = String, Path, description = "Tag slug")
    ),
    responses(
        (status = 200, description = "Tag unassigned"),
        (status = 403, description = "Collaborator role required", body = ApiError),
        (status = 404, description = "Idea or tag not found", body = ApiError)
    ),
    tag = "tags"
)]
pub async fn unassign_tag(
    State(state): State<AppState>,
    CurrentTenant(tenant): CurrentTenant,
    CurrentUser(user): CurrentUser,
    Path((number, slug)): Path<(i32, String)>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let services = Services::for_tenant(state.db.clone(), tenant.id);
    let tag = services.tags.get_by_slug(&slug).await?;
    let idea = services.ideas.get_by_number(number).await?;

    let action = actions::UnassignTag { tag, idea };
    actions::run(&action, user.as_ref(), &services).await?;

    Ok(Json(json!({})))
}
