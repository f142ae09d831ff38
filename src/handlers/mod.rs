//! # API Handlers
//!
//! This module contains all the HTTP endpoint handlers for the Ideaboard
//! API. Handlers are deliberately thin: bind the payload, resolve
//! path-referenced entities, hand the action to the pipeline, map the
//! output to a response DTO.

use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::json;

use crate::db;
use crate::error::ApiError;
use crate::models::ServiceInfo;
use crate::server::AppState;

pub mod ideas;
pub mod tags;
pub mod types;

/// Root handler that returns basic service information
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service information", body = ServiceInfo)
    ),
    tag = "root"
)]
pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo::default())
}

/// Health handler that verifies database connectivity
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy"),
        (status = 503, description = "Database unavailable", body = ApiError)
    ),
    tag = "root"
)]
pub async fn health(State(state): State<AppState>) -> Result<Json<serde_json::Value>, ApiError> {
    db::health_check(&state.db).await.map_err(|err| {
        tracing::warn!("Health check failed: {:?}", err);
        ApiError::new(
            StatusCode::SERVICE_UNAVAILABLE,
            "SERVICE_UNAVAILABLE",
            "Database unavailable",
        )
    })?;

    Ok(Json(json!({ "status": "ok" })))
}

#[cfg(test)]
mod tests;
