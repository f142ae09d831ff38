//! # Authentication and Identity Resolution
//!
//! This module validates the gateway's service bearer token and resolves
//! the current tenant and (optionally) the current user for a request.
//! Tenant resolution failure is fatal to the request; there is no default
//! tenant. The resolved identities travel as request extensions and are
//! picked up by the [`CurrentTenant`] / [`CurrentUser`] extractors.

use axum::{
    extract::{Request, State},
    http::{HeaderMap, StatusCode, header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use subtle::ConstantTimeEq;
use uuid::Uuid;

use crate::error::{ApiError, unauthorized, validation_error};
use crate::models::{tenant, user};
use crate::repositories::{TenantRepository, UserRepository};
use crate::server::AppState;

/// The tenant a request is scoped to
#[derive(Debug, Clone)]
pub struct CurrentTenant(pub tenant::Model);

/// The authenticated user, if any (None = anonymous)
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Option<user::Model>);

/// Authentication middleware: service token, then tenant, then user.
pub async fn auth_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let headers = request.headers().clone();

    let token = extract_bearer_token(&headers)?;
    validate_token(&state, token)?;

    let tenant_id = extract_tenant_id(&headers)?;
    let tenant = TenantRepository::new(&state.db)
        .get_tenant_by_id(tenant_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| {
            ApiError::new(StatusCode::NOT_FOUND, "NOT_FOUND", "Unknown tenant")
        })?;

    let user = match extract_user_id(&headers)? {
        Some(user_id) => {
            let user = UserRepository::new(&state.db)
                .get_in_tenant(tenant.id, user_id)
                .await
                .map_err(ApiError::from)?
                .ok_or_else(|| unauthorized(Some("Unknown user")))?;
            Some(user)
        }
        None => None,
    };

    tracing::debug!(
        tenant_id = %tenant.id,
        user_present = user.is_some(),
        "Resolved request identity"
    );

    let mut request = request;
    request.extensions_mut().insert(CurrentTenant(tenant));
    request.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(request).await)
}

fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, ApiError> {
    headers
        .get(AUTHORIZATION)
        .ok_or_else(|| unauthorized(Some("Missing Authorization header")))
        .and_then(|value| {
            value
                .to_str()
                .map_err(|_| unauthorized(Some("Invalid Authorization header")))
        })
        .and_then(|header| {
            header
                .strip_prefix("Bearer ")
                .ok_or_else(|| unauthorized(Some("Authorization header must use Bearer scheme")))
        })
}

fn validate_token(state: &AppState, token: &str) -> Result<(), ApiError> {
    let is_valid = state
        .config
        .api_tokens
        .iter()
        .any(|configured| ConstantTimeEq::ct_eq(token.as_bytes(), configured.as_bytes()).into());

    if is_valid {
        Ok(())
    } else {
        Err(unauthorized(Some("Invalid bearer token")))
    }
}

fn extract_tenant_id(headers: &HeaderMap) -> Result<Uuid, ApiError> {
    let header_value = headers
        .get("X-Tenant-Id")
        .ok_or_else(|| {
            validation_error(
                "Missing required header",
                serde_json::json!({ "X-Tenant-Id": "Required header is missing" }),
            )
        })?
        .to_str()
        .map_err(|_| {
            validation_error(
                "Invalid tenant header",
                serde_json::json!({ "X-Tenant-Id": "Header must be valid UTF-8" }),
            )
        })?;

    header_value.parse::<Uuid>().map_err(|_| {
        validation_error(
            "Invalid tenant ID",
            serde_json::json!({ "X-Tenant-Id": "Must be a valid UUID" }),
        )
    })
}

fn extract_user_id(headers: &HeaderMap) -> Result<Option<Uuid>, ApiError> {
    let Some(header_value) = headers.get("X-User-Id") else {
        return Ok(None);
    };

    let raw = header_value.to_str().map_err(|_| {
        validation_error(
            "Invalid user header",
            serde_json::json!({ "X-User-Id": "Header must be valid UTF-8" }),
        )
    })?;

    raw.parse::<Uuid>().map(Some).map_err(|_| {
        validation_error(
            "Invalid user ID",
            serde_json::json!({ "X-User-Id": "Must be a valid UUID" }),
        )
    })
}

impl<S> axum::extract::FromRequestParts<S> for CurrentTenant
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<CurrentTenant>().cloned().ok_or_else(|| {
            ApiError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_SERVER_ERROR",
                "Tenant context missing; is the auth middleware installed?",
            )
        })
    }
}

impl<S> axum::extract::FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<CurrentUser>().cloned().ok_or_else(|| {
            ApiError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_SERVER_ERROR",
                "User context missing; is the auth middleware installed?",
            )
        })
    }
}
