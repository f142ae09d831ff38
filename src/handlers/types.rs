//! Response DTOs shared by the API handlers.

use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{comment, idea, tag};

/// Idea as returned by the API
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct IdeaResponse {
    /// Storage identity
    pub id: Uuid,
    /// Tenant-scoped sequential number
    pub number: i32,
    pub title: String,
    pub description: Option<String>,
    /// Lifecycle status code
    pub status: i32,
    /// Official response text, if one was set
    pub response: Option<String>,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

impl From<idea::Model> for IdeaResponse {
    fn from(model: idea::Model) -> Self {
        Self {
            id: model.id,
            number: model.number,
            title: model.title,
            description: model.description,
            status: model.status,
            response: model.response,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Comment as returned by the API
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CommentResponse {
    pub id: Uuid,
    pub idea_id: Uuid,
    pub content: String,
    pub created_by: Uuid,
    pub created_at: DateTime<FixedOffset>,
}

impl From<comment::Model> for CommentResponse {
    fn from(model: comment::Model) -> Self {
        Self {
            id: model.id,
            idea_id: model.idea_id,
            content: model.content,
            created_by: model.created_by,
            created_at: model.created_at,
        }
    }
}

/// Tag as returned by the API
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TagResponse {
    pub id: Uuid,
    pub name: String,
    /// URL-safe identifier, unique within the tenant
    pub slug: String,
    pub color: String,
    pub is_public: bool,
}

impl From<tag::Model> for TagResponse {
    fn from(model: tag::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            slug: model.slug,
            color: model.color,
            is_public: model.is_public,
        }
    }
}
