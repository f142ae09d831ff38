//! # Domain Services
//!
//! Tenant-scoped facades over the storage layer. The action pipeline only
//! ever talks to the [`IdeaService`] / [`TagService`] / [`CommentService`]
//! traits, so tests can substitute recording doubles for the production
//! implementations.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::error::RepositoryError;
use crate::models::{comment, idea, tag};

pub mod comments;
pub mod ideas;
pub mod tags;

pub use comments::TenantComments;
pub use ideas::TenantIdeas;
pub use tags::TenantTags;

/// Idea operations available to actions and handlers.
#[async_trait]
pub trait IdeaService: Send + Sync {
    /// Submit a new idea, assigning the next tenant-scoped number.
    async fn add(
        &self,
        title: &str,
        description: Option<&str>,
        user_id: Uuid,
    ) -> Result<idea::Model, RepositoryError>;

    /// Look up an idea by its tenant-scoped number; NotFound if absent.
    async fn get_by_number(&self, number: i32) -> Result<idea::Model, RepositoryError>;

    /// List the tenant's ideas, newest first.
    async fn list(&self) -> Result<Vec<idea::Model>, RepositoryError>;

    /// Update title and description of an existing idea.
    async fn update(
        &self,
        number: i32,
        title: &str,
        description: Option<&str>,
    ) -> Result<idea::Model, RepositoryError>;

    /// Set the official status and response text for an idea.
    async fn set_response(
        &self,
        number: i32,
        status: i32,
        text: &str,
        user_id: Uuid,
    ) -> Result<idea::Model, RepositoryError>;
}

/// Tag operations available to actions and handlers.
#[async_trait]
pub trait TagService: Send + Sync {
    /// Create a tag, deriving its slug from the name.
    async fn add(
        &self,
        name: &str,
        color: &str,
        is_public: bool,
    ) -> Result<tag::Model, RepositoryError>;

    /// Update a tag, re-deriving its slug from the new name.
    async fn update(
        &self,
        id: Uuid,
        name: &str,
        color: &str,
        is_public: bool,
    ) -> Result<tag::Model, RepositoryError>;

    /// Delete a tag and cascade removal of its assignments.
    async fn remove(&self, id: Uuid) -> Result<(), RepositoryError>;

    /// Look up a tag by slug; NotFound if absent.
    async fn get_by_slug(&self, slug: &str) -> Result<tag::Model, RepositoryError>;

    /// List the tenant's tags ordered by name.
    async fn list(&self) -> Result<Vec<tag::Model>, RepositoryError>;

    /// Assign a tag to an idea (idempotent).
    async fn assign(&self, tag_id: Uuid, idea_id: Uuid, user_id: Uuid)
    -> Result<(), RepositoryError>;

    /// Unassign a tag from an idea (idempotent).
    async fn unassign(&self, tag_id: Uuid, idea_id: Uuid) -> Result<(), RepositoryError>;

    /// Tags assigned to an idea, most recently assigned first.
    async fn get_assigned(&self, idea_id: Uuid) -> Result<Vec<tag::Model>, RepositoryError>;
}

/// Comment operations available to actions and handlers.
#[async_trait]
pub trait CommentService: Send + Sync {
    /// Append a comment to the idea with the given number.
    async fn add(
        &self,
        idea_number: i32,
        content: &str,
        user_id: Uuid,
    ) -> Result<comment::Model, RepositoryError>;

    /// An idea's comments in conversation order.
    async fn for_idea(&self, idea_id: Uuid) -> Result<Vec<comment::Model>, RepositoryError>;
}

/// Per-request facade bundling the tenant-scoped services.
#[derive(Clone)]
pub struct Services {
    pub ideas: Arc<dyn IdeaService>,
    pub tags: Arc<dyn TagService>,
    pub comments: Arc<dyn CommentService>,
}

impl Services {
    /// Wire the production services over repositories bound to `tenant_id`.
    pub fn for_tenant(db: DatabaseConnection, tenant_id: Uuid) -> Self {
        Self {
            ideas: Arc::new(TenantIdeas::new(db.clone(), tenant_id)),
            tags: Arc::new(TenantTags::new(db.clone(), tenant_id)),
            comments: Arc::new(TenantComments::new(db, tenant_id)),
        }
    }
}
