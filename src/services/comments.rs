//! Tenant-scoped comment service.

use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::error::RepositoryError;
use crate::models::comment;
use crate::repositories::{CommentRepository, IdeaRepository};

use super::CommentService;

/// Production [`CommentService`] backed by tenant-bound repositories.
pub struct TenantComments {
    comments: CommentRepository,
    ideas: IdeaRepository,
}

impl TenantComments {
    pub fn new(db: DatabaseConnection, tenant_id: Uuid) -> Self {
        Self {
            comments: CommentRepository::new(db.clone(), tenant_id),
            ideas: IdeaRepository::new(db, tenant_id),
        }
    }
}

#[async_trait]
impl CommentService for TenantComments {
    async fn add(
        &self,
        idea_number: i32,
        content: &str,
        user_id: Uuid,
    ) -> Result<comment::Model, RepositoryError> {
        let idea = self
            .ideas
            .get_by_number(idea_number)
            .await?
            .ok_or_else(|| {
                RepositoryError::not_found(format!("Idea #{} not found", idea_number))
            })?;

        self.comments.add(idea.id, content, user_id).await
    }

    async fn for_idea(&self, idea_id: Uuid) -> Result<Vec<comment::Model>, RepositoryError> {
        self.comments.for_idea(idea_id).await
    }
}
