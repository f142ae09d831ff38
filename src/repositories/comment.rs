//! # Comment Repository
//!
//! Tenant-bound repository for Comment entities. Comments are append-only.

use crate::error::RepositoryError;
use crate::models::comment::{self, Entity as Comment, Model as CommentModel};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

/// Repository for Comment database operations, bound to one tenant
#[derive(Debug, Clone)]
pub struct CommentRepository {
    db: DatabaseConnection,
    tenant_id: Uuid,
}

impl CommentRepository {
    /// Create a new CommentRepository bound to the given tenant
    pub fn new(db: DatabaseConnection, tenant_id: Uuid) -> Self {
        Self { db, tenant_id }
    }

    /// Append a comment to an idea. The idea ID must come from a
    /// tenant-scoped lookup.
    pub async fn add(
        &self,
        idea_id: Uuid,
        content: &str,
        user_id: Uuid,
    ) -> Result<CommentModel, RepositoryError> {
        let model = comment::ActiveModel {
            id: Set(Uuid::new_v4()),
            tenant_id: Set(self.tenant_id),
            idea_id: Set(idea_id),
            content: Set(content.to_string()),
            created_by: Set(user_id),
            created_at: Set(Utc::now().into()),
        };

        model
            .insert(&self.db)
            .await
            .map_err(RepositoryError::database_error)
    }

    /// List an idea's comments in conversation order (oldest first)
    pub async fn for_idea(&self, idea_id: Uuid) -> Result<Vec<CommentModel>, RepositoryError> {
        Comment::find()
            .filter(comment::Column::TenantId.eq(self.tenant_id))
            .filter(comment::Column::IdeaId.eq(idea_id))
            .order_by_asc(comment::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(RepositoryError::database_error)
    }
}
