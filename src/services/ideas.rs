//! Tenant-scoped idea service.

use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::error::RepositoryError;
use crate::models::idea;
use crate::repositories::IdeaRepository;

use super::IdeaService;

/// Production [`IdeaService`] backed by a tenant-bound repository.
pub struct TenantIdeas {
    repo: IdeaRepository,
}

impl TenantIdeas {
    pub fn new(db: DatabaseConnection, tenant_id: Uuid) -> Self {
        Self {
            repo: IdeaRepository::new(db, tenant_id),
        }
    }
}

#[async_trait]
impl IdeaService for TenantIdeas {
    async fn add(
        &self,
        title: &str,
        description: Option<&str>,
        user_id: Uuid,
    ) -> Result<idea::Model, RepositoryError> {
        let created = self.repo.add(title, description, user_id).await?;
        tracing::info!(idea_number = created.number, "Idea created");
        Ok(created)
    }

    async fn get_by_number(&self, number: i32) -> Result<idea::Model, RepositoryError> {
        self.repo
            .get_by_number(number)
            .await?
            .ok_or_else(|| RepositoryError::not_found(format!("Idea #{} not found", number)))
    }

    async fn list(&self) -> Result<Vec<idea::Model>, RepositoryError> {
        self.repo.list().await
    }

    async fn update(
        &self,
        number: i32,
        title: &str,
        description: Option<&str>,
    ) -> Result<idea::Model, RepositoryError> {
        self.repo.update(number, title, description).await
    }

    async fn set_response(
        &self,
        number: i32,
        status: i32,
        text: &str,
        user_id: Uuid,
    ) -> Result<idea::Model, RepositoryError> {
        let updated = self.repo.set_response(number, status, text, user_id).await?;
        tracing::info!(idea_number = number, status, "Idea response set");
        Ok(updated)
    }
}
