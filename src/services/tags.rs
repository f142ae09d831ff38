//! Tenant-scoped tag service and slug derivation.

use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::error::RepositoryError;
use crate::models::tag;
use crate::repositories::TagRepository;

use super::TagService;

static NON_SLUG_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("slug regex is valid"));

/// Derive a URL-safe slug from a human-readable name: lowercase, runs of
/// non-alphanumeric characters collapse to a single hyphen, leading and
/// trailing hyphens trimmed. No collision handling happens here; a
/// duplicate slug within a tenant is a storage-level conflict.
pub fn slugify(name: &str) -> String {
    let lowered = name.to_lowercase();
    NON_SLUG_CHARS
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

/// Production [`TagService`] backed by a tenant-bound repository.
pub struct TenantTags {
    repo: TagRepository,
}

impl TenantTags {
    pub fn new(db: DatabaseConnection, tenant_id: Uuid) -> Self {
        Self {
            repo: TagRepository::new(db, tenant_id),
        }
    }
}

#[async_trait]
impl TagService for TenantTags {
    async fn add(
        &self,
        name: &str,
        color: &str,
        is_public: bool,
    ) -> Result<tag::Model, RepositoryError> {
        let slug = slugify(name);
        let created = self.repo.add(name, &slug, color, is_public).await?;
        tracing::info!(tag_slug = %created.slug, "Tag created");
        Ok(created)
    }

    async fn update(
        &self,
        id: Uuid,
        name: &str,
        color: &str,
        is_public: bool,
    ) -> Result<tag::Model, RepositoryError> {
        let slug = slugify(name);
        self.repo.update(id, name, &slug, color, is_public).await
    }

    async fn remove(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.repo.remove(id).await?;
        tracing::info!(tag_id = %id, "Tag removed");
        Ok(())
    }

    async fn get_by_slug(&self, slug: &str) -> Result<tag::Model, RepositoryError> {
        self.repo
            .get_by_slug(slug)
            .await?
            .ok_or_else(|| RepositoryError::not_found(format!("Tag '{}' not found", slug)))
    }

    async fn list(&self) -> Result<Vec<tag::Model>, RepositoryError> {
        self.repo.list().await
    }

    async fn assign(
        &self,
        tag_id: Uuid,
        idea_id: Uuid,
        user_id: Uuid,
    ) -> Result<(), RepositoryError> {
        self.repo.assign(tag_id, idea_id, user_id).await
    }

    async fn unassign(&self, tag_id: Uuid, idea_id: Uuid) -> Result<(), RepositoryError> {
        self.repo.unassign(tag_id, idea_id).await
    }

    async fn get_assigned(&self, idea_id: Uuid) -> Result<Vec<tag::Model>, RepositoryError> {
        self.repo.get_assigned(idea_id).await
    }
}
