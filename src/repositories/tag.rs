//! # Tag Repository
//!
//! Tenant-bound repository for Tag entities and their idea assignments.
//!
//! Slug uniqueness is enforced by the (tenant_id, slug) unique index, not
//! by an application-level pre-check; a collision surfaces as
//! [`RepositoryError::Conflict`]. Assignment idempotence rides on the
//! store's conflict clause (insert) and on delete-if-present (unassign),
//! so concurrent calls never race through a read-then-write window.

use crate::error::RepositoryError;
use crate::models::idea_tag::{self, Entity as IdeaTag};
use crate::models::tag::{self, Entity as Tag, Model as TagModel};
use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use uuid::Uuid;

/// Repository for Tag database operations, bound to one tenant
#[derive(Debug, Clone)]
pub struct TagRepository {
    db: DatabaseConnection,
    tenant_id: Uuid,
}

impl TagRepository {
    /// Create a new TagRepository bound to the given tenant
    pub fn new(db: DatabaseConnection, tenant_id: Uuid) -> Self {
        Self { db, tenant_id }
    }

    /// Insert a new tag with an already-derived slug
    pub async fn add(
        &self,
        name: &str,
        slug: &str,
        color: &str,
        is_public: bool,
    ) -> Result<TagModel, RepositoryError> {
        let now = Utc::now();
        let model = tag::ActiveModel {
            id: Set(Uuid::new_v4()),
            tenant_id: Set(self.tenant_id),
            name: Set(name.to_string()),
            slug: Set(slug.to_string()),
            color: Set(color.to_string()),
            is_public: Set(is_public),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };

        model
            .insert(&self.db)
            .await
            .map_err(RepositoryError::database_error)
    }

    /// Update a tag in place, including its re-derived slug
    pub async fn update(
        &self,
        id: Uuid,
        name: &str,
        slug: &str,
        color: &str,
        is_public: bool,
    ) -> Result<TagModel, RepositoryError> {
        let existing = self
            .get_by_id(id)
            .await?
            .ok_or_else(|| RepositoryError::not_found("Tag not found"))?;

        let mut active = existing.into_active_model();
        active.name = Set(name.to_string());
        active.slug = Set(slug.to_string());
        active.color = Set(color.to_string());
        active.is_public = Set(is_public);
        active.updated_at = Set(Utc::now().into());

        active
            .update(&self.db)
            .await
            .map_err(RepositoryError::database_error)
    }

    /// Delete a tag and all of its assignments in one transaction.
    /// The idea rows themselves are untouched.
    pub async fn remove(&self, id: Uuid) -> Result<(), RepositoryError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(RepositoryError::database_error)?;

        let tag = Tag::find_by_id(id)
            .filter(tag::Column::TenantId.eq(self.tenant_id))
            .one(&txn)
            .await
            .map_err(RepositoryError::database_error)?;

        let Some(tag) = tag else {
            txn.rollback()
                .await
                .map_err(RepositoryError::database_error)?;
            return Err(RepositoryError::not_found("Tag not found"));
        };

        IdeaTag::delete_many()
            .filter(idea_tag::Column::TagId.eq(tag.id))
            .exec(&txn)
            .await
            .map_err(RepositoryError::database_error)?;

        Tag::delete_by_id(tag.id)
            .exec(&txn)
            .await
            .map_err(RepositoryError::database_error)?;

        txn.commit()
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(())
    }

    /// Get a tag by its storage identity
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<TagModel>, RepositoryError> {
        Tag::find_by_id(id)
            .filter(tag::Column::TenantId.eq(self.tenant_id))
            .one(&self.db)
            .await
            .map_err(RepositoryError::database_error)
    }

    /// Get a tag by its tenant-unique slug
    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<TagModel>, RepositoryError> {
        Tag::find()
            .filter(tag::Column::TenantId.eq(self.tenant_id))
            .filter(tag::Column::Slug.eq(slug))
            .one(&self.db)
            .await
            .map_err(RepositoryError::database_error)
    }

    /// List the tenant's tags ordered by name
    pub async fn list(&self) -> Result<Vec<TagModel>, RepositoryError> {
        Tag::find()
            .filter(tag::Column::TenantId.eq(self.tenant_id))
            .order_by_asc(tag::Column::Name)
            .all(&self.db)
            .await
            .map_err(RepositoryError::database_error)
    }

    /// Assign a tag to an idea. Idempotent: an existing assignment is left
    /// untouched via the store's conflict clause. Both IDs must come from
    /// tenant-scoped lookups.
    pub async fn assign(
        &self,
        tag_id: Uuid,
        idea_id: Uuid,
        user_id: Uuid,
    ) -> Result<(), RepositoryError> {
        let model = idea_tag::ActiveModel {
            tag_id: Set(tag_id),
            idea_id: Set(idea_id),
            assigned_by: Set(user_id),
            created_at: Set(Utc::now().into()),
        };

        IdeaTag::insert(model)
            .on_conflict(
                OnConflict::columns([idea_tag::Column::TagId, idea_tag::Column::IdeaId])
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(())
    }

    /// Unassign a tag from an idea. Idempotent: absence of the pair is not
    /// an error.
    pub async fn unassign(&self, tag_id: Uuid, idea_id: Uuid) -> Result<(), RepositoryError> {
        IdeaTag::delete_many()
            .filter(idea_tag::Column::TagId.eq(tag_id))
            .filter(idea_tag::Column::IdeaId.eq(idea_id))
            .exec(&self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(())
    }

    /// Tags assigned to an idea, most recently assigned first. An idea
    /// with no assignments yields an empty list.
    pub async fn get_assigned(&self, idea_id: Uuid) -> Result<Vec<TagModel>, RepositoryError> {
        let rows = IdeaTag::find()
            .filter(idea_tag::Column::IdeaId.eq(idea_id))
            .find_also_related(Tag)
            .order_by_desc(idea_tag::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(rows
            .into_iter()
            .filter_map(|(_, tag)| tag)
            .filter(|tag| tag.tenant_id == self.tenant_id)
            .collect())
    }
}
