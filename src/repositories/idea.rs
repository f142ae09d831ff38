//! # Idea Repository
//!
//! Tenant-bound repository for Idea entities. The tenant identity is
//! captured at construction, so every query is implicitly scoped; there is
//! no way to reach another tenant's rows through this type.
//!
//! Idea numbers are tenant-scoped, sequential, and 1-based. The number is
//! computed as MAX(number)+1 inside the insert transaction; the unique
//! index on (tenant_id, number) decides concurrent inserts.

use crate::error::RepositoryError;
use crate::models::idea::{self, Entity as Idea, Model as IdeaModel};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult,
    IntoActiveModel, QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use uuid::Uuid;

#[derive(Debug, FromQueryResult)]
struct MaxNumber {
    max_number: Option<i32>,
}

/// Repository for Idea database operations, bound to one tenant
#[derive(Debug, Clone)]
pub struct IdeaRepository {
    db: DatabaseConnection,
    tenant_id: Uuid,
}

impl IdeaRepository {
    /// Create a new IdeaRepository bound to the given tenant
    pub fn new(db: DatabaseConnection, tenant_id: Uuid) -> Self {
        Self { db, tenant_id }
    }

    /// Add a new idea, assigning the next tenant-scoped number.
    pub async fn add(
        &self,
        title: &str,
        description: Option<&str>,
        user_id: Uuid,
    ) -> Result<IdeaModel, RepositoryError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(RepositoryError::database_error)?;

        let max = Idea::find()
            .select_only()
            .column_as(idea::Column::Number.max(), "max_number")
            .filter(idea::Column::TenantId.eq(self.tenant_id))
            .into_model::<MaxNumber>()
            .one(&txn)
            .await
            .map_err(RepositoryError::database_error)?
            .and_then(|row| row.max_number)
            .unwrap_or(0);

        let now = Utc::now();
        let model = idea::ActiveModel {
            id: Set(Uuid::new_v4()),
            tenant_id: Set(self.tenant_id),
            number: Set(max + 1),
            title: Set(title.to_string()),
            description: Set(description.map(str::to_string)),
            created_by: Set(user_id),
            status: Set(idea::IdeaStatus::New as i32),
            response: Set(None),
            response_user_id: Set(None),
            response_at: Set(None),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };

        let created = model
            .insert(&txn)
            .await
            .map_err(RepositoryError::database_error)?;

        txn.commit()
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(created)
    }

    /// Get an idea by its tenant-scoped number
    pub async fn get_by_number(&self, number: i32) -> Result<Option<IdeaModel>, RepositoryError> {
        Idea::find()
            .filter(idea::Column::TenantId.eq(self.tenant_id))
            .filter(idea::Column::Number.eq(number))
            .one(&self.db)
            .await
            .map_err(RepositoryError::database_error)
    }

    /// Get an idea by its storage identity
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<IdeaModel>, RepositoryError> {
        Idea::find_by_id(id)
            .filter(idea::Column::TenantId.eq(self.tenant_id))
            .one(&self.db)
            .await
            .map_err(RepositoryError::database_error)
    }

    /// List the tenant's ideas, newest first
    pub async fn list(&self) -> Result<Vec<IdeaModel>, RepositoryError> {
        Idea::find()
            .filter(idea::Column::TenantId.eq(self.tenant_id))
            .order_by_desc(idea::Column::CreatedAt)
            .order_by_desc(idea::Column::Number)
            .all(&self.db)
            .await
            .map_err(RepositoryError::database_error)
    }

    /// Update an idea's title and description by its number
    pub async fn update(
        &self,
        number: i32,
        title: &str,
        description: Option<&str>,
    ) -> Result<IdeaModel, RepositoryError> {
        let existing = self
            .get_by_number(number)
            .await?
            .ok_or_else(|| RepositoryError::not_found(format!("Idea #{} not found", number)))?;

        let mut active = existing.into_active_model();
        active.title = Set(title.to_string());
        active.description = Set(description.map(str::to_string));
        active.updated_at = Set(Utc::now().into());

        active
            .update(&self.db)
            .await
            .map_err(RepositoryError::database_error)
    }

    /// Set the official status and response for an idea
    pub async fn set_response(
        &self,
        number: i32,
        status: i32,
        text: &str,
        user_id: Uuid,
    ) -> Result<IdeaModel, RepositoryError> {
        let existing = self
            .get_by_number(number)
            .await?
            .ok_or_else(|| RepositoryError::not_found(format!("Idea #{} not found", number)))?;

        let now = Utc::now();
        let mut active = existing.into_active_model();
        active.status = Set(status);
        active.response = Set(Some(text.to_string()));
        active.response_user_id = Set(Some(user_id));
        active.response_at = Set(Some(now.into()));
        active.updated_at = Set(now.into());

        active
            .update(&self.db)
            .await
            .map_err(RepositoryError::database_error)
    }
}
