//! # User Repository
//!
//! Repository for User entities, used by the identity-resolution
//! middleware and by test fixtures.

use crate::error::RepositoryError;
use crate::models::user::{ActiveModel as UserActiveModel, Entity as User, Model as UserModel};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

/// Request data for creating a new user
#[derive(Debug, Clone)]
pub struct CreateUserRequest {
    pub tenant_id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub role: String,
}

/// Repository for User database operations
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Create a new UserRepository with the given database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create a new user within a tenant
    pub async fn create_user(
        &self,
        request: CreateUserRequest,
    ) -> Result<UserModel, RepositoryError> {
        if request.name.trim().is_empty() {
            return Err(RepositoryError::validation_error(
                "User name cannot be empty",
            ));
        }

        let user = UserActiveModel {
            id: Set(Uuid::new_v4()),
            tenant_id: Set(request.tenant_id),
            name: Set(request.name),
            email: Set(request.email),
            role: Set(request.role),
            created_at: Set(Utc::now().into()),
        };

        user.insert(self.db)
            .await
            .map_err(RepositoryError::database_error)
    }

    /// Get a user by ID, scoped to a tenant. A user ID from another tenant
    /// resolves to None.
    pub async fn get_in_tenant(
        &self,
        tenant_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<UserModel>, RepositoryError> {
        User::find_by_id(user_id)
            .filter(crate::models::user::Column::TenantId.eq(tenant_id))
            .one(self.db)
            .await
            .map_err(RepositoryError::database_error)
    }
}
