//! Test utilities for database testing.
//!
//! This module provides utilities for setting up in-memory SQLite
//! databases with migrations applied, plus fixture helpers for tenants
//! and users.

use anyhow::Result;
use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};
use uuid::Uuid;

use ideaboard::models::user::{Model as UserModel, roles};
use ideaboard::repositories::tenant::CreateTenantRequest;
use ideaboard::repositories::user::CreateUserRequest;
use ideaboard::repositories::{TenantRepository, UserRepository};
use ideaboard::services::Services;

/// Sets up an in-memory SQLite database with all migrations applied.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = Database::connect("sqlite::memory:").await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates a test tenant and returns its ID.
#[allow(dead_code)]
pub async fn create_test_tenant(db: &DatabaseConnection) -> Result<Uuid> {
    let tenant = TenantRepository::new(db)
        .create_tenant(CreateTenantRequest {
            name: Some("Test Tenant".to_string()),
        })
        .await?;

    Ok(tenant.id)
}

/// Creates a test user in the given tenant with the given role.
#[allow(dead_code)]
pub async fn create_test_user(
    db: &DatabaseConnection,
    tenant_id: Uuid,
    role: &str,
) -> Result<UserModel> {
    let user = UserRepository::new(db)
        .create_user(CreateUserRequest {
            tenant_id,
            name: format!("{} user", role),
            email: None,
            role: role.to_string(),
        })
        .await?;

    Ok(user)
}

/// Creates a test collaborator in the given tenant.
#[allow(dead_code)]
pub async fn create_test_collaborator(
    db: &DatabaseConnection,
    tenant_id: Uuid,
) -> Result<UserModel> {
    create_test_user(db, tenant_id, roles::COLLABORATOR).await
}

/// Production services bound to the given tenant.
#[allow(dead_code)]
pub fn services_for(db: &DatabaseConnection, tenant_id: Uuid) -> Services {
    Services::for_tenant(db.clone(), tenant_id)
}
