//! Database migrations for the Ideaboard API.
//!
//! This module contains all database migrations using SeaORM Migration.

pub use sea_orm_migration::prelude::*;

mod m2026_06_01_000001_create_tenants;
mod m2026_06_01_000100_create_users;
mod m2026_06_01_000200_create_ideas;
mod m2026_06_01_000300_create_comments;
mod m2026_06_01_000400_create_tags;
mod m2026_06_01_000500_create_idea_tags;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m2026_06_01_000001_create_tenants::Migration),
            Box::new(m2026_06_01_000100_create_users::Migration),
            Box::new(m2026_06_01_000200_create_ideas::Migration),
            Box::new(m2026_06_01_000300_create_comments::Migration),
            Box::new(m2026_06_01_000400_create_tags::Migration),
            Box::new(m2026_06_01_000500_create_idea_tags::Migration),
        ]
    }
}
