//! Migration to create the tags table.
//!
//! Tag slugs are unique per tenant; the composite unique index is the
//! authority on slug collisions, not an application-level pre-check.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tags::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Tags::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Tags::TenantId).uuid().not_null())
                    .col(ColumnDef::new(Tags::Name).text().not_null())
                    .col(ColumnDef::new(Tags::Slug).text().not_null())
                    .col(ColumnDef::new(Tags::Color).text().not_null())
                    .col(
                        ColumnDef::new(Tags::IsPublic)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Tags::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Tags::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tags_tenant_id")
                            .from(Tags::Table, Tags::TenantId)
                            .to(Tenants::Table, Tenants::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Composite unique index on (tenant_id, slug)
        manager
            .create_index(
                Index::create()
                    .name("idx_tags_tenant_slug")
                    .table(Tags::Table)
                    .col(Tags::TenantId)
                    .col(Tags::Slug)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Index on tenant_id for tenant isolation queries
        manager
            .create_index(
                Index::create()
                    .name("idx_tags_tenant_id")
                    .table(Tags::Table)
                    .col(Tags::TenantId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_tags_tenant_slug").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_tags_tenant_id").to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Tags::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Tags {
    Table,
    Id,
    TenantId,
    Name,
    Slug,
    Color,
    IsPublic,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Tenants {
    Table,
    Id,
}
