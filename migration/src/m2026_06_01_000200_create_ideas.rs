//! Migration to create the ideas table.
//!
//! Ideas carry a tenant-scoped sequential number alongside their UUID
//! storage identity; the composite unique index on (tenant_id, number)
//! both guarantees the numbering invariant and decides concurrent inserts.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ideas::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Ideas::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Ideas::TenantId).uuid().not_null())
                    .col(ColumnDef::new(Ideas::Number).integer().not_null())
                    .col(ColumnDef::new(Ideas::Title).text().not_null())
                    .col(ColumnDef::new(Ideas::Description).text().null())
                    .col(ColumnDef::new(Ideas::CreatedBy).uuid().not_null())
                    .col(
                        ColumnDef::new(Ideas::Status)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Ideas::Response).text().null())
                    .col(ColumnDef::new(Ideas::ResponseUserId).uuid().null())
                    .col(
                        ColumnDef::new(Ideas::ResponseAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Ideas::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Ideas::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ideas_tenant_id")
                            .from(Ideas::Table, Ideas::TenantId)
                            .to(Tenants::Table, Tenants::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ideas_created_by")
                            .from(Ideas::Table, Ideas::CreatedBy)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // Composite unique index on (tenant_id, number)
        manager
            .create_index(
                Index::create()
                    .name("idx_ideas_tenant_number")
                    .table(Ideas::Table)
                    .col(Ideas::TenantId)
                    .col(Ideas::Number)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Index on tenant_id for tenant isolation queries
        manager
            .create_index(
                Index::create()
                    .name("idx_ideas_tenant_id")
                    .table(Ideas::Table)
                    .col(Ideas::TenantId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_ideas_tenant_number").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_ideas_tenant_id").to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Ideas::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Ideas {
    Table,
    Id,
    TenantId,
    Number,
    Title,
    Description,
    CreatedBy,
    Status,
    Response,
    ResponseUserId,
    ResponseAt,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Tenants {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
