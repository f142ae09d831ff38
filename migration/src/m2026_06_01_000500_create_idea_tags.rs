//! Migration to create the idea_tags join table.
//!
//! Assignment existence is binary: the composite primary key on
//! (tag_id, idea_id) lets idempotent assignment ride on the store's
//! conflict clause instead of a read-then-write check.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(IdeaTags::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(IdeaTags::TagId).uuid().not_null())
                    .col(ColumnDef::new(IdeaTags::IdeaId).uuid().not_null())
                    .col(ColumnDef::new(IdeaTags::AssignedBy).uuid().not_null())
                    .col(
                        ColumnDef::new(IdeaTags::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .name("pk_idea_tags")
                            .col(IdeaTags::TagId)
                            .col(IdeaTags::IdeaId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_idea_tags_tag_id")
                            .from(IdeaTags::Table, IdeaTags::TagId)
                            .to(Tags::Table, Tags::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_idea_tags_idea_id")
                            .from(IdeaTags::Table, IdeaTags::IdeaId)
                            .to(Ideas::Table, Ideas::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_idea_tags_idea_id")
                    .table(IdeaTags::Table)
                    .col(IdeaTags::IdeaId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_idea_tags_idea_id").to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(IdeaTags::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum IdeaTags {
    Table,
    TagId,
    IdeaId,
    AssignedBy,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Tags {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Ideas {
    Table,
    Id,
}
