//! Tag entity model
//!
//! Tags are tenant-scoped labels; the slug is derived from the name and
//! unique within a tenant.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::DateTimeWithTimeZone;

/// Tag entity representing a tenant-scoped label for ideas
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tags")]
pub struct Model {
    /// Unique identifier for the tag (primary key)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Tenant identifier for multi-tenancy
    pub tenant_id: Uuid,

    /// Human-readable tag name
    pub name: String,

    /// URL-safe slug derived from the name (unique per tenant)
    pub slug: String,

    /// Display color as a 6-digit hex string (no leading '#')
    pub color: String,

    /// Whether the tag is visible to non-collaborators
    pub is_public: bool,

    /// Timestamp when the tag was created
    pub created_at: DateTimeWithTimeZone,

    /// Timestamp when the tag was last updated
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::tenant::Entity",
        from = "Column::TenantId",
        to = "super::tenant::Column::Id"
    )]
    Tenant,
}

impl Related<super::tenant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tenant.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
