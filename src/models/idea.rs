//! Idea entity model
//!
//! This module contains the SeaORM entity model for the ideas table.
//! Ideas carry a tenant-scoped sequential number alongside their UUID
//! storage identity; the number is what users see and reference.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::DateTimeWithTimeZone;

/// Lifecycle status of an idea. The numeric values are part of the API
/// contract and must stay a closed, contiguous range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum IdeaStatus {
    New = 0,
    Started = 1,
    Completed = 2,
    Declined = 3,
}

impl IdeaStatus {
    pub const MIN: i32 = IdeaStatus::New as i32;
    pub const MAX: i32 = IdeaStatus::Declined as i32;

    /// True when `value` falls within the defined status range.
    pub fn is_valid(value: i32) -> bool {
        (Self::MIN..=Self::MAX).contains(&value)
    }
}

/// Idea entity representing a tenant-scoped feedback item
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "ideas")]
pub struct Model {
    /// Unique identifier for the idea (primary key)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Tenant identifier for multi-tenancy
    pub tenant_id: Uuid,

    /// Tenant-scoped sequential number (1-based, immutable)
    pub number: i32,

    /// Idea title
    pub title: String,

    /// Idea description (optional)
    pub description: Option<String>,

    /// User who submitted the idea
    pub created_by: Uuid,

    /// Lifecycle status (see [`IdeaStatus`])
    pub status: i32,

    /// Official response text (optional)
    pub response: Option<String>,

    /// User who set the response (optional)
    pub response_user_id: Option<Uuid>,

    /// Timestamp when the response was set (optional)
    pub response_at: Option<DateTimeWithTimeZone>,

    /// Timestamp when the idea was created
    pub created_at: DateTimeWithTimeZone,

    /// Timestamp when the idea was last updated
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
