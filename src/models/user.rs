//! User entity model
//!
//! Users belong to exactly one tenant; the role column is what the action
//! pipeline's authorization predicates inspect.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::DateTimeWithTimeZone;

/// Role a user holds within their tenant.
pub mod roles {
    pub const VISITOR: &str = "visitor";
    pub const COLLABORATOR: &str = "collaborator";
    pub const ADMINISTRATOR: &str = "administrator";
}

/// User entity representing a member of a tenant
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Unique identifier for the user (primary key)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Tenant identifier for multi-tenancy
    pub tenant_id: Uuid,

    /// Display name
    pub name: String,

    /// E-mail address (optional)
    pub email: Option<String>,

    /// Role within the tenant (visitor|collaborator|administrator)
    pub role: String,

    /// Timestamp when the user was created
    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    /// Collaborators and administrators may moderate ideas and manage tags.
    pub fn is_collaborator(&self) -> bool {
        self.role == roles::COLLABORATOR || self.role == roles::ADMINISTRATOR
    }
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
