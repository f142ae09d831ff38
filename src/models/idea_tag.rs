//! Idea/tag assignment entity model
//!
//! Join table between tags and ideas. Existence is binary: the composite
//! primary key on (tag_id, idea_id) means an assignment either exists or
//! it does not, and re-assignment rides on the conflict clause.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::DateTimeWithTimeZone;

/// Assignment of a tag to an idea
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "idea_tags")]
pub struct Model {
    /// Tag being assigned
    #[sea_orm(primary_key, auto_increment = false)]
    pub tag_id: Uuid,

    /// Idea the tag is assigned to
    #[sea_orm(primary_key, auto_increment = false)]
    pub idea_id: Uuid,

    /// User who made the assignment
    pub assigned_by: Uuid,

    /// Timestamp when the assignment was made
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::tag::Entity",
        from = "Column::TagId",
        to = "super::tag::Column::Id"
    )]
    Tag,
    #[sea_orm(
        belongs_to = "super::idea::Entity",
        from = "Column::IdeaId",
        to = "super::idea::Column::Id"
    )]
    Idea,
}

impl Related<super::tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tag.def()
    }
}

impl Related<super::idea::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Idea.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
