//! # Data Models
//!
//! This module contains all the data models used throughout the Ideaboard API.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod comment;
pub mod idea;
pub mod idea_tag;
pub mod tag;
pub mod tenant;
pub mod user;

pub use comment::Entity as Comment;
pub use idea::Entity as Idea;
pub use idea_tag::Entity as IdeaTag;
pub use tag::Entity as Tag;
pub use tenant::Entity as Tenant;
pub use user::Entity as User;

/// Basic service information response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ServiceInfo {
    /// The name of the service
    pub service: String,
    /// The version of the service
    pub version: String,
}

impl Default for ServiceInfo {
    fn default() -> Self {
        Self {
            service: "ideaboard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
