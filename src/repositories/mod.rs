//! # Repository Layer
//!
//! This module contains repository implementations that encapsulate SeaORM
//! operations for database entities. The idea, comment, and tag
//! repositories are constructed already bound to one tenant; every query
//! they issue is filtered by that tenant identity, so cross-tenant access
//! is not expressible through their API.

pub mod comment;
pub mod idea;
pub mod tag;
pub mod tenant;
pub mod user;

pub use comment::CommentRepository;
pub use idea::IdeaRepository;
pub use tag::TagRepository;
pub use tenant::{CreateTenantRequest, TenantRepository};
pub use user::UserRepository;
