//! Tag actions: create/edit, remove, assign, unassign.
//!
//! The tag (and, for assignment, the idea) referenced by path parameters
//! is resolved by the handler during binding and carried on the action.

use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::error::RepositoryError;
use crate::models::{idea, tag, user};
use crate::services::Services;
use crate::validate::ValidationResult;

use super::Action;

static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9A-Fa-f]{6}$").expect("color regex is valid"));

/// Payload for creating or editing a tag
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct TagInput {
    /// Human-readable tag name; the slug is derived from it
    pub name: String,
    /// Display color as a 6-digit hex string (no leading '#')
    pub color: String,
    /// Whether the tag is visible to non-collaborators
    #[serde(default)]
    pub is_public: bool,
}

fn validate_tag_input(input: &TagInput) -> ValidationResult {
    let mut result = ValidationResult::success();

    if input.name.is_empty() {
        result.add_field_failure("name", "Name is required.");
    }

    if input.color.is_empty() {
        result.add_field_failure("color", "Color is required.");
    } else if !HEX_COLOR.is_match(&input.color) {
        result.add_field_failure("color", "Color must be a 6-digit hexadecimal value.");
    }

    result
}

/// CreateEditTag creates a new tag, or edits the resolved one.
pub struct CreateEditTag {
    /// Present when editing (resolved from the slug path parameter)
    pub existing: Option<tag::Model>,
    pub input: TagInput,
}

#[async_trait]
impl Action for CreateEditTag {
    type Output = tag::Model;

    fn name(&self) -> &'static str {
        "create_edit_tag"
    }

    fn is_authorized(&self, user: Option<&user::Model>) -> bool {
        user.is_some_and(|u| u.is_collaborator())
    }

    async fn validate(&self, _services: &Services) -> ValidationResult {
        validate_tag_input(&self.input)
    }

    async fn execute(
        &self,
        _actor: &user::Model,
        services: &Services,
    ) -> Result<Self::Output, RepositoryError> {
        match &self.existing {
            Some(tag) => {
                services
                    .tags
                    .update(tag.id, &self.input.name, &self.input.color, self.input.is_public)
                    .await
            }
            None => {
                services
                    .tags
                    .add(&self.input.name, &self.input.color, self.input.is_public)
                    .await
            }
        }
    }
}

/// RemoveTag deletes the resolved tag and its assignments.
pub struct RemoveTag {
    pub tag: tag::Model,
}

#[async_trait]
impl Action for RemoveTag {
    type Output = ();

    fn name(&self) -> &'static str {
        "remove_tag"
    }

    fn is_authorized(&self, user: Option<&user::Model>) -> bool {
        user.is_some_and(|u| u.is_collaborator())
    }

    async fn validate(&self, _services: &Services) -> ValidationResult {
        ValidationResult::success()
    }

    async fn execute(
        &self,
        _actor: &user::Model,
        services: &Services,
    ) -> Result<Self::Output, RepositoryError> {
        services.tags.remove(self.tag.id).await
    }
}

/// AssignTag attaches the resolved tag to the resolved idea (idempotent).
pub struct AssignTag {
    pub tag: tag::Model,
    pub idea: idea::Model,
}

#[async_trait]
impl Action for AssignTag {
    type Output = ();

    fn name(&self) -> &'static str {
        "assign_tag"
    }

    fn is_authorized(&self, user: Option<&user::Model>) -> bool {
        user.is_some_and(|u| u.is_collaborator())
    }

    async fn validate(&self, _services: &Services) -> ValidationResult {
        ValidationResult::success()
    }

    async fn execute(
        &self,
        actor: &user::Model,
        services: &Services,
    ) -> Result<Self::Output, RepositoryError> {
        services.tags.assign(self.tag.id, self.idea.id, actor.id).await
    }
}

/// UnassignTag detaches the resolved tag from the resolved idea (idempotent).
pub struct UnassignTag {
    pub tag: tag::Model,
    pub idea: idea::Model,
}

#[async_trait]
impl Action for UnassignTag {
    type Output = ();

    fn name(&self) -> &'static str {
        "unassign_tag"
    }

    fn is_authorized(&self, user: Option<&user::Model>) -> bool {
        user.is_some_and(|u| u.is_collaborator())
    }

    async fn validate(&self, _services: &Services) -> ValidationResult {
        ValidationResult::success()
    }

    async fn execute(
        &self,
        _actor: &user::Model,
        services: &Services,
    ) -> Result<Self::Output, RepositoryError> {
        services.tags.unassign(self.tag.id, self.idea.id).await
    }
}
