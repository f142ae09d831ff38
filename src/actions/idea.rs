//! Idea actions: submit, edit, comment, respond.

use async_trait::async_trait;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::error::RepositoryError;
use crate::models::idea::{self, IdeaStatus};
use crate::models::{comment, user};
use crate::services::Services;
use crate::validate::ValidationResult;

use super::Action;

/// Payload for submitting a new idea
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct NewIdea {
    /// Idea title
    pub title: String,
    /// Optional long-form description
    pub description: Option<String>,
}

/// Payload for editing an existing idea
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateIdeaInput {
    /// New title
    pub title: String,
    /// New description
    pub description: Option<String>,
}

/// Payload for commenting on an idea
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct NewComment {
    /// Comment body
    pub content: String,
}

/// Payload for setting an idea's status and official response
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct SetResponseInput {
    /// Target status (see the idea status range)
    pub status: i32,
    /// Response text
    pub text: String,
}

/// Title must be present and descriptive. The length and word-count
/// conditions share one combined failure message.
fn validate_title(result: &mut ValidationResult, title: &str) {
    if title.is_empty() {
        result.add_field_failure("title", "Title is required.");
    }

    if title.len() < 10 || title.split(' ').count() < 3 {
        result.add_field_failure("title", "Title needs to be more descriptive.");
    }
}

/// CreateIdea submits a new idea.
pub struct CreateIdea {
    pub input: NewIdea,
}

#[async_trait]
impl Action for CreateIdea {
    type Output = idea::Model;

    fn name(&self) -> &'static str {
        "create_idea"
    }

    fn is_authorized(&self, user: Option<&user::Model>) -> bool {
        user.is_some()
    }

    async fn validate(&self, _services: &Services) -> ValidationResult {
        let mut result = ValidationResult::success();
        validate_title(&mut result, &self.input.title);
        result
    }

    async fn execute(
        &self,
        actor: &user::Model,
        services: &Services,
    ) -> Result<Self::Output, RepositoryError> {
        services
            .ideas
            .add(&self.input.title, self.input.description.as_deref(), actor.id)
            .await
    }
}

/// UpdateIdea edits an existing idea's title and description.
pub struct UpdateIdea {
    pub number: i32,
    pub input: UpdateIdeaInput,
}

#[async_trait]
impl Action for UpdateIdea {
    type Output = idea::Model;

    fn name(&self) -> &'static str {
        "update_idea"
    }

    fn is_authorized(&self, user: Option<&user::Model>) -> bool {
        user.is_some_and(|u| u.is_collaborator())
    }

    async fn validate(&self, services: &Services) -> ValidationResult {
        let mut result = ValidationResult::success();
        validate_title(&mut result, &self.input.title);

        // The user referenced an idea, they did not fill in a field: a
        // failed lookup is a general error, not a field failure.
        if let Err(err) = services.ideas.get_by_number(self.number).await {
            return ValidationResult::error(err);
        }

        result
    }

    async fn execute(
        &self,
        _actor: &user::Model,
        services: &Services,
    ) -> Result<Self::Output, RepositoryError> {
        services
            .ideas
            .update(self.number, &self.input.title, self.input.description.as_deref())
            .await
    }
}

/// AddComment appends a comment to an idea.
pub struct AddComment {
    pub number: i32,
    pub input: NewComment,
}

#[async_trait]
impl Action for AddComment {
    type Output = comment::Model;

    fn name(&self) -> &'static str {
        "add_comment"
    }

    fn is_authorized(&self, user: Option<&user::Model>) -> bool {
        user.is_some()
    }

    async fn validate(&self, services: &Services) -> ValidationResult {
        let mut result = ValidationResult::success();

        if self.input.content.is_empty() {
            result.add_field_failure("content", "Comment is required.");
        }

        if let Err(err) = services.ideas.get_by_number(self.number).await {
            return ValidationResult::error(err);
        }

        result
    }

    async fn execute(
        &self,
        actor: &user::Model,
        services: &Services,
    ) -> Result<Self::Output, RepositoryError> {
        services
            .comments
            .add(self.number, &self.input.content, actor.id)
            .await
    }
}

/// SetResponse updates an idea's status and official response text.
pub struct SetResponse {
    pub number: i32,
    pub input: SetResponseInput,
}

#[async_trait]
impl Action for SetResponse {
    type Output = idea::Model;

    fn name(&self) -> &'static str {
        "set_response"
    }

    fn is_authorized(&self, user: Option<&user::Model>) -> bool {
        user.is_some_and(|u| u.is_collaborator())
    }

    async fn validate(&self, _services: &Services) -> ValidationResult {
        let mut result = ValidationResult::success();

        if !IdeaStatus::is_valid(self.input.status) {
            result.add_field_failure("status", "Status is invalid.");
        }

        if self.input.text.is_empty() {
            result.add_field_failure("text", "Text is required.");
        }

        result
    }

    async fn execute(
        &self,
        actor: &user::Model,
        services: &Services,
    ) -> Result<Self::Output, RepositoryError> {
        services
            .ideas
            .set_response(self.number, self.input.status, &self.input.text, actor.id)
            .await
    }
}
