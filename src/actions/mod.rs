//! # Action Pipeline
//!
//! Every write operation is an [`Action`]: a typed payload plus the
//! authorization predicate and validation rules that govern it. The
//! [`run`] function drives the shared pipeline — authorize, validate,
//! execute — terminating on the first failure. Binding happens upstream
//! at the axum boundary (a `JsonRejection` never reaches authorization),
//! and path-referenced entities (tag by slug, idea by number) are
//! resolved by the handler before the action is constructed.

use async_trait::async_trait;
use metrics::counter;

use crate::error::{self, ApiError, RepositoryError};
use crate::models::user;
use crate::services::Services;
use crate::validate::ValidationResult;

pub mod idea;
pub mod tag;

pub use idea::{AddComment, CreateIdea, SetResponse, UpdateIdea};
pub use tag::{AssignTag, CreateEditTag, RemoveTag, UnassignTag};

/// A unit of work flowing through the pipeline.
#[async_trait]
pub trait Action: Send + Sync {
    /// What a successful execution produces.
    type Output: Send;

    /// Stable action name, used for logging and metrics labels.
    fn name(&self) -> &'static str;

    /// Pure predicate over the resolved current user (None = anonymous).
    fn is_authorized(&self, user: Option<&user::Model>) -> bool;

    /// Read-only checks over the payload and, where needed, the domain
    /// services (e.g. does the referenced idea number exist).
    async fn validate(&self, services: &Services) -> ValidationResult;

    /// Invoke the domain service with the validated payload. Only reached
    /// when authorization and validation both passed.
    async fn execute(
        &self,
        actor: &user::Model,
        services: &Services,
    ) -> Result<Self::Output, RepositoryError>;
}

/// Terminal pipeline failures, ordered by the stage that produced them.
#[derive(Debug)]
pub enum ActionError {
    /// No authenticated user on a request that requires one.
    Unauthenticated,
    /// Authenticated but the authorization predicate returned false.
    Forbidden,
    /// Validation produced field failures or a general error.
    Invalid(ValidationResult),
    /// Execute-time storage failure, propagated unchanged.
    Repository(RepositoryError),
}

impl From<ActionError> for ApiError {
    fn from(err: ActionError) -> Self {
        match err {
            ActionError::Unauthenticated => error::unauthorized(None),
            ActionError::Forbidden => error::forbidden(Some("Collaborator role required")),
            ActionError::Invalid(result) => {
                let details = result.to_details();
                let (_, general) = result.into_parts();
                match general {
                    // A failed referenced-entity lookup keeps its own error
                    // surface (404/409/...), not the validation one.
                    Some(general) => general.into(),
                    None => error::validation_error("Validation failed", details),
                }
            }
            ActionError::Repository(err) => err.into(),
        }
    }
}

/// Drive an action through authorize → validate → execute.
pub async fn run<A: Action>(
    action: &A,
    user: Option<&user::Model>,
    services: &Services,
) -> Result<A::Output, ActionError> {
    if !action.is_authorized(user) {
        let (outcome, err) = match user {
            None => ("unauthenticated", ActionError::Unauthenticated),
            Some(_) => ("forbidden", ActionError::Forbidden),
        };
        counter!("ideaboard_actions_total", "action" => action.name(), "outcome" => outcome)
            .increment(1);
        tracing::debug!(action = action.name(), outcome, "Action rejected");
        return Err(err);
    }

    // Every action requires an authenticated actor once authorized.
    let actor = user.ok_or(ActionError::Unauthenticated)?;

    let result = action.validate(services).await;
    if !result.is_ok() {
        counter!("ideaboard_actions_total", "action" => action.name(), "outcome" => "invalid")
            .increment(1);
        return Err(ActionError::Invalid(result));
    }

    match action.execute(actor, services).await {
        Ok(output) => {
            counter!("ideaboard_actions_total", "action" => action.name(), "outcome" => "ok")
                .increment(1);
            Ok(output)
        }
        Err(err) => {
            counter!("ideaboard_actions_total", "action" => action.name(), "outcome" => "error")
                .increment(1);
            Err(ActionError::Repository(err))
        }
    }
}

#[cfg(test)]
mod tests;
