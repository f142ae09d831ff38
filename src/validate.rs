//! # Validation Results
//!
//! Accumulator for action validation. A result either succeeds or carries
//! an ordered list of field failures and/or one general error. Fields are
//! private so `is_ok()` can never disagree with the error lists.

use serde::Serialize;
use serde_json::json;
use utoipa::ToSchema;

use crate::error::RepositoryError;

/// A single validation failure attributed to one named input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldFailure {
    /// Name of the offending input field
    pub field: &'static str,
    /// Human-readable message
    pub message: String,
}

/// Outcome of an action's validate step.
#[derive(Debug, Default)]
pub struct ValidationResult {
    failures: Vec<FieldFailure>,
    general: Option<RepositoryError>,
}

impl ValidationResult {
    /// An ok result with empty error lists.
    pub fn success() -> Self {
        Self::default()
    }

    /// A not-ok result carrying a single general (non-field) error, used
    /// when the failure is infrastructural (e.g. a referenced idea does
    /// not exist) rather than a user-input defect.
    pub fn error(err: RepositoryError) -> Self {
        Self {
            failures: Vec::new(),
            general: Some(err),
        }
    }

    /// Append a field failure. Multiple calls accumulate; all violated
    /// rules are reported, not just the first.
    pub fn add_field_failure<S: Into<String>>(&mut self, field: &'static str, message: S) {
        self.failures.push(FieldFailure {
            field,
            message: message.into(),
        });
    }

    /// True when there are no field failures and no general error.
    pub fn is_ok(&self) -> bool {
        self.failures.is_empty() && self.general.is_none()
    }

    /// Field failures in the order they were added.
    pub fn failures(&self) -> &[FieldFailure] {
        &self.failures
    }

    /// The general error, if any.
    pub fn general_error(&self) -> Option<&RepositoryError> {
        self.general.as_ref()
    }

    /// Consume the result, returning its parts.
    pub fn into_parts(self) -> (Vec<FieldFailure>, Option<RepositoryError>) {
        (self.failures, self.general)
    }

    /// JSON details for the error response body.
    pub fn to_details(&self) -> serde_json::Value {
        json!({ "failures": self.failures })
    }
}
