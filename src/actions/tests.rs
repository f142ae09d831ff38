//! # Tests for the Action Pipeline
//!
//! These tests drive the pipeline against recording service doubles, so
//! they pin down the authorization matrix, the validation rules, and the
//! short-circuit behavior without a database.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::actions::{self, Action, ActionError};
use crate::error::RepositoryError;
use crate::models::user::roles;
use crate::models::{comment, idea, tag, user};
use crate::services::{CommentService, IdeaService, Services, TagService};

use super::idea::{NewComment, NewIdea, SetResponseInput, UpdateIdeaInput};
use super::tag::TagInput;

fn make_user(role: &str) -> user::Model {
    user::Model {
        id: Uuid::new_v4(),
        tenant_id: Uuid::new_v4(),
        name: "Jane".to_string(),
        email: None,
        role: role.to_string(),
        created_at: Utc::now().into(),
    }
}

fn make_idea(number: i32) -> idea::Model {
    idea::Model {
        id: Uuid::new_v4(),
        tenant_id: Uuid::new_v4(),
        number,
        title: "My great idea".to_string(),
        description: None,
        created_by: Uuid::new_v4(),
        status: idea::IdeaStatus::New as i32,
        response: None,
        response_user_id: None,
        response_at: None,
        created_at: Utc::now().into(),
        updated_at: Utc::now().into(),
    }
}

fn make_comment(idea_id: Uuid, content: &str) -> comment::Model {
    comment::Model {
        id: Uuid::new_v4(),
        tenant_id: Uuid::new_v4(),
        idea_id,
        content: content.to_string(),
        created_by: Uuid::new_v4(),
        created_at: Utc::now().into(),
    }
}

fn make_tag(name: &str, slug: &str) -> tag::Model {
    tag::Model {
        id: Uuid::new_v4(),
        tenant_id: Uuid::new_v4(),
        name: name.to_string(),
        slug: slug.to_string(),
        color: "FF0000".to_string(),
        is_public: true,
        created_at: Utc::now().into(),
        updated_at: Utc::now().into(),
    }
}

/// Idea service double: knows a fixed set of idea numbers and records calls.
#[derive(Default)]
struct StubIdeas {
    known_numbers: Vec<i32>,
    get_by_number_calls: Mutex<Vec<i32>>,
    add_calls: Mutex<Vec<String>>,
    update_calls: Mutex<Vec<i32>>,
    set_response_calls: Mutex<Vec<(i32, i32)>>,
}

#[async_trait]
impl IdeaService for StubIdeas {
    async fn add(
        &self,
        title: &str,
        _description: Option<&str>,
        _user_id: Uuid,
    ) -> Result<idea::Model, RepositoryError> {
        self.add_calls.lock().unwrap().push(title.to_string());
        Ok(make_idea(1))
    }

    async fn get_by_number(&self, number: i32) -> Result<idea::Model, RepositoryError> {
        self.get_by_number_calls.lock().unwrap().push(number);
        if self.known_numbers.contains(&number) {
            Ok(make_idea(number))
        } else {
            Err(RepositoryError::not_found(format!(
                "Idea #{} not found",
                number
            )))
        }
    }

    async fn list(&self) -> Result<Vec<idea::Model>, RepositoryError> {
        Ok(Vec::new())
    }

    async fn update(
        &self,
        number: i32,
        _title: &str,
        _description: Option<&str>,
    ) -> Result<idea::Model, RepositoryError> {
        self.update_calls.lock().unwrap().push(number);
        Ok(make_idea(number))
    }

    async fn set_response(
        &self,
        number: i32,
        status: i32,
        _text: &str,
        _user_id: Uuid,
    ) -> Result<idea::Model, RepositoryError> {
        self.set_response_calls.lock().unwrap().push((number, status));
        Ok(make_idea(number))
    }
}

/// Tag service double recording every mutation.
#[derive(Default)]
struct StubTags {
    add_calls: Mutex<Vec<String>>,
    update_calls: Mutex<Vec<Uuid>>,
    remove_calls: Mutex<Vec<Uuid>>,
    assign_calls: Mutex<Vec<(Uuid, Uuid, Uuid)>>,
    unassign_calls: Mutex<Vec<(Uuid, Uuid)>>,
}

#[async_trait]
impl TagService for StubTags {
    async fn add(
        &self,
        name: &str,
        _color: &str,
        _is_public: bool,
    ) -> Result<tag::Model, RepositoryError> {
        self.add_calls.lock().unwrap().push(name.to_string());
        Ok(make_tag(name, "stub"))
    }

    async fn update(
        &self,
        id: Uuid,
        name: &str,
        _color: &str,
        _is_public: bool,
    ) -> Result<tag::Model, RepositoryError> {
        self.update_calls.lock().unwrap().push(id);
        Ok(make_tag(name, "stub"))
    }

    async fn remove(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.remove_calls.lock().unwrap().push(id);
        Ok(())
    }

    async fn get_by_slug(&self, slug: &str) -> Result<tag::Model, RepositoryError> {
        Ok(make_tag(slug, slug))
    }

    async fn list(&self) -> Result<Vec<tag::Model>, RepositoryError> {
        Ok(Vec::new())
    }

    async fn assign(
        &self,
        tag_id: Uuid,
        idea_id: Uuid,
        user_id: Uuid,
    ) -> Result<(), RepositoryError> {
        self.assign_calls
            .lock()
            .unwrap()
            .push((tag_id, idea_id, user_id));
        Ok(())
    }

    async fn unassign(&self, tag_id: Uuid, idea_id: Uuid) -> Result<(), RepositoryError> {
        self.unassign_calls.lock().unwrap().push((tag_id, idea_id));
        Ok(())
    }

    async fn get_assigned(&self, _idea_id: Uuid) -> Result<Vec<tag::Model>, RepositoryError> {
        Ok(Vec::new())
    }
}

/// Comment service double recording additions.
#[derive(Default)]
struct StubComments {
    add_calls: Mutex<Vec<(i32, String)>>,
}

#[async_trait]
impl CommentService for StubComments {
    async fn add(
        &self,
        idea_number: i32,
        content: &str,
        _user_id: Uuid,
    ) -> Result<comment::Model, RepositoryError> {
        self.add_calls
            .lock()
            .unwrap()
            .push((idea_number, content.to_string()));
        Ok(make_comment(Uuid::new_v4(), content))
    }

    async fn for_idea(&self, _idea_id: Uuid) -> Result<Vec<comment::Model>, RepositoryError> {
        Ok(Vec::new())
    }
}

struct Harness {
    services: Services,
    ideas: Arc<StubIdeas>,
    tags: Arc<StubTags>,
    comments: Arc<StubComments>,
}

fn harness_with_ideas(known_numbers: Vec<i32>) -> Harness {
    let ideas = Arc::new(StubIdeas {
        known_numbers,
        ..Default::default()
    });
    let tags = Arc::new(StubTags::default());
    let comments = Arc::new(StubComments::default());
    Harness {
        services: Services {
            ideas: ideas.clone(),
            tags: tags.clone(),
            comments: comments.clone(),
        },
        ideas,
        tags,
        comments,
    }
}

fn harness() -> Harness {
    harness_with_ideas(Vec::new())
}

#[tokio::test]
async fn create_idea_short_single_word_title_fails_once() {
    let h = harness();
    let action = actions::CreateIdea {
        input: NewIdea {
            title: "tiny".to_string(),
            description: None,
        },
    };

    // Both the length and word-count conditions are violated, yet only one
    // combined failure must be reported.
    let result = action.validate(&h.services).await;
    assert!(!result.is_ok());
    assert_eq!(result.failures().len(), 1);
    assert_eq!(result.failures()[0].field, "title");
}

#[tokio::test]
async fn create_idea_long_two_word_title_fails_once() {
    let h = harness();
    let action = actions::CreateIdea {
        input: NewIdea {
            title: "LongEnough Title".to_string(),
            description: None,
        },
    };

    let result = action.validate(&h.services).await;
    assert_eq!(result.failures().len(), 1);
    assert_eq!(result.failures()[0].field, "title");
}

#[tokio::test]
async fn create_idea_valid_title_passes() {
    let h = harness();
    let action = actions::CreateIdea {
        input: NewIdea {
            title: "Add dark mode support".to_string(),
            description: Some("Please".to_string()),
        },
    };

    let result = action.validate(&h.services).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn create_idea_executes_for_authenticated_visitor() {
    let h = harness();
    let visitor = make_user(roles::VISITOR);
    let action = actions::CreateIdea {
        input: NewIdea {
            title: "Add dark mode support".to_string(),
            description: None,
        },
    };

    let output = actions::run(&action, Some(&visitor), &h.services).await;

    assert!(output.is_ok());
    assert_eq!(
        h.ideas.add_calls.lock().unwrap().as_slice(),
        ["Add dark mode support"]
    );
}

#[tokio::test]
async fn create_idea_rejects_anonymous_before_validation() {
    let h = harness();
    let action = actions::CreateIdea {
        input: NewIdea::default(),
    };

    let err = actions::run(&action, None, &h.services).await.unwrap_err();

    assert!(matches!(err, ActionError::Unauthenticated));
    assert!(h.ideas.add_calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn update_idea_requires_collaborator() {
    let h = harness_with_ideas(vec![1]);
    let visitor = make_user(roles::VISITOR);
    let action = actions::UpdateIdea {
        number: 1,
        input: UpdateIdeaInput {
            title: "A better idea title".to_string(),
            description: None,
        },
    };

    let err = actions::run(&action, Some(&visitor), &h.services)
        .await
        .unwrap_err();

    assert!(matches!(err, ActionError::Forbidden));
    // Authorization fails before validation ever touches the services.
    assert!(h.ideas.get_by_number_calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn update_idea_unknown_number_is_a_general_error() {
    let h = harness_with_ideas(vec![1]);
    let action = actions::UpdateIdea {
        number: 99,
        input: UpdateIdeaInput {
            title: "A better idea title".to_string(),
            description: None,
        },
    };

    let result = action.validate(&h.services).await;

    assert!(!result.is_ok());
    assert!(result.failures().is_empty());
    assert!(result.general_error().unwrap().is_not_found());
}

#[tokio::test]
async fn update_idea_executes_for_collaborator() {
    let h = harness_with_ideas(vec![7]);
    let collaborator = make_user(roles::COLLABORATOR);
    let action = actions::UpdateIdea {
        number: 7,
        input: UpdateIdeaInput {
            title: "A better idea title".to_string(),
            description: Some("now with details".to_string()),
        },
    };

    let output = actions::run(&action, Some(&collaborator), &h.services).await;

    assert!(output.is_ok());
    assert_eq!(h.ideas.update_calls.lock().unwrap().as_slice(), [7]);
}

#[tokio::test]
async fn add_comment_requires_content() {
    let h = harness_with_ideas(vec![1]);
    let action = actions::AddComment {
        number: 1,
        input: NewComment {
            content: String::new(),
        },
    };

    let result = action.validate(&h.services).await;

    assert!(!result.is_ok());
    assert_eq!(result.failures().len(), 1);
    assert_eq!(result.failures()[0].field, "content");
}

#[tokio::test]
async fn add_comment_unknown_idea_is_a_general_error() {
    let h = harness();
    let action = actions::AddComment {
        number: 42,
        input: NewComment {
            content: "Great point".to_string(),
        },
    };

    let result = action.validate(&h.services).await;

    assert!(result.general_error().unwrap().is_not_found());
}

#[tokio::test]
async fn add_comment_executes_for_any_authenticated_user() {
    let h = harness_with_ideas(vec![3]);
    let visitor = make_user(roles::VISITOR);
    let action = actions::AddComment {
        number: 3,
        input: NewComment {
            content: "Great point".to_string(),
        },
    };

    let output = actions::run(&action, Some(&visitor), &h.services).await;

    assert!(output.is_ok());
    assert_eq!(
        h.comments.add_calls.lock().unwrap().as_slice(),
        [(3, "Great point".to_string())]
    );
}

#[tokio::test]
async fn set_response_reports_each_violation_independently() {
    let h = harness();
    let action = actions::SetResponse {
        number: 1,
        input: SetResponseInput {
            status: 99,
            text: String::new(),
        },
    };

    let result = action.validate(&h.services).await;

    let fields: Vec<_> = result.failures().iter().map(|f| f.field).collect();
    assert_eq!(fields, ["status", "text"]);
}

#[tokio::test]
async fn set_response_rejects_status_outside_range() {
    let h = harness();
    for bad_status in [-1, 4, 100] {
        let action = actions::SetResponse {
            number: 1,
            input: SetResponseInput {
                status: bad_status,
                text: "We are on it".to_string(),
            },
        };
        let result = action.validate(&h.services).await;
        assert_eq!(result.failures().len(), 1, "status {}", bad_status);
        assert_eq!(result.failures()[0].field, "status");
    }
}

#[tokio::test]
async fn set_response_accepts_every_defined_status() {
    let h = harness_with_ideas(vec![1]);
    let collaborator = make_user(roles::ADMINISTRATOR);
    for status in 0..=3 {
        let action = actions::SetResponse {
            number: 1,
            input: SetResponseInput {
                status,
                text: "We are on it".to_string(),
            },
        };
        let output = actions::run(&action, Some(&collaborator), &h.services).await;
        assert!(output.is_ok(), "status {}", status);
    }
}

#[tokio::test]
async fn invalid_payload_never_reaches_execute() {
    let h = harness_with_ideas(vec![1]);
    let collaborator = make_user(roles::COLLABORATOR);
    let action = actions::SetResponse {
        number: 1,
        input: SetResponseInput {
            status: 99,
            text: String::new(),
        },
    };

    let err = actions::run(&action, Some(&collaborator), &h.services)
        .await
        .unwrap_err();

    assert!(matches!(err, ActionError::Invalid(_)));
    assert!(h.ideas.set_response_calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn tag_actions_require_collaborator() {
    let h = harness();
    let visitor = make_user(roles::VISITOR);
    let tag = make_tag("Bug", "bug");
    let idea = make_idea(1);

    let assign = actions::AssignTag {
        tag: tag.clone(),
        idea: idea.clone(),
    };
    let err = actions::run(&assign, Some(&visitor), &h.services)
        .await
        .unwrap_err();
    assert!(matches!(err, ActionError::Forbidden));

    let remove = actions::RemoveTag { tag };
    let err = actions::run(&remove, None, &h.services).await.unwrap_err();
    assert!(matches!(err, ActionError::Unauthenticated));

    assert!(h.tags.assign_calls.lock().unwrap().is_empty());
    assert!(h.tags.remove_calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn assign_and_unassign_pass_resolved_identities() {
    let h = harness();
    let collaborator = make_user(roles::COLLABORATOR);
    let tag = make_tag("Bug", "bug");
    let idea = make_idea(1);

    let assign = actions::AssignTag {
        tag: tag.clone(),
        idea: idea.clone(),
    };
    actions::run(&assign, Some(&collaborator), &h.services)
        .await
        .unwrap();

    let unassign = actions::UnassignTag {
        tag: tag.clone(),
        idea: idea.clone(),
    };
    actions::run(&unassign, Some(&collaborator), &h.services)
        .await
        .unwrap();

    assert_eq!(
        h.tags.assign_calls.lock().unwrap().as_slice(),
        [(tag.id, idea.id, collaborator.id)]
    );
    assert_eq!(
        h.tags.unassign_calls.lock().unwrap().as_slice(),
        [(tag.id, idea.id)]
    );
}

#[tokio::test]
async fn create_edit_tag_validates_name_and_color() {
    let h = harness();

    let missing_everything = actions::CreateEditTag {
        existing: None,
        input: TagInput::default(),
    };
    let result = missing_everything.validate(&h.services).await;
    let fields: Vec<_> = result.failures().iter().map(|f| f.field).collect();
    assert_eq!(fields, ["name", "color"]);

    let bad_color = actions::CreateEditTag {
        existing: None,
        input: TagInput {
            name: "Bug".to_string(),
            color: "red".to_string(),
            is_public: true,
        },
    };
    let result = bad_color.validate(&h.services).await;
    assert_eq!(result.failures().len(), 1);
    assert_eq!(result.failures()[0].field, "color");
}

#[tokio::test]
async fn create_edit_tag_routes_to_add_or_update() {
    let h = harness();
    let collaborator = make_user(roles::COLLABORATOR);
    let input = TagInput {
        name: "Feature Request".to_string(),
        color: "FF0000".to_string(),
        is_public: true,
    };

    let create = actions::CreateEditTag {
        existing: None,
        input: input.clone(),
    };
    actions::run(&create, Some(&collaborator), &h.services)
        .await
        .unwrap();

    let existing = make_tag("Feature Request", "feature-request");
    let edit = actions::CreateEditTag {
        existing: Some(existing.clone()),
        input,
    };
    actions::run(&edit, Some(&collaborator), &h.services)
        .await
        .unwrap();

    assert_eq!(
        h.tags.add_calls.lock().unwrap().as_slice(),
        ["Feature Request"]
    );
    assert_eq!(h.tags.update_calls.lock().unwrap().as_slice(), [existing.id]);
}
