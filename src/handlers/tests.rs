//! # Tests for Handlers
//!
//! Unit tests for the handler layer's DTO mapping and the public root
//! endpoint. The full request flow is exercised by the integration tests.

use chrono::Utc;
use uuid::Uuid;

use crate::handlers::root;
use crate::handlers::types::{CommentResponse, IdeaResponse, TagResponse};
use crate::models::{comment, idea, tag};

#[tokio::test]
async fn root_returns_service_info() {
    let axum::Json(info) = root().await;

    assert_eq!(info.service, "ideaboard");
    assert_eq!(info.version, env!("CARGO_PKG_VERSION"));
}

#[test]
fn idea_response_carries_number_and_status() {
    let model = idea::Model {
        id: Uuid::new_v4(),
        tenant_id: Uuid::new_v4(),
        number: 12,
        title: "Add dark mode support".to_string(),
        description: Some("please".to_string()),
        created_by: Uuid::new_v4(),
        status: idea::IdeaStatus::Started as i32,
        response: Some("We are on it".to_string()),
        response_user_id: Some(Uuid::new_v4()),
        response_at: Some(Utc::now().into()),
        created_at: Utc::now().into(),
        updated_at: Utc::now().into(),
    };

    let dto = IdeaResponse::from(model.clone());

    assert_eq!(dto.number, 12);
    assert_eq!(dto.status, idea::IdeaStatus::Started as i32);
    assert_eq!(dto.response.as_deref(), Some("We are on it"));
    assert_eq!(dto.title, model.title);
}

#[test]
fn tag_response_exposes_slug() {
    let model = tag::Model {
        id: Uuid::new_v4(),
        tenant_id: Uuid::new_v4(),
        name: "Feature Request".to_string(),
        slug: "feature-request".to_string(),
        color: "FF0000".to_string(),
        is_public: true,
        created_at: Utc::now().into(),
        updated_at: Utc::now().into(),
    };

    let dto = TagResponse::from(model);

    assert_eq!(dto.slug, "feature-request");
    assert_eq!(dto.color, "FF0000");
    assert!(dto.is_public);
}

#[test]
fn comment_response_keeps_author() {
    let author = Uuid::new_v4();
    let model = comment::Model {
        id: Uuid::new_v4(),
        tenant_id: Uuid::new_v4(),
        idea_id: Uuid::new_v4(),
        content: "Great point".to_string(),
        created_by: author,
        created_at: Utc::now().into(),
    };

    let dto = CommentResponse::from(model);

    assert_eq!(dto.created_by, author);
    assert_eq!(dto.content, "Great point");
}
