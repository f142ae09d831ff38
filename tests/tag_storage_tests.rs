//! Tag lifecycle tests over in-memory SQLite: add, update, remove,
//! assignment semantics, and cascade behavior.

use anyhow::Result;
use sea_orm::EntityTrait;

use ideaboard::error::RepositoryError;
use ideaboard::models::idea_tag;
use ideaboard::models::user::roles;

#[path = "test_utils/mod.rs"]
mod test_utils;
use test_utils::{create_test_collaborator, create_test_tenant, create_test_user, services_for, setup_test_db};

#[tokio::test]
async fn add_and_get_by_slug() -> Result<()> {
    let db = setup_test_db().await?;
    let tenant = create_test_tenant(&db).await?;
    let services = services_for(&db, tenant);

    let tag = services.tags.add("Feature Request", "FF0000", true).await?;
    assert_eq!(tag.slug, "feature-request");

    let db_tag = services.tags.get_by_slug("feature-request").await?;

    assert_eq!(db_tag.id, tag.id);
    assert_eq!(db_tag.name, "Feature Request");
    assert_eq!(db_tag.slug, "feature-request");
    assert_eq!(db_tag.color, "FF0000");
    assert!(db_tag.is_public);

    Ok(())
}

#[tokio::test]
async fn add_update_and_get_by_new_slug() -> Result<()> {
    let db = setup_test_db().await?;
    let tenant = create_test_tenant(&db).await?;
    let services = services_for(&db, tenant);

    let tag = services.tags.add("Feature Request", "FF0000", true).await?;
    let updated = services.tags.update(tag.id, "Bug", "000000", false).await?;
    assert_eq!(updated.slug, "bug");

    let db_tag = services.tags.get_by_slug("bug").await?;

    assert_eq!(db_tag.id, tag.id);
    assert_eq!(db_tag.name, "Bug");
    assert_eq!(db_tag.color, "000000");
    assert!(!db_tag.is_public);

    // The old slug no longer resolves.
    let old = services.tags.get_by_slug("feature-request").await;
    assert!(matches!(old, Err(RepositoryError::NotFound(_))));

    Ok(())
}

#[tokio::test]
async fn add_remove_and_get() -> Result<()> {
    let db = setup_test_db().await?;
    let tenant = create_test_tenant(&db).await?;
    let services = services_for(&db, tenant);

    let tag = services.tags.add("Bug", "FFFFFF", true).await?;

    services.tags.remove(tag.id).await?;

    let gone = services.tags.get_by_slug("bug").await;
    assert!(matches!(gone, Err(RepositoryError::NotFound(_))));

    Ok(())
}

#[tokio::test]
async fn remove_unknown_tag_is_not_found() -> Result<()> {
    let db = setup_test_db().await?;
    let tenant = create_test_tenant(&db).await?;
    let services = services_for(&db, tenant);

    let result = services.tags.remove(uuid::Uuid::new_v4()).await;
    assert!(matches!(result, Err(RepositoryError::NotFound(_))));

    Ok(())
}

#[tokio::test]
async fn assign_and_unassign() -> Result<()> {
    let db = setup_test_db().await?;
    let tenant = create_test_tenant(&db).await?;
    let user = create_test_user(&db, tenant, roles::VISITOR).await?;
    let services = services_for(&db, tenant);

    let idea = services
        .ideas
        .add("My great idea", Some("with a great description"), user.id)
        .await?;
    let tag = services.tags.add("Bug", "FFFFFF", true).await?;

    services.tags.assign(tag.id, idea.id, user.id).await?;

    let assigned = services.tags.get_assigned(idea.id).await?;
    assert_eq!(assigned.len(), 1);
    assert_eq!(assigned[0].id, tag.id);
    assert_eq!(assigned[0].name, "Bug");
    assert_eq!(assigned[0].slug, "bug");
    assert_eq!(assigned[0].color, "FFFFFF");
    assert!(assigned[0].is_public);

    services.tags.unassign(tag.id, idea.id).await?;

    let assigned = services.tags.get_assigned(idea.id).await?;
    assert!(assigned.is_empty());

    Ok(())
}

#[tokio::test]
async fn assign_twice_leaves_one_row() -> Result<()> {
    let db = setup_test_db().await?;
    let tenant = create_test_tenant(&db).await?;
    let user = create_test_collaborator(&db, tenant).await?;
    let services = services_for(&db, tenant);

    let idea = services.ideas.add("My great idea", None, user.id).await?;
    let tag = services.tags.add("Bug", "FFFFFF", true).await?;

    services.tags.assign(tag.id, idea.id, user.id).await?;
    // Second assignment of the same pair must be a no-op, not an error.
    services.tags.assign(tag.id, idea.id, user.id).await?;

    let rows = idea_tag::Entity::find().all(&db).await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].tag_id, tag.id);
    assert_eq!(rows[0].idea_id, idea.id);

    Ok(())
}

#[tokio::test]
async fn unassign_missing_pair_is_not_an_error() -> Result<()> {
    let db = setup_test_db().await?;
    let tenant = create_test_tenant(&db).await?;
    let user = create_test_collaborator(&db, tenant).await?;
    let services = services_for(&db, tenant);

    let idea = services.ideas.add("My great idea", None, user.id).await?;
    let tag = services.tags.add("Bug", "FFFFFF", true).await?;

    services.tags.unassign(tag.id, idea.id).await?;
    services.tags.unassign(tag.id, idea.id).await?;

    Ok(())
}

#[tokio::test]
async fn remove_tag_cascades_assignments() -> Result<()> {
    let db = setup_test_db().await?;
    let tenant = create_test_tenant(&db).await?;
    let user = create_test_collaborator(&db, tenant).await?;
    let services = services_for(&db, tenant);

    let first = services.ideas.add("My great idea", None, user.id).await?;
    let second = services.ideas.add("My other idea", None, user.id).await?;
    let tag = services.tags.add("Bug", "FFFFFF", true).await?;

    services.tags.assign(tag.id, first.id, user.id).await?;
    services.tags.assign(tag.id, second.id, user.id).await?;

    services.tags.remove(tag.id).await?;

    assert!(services.tags.get_assigned(first.id).await?.is_empty());
    assert!(services.tags.get_assigned(second.id).await?.is_empty());

    // No orphaned assignment rows remain.
    let rows = idea_tag::Entity::find().all(&db).await?;
    assert!(rows.is_empty());

    // The ideas themselves are untouched.
    let still_there = services.ideas.get_by_number(first.number).await?;
    assert_eq!(still_there.id, first.id);

    Ok(())
}
