//! # Server Configuration
//!
//! This module contains the server setup and configuration for the
//! Ideaboard API: application state, routing, middleware layering, and
//! graceful shutdown.

use std::sync::Arc;

use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use sea_orm::DatabaseConnection;
use tokio_util::sync::CancellationToken;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::auth;
use crate::config::AppConfig;
use crate::handlers;

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub db: DatabaseConnection,
}

/// Creates and configures the Axum application router
pub fn create_app(state: AppState) -> Router {
    let api = Router::new()
        .route(
            "/ideas",
            post(handlers::ideas::create_idea).get(handlers::ideas::list_ideas),
        )
        .route(
            "/ideas/{number}",
            get(handlers::ideas::get_idea).put(handlers::ideas::update_idea),
        )
        .route("/ideas/{number}/status", put(handlers::ideas::set_response))
        .route(
            "/ideas/{number}/comments",
            post(handlers::ideas::add_comment).get(handlers::ideas::list_comments),
        )
        .route("/ideas/{number}/tags", get(handlers::tags::list_idea_tags))
        .route(
            "/ideas/{number}/tags/{slug}",
            post(handlers::tags::assign_tag).delete(handlers::tags::unassign_tag),
        )
        .route(
            "/tags",
            get(handlers::tags::list_tags).post(handlers::tags::create_tag),
        )
        .route(
            "/tags/{slug}",
            put(handlers::tags::update_tag).delete(handlers::tags::delete_tag),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::auth_middleware,
        ));

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
}

/// Starts the server with the given configuration, shutting down
/// gracefully on SIGINT/SIGTERM.
pub async fn run_server(config: AppConfig, db: DatabaseConnection) -> anyhow::Result<()> {
    let state = AppState {
        config: Arc::new(config),
        db,
    };
    let app = create_app(state.clone());

    let addr = state
        .config
        .bind_addr()
        .map_err(|e| anyhow::anyhow!("Invalid server address: {}", e))?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, profile = %state.config.profile, "Server listening");

    let shutdown = CancellationToken::new();
    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        wait_for_shutdown_signal().await;
        tracing::info!("Shutdown signal received");
        signal_token.cancel();
    });

    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await?;

    Ok(())
}

async fn wait_for_shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::root,
        crate::handlers::health,
        crate::handlers::ideas::create_idea,
        crate::handlers::ideas::list_ideas,
        crate::handlers::ideas::get_idea,
        crate::handlers::ideas::update_idea,
        crate::handlers::ideas::set_response,
        crate::handlers::ideas::add_comment,
        crate::handlers::ideas::list_comments,
        crate::handlers::tags::list_tags,
        crate::handlers::tags::create_tag,
        crate::handlers::tags::update_tag,
        crate::handlers::tags::delete_tag,
        crate::handlers::tags::list_idea_tags,
        crate::handlers::tags::assign_tag,
        crate::handlers::tags::unassign_tag,
    ),
    components(
        schemas(
            crate::models::ServiceInfo,
            crate::error::ApiError,
            crate::validate::FieldFailure,
            crate::handlers::types::IdeaResponse,
            crate::handlers::types::CommentResponse,
            crate::handlers::types::TagResponse,
            crate::actions::idea::NewIdea,
            crate::actions::idea::UpdateIdeaInput,
            crate::actions::idea::NewComment,
            crate::actions::idea::SetResponseInput,
            crate::actions::tag::TagInput,
        )
    ),
    info(
        title = "Ideaboard API",
        description = "Multi-tenant feedback and idea tracking API",
        version = env!("CARGO_PKG_VERSION"),
    )
)]
pub struct ApiDoc;
