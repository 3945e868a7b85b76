use std::sync::Arc;

use inkwell_core::service::CommentService;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Comment operations over the configured repositories.
    pub comments: CommentService,
    /// Server configuration (JWT settings are read by the auth extractor).
    pub config: Arc<ServerConfig>,
    /// Database pool, when the repositories are Postgres-backed. Used by `/health`.
    pub pool: Option<inkwell_db::DbPool>,
}
