//! Route definitions for article comments.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::comments;
use crate::state::AppState;

/// Article-scoped comment routes, nested under `/articles`.
///
/// ```text
/// GET    /{slug}/comments                     list_comments
/// POST   /{slug}/comments                     create_comment
/// ```
pub fn article_comments_router() -> Router<AppState> {
    Router::new().route(
        "/{slug}/comments",
        get(comments::list_comments).post(comments::create_comment),
    )
}

/// Comment routes addressed by id, nested under `/comments`.
///
/// ```text
/// DELETE /{id}                                delete_comment
/// ```
pub fn comments_router() -> Router<AppState> {
    Router::new().route("/{id}", delete(comments::delete_comment))
}
