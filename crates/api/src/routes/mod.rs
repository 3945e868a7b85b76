pub mod comments;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /articles/{slug}/comments                        list (public), create (auth)
/// /comments/{id}                                   delete (auth, author only)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/articles", comments::article_comments_router())
        .nest("/comments", comments::comments_router())
}
