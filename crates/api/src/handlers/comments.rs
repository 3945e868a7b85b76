//! Handlers for article comments.
//!
//! Listing is public. Posting and deleting require a Bearer token; the
//! [`AuthUser`] extractor rejects anonymous callers before any lookup runs.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::Value;

use inkwell_core::comment::{
    CreateCommentRequest, CONTENT_NOT_STRING_MESSAGE, CONTENT_TOO_LONG_MESSAGE,
};
use inkwell_core::error::CoreError;
use inkwell_core::types::DbId;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::PageParams;
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

/* --------------------------------------------------------------------------
Helpers
-------------------------------------------------------------------------- */

/// Read the create request out of the raw JSON extraction result.
///
/// Only a JSON object can carry `content`; any other JSON value, or a body
/// sent without a JSON content type, reads as an empty request and fails
/// the `required` rule. A body over the size cap is by construction longer
/// than any valid comment.
fn create_request_from(
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<CreateCommentRequest> {
    match body {
        Ok(Json(Value::Object(mut fields))) => match fields.remove("content") {
            None | Some(Value::Null) => Ok(CreateCommentRequest::default()),
            Some(Value::String(content)) => Ok(CreateCommentRequest::new(content)),
            Some(_) => Err(AppError::Core(CoreError::invalid_field(
                "content",
                CONTENT_NOT_STRING_MESSAGE,
            ))),
        },
        Ok(Json(_)) | Err(JsonRejection::MissingJsonContentType(_)) => {
            Ok(CreateCommentRequest::default())
        }
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => Err(
            AppError::Core(CoreError::invalid_field("content", CONTENT_TOO_LONG_MESSAGE)),
        ),
        Err(rejection) => Err(AppError::BadRequest(rejection.body_text())),
    }
}

/// Comment ids that do not parse as integers cannot name an existing row.
fn parse_comment_id(raw: &str) -> AppResult<DbId> {
    raw.parse::<DbId>()
        .map_err(|_| AppError::Core(CoreError::not_found("Comment", raw)))
}

/* --------------------------------------------------------------------------
Comment handlers
-------------------------------------------------------------------------- */

/// GET /articles/{slug}/comments
///
/// Approved comments of the article, newest first, 20 per page.
pub async fn list_comments(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(params): Query<PageParams>,
) -> AppResult<impl IntoResponse> {
    let page = state.comments.list(&slug, params.page()).await?;
    Ok(Json(DataResponse::new(page)))
}

/// POST /articles/{slug}/comments
pub async fn create_comment(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(slug): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let input = match create_request_from(body) {
        Ok(input) => input,
        Err(body_error) => {
            // An unknown article outranks anything wrong with the body.
            state.comments.find_article(&slug).await?;
            return Err(body_error);
        }
    };
    let created = state.comments.create(&slug, input, auth.user_id).await?;

    tracing::info!(
        user_id = auth.user_id,
        article_id = created.comment.article_id,
        comment_id = created.comment.id,
        "Comment posted"
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse::with_message(
            "Comment posted successfully",
            created,
        )),
    ))
}

/// DELETE /comments/{id}
///
/// Only the comment's author may delete it.
pub async fn delete_comment(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let comment_id = parse_comment_id(&raw_id)?;
    state.comments.delete(comment_id, auth.user_id).await?;

    tracing::info!(
        user_id = auth.user_id,
        comment_id = comment_id,
        "Comment deleted"
    );

    Ok(Json(MessageResponse::new("Comment deleted successfully")))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    fn read(body: Value) -> AppResult<CreateCommentRequest> {
        create_request_from(Ok(Json(body)))
    }

    #[test]
    fn object_body_carries_string_content() {
        let input = read(json!({ "content": "Hello", "extra": 1 })).unwrap();
        assert_eq!(input.content.as_deref(), Some("Hello"));
    }

    #[test]
    fn non_object_bodies_read_as_empty() {
        for body in [json!(["Hello"]), json!("Hello"), json!(null), json!(7)] {
            let input = read(body.clone()).unwrap();
            assert!(input.content.is_none(), "{body}");
        }
    }

    #[test]
    fn non_string_content_is_a_validation_error() {
        for content in [json!(42), json!(true), json!(["Hello"]), json!({ "text": "Hello" })] {
            assert_matches!(
                read(json!({ "content": content })),
                Err(AppError::Core(CoreError::Validation(_)))
            );
        }
    }

    #[test]
    fn non_numeric_comment_id_is_not_found() {
        assert_matches!(
            parse_comment_id("abc"),
            Err(AppError::Core(CoreError::NotFound { entity: "Comment", .. }))
        );
        assert_eq!(parse_comment_id("42").unwrap(), 42);
    }
}
