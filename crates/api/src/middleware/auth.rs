//! Caller identity for the comment write endpoints.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use inkwell_core::error::CoreError;
use inkwell_core::types::DbId;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Body of every 401 produced here; the reason only goes to the debug log.
pub const UNAUTHENTICATED_MESSAGE: &str = "Unauthenticated.";

fn unauthenticated(reason: &'static str) -> AppError {
    tracing::debug!(reason, "Rejected request credentials");
    AppError::Core(CoreError::Unauthorized(UNAUTHENTICATED_MESSAGE.into()))
}

/// The token from `Authorization: Bearer <token>`.
///
/// The scheme name is case-insensitive (RFC 7235).
fn bearer_token(headers: &HeaderMap) -> Result<&str, AppError> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or_else(|| unauthenticated("missing Authorization header"))?
        .to_str()
        .map_err(|_| unauthenticated("Authorization header is not visible ASCII"))?;

    match value.trim().split_once(' ') {
        Some((scheme, token)) if scheme.eq_ignore_ascii_case("bearer") => {
            let token = token.trim();
            if token.is_empty() {
                Err(unauthenticated("empty bearer token"))
            } else {
                Ok(token)
            }
        }
        _ => Err(unauthenticated("Authorization scheme is not Bearer")),
    }
}

/// The authenticated caller.
///
/// Handlers taking this parameter answer anonymous requests with 401 before
/// their own extractors or lookups run.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: DbId,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers)?;

        let claims = validate_token(token, &state.config.jwt)
            .map_err(|_| unauthenticated("token failed signature or expiry checks"))?;

        let user_id = claims
            .user_id()
            .ok_or_else(|| unauthenticated("token subject is not a user id"))?;

        Ok(AuthUser { user_id })
    }
}
