//! Bearer token verification.
//!
//! Tokens are HS256 JWTs issued by the identity provider that shares
//! `JWT_SECRET` with this service. Only verification happens here.

use std::fmt;

use inkwell_core::types::DbId;
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::Deserialize;

/// The subset of registered claims this service reads.
#[derive(Debug, Deserialize, Clone)]
pub struct Claims {
    /// Subject: the user's id as a decimal string (RFC 7519 `StringOrURI`).
    pub sub: String,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
}

impl Claims {
    /// The caller's user id, or `None` when `sub` is not a decimal id.
    pub fn user_id(&self) -> Option<DbId> {
        self.sub.trim().parse().ok()
    }
}

/// Verification settings.
#[derive(Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret shared with the token issuer.
    pub secret: String,
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .finish()
    }
}

impl JwtConfig {
    /// Read `JWT_SECRET` from the environment.
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is not set or is empty.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");
        Self { secret }
    }
}

/// Check the signature and expiry of `token` and return its claims.
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(token_data.claims)
}
