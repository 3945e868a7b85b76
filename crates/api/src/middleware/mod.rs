//! Request extractors guarding authenticated routes.
//!
//! - [`auth::AuthUser`] -- Extracts the caller from a JWT Bearer token.

pub mod auth;
