//! Authentication primitives.
//!
//! - [`jwt`] -- Bearer token verification.

pub mod jwt;
