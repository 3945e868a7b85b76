//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Page-number pagination parameter (`?page=`).
///
/// Kept as a raw string so malformed values fall back to page 1 instead of
/// rejecting the request; see [`inkwell_core::pagination::parse_page`].
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}

impl PageParams {
    pub fn page(&self) -> i64 {
        inkwell_core::pagination::parse_page(self.page.as_deref())
    }
}
