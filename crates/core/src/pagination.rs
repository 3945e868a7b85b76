//! Page-number pagination helpers and the paginated response payload.

use serde::Serialize;

/// Fixed page size for comment listings.
pub const COMMENTS_PER_PAGE: i64 = 20;

/// Parse a user-provided `page` query value.
///
/// Missing, non-numeric and non-positive values all fall back to page 1.
pub fn parse_page(raw: Option<&str>) -> i64 {
    raw.and_then(|p| p.trim().parse::<i64>().ok())
        .filter(|p| *p >= 1)
        .unwrap_or(1)
}

/// Row offset for a 1-based page number.
pub fn page_offset(page: i64, per_page: i64) -> i64 {
    page.max(1).saturating_sub(1).saturating_mul(per_page)
}

/// One page of results plus the metadata clients need to navigate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub current_page: i64,
    pub data: Vec<T>,
    pub per_page: i64,
    pub total: i64,
    pub last_page: i64,
    /// 1-based position of the first item on this page, `None` when empty.
    pub from: Option<i64>,
    /// 1-based position of the last item on this page, `None` when empty.
    pub to: Option<i64>,
}

impl<T> Page<T> {
    pub fn new(data: Vec<T>, current_page: i64, per_page: i64, total: i64) -> Self {
        let last_page = if total <= 0 {
            1
        } else {
            (total + per_page - 1) / per_page
        };
        let (from, to) = if data.is_empty() {
            (None, None)
        } else {
            let first = page_offset(current_page, per_page).saturating_add(1);
            (Some(first), Some(first.saturating_add(data.len() as i64 - 1)))
        };

        Self {
            current_page,
            data,
            per_page,
            total,
            last_page,
            from,
            to,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
