//! Pagination utilities for service layer
//!
//! Provides a simple `Pagination` struct and helpers to normalize inputs.

use serde::Deserialize;

/// Pagination parameters, as sent in the query string (`?page=2&limit=10`).
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct Pagination {
    /// 1-based page index
    #[serde(default = "default_page")]
    pub page: u32,
    /// items per page
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_page() -> u32 { 1 }
fn default_limit() -> u32 { 10 }

impl Pagination {
    /// Clamp to sane defaults and convert to `(0-based page index, page size)`
    pub fn normalize(self) -> (u64, u64) {
        let page = if self.page == 0 { 1 } else { self.page };
        let limit = self.limit.clamp(1, 100);
        ((page - 1) as u64, limit as u64)
    }

    /// Number of pages needed for `total` items; an empty listing still has one page.
    pub fn page_count(self, total: u64) -> u64 {
        let (_, limit) = self.normalize();
        total.div_ceil(limit).max(1)
    }
}

impl Default for Pagination {
    fn default() -> Self { Self { page: default_page(), limit: default_limit() } }
}
