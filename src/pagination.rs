//! Page-based listing helpers shared by repository queries and services.

use serde::{Deserialize, Serialize};

/// Items per page used by the administrative list screens.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 25;

/// A page request. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

/// One page of results together with paging metadata for templates.
#[derive(Debug, Clone, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub total_pages: usize,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, page: usize, total_pages: usize) -> Self {
        Self {
            items,
            page,
            total_pages,
        }
    }
}
