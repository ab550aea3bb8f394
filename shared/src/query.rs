//! Query types
//!
//! List queries for reference data and paged result sets.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Apply the direction to an ascending ordering
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// List query for reference data
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListQuery {
    /// Case-insensitive substring matched against name and description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Sort field: "name" or a numeric field of the record kind
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(default)]
    pub direction: SortDirection,
}

impl ListQuery {
    /// Query returning every record in insertion order
    pub fn all() -> Self {
        Self::default()
    }

    /// Add a search term
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Add sorting
    pub fn order_by(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.sort = Some(field.into());
        self.direction = direction;
        self
    }
}

/// Paged result set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    /// Items on this page
    pub data: Vec<T>,
    /// Total items across all pages
    pub total: u64,
    /// Current page (1-based)
    pub page: u32,
    /// Page size
    pub limit: u32,
    /// Total pages (at least 1)
    pub total_pages: u32,
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, total: u64, page: u32, limit: u32) -> Self {
        Self {
            data,
            total,
            page,
            limit,
            total_pages: total_pages(total, limit),
        }
    }

    /// Slice one page out of the full result set.
    ///
    /// `page` is clamped into `1..=total_pages`.
    pub fn from_items(items: Vec<T>, page: u32, limit: u32) -> Self {
        let total = items.len() as u64;
        let pages = total_pages(total, limit);
        let page = page.clamp(1, pages);
        if limit == 0 {
            return Self::new(items, total, 1, 0);
        }
        let start = (page as usize - 1) * limit as usize;
        let data = items.into_iter().skip(start).take(limit as usize).collect();
        Self::new(data, total, page, limit)
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }
}

/// Number of pages needed for `total` items; an empty set still has one page
pub fn total_pages(total: u64, limit: u32) -> u32 {
    if limit == 0 || total == 0 {
        return 1;
    }
    total.div_ceil(limit as u64) as u32
}
