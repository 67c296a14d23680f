//! In-memory filtering and pagination over a fetched collection.
//!
//! Every management table in the console works the same way: the full
//! collection is fetched once, then a visible page is *derived* from it
//! client-side. This module is that derivation, kept pure so it can be
//! recomputed on every filter or page change without touching the source.
//!
//! # Algorithm
//!
//! 1. Keep the rows matching the active predicate (the source is never
//!    mutated; the page borrows from it).
//! 2. `total_pages = max(1, ceil(matching / page_size))`.
//! 3. Clamp the requested page into `[1, total_pages]` ("safe page"), so a
//!    filter change can never strand the caller beyond the last page.
//! 4. Slice `[(safe_page - 1) * page_size, +page_size)` for display.
//!
//! An empty source or a filter matching nothing both produce a single page
//! with zero rows; callers render an explicit "no records" state.
//!
//! # Example
//!
//! ```ignore
//! use registra_core::listing::{ListQuery, select_page};
//!
//! let query = ListQuery { page: 3, page_size: 10 };
//! let page = select_page(&courses, |c| c.level == "NCE I", &query);
//!
//! println!("page {} of {}", page.meta.safe_page, page.meta.total_pages);
//! for row in &page.rows {
//!     println!("{}", row.course_code);
//! }
//! ```

/// Requested window into a filtered collection.
///
/// `page` is 1-indexed. `page_size` is clamped to `[1, 100]` when applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListQuery {
    pub page: usize,
    pub page_size: usize,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 10,
        }
    }
}

impl ListQuery {
    /// Returns the effective page size, clamped to `[1, 100]`.
    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size.clamp(1, 100)
    }
}

/// Derived position of a visible page within the filtered result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMeta {
    /// Number of rows matching the active filter.
    pub total: usize,
    /// Page count for the filtered set, never zero.
    pub total_pages: usize,
    /// The requested page clamped into `[1, total_pages]`.
    pub safe_page: usize,
    /// The effective page size that was applied.
    pub page_size: usize,
}

impl PageMeta {
    /// Whether rows exist beyond the visible page.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.safe_page < self.total_pages
    }
}

/// A visible page of rows borrowed from the source collection.
#[derive(Debug)]
pub struct Page<'a, T> {
    pub rows: Vec<&'a T>,
    pub meta: PageMeta,
}

impl<T> Page<'_, T> {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Derives the visible page of `source` under `matches` and `query`.
///
/// Pure: the same inputs always produce the same page, and `source` is never
/// modified. Rows keep their source order.
pub fn select_page<'a, T, F>(source: &'a [T], matches: F, query: &ListQuery) -> Page<'a, T>
where
    F: Fn(&T) -> bool,
{
    let filtered: Vec<&T> = source.iter().filter(|row| matches(row)).collect();

    let page_size = query.page_size();
    let total = filtered.len();
    let total_pages = total.div_ceil(page_size).max(1);
    let safe_page = query.page.clamp(1, total_pages);

    let start = (safe_page - 1) * page_size;
    let rows = filtered
        .into_iter()
        .skip(start)
        .take(page_size)
        .collect::<Vec<_>>();

    Page {
        rows,
        meta: PageMeta {
            total,
            total_pages,
            safe_page,
            page_size,
        },
    }
}

/// Case-insensitive substring match, the comparison behind every free-text
/// search box. An empty needle matches everything.
#[must_use]
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
