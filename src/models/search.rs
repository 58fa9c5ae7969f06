//! Search session models: query context, page window, wire payload.

use serde::{Deserialize, Serialize};

use crate::models::Article;

/// Fixed number of articles per page.
pub const PAGE_SIZE: u32 = 5;

/// The query text plus optional filters defining one search session.
///
/// Immutable for the lifetime of a session; a new search replaces it
/// wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchContext {
    /// Keyword or phrase matched against title and content
    pub query: String,

    /// Two-letter language code filter
    pub language: Option<String>,

    /// Two-letter source-country code filter
    pub country: Option<String>,
}

impl SearchContext {
    /// Create a context for a plain keyword search.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            language: None,
            country: None,
        }
    }

    /// Restrict results to a language code.
    pub fn language(mut self, code: impl Into<String>) -> Self {
        self.language = Some(code.into());
        self
    }

    /// Restrict results to a source-country code.
    pub fn country(mut self, code: impl Into<String>) -> Self {
        self.country = Some(code.into());
        self
    }
}

/// Offset and result-count bookkeeping for the active search.
///
/// `offset` is always a multiple of [`PAGE_SIZE`] and stays within
/// `[0, (total_pages - 1) * PAGE_SIZE]` while the counts reflect the
/// upstream result set. The all-zero default is the degenerate state
/// before a search succeeds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageWindow {
    /// Zero-based index of the first article on the current page
    pub offset: u32,

    /// Total matching articles reported by the API
    pub total_count: u32,

    /// Derived page count; at least 1 once a search has succeeded
    pub total_pages: u32,
}

impl PageWindow {
    /// Window over `total_count` articles, positioned on the first page.
    ///
    /// A successful search always yields at least one page, even when
    /// it matched nothing.
    pub fn for_count(total_count: u32) -> Self {
        Self {
            offset: 0,
            total_count,
            total_pages: std::cmp::max(1, total_count.div_ceil(PAGE_SIZE)),
        }
    }

    /// 1-based page number for display, 0 when there are no results.
    pub fn current_page(&self) -> u32 {
        if self.total_count == 0 {
            0
        } else {
            self.offset / PAGE_SIZE + 1
        }
    }

    /// Whether a further page exists past the current offset.
    pub fn has_next(&self) -> bool {
        self.offset + PAGE_SIZE < self.total_count
    }

    /// Whether the window sits past the first page.
    pub fn has_prev(&self) -> bool {
        self.offset > 0
    }

    /// Offset of the final page.
    pub fn last_offset(&self) -> u32 {
        self.total_pages.saturating_sub(1) * PAGE_SIZE
    }
}

/// Raw response payload from the search endpoint.
///
/// `news` is `None` when the key was missing entirely; callers must
/// treat that as "no results," not as an error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchPayload {
    /// Articles for the requested page
    #[serde(default)]
    pub news: Option<Vec<Article>>,

    /// Total matching articles across all pages
    #[serde(default)]
    pub available: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count_formula() {
        // total_pages == max(1, ceil(total_count / 5))
        for (count, pages) in [(0, 1), (1, 1), (5, 1), (6, 2), (10, 2), (12, 3), (50, 10)] {
            assert_eq!(
                PageWindow::for_count(count).total_pages,
                pages,
                "count {}",
                count
            );
        }
    }

    #[test]
    fn test_navigation_predicates() {
        let mut window = PageWindow::for_count(12);
        assert!(window.has_next());
        assert!(!window.has_prev());
        assert_eq!(window.current_page(), 1);
        assert_eq!(window.last_offset(), 10);

        window.offset = 10;
        assert!(!window.has_next());
        assert!(window.has_prev());
        assert_eq!(window.current_page(), 3);
    }

    #[test]
    fn test_empty_window_displays_page_zero() {
        let window = PageWindow::default();
        assert_eq!(window.current_page(), 0);
        assert!(!window.has_next());
        assert!(!window.has_prev());
        assert_eq!(window.last_offset(), 0);
    }

    #[test]
    fn test_context_builder() {
        let ctx = SearchContext::new("climate").language("en").country("us");
        assert_eq!(ctx.query, "climate");
        assert_eq!(ctx.language.as_deref(), Some("en"));
        assert_eq!(ctx.country.as_deref(), Some("us"));
    }

    #[test]
    fn test_payload_missing_news_key() {
        let payload: SearchPayload = serde_json::from_str(r#"{"available": 3}"#).unwrap();
        assert!(payload.news.is_none());
        assert_eq!(payload.available, Some(3));
    }
}
