//! Search session state and pagination.
//!
//! [`NewsSession`] tracks the active query, the page window, and the
//! most recently fetched page of articles. Navigation re-fetches from
//! the API on every call; previous pages are never cached, so each page
//! shown is as fresh as the upstream index.
//!
//! Operations are sequential: the session performs no internal locking
//! and expects at most one in-flight call at a time. Independent
//! sessions share nothing and can run in parallel freely.

use tracing::{debug, warn};

use crate::client::NewsApi;
use crate::models::{Article, PageWindow, SearchContext, SearchPayload, PAGE_SIZE};

/// Freshness of the page a session currently holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PageStatus {
    /// No search has been issued yet.
    #[default]
    Empty,

    /// The page reflects the most recent successful fetch.
    Fresh,

    /// The most recent fetch failed and the page was cleared. A stale
    /// page from an earlier offset is never silently retained.
    Unavailable,
}

/// Errors reported to the caller before any request is made
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The query was empty or all whitespace
    #[error("search query must not be empty")]
    EmptyQuery,
}

/// One search session: context, window, and the current page.
#[derive(Debug)]
pub struct NewsSession<C: NewsApi> {
    client: C,
    context: Option<SearchContext>,
    window: PageWindow,
    articles: Vec<Article>,
    status: PageStatus,
}

impl<C: NewsApi> NewsSession<C> {
    /// Create an empty session around an API client.
    pub fn new(client: C) -> Self {
        Self {
            client,
            context: None,
            window: PageWindow::default(),
            articles: Vec::new(),
            status: PageStatus::Empty,
        }
    }

    /// Start a new search, replacing all prior session state.
    ///
    /// Returns the first page of results. A blank query is rejected
    /// before any request is made; that is the only caller-facing
    /// validation error. A failed fetch leaves the session empty with
    /// [`PageStatus::Unavailable`] and zeroed counts.
    pub async fn search(&mut self, ctx: SearchContext) -> Result<&[Article], SearchError> {
        if ctx.query.trim().is_empty() {
            return Err(SearchError::EmptyQuery);
        }

        self.window = PageWindow::default();
        let ctx = self.context.insert(ctx);

        match self.client.fetch(ctx, 0).await {
            Ok(SearchPayload {
                news: Some(articles),
                available,
            }) => {
                let total = available.unwrap_or(articles.len() as u32);
                self.window = PageWindow::for_count(total);
                self.articles = articles;
                self.status = PageStatus::Fresh;
            }
            Ok(_) => {
                debug!("search payload had no news field, treating as no results");
                self.clear_unavailable();
            }
            Err(err) => {
                warn!(error = %err, "search request failed");
                self.clear_unavailable();
            }
        }

        Ok(&self.articles)
    }

    /// Advance to the next page.
    ///
    /// A no-op returning an empty slice at the last page boundary:
    /// neither the offset nor the current page changes.
    pub async fn next_page(&mut self) -> &[Article] {
        if self.window.offset + PAGE_SIZE >= self.window.total_count {
            return &[];
        }
        self.window.offset += PAGE_SIZE;
        self.fetch_current().await
    }

    /// Step back one page. A no-op returning an empty slice when
    /// already on the first page.
    pub async fn prev_page(&mut self) -> &[Article] {
        if self.window.offset == 0 {
            return &[];
        }
        self.window.offset -= PAGE_SIZE;
        self.fetch_current().await
    }

    /// Jump to the first page, regardless of the current offset.
    pub async fn first_page(&mut self) -> &[Article] {
        if self.context.is_none() {
            return &[];
        }
        self.window.offset = 0;
        self.fetch_current().await
    }

    /// Jump to the last page, regardless of the current offset.
    pub async fn last_page(&mut self) -> &[Article] {
        if self.context.is_none() {
            return &[];
        }
        self.window.offset = self.window.last_offset();
        self.fetch_current().await
    }

    /// Fetch the page at the current offset and replace the result set.
    ///
    /// On failure the page is cleared and marked unavailable rather
    /// than left holding articles from the previous offset; the window
    /// counts are kept so the caller can retry navigation.
    async fn fetch_current(&mut self) -> &[Article] {
        let Some(ctx) = &self.context else {
            return &[];
        };

        match self.client.fetch(ctx, self.window.offset).await {
            Ok(SearchPayload {
                news: Some(articles),
                ..
            }) => {
                self.articles = articles;
                self.status = PageStatus::Fresh;
            }
            Ok(_) => {
                debug!(
                    offset = self.window.offset,
                    "page payload had no news field, clearing page"
                );
                self.articles.clear();
                self.status = PageStatus::Unavailable;
            }
            Err(err) => {
                warn!(error = %err, offset = self.window.offset, "page fetch failed");
                self.articles.clear();
                self.status = PageStatus::Unavailable;
            }
        }

        &self.articles
    }

    fn clear_unavailable(&mut self) {
        self.articles.clear();
        self.window = PageWindow::default();
        self.status = PageStatus::Unavailable;
    }

    /// Articles on the current page.
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// The active search context, if a search has been issued.
    pub fn context(&self) -> Option<&SearchContext> {
        self.context.as_ref()
    }

    /// The current page window.
    pub fn window(&self) -> PageWindow {
        self.window
    }

    /// Zero-based offset of the current page.
    pub fn offset(&self) -> u32 {
        self.window.offset
    }

    /// Total matching articles reported by the last search.
    pub fn total_count(&self) -> u32 {
        self.window.total_count
    }

    /// Total pages for the last search.
    pub fn total_pages(&self) -> u32 {
        self.window.total_pages
    }

    /// Freshness of the held page.
    pub fn status(&self) -> PageStatus {
        self.status
    }

    /// Whether a further page exists.
    pub fn has_next(&self) -> bool {
        self.window.has_next()
    }

    /// Whether an earlier page exists.
    pub fn has_prev(&self) -> bool {
        self.window.has_prev()
    }

    /// The underlying API client.
    pub fn client(&self) -> &C {
        &self.client
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::{make_page, MockNewsApi};

    #[test]
    fn test_empty_query_rejected_before_any_request() {
        tokio_test::block_on(async {
            let mut session = NewsSession::new(MockNewsApi::new());
            let err = session.search(SearchContext::new("   ")).await.unwrap_err();
            assert_eq!(err, SearchError::EmptyQuery);
            assert!(session.client().calls().is_empty());
            assert_eq!(session.status(), PageStatus::Empty);
        });
    }

    #[test]
    fn test_search_initializes_window() {
        tokio_test::block_on(async {
            let mock = MockNewsApi::new();
            mock.stage_page(0, make_page(5, 12));

            let mut session = NewsSession::new(mock);
            let page = session.search(SearchContext::new("climate")).await.unwrap();

            assert_eq!(page.len(), 5);
            assert_eq!(session.offset(), 0);
            assert_eq!(session.total_count(), 12);
            assert_eq!(session.total_pages(), 3);
            assert_eq!(session.status(), PageStatus::Fresh);
        });
    }

    #[test]
    fn test_available_defaults_to_returned_count() {
        tokio_test::block_on(async {
            let mock = MockNewsApi::new();
            let mut page = make_page(3, 0);
            page.available = None;
            mock.stage_page(0, page);

            let mut session = NewsSession::new(mock);
            session.search(SearchContext::new("rates")).await.unwrap();

            assert_eq!(session.total_count(), 3);
            assert_eq!(session.total_pages(), 1);
        });
    }

    #[test]
    fn test_navigation_before_search_is_inert() {
        tokio_test::block_on(async {
            let mut session = NewsSession::new(MockNewsApi::new());
            assert!(session.next_page().await.is_empty());
            assert!(session.prev_page().await.is_empty());
            assert!(session.first_page().await.is_empty());
            assert!(session.last_page().await.is_empty());
            assert!(session.client().calls().is_empty());
        });
    }
}
