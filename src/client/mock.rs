//! Mock client for exercising session logic without a network.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use crate::client::{ApiError, NewsApi};
use crate::models::{Article, SearchContext, SearchPayload};

/// A mock API serving scripted pages keyed by offset.
///
/// Offsets with no staged page answer with an empty payload (no `news`
/// key), which the session treats as no-data. Every call is recorded so
/// tests can assert on request order and count.
#[derive(Debug, Default)]
pub struct MockNewsApi {
    pages: Mutex<HashMap<u32, SearchPayload>>,
    failing: Mutex<HashSet<u32>>,
    calls: Mutex<Vec<u32>>,
}

impl MockNewsApi {
    /// Create a mock with no staged pages.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `payload` for requests at `offset`.
    pub fn stage_page(&self, offset: u32, payload: SearchPayload) {
        self.pages.lock().unwrap().insert(offset, payload);
    }

    /// Answer requests at `offset` with an HTTP 500 error.
    pub fn fail_page(&self, offset: u32) {
        self.failing.lock().unwrap().insert(offset);
    }

    /// Offsets requested so far, in call order.
    pub fn calls(&self) -> Vec<u32> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl NewsApi for MockNewsApi {
    async fn fetch(&self, _ctx: &SearchContext, offset: u32) -> Result<SearchPayload, ApiError> {
        self.calls.lock().unwrap().push(offset);

        if self.failing.lock().unwrap().contains(&offset) {
            return Err(ApiError::Status(500));
        }

        let pages = self.pages.lock().unwrap();
        Ok(pages.get(&offset).cloned().unwrap_or_default())
    }
}

/// Build an article with just a title and publish date, for tests.
pub fn make_article(title: &str, publish_date: Option<&str>) -> Article {
    Article {
        title: Some(title.to_string()),
        publish_date: publish_date.map(str::to_string),
        ..Default::default()
    }
}

/// Build a payload of `count` generated articles reporting `available`
/// total matches.
pub fn make_page(count: usize, available: u32) -> SearchPayload {
    let news = (0..count)
        .map(|i| make_article(&format!("Article {}", i), None))
        .collect();
    SearchPayload {
        news: Some(news),
        available: Some(available),
    }
}
