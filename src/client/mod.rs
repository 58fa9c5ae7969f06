//! HTTP client for the news search API.
//!
//! The [`NewsApi`] trait is the seam between the session state machine
//! and the network. The production implementation is
//! [`WorldNewsClient`]; tests drive the session through
//! [`MockNewsApi`] instead.

pub mod mock;
mod worldnews;

pub use mock::MockNewsApi;
pub use worldnews::WorldNewsClient;

use async_trait::async_trait;

use crate::models::{SearchContext, SearchPayload};

/// One page of search results fetched from the upstream API.
///
/// Implementations issue exactly one request per call: no retries, no
/// caching. Errors report what went wrong; the session layer degrades
/// them to empty results rather than aborting.
#[async_trait]
pub trait NewsApi: Send + Sync + std::fmt::Debug {
    /// Fetch the page of results starting at `offset` for the given
    /// search context.
    async fn fetch(&self, ctx: &SearchContext, offset: u32) -> Result<SearchPayload, ApiError>;
}

#[async_trait]
impl<T: NewsApi + ?Sized> NewsApi for std::sync::Arc<T> {
    async fn fetch(&self, ctx: &SearchContext, offset: u32) -> Result<SearchPayload, ApiError> {
        (**self).fetch(ctx, offset).await
    }
}

/// Errors that can occur when talking to the search API
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Network or transport error
    #[error("network error: {0}")]
    Network(String),

    /// Non-success HTTP status
    #[error("API returned status: {0}")]
    Status(u16),

    /// Response body could not be decoded
    #[error("decode error: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}
