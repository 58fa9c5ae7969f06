//! World News API client implementation.

use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::client::{ApiError, NewsApi};
use crate::config::Config;
use crate::models::{SearchContext, SearchPayload, PAGE_SIZE};

/// Client for the World News `search-news` endpoint.
///
/// Stateless apart from the connection pool; cloning is cheap and all
/// clones share the pool.
#[derive(Debug, Clone)]
pub struct WorldNewsClient {
    client: Arc<Client>,
    base_url: String,
    api_key: String,
}

impl WorldNewsClient {
    /// Create a client from configuration.
    pub fn new(config: &Config) -> Self {
        let client = Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client: Arc::new(client),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone().unwrap_or_default(),
        }
    }

    /// Build the request URL for one page of results.
    ///
    /// The query is sent wrapped in double quotes for exact-phrase
    /// matching; filter codes are lowercased on the way out.
    fn search_url(&self, ctx: &SearchContext, offset: u32) -> String {
        let mut url = format!(
            "{}/search-news?api-key={}&text={}&text-match-indexes=title,content&number={}&offset={}",
            self.base_url,
            urlencoding::encode(&self.api_key),
            urlencoding::encode(&format!("\"{}\"", ctx.query)),
            PAGE_SIZE,
            offset
        );

        if let Some(language) = &ctx.language {
            url = format!(
                "{}&language={}",
                url,
                urlencoding::encode(&language.to_lowercase())
            );
        }
        if let Some(country) = &ctx.country {
            url = format!(
                "{}&source-country={}",
                url,
                urlencoding::encode(&country.to_lowercase())
            );
        }

        url
    }
}

#[async_trait]
impl NewsApi for WorldNewsClient {
    async fn fetch(&self, ctx: &SearchContext, offset: u32) -> Result<SearchPayload, ApiError> {
        let url = self.search_url(ctx, offset);
        debug!(offset, query = %ctx.query, "fetching search page");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Failed to reach news API: {}", e)))?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status().as_u16()));
        }

        response
            .json::<SearchPayload>()
            .await
            .map_err(|e| ApiError::Decode(format!("Failed to parse JSON: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> WorldNewsClient {
        let config = Config {
            api_key: Some("secret".to_string()),
            base_url: "https://api.example.com/".to_string(),
            timeout_secs: 5,
        };
        WorldNewsClient::new(&config)
    }

    #[test]
    fn test_url_has_quoted_phrase_and_fixed_page_size() {
        let url = test_client().search_url(&SearchContext::new("climate change"), 0);
        assert!(url.starts_with("https://api.example.com/search-news?"));
        assert!(url.contains("api-key=secret"));
        assert!(url.contains("text=%22climate%20change%22"));
        assert!(url.contains("text-match-indexes=title,content"));
        assert!(url.contains("number=5"));
        assert!(url.contains("offset=0"));
        assert!(!url.contains("language="));
        assert!(!url.contains("source-country="));
    }

    #[test]
    fn test_url_lowercases_filter_codes() {
        let ctx = SearchContext::new("rates").language("EN").country("US");
        let url = test_client().search_url(&ctx, 10);
        assert!(url.contains("language=en"));
        assert!(url.contains("source-country=us"));
        assert!(url.contains("offset=10"));
    }
}
