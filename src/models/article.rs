//! Article model representing a single news story.

use serde::{Deserialize, Serialize};

/// A news article as returned by the search endpoint.
///
/// Every field is optional: the upstream API omits keys freely and
/// guarantees no stable identity. Articles are not deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Headline
    #[serde(default)]
    pub title: Option<String>,

    /// Byline author
    #[serde(default)]
    pub author: Option<String>,

    /// Publication timestamp as sent by the API (ISO-8601 string)
    #[serde(default)]
    pub publish_date: Option<String>,

    /// Two-letter language code of the article body
    #[serde(default)]
    pub language: Option<String>,

    /// Two-letter country code of the publishing source
    #[serde(default)]
    pub source_country: Option<String>,

    /// Full body text
    #[serde(default)]
    pub text: Option<String>,

    /// Canonical URL of the story
    #[serde(default)]
    pub url: Option<String>,
}

impl Article {
    /// Headline, or a placeholder when the API omitted it.
    pub fn title_or_default(&self) -> &str {
        self.title.as_deref().unwrap_or("(No title)")
    }

    /// Author, or "Unknown" when absent.
    pub fn author_or_default(&self) -> &str {
        self.author.as_deref().unwrap_or("Unknown")
    }

    /// Publication date string, or a placeholder when absent.
    pub fn publish_date_or_default(&self) -> &str {
        self.publish_date.as_deref().unwrap_or("Unknown date")
    }

    /// Body text flattened to one line and clipped to `max` characters,
    /// with an ellipsis when clipping occurred.
    pub fn snippet(&self, max: usize) -> String {
        let text = self.text.as_deref().unwrap_or_default();
        let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
        if flat.chars().count() <= max {
            flat
        } else {
            let clipped: String = flat.chars().take(max).collect();
            format!("{}...", clipped)
        }
    }
}
