//! Terminal output helpers for the CLI front end.
//!
//! Rendering only: everything here takes plain data from the core and
//! formats it for a terminal. No session state is read or mutated.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use comfy_table::{presets, ContentArrangement, Table};
use is_terminal::IsTerminal;

use crate::models::Article;
use crate::reference;

/// Characters of body text shown per article in plain listings.
const SNIPPET_LEN: usize = 400;

/// Get the current terminal width.
pub fn terminal_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(100)
}

/// Check if stdout is a terminal.
pub fn is_terminal() -> bool {
    std::io::stdout().is_terminal()
}

/// Summary line above the results: total matches and page position.
pub fn summary_line(total: u32, page: u32, pages: u32) -> String {
    format!("Articles found: {} | Page {}/{}", total, page, pages)
}

/// Render one page of articles as a table.
pub fn article_table(articles: &[Article]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Title", "Author", "Published", "Language", "Country"]);

    for article in articles {
        table.add_row(vec![
            truncate(article.title_or_default(), 60),
            article.author_or_default().to_string(),
            article.publish_date_or_default().to_string(),
            display_language(article),
            display_country(article),
        ]);
    }

    table
}

/// Plain listing for non-TTY output: title, metadata, snippet, URL.
pub fn render_plain(articles: &[Article]) -> String {
    let mut out = String::new();
    for (i, article) in articles.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, article.title_or_default()));
        out.push_str(&format!(
            "   Author: {} | Published: {} | Lang: {} | Country: {}\n",
            article.author_or_default(),
            article.publish_date_or_default(),
            display_language(article),
            display_country(article),
        ));
        let snippet = article.snippet(SNIPPET_LEN);
        if !snippet.is_empty() {
            out.push_str(&format!("   {}\n", snippet));
        }
        if let Some(url) = &article.url {
            out.push_str(&format!("   {}\n", url));
        }
        out.push('\n');
    }
    out
}

/// Unicode bar chart of per-day article counts, one row per day.
pub fn trend_chart(counts: &BTreeMap<NaiveDate, usize>, max_bar: usize) -> String {
    let peak = counts.values().copied().max().unwrap_or(0);
    if peak == 0 {
        return String::new();
    }

    let mut out = String::new();
    for (date, count) in counts {
        let len = std::cmp::max(1, count * max_bar / peak);
        out.push_str(&format!("{}  {} {}\n", date, "█".repeat(len), count));
    }
    out
}

/// Truncate text to `max` display columns, appending an ellipsis when
/// truncation occurred. Unicode-width aware.
pub fn truncate(text: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }

    let total: usize = text
        .chars()
        .map(|c| unicode_width::UnicodeWidthChar::width(c).unwrap_or(1))
        .sum();
    if total <= max {
        return text.to_string();
    }

    let width_for_ellipsis = max.saturating_sub(3);
    let mut width = 0;
    let mut result = String::new();
    for c in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(1);
        if width + w > width_for_ellipsis {
            break;
        }
        width += w;
        result.push(c);
    }
    format!("{}...", result)
}

fn display_language(article: &Article) -> String {
    match article.language.as_deref() {
        Some(code) => reference::language_name(code).unwrap_or(code).to_string(),
        None => String::new(),
    }
}

fn display_country(article: &Article) -> String {
    match article.source_country.as_deref() {
        Some(code) => reference::country_name(code).unwrap_or(code).to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_line_format() {
        assert_eq!(summary_line(12, 1, 3), "Articles found: 12 | Page 1/3");
        assert_eq!(summary_line(0, 0, 0), "Articles found: 0 | Page 0/0");
    }

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate("Hi", 8), "Hi");
        assert_eq!(truncate("Hello World", 8), "Hello...");
        assert_eq!(truncate("anything", 0), "");
    }

    #[test]
    fn test_trend_chart_scales_to_peak() {
        let d1 = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
        let counts = BTreeMap::from([(d1, 1), (d2, 4)]);

        let chart = trend_chart(&counts, 8);
        let lines: Vec<&str> = chart.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("2024-03-01"));
        assert!(lines[0].ends_with("1"));
        assert!(lines[1].contains("████████"));
        assert!(lines[1].ends_with("4"));
    }

    #[test]
    fn test_trend_chart_empty_counts() {
        assert_eq!(trend_chart(&BTreeMap::new(), 10), "");
    }

    #[test]
    fn test_plain_rendering_resolves_code_names() {
        let article = Article {
            title: Some("Headline".to_string()),
            language: Some("en".to_string()),
            source_country: Some("us".to_string()),
            url: Some("https://example.com/a".to_string()),
            ..Default::default()
        };
        let out = render_plain(std::slice::from_ref(&article));
        assert!(out.contains("Headline"));
        assert!(out.contains("Lang: English"));
        assert!(out.contains("Country: United States"));
        assert!(out.contains("https://example.com/a"));
    }
}
