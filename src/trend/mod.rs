//! Publication-date sampling for trend charts.
//!
//! The sampler re-walks the active search page by page and collects
//! every publish date it can parse. It reads the session's context and
//! counts but never moves its offset, so a trend pass leaves pagination
//! exactly where the user had it.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::debug;

use crate::client::NewsApi;
use crate::models::PAGE_SIZE;
use crate::session::NewsSession;

/// Articles sampled per trend pass, at most.
pub const SAMPLE_CAP: u32 = 50;

/// Collect publish dates for the session's active search.
///
/// Walks offsets `0, 5, 10, ...` strictly below `min(total_count, 50)`,
/// one request per page. Pages that fail to fetch and dates that fail
/// to parse are skipped; the walk never aborts early. Dates come back
/// in page-walk order, unsorted.
///
/// Returns nothing when no search has been issued.
pub async fn collect_publish_dates<C: NewsApi>(session: &NewsSession<C>) -> Vec<NaiveDate> {
    let Some(ctx) = session.context() else {
        return Vec::new();
    };

    let limit = session.total_count().min(SAMPLE_CAP);
    let mut dates = Vec::new();

    let mut offset = 0;
    while offset < limit {
        match session.client().fetch(ctx, offset).await {
            Ok(payload) => {
                let articles = payload.news.unwrap_or_default();
                dates.extend(
                    articles
                        .iter()
                        .filter_map(|a| a.publish_date.as_deref())
                        .filter_map(parse_publish_date),
                );
            }
            Err(err) => {
                debug!(error = %err, offset, "skipping unfetchable trend page");
            }
        }
        offset += PAGE_SIZE;
    }

    dates
}

/// Parse an API publish date down to its calendar date.
///
/// The API emits ISO-8601 with some variation: RFC 3339 with an offset
/// or a trailing `Z`, the space-separated `YYYY-MM-DD HH:MM:SS` form,
/// or a bare date. Anything else is rejected.
pub fn parse_publish_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.date());
    }
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Bucket sampled dates into sorted per-day counts.
pub fn daily_counts(dates: &[NaiveDate]) -> BTreeMap<NaiveDate, usize> {
    let mut counts = BTreeMap::new();
    for date in dates {
        *counts.entry(*date).or_insert(0) += 1;
    }
    counts
}
