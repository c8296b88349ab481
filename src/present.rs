//! Display adapter: converts parsed articles into presentation-ready rows.
//!
//! This is the seam the presentation layer consumes. It applies the date
//! normalizer and renders timestamps for the feed's audience timezone. It
//! synthesizes nothing: an article whose date fails to normalize keeps an
//! absent `formatted_date`, and placeholder text is the consumer's choice.

use crate::feed::{normalize_pub_date, Article};
use chrono::{DateTime, FixedOffset, Utc};
use serde::Serialize;

/// Tokyo is UTC+9 year-round; a fixed offset is exact.
const TOKYO_OFFSET_SECS: i32 = 9 * 3600;

/// Rendering pattern for normalized dates (`2006/01/03 00:04`).
const DATE_PATTERN: &str = "%Y/%m/%d %H:%M";

/// One display-ready article row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayItem {
    pub title: String,
    pub link: String,
    pub source: String,
    /// Publication time rendered in Tokyo local time, or `None` when the
    /// feed's date string did not normalize.
    pub formatted_date: Option<String>,
}

/// Maps parsed articles to display rows, preserving order.
pub fn present(articles: &[Article]) -> Vec<DisplayItem> {
    articles.iter().map(display_item).collect()
}

fn display_item(article: &Article) -> DisplayItem {
    DisplayItem {
        title: article.title.clone(),
        link: article.link.clone(),
        source: article.source.clone(),
        formatted_date: normalize_pub_date(&article.pub_date).map(format_tokyo),
    }
}

fn format_tokyo(ts: DateTime<Utc>) -> String {
    let tokyo = FixedOffset::east_opt(TOKYO_OFFSET_SECS).expect("UTC+9 is a valid offset");
    ts.with_timezone(&tokyo).format(DATE_PATTERN).to_string()
}
