use chrono::{DateTime, Utc};

/// Parses a feed-native `pubDate` string into a UTC timestamp.
///
/// The feed dates its entries in the RFC 2822 / RFC 1123 shape
/// (`"Mon, 02 Jan 2006 15:04:05 GMT"`). Malformed upstream dates are an
/// expected condition, so this is total: any mismatch yields `None` and a
/// single bad date never aborts ingestion of the article carrying it.
///
/// Surrounding whitespace is tolerated because the parser hands field text
/// through untrimmed.
pub fn normalize_pub_date(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc2822(raw.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_gmt_date_parses_to_utc() {
        let parsed = normalize_pub_date("Mon, 02 Jan 2006 15:04:05 GMT").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2006, 1, 2, 15, 4, 5).unwrap());
    }

    #[test]
    fn test_numeric_offset_is_converted() {
        let parsed = normalize_pub_date("Tue, 03 Jan 2006 00:04:05 +0900").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2006, 1, 2, 15, 4, 5).unwrap());
    }

    #[test]
    fn test_surrounding_whitespace_tolerated() {
        assert!(normalize_pub_date("\n  Mon, 02 Jan 2006 15:04:05 GMT  ").is_some());
    }

    #[test]
    fn test_garbage_yields_none() {
        assert!(normalize_pub_date("not a date").is_none());
        assert!(normalize_pub_date("").is_none());
    }

    #[test]
    fn test_invalid_calendar_values_yield_none() {
        assert!(normalize_pub_date("Mon, 32 Jan 2006 15:04:05 GMT").is_none());
        assert!(normalize_pub_date("Mon, 02 Jan 2006 25:04:05 GMT").is_none());
    }

    #[test]
    fn test_partial_date_yields_none() {
        assert!(normalize_pub_date("Mon, 02 Jan 2006").is_none());
    }
}
