use crate::filter::Filter;
use url::Url;

/// Origin the production endpoints live on.
const DEFAULT_BASE: &str = "https://news.google.com";

/// Fixed locale parameters: Japanese edition, Japan region.
const LOCALE_QUERY: &str = "hl=ja&gl=JP&ceid=JP:ja";

/// The production feed origin.
pub fn default_base() -> Url {
    // The constant is a closed, well-formed literal; failing to parse it is
    // a programming error, not a runtime condition.
    Url::parse(DEFAULT_BASE).expect("default feed origin is well-formed")
}

/// Builds the feed URL for `filter` against the production origin.
///
/// `Filter::None` maps to the unfiltered top-headlines feed (`/rss`); every
/// other filter maps to the topic-scoped feed parameterized by its machine
/// token. The locale query string is fixed for all filters.
pub fn endpoint(filter: Filter) -> Url {
    endpoint_with_base(&default_base(), filter)
}

/// Same as [`endpoint`], but against an arbitrary origin.
///
/// This is the seam tests use to point a client at a local mock server.
pub fn endpoint_with_base(base: &Url, filter: Filter) -> Url {
    let mut url = base.clone();
    match filter.token() {
        None => url.set_path("/rss"),
        Some(token) => url.set_path(&format!("/news/rss/headlines/section/topic/{token}")),
    }
    url.set_query(Some(LOCALE_QUERY));
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unfiltered_endpoint_has_no_topic_segment() {
        let url = endpoint(Filter::None);
        assert_eq!(
            url.as_str(),
            "https://news.google.com/rss?hl=ja&gl=JP&ceid=JP:ja"
        );
        assert!(!url.path().contains("topic"));
    }

    #[test]
    fn test_filtered_endpoint_carries_token() {
        let url = endpoint(Filter::Technology);
        assert_eq!(
            url.as_str(),
            "https://news.google.com/news/rss/headlines/section/topic/TECHNOLOGY?hl=ja&gl=JP&ceid=JP:ja"
        );
    }

    #[test]
    fn test_every_filter_yields_absolute_well_formed_url() {
        for filter in Filter::ALL {
            let url = endpoint(filter);
            // Reparsing proves the rendered string is a well-formed absolute URL.
            let reparsed = Url::parse(url.as_str()).unwrap();
            assert_eq!(reparsed, url);
            assert_eq!(reparsed.scheme(), "https");
            assert_eq!(reparsed.host_str(), Some("news.google.com"));
            assert_eq!(reparsed.query(), Some("hl=ja&gl=JP&ceid=JP:ja"));
            if let Some(token) = filter.token() {
                assert!(reparsed.path().ends_with(token));
            }
        }
    }

    #[test]
    fn test_custom_base_preserves_path_and_query() {
        let base = Url::parse("http://127.0.0.1:8080").unwrap();
        let url = endpoint_with_base(&base, Filter::Sports);
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:8080/news/rss/headlines/section/topic/SPORTS?hl=ja&gl=JP&ceid=JP:ja"
        );
    }
}
