use clap::ValueEnum;

/// Topic selector narrowing which feed endpoint is queried.
///
/// `None` selects the unfiltered top-headlines feed; every other variant
/// selects a topic-scoped feed via its machine token. The labels are the
/// Japanese edition's section names, matching the fixed `ja`/`JP` locale
/// the endpoints are queried with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum Filter {
    #[default]
    None,
    World,
    Nation,
    Business,
    Technology,
    Entertainment,
    Sports,
    Science,
    Health,
}

impl Filter {
    /// Every filter, in presentation order.
    pub const ALL: [Filter; 9] = [
        Filter::None,
        Filter::World,
        Filter::Nation,
        Filter::Business,
        Filter::Technology,
        Filter::Entertainment,
        Filter::Sports,
        Filter::Science,
        Filter::Health,
    ];

    /// Machine token used in the topic endpoint path. `None` for the
    /// unfiltered feed, which has no topic segment.
    pub fn token(self) -> Option<&'static str> {
        match self {
            Filter::None => None,
            Filter::World => Some("WORLD"),
            Filter::Nation => Some("NATION"),
            Filter::Business => Some("BUSINESS"),
            Filter::Technology => Some("TECHNOLOGY"),
            Filter::Entertainment => Some("ENTERTAINMENT"),
            Filter::Sports => Some("SPORTS"),
            Filter::Science => Some("SCIENCE"),
            Filter::Health => Some("HEALTH"),
        }
    }

    /// Human-readable section label (display only, not part of any URL).
    pub fn label(self) -> &'static str {
        match self {
            Filter::None => "トップニュース",
            Filter::World => "世界",
            Filter::Nation => "日本",
            Filter::Business => "ビジネス",
            Filter::Technology => "テクノロジー",
            Filter::Entertainment => "エンタメ",
            Filter::Sports => "スポーツ",
            Filter::Science => "科学",
            Filter::Health => "健康",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unfiltered() {
        assert_eq!(Filter::default(), Filter::None);
    }

    #[test]
    fn test_only_unfiltered_lacks_token() {
        for filter in Filter::ALL {
            match filter {
                Filter::None => assert!(filter.token().is_none()),
                _ => assert!(filter.token().is_some()),
            }
        }
    }

    #[test]
    fn test_tokens_are_unique() {
        let tokens: Vec<_> = Filter::ALL.iter().filter_map(|f| f.token()).collect();
        let mut deduped = tokens.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(tokens.len(), deduped.len());
    }

    #[test]
    fn test_labels_are_nonempty() {
        for filter in Filter::ALL {
            assert!(!filter.label().is_empty());
        }
    }
}
