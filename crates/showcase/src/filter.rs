//! Client-side filtering for repository listings.
//!
//! The listing endpoint has no server-side equivalents for these criteria,
//! so they are applied to the returned page after the fact.

use crate::types::RepoRecord;

/// Post-listing filter criteria. All criteria are ANDed together; the
/// default filter admits every repository.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepoFilter {
    /// Keep only repositories with at least this many stars.
    pub min_stars: Option<u32>,
    /// Keep only repositories carrying at least one of these topics.
    pub require_topics: Vec<String>,
    /// Drop repositories carrying any of these topics.
    pub exclude_topics: Vec<String>,
}

impl RepoFilter {
    /// Whether this filter would pass every repository through unchanged.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.min_stars.is_none() && self.require_topics.is_empty() && self.exclude_topics.is_empty()
    }

    /// Whether a single repository satisfies every criterion.
    #[must_use]
    pub fn matches(&self, record: &RepoRecord) -> bool {
        if let Some(min_stars) = self.min_stars
            && record.stargazers_count < min_stars
        {
            return false;
        }

        if !self.require_topics.is_empty()
            && !self
                .require_topics
                .iter()
                .any(|topic| record.topics.contains(topic))
        {
            return false;
        }

        !self
            .exclude_topics
            .iter()
            .any(|topic| record.topics.contains(topic))
    }

    /// Apply the filter to a listing page, preserving the incoming order.
    #[must_use]
    pub fn apply(&self, records: Vec<RepoRecord>) -> Vec<RepoRecord> {
        records
            .into_iter()
            .filter(|record| self.matches(record))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};

    use super::*;

    fn record(name: &str, stars: u32, topics: &[&str]) -> RepoRecord {
        RepoRecord {
            name: name.to_string(),
            full_name: format!("acme/{name}"),
            description: None,
            html_url: format!("https://github.com/acme/{name}"),
            homepage: None,
            stargazers_count: stars,
            language: Some("Rust".to_string()),
            pushed_at: DateTime::<Utc>::from_timestamp(1_700_000_000, 0).expect("valid"),
            topics: topics.iter().map(|t| t.to_string()).collect(),
            private: false,
        }
    }

    #[test]
    fn default_filter_admits_everything() {
        let filter = RepoFilter::default();

        assert!(filter.is_noop());
        assert!(filter.matches(&record("anything", 0, &[])));
    }

    #[test]
    fn min_stars_is_inclusive() {
        let filter = RepoFilter {
            min_stars: Some(10),
            ..RepoFilter::default()
        };

        assert!(!filter.matches(&record("below", 9, &[])));
        assert!(filter.matches(&record("exact", 10, &[])));
        assert!(filter.matches(&record("above", 11, &[])));
    }

    #[test]
    fn require_topics_needs_at_least_one_match() {
        let filter = RepoFilter {
            require_topics: vec!["cli".to_string(), "rust".to_string()],
            ..RepoFilter::default()
        };

        assert!(filter.matches(&record("both", 0, &["rust", "cli", "extra"])));
        assert!(filter.matches(&record("one", 0, &["cli"])));
        assert!(!filter.matches(&record("none", 0, &[])));
        assert!(!filter.matches(&record("other", 0, &["web"])));
    }

    #[test]
    fn exclude_topics_drops_any_match() {
        let filter = RepoFilter {
            exclude_topics: vec!["archived".to_string(), "wip".to_string()],
            ..RepoFilter::default()
        };

        assert!(filter.matches(&record("clean", 0, &["cli"])));
        assert!(!filter.matches(&record("tagged", 0, &["cli", "wip"])));
    }

    #[test]
    fn criteria_combine_as_a_conjunction() {
        let filter = RepoFilter {
            min_stars: Some(5),
            require_topics: vec!["cli".to_string()],
            exclude_topics: vec!["wip".to_string()],
        };

        assert!(filter.matches(&record("ok", 5, &["cli"])));
        assert!(!filter.matches(&record("too-few-stars", 4, &["cli"])));
        assert!(!filter.matches(&record("missing-topic", 5, &[])));
        assert!(!filter.matches(&record("excluded", 5, &["cli", "wip"])));
    }

    #[test]
    fn apply_preserves_listing_order() {
        let filter = RepoFilter {
            min_stars: Some(10),
            ..RepoFilter::default()
        };
        let page = vec![
            record("first", 50, &[]),
            record("skipped", 1, &[]),
            record("second", 10, &[]),
        ];

        let kept = filter.apply(page);

        let names: Vec<&str> = kept.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second"]);
    }
}
