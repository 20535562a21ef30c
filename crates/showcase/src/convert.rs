//! Normalization from GitHub API repository records to project metadata.

use crate::types::{ProjectMetadata, RepoRecord};

/// Derive the technology list for a repository.
///
/// Topics win when present. Otherwise the primary language stands in as a
/// single-entry list, and a repository with neither yields an empty list.
fn technologies(record: &RepoRecord) -> Vec<String> {
    if !record.topics.is_empty() {
        record.topics.clone()
    } else {
        record.language.iter().cloned().collect()
    }
}

/// Convert a GitHub repository record to normalized project metadata.
pub fn to_project_metadata(record: &RepoRecord) -> ProjectMetadata {
    // An empty homepage string means "unset" upstream, not a real URL.
    let homepage_url = record
        .homepage
        .clone()
        .filter(|homepage| !homepage.is_empty());

    ProjectMetadata {
        source_url: record.html_url.clone(),
        homepage_url,
        description: record.description.clone().unwrap_or_default(),
        technologies: technologies(record),
        stars: record.stargazers_count,
        language: record.language.clone(),
        last_pushed_at: record.pushed_at,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};

    use super::*;

    fn base_record() -> RepoRecord {
        RepoRecord {
            name: "widget".to_string(),
            full_name: "acme/widget".to_string(),
            description: Some("A widget".to_string()),
            html_url: "https://github.com/acme/widget".to_string(),
            homepage: Some("https://widget.example".to_string()),
            stargazers_count: 12,
            language: Some("Rust".to_string()),
            pushed_at: DateTime::<Utc>::from_timestamp(1_700_000_000, 0).expect("valid"),
            topics: vec!["cli".to_string(), "tooling".to_string()],
            private: false,
        }
    }

    #[test]
    fn topics_win_over_language() {
        let record = base_record();

        let metadata = to_project_metadata(&record);

        assert_eq!(metadata.technologies, vec!["cli", "tooling"]);
    }

    #[test]
    fn language_stands_in_when_topics_are_empty() {
        let mut record = base_record();
        record.topics.clear();

        let metadata = to_project_metadata(&record);

        assert_eq!(metadata.technologies, vec!["Rust"]);
    }

    #[test]
    fn technologies_empty_when_neither_is_available() {
        let mut record = base_record();
        record.topics.clear();
        record.language = None;

        let metadata = to_project_metadata(&record);

        assert!(metadata.technologies.is_empty());
        assert_eq!(metadata.language, None);
    }

    #[test]
    fn null_description_becomes_empty_string() {
        let mut record = base_record();
        record.description = None;

        let metadata = to_project_metadata(&record);

        assert_eq!(metadata.description, "");
    }

    #[test]
    fn empty_homepage_becomes_none() {
        let mut record = base_record();
        record.homepage = Some(String::new());

        let metadata = to_project_metadata(&record);

        assert_eq!(metadata.homepage_url, None);
    }

    #[test]
    fn populated_homepage_is_kept_verbatim() {
        let record = base_record();

        let metadata = to_project_metadata(&record);

        assert_eq!(
            metadata.homepage_url.as_deref(),
            Some("https://widget.example")
        );
    }

    #[test]
    fn normalizes_the_documented_example() {
        let json = r#"{
            "name": "Hello-World",
            "full_name": "octocat/Hello-World",
            "description": "My first repository",
            "html_url": "https://github.com/octocat/Hello-World",
            "homepage": "",
            "stargazers_count": 80,
            "language": "C",
            "pushed_at": "2011-01-26T19:06:43Z",
            "topics": []
        }"#;
        let record: RepoRecord = serde_json::from_str(json).expect("should deserialize");

        let metadata = to_project_metadata(&record);

        assert_eq!(metadata.source_url, "https://github.com/octocat/Hello-World");
        assert_eq!(metadata.homepage_url, None);
        assert_eq!(metadata.description, "My first repository");
        assert_eq!(metadata.technologies, vec!["C"]);
        assert_eq!(metadata.stars, 80);
        assert_eq!(metadata.language.as_deref(), Some("C"));
        assert_eq!(metadata.last_pushed_at.timestamp(), 1_296_068_803);
    }
}
