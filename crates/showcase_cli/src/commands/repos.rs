//! List a user's public repositories with optional filtering.

use clap::ValueEnum;
use showcase::{GitHubClient, ListOptions, ProjectMetadata, RepoFilter, RepoSort, SortDirection};

use crate::ListingArgs;
use crate::commands::display::{OutputFormat, print_rows};
use crate::config::{Config, FilterConfig};

/// Sort key accepted on the command line.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub(crate) enum SortArg {
    Created,
    #[default]
    Updated,
    Pushed,
    FullName,
}

impl From<SortArg> for RepoSort {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Created => RepoSort::Created,
            SortArg::Updated => RepoSort::Updated,
            SortArg::Pushed => RepoSort::Pushed,
            SortArg::FullName => RepoSort::FullName,
        }
    }
}

/// Sort direction accepted on the command line.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub(crate) enum DirectionArg {
    Asc,
    #[default]
    Desc,
}

impl From<DirectionArg> for SortDirection {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Asc => SortDirection::Asc,
            DirectionArg::Desc => SortDirection::Desc,
        }
    }
}

/// Handle the repos command.
pub(crate) async fn handle_repos(
    client: &GitHubClient,
    username: Option<String>,
    args: &ListingArgs,
    config: &Config,
    output: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let username = username
        .or_else(|| config.github.username.clone())
        .ok_or("no username given; pass one or set github.username in the configuration")?;

    let options = ListOptions {
        sort: args.sort.into(),
        direction: args.direction.into(),
        page_size: args.page_size,
    };
    let filter = merge_filter(args, &config.filters);

    let repos = client
        .list_filtered_repositories(&username, &options, &filter)
        .await?;

    let rows: Vec<RepoRow> = repos.iter().map(RepoRow::from_metadata).collect();
    print_rows(rows, output);

    Ok(())
}

/// Merge command-line filter flags with configured defaults.
///
/// Flags win wholesale: any topic list given on the command line replaces
/// the configured one rather than extending it.
fn merge_filter(args: &ListingArgs, defaults: &FilterConfig) -> RepoFilter {
    RepoFilter {
        min_stars: args.min_stars.or(defaults.min_stars),
        require_topics: if args.require_topic.is_empty() {
            defaults.require_topics.clone()
        } else {
            args.require_topic.clone()
        },
        exclude_topics: if args.exclude_topic.is_empty() {
            defaults.exclude_topics.clone()
        } else {
            args.exclude_topic.clone()
        },
    }
}

/// One listed repository as a table row.
#[derive(Debug, Clone, serde::Serialize, tabled::Tabled)]
pub(crate) struct RepoRow {
    #[tabled(rename = "Repository")]
    pub repository: String,
    #[tabled(rename = "Stars")]
    pub stars: u32,
    #[tabled(rename = "Language")]
    pub language: String,
    #[tabled(rename = "Technologies")]
    pub technologies: String,
    #[tabled(rename = "Last Push")]
    pub last_push: String,
}

impl RepoRow {
    pub(crate) fn from_metadata(metadata: &ProjectMetadata) -> Self {
        Self {
            repository: metadata.source_url.clone(),
            stars: metadata.stars,
            language: metadata
                .language
                .clone()
                .unwrap_or_else(|| "-".to_string()),
            technologies: metadata.technologies.join(", "),
            last_push: metadata.last_pushed_at.format("%Y-%m-%d").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};

    use super::*;

    fn listing_args() -> ListingArgs {
        ListingArgs {
            sort: SortArg::Updated,
            direction: DirectionArg::Desc,
            page_size: 100,
            min_stars: None,
            require_topic: Vec::new(),
            exclude_topic: Vec::new(),
        }
    }

    #[test]
    fn sort_and_direction_map_to_library_values() {
        assert_eq!(RepoSort::from(SortArg::FullName).as_str(), "full_name");
        assert_eq!(RepoSort::from(SortArg::Created).as_str(), "created");
        assert_eq!(SortDirection::from(DirectionArg::Asc).as_str(), "asc");
    }

    #[test]
    fn merge_filter_falls_back_to_config_defaults() {
        let args = listing_args();
        let defaults = FilterConfig {
            min_stars: Some(5),
            require_topics: vec!["portfolio".to_string()],
            exclude_topics: vec!["archived".to_string()],
        };

        let filter = merge_filter(&args, &defaults);

        assert_eq!(filter.min_stars, Some(5));
        assert_eq!(filter.require_topics, vec!["portfolio"]);
        assert_eq!(filter.exclude_topics, vec!["archived"]);
    }

    #[test]
    fn merge_filter_prefers_command_line_flags() {
        let mut args = listing_args();
        args.min_stars = Some(50);
        args.require_topic = vec!["cli".to_string()];
        let defaults = FilterConfig {
            min_stars: Some(5),
            require_topics: vec!["portfolio".to_string()],
            exclude_topics: vec!["archived".to_string()],
        };

        let filter = merge_filter(&args, &defaults);

        assert_eq!(filter.min_stars, Some(50));
        assert_eq!(filter.require_topics, vec!["cli"]);
        // Untouched flags still fall back.
        assert_eq!(filter.exclude_topics, vec!["archived"]);
    }

    #[test]
    fn row_condenses_listing_metadata() {
        let metadata = ProjectMetadata {
            source_url: "https://github.com/acme/widget".to_string(),
            homepage_url: None,
            description: String::new(),
            technologies: vec!["cli".to_string(), "tooling".to_string()],
            stars: 12,
            language: None,
            last_pushed_at: DateTime::<Utc>::from_timestamp(1_700_000_000, 0).expect("valid"),
        };

        let row = RepoRow::from_metadata(&metadata);

        assert_eq!(row.repository, "https://github.com/acme/widget");
        assert_eq!(row.stars, 12);
        assert_eq!(row.language, "-");
        assert_eq!(row.technologies, "cli, tooling");
        assert_eq!(row.last_push, "2023-11-14");
    }
}
