//! Configuration file support for showcase.
//!
//! Configuration is loaded with the following precedence (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables (prefixed with `SHOWCASE_`, e.g., `SHOWCASE_GITHUB_USERNAME`)
//! 3. Config file (~/.config/showcase/config.toml or ./showcase.toml)
//! 4. Built-in defaults
//!
//! Example config file:
//! ```toml
//! [github]
//! username = "octocat"  # default account for the repos command
//!
//! [filters]
//! min_stars = 5
//! require_topics = ["portfolio"]
//! exclude_topics = ["archived", "wip"]
//! ```

use std::path::PathBuf;

use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use directories::ProjectDirs;
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct Config {
    /// GitHub account settings.
    pub github: GitHubConfig,
    /// Default listing filters.
    pub filters: FilterConfig,
}

/// GitHub account settings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct GitHubConfig {
    /// Default username for the repos command.
    /// Can also be set via the SHOWCASE_GITHUB_USERNAME environment variable.
    pub username: Option<String>,
}

/// Default listing filters, overridable per invocation.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct FilterConfig {
    /// Keep only repositories with at least this many stars.
    pub min_stars: Option<u32>,
    /// Keep only repositories carrying at least one of these topics.
    pub require_topics: Vec<String>,
    /// Drop repositories carrying any of these topics.
    pub exclude_topics: Vec<String>,
}

impl Config {
    /// Load configuration using the config crate's layered approach.
    ///
    /// Sources are loaded in order (later sources override earlier):
    /// 1. Built-in defaults
    /// 2. XDG config file (~/.config/showcase/config.toml)
    /// 3. Local config file (./showcase.toml)
    /// 4. Environment variables with SHOWCASE_ prefix
    pub(crate) fn load() -> Self {
        let mut builder = ConfigBuilder::builder();

        if let Some(proj_dirs) = ProjectDirs::from("", "", "showcase") {
            let xdg_config = proj_dirs.config_dir().join("config.toml");
            if xdg_config.exists() {
                tracing::debug!("loading config from {:?}", xdg_config);
                builder = builder.add_source(
                    File::from(xdg_config)
                        .format(FileFormat::Toml)
                        .required(false),
                );
            }
        }

        // Local config file takes priority over the XDG one.
        let local_config = PathBuf::from("showcase.toml");
        if local_config.exists() {
            tracing::debug!("loading config from ./showcase.toml");
            builder = builder.add_source(
                File::from(local_config)
                    .format(FileFormat::Toml)
                    .required(false),
            );
        }

        // SHOWCASE_ prefixed environment variables,
        // e.g. SHOWCASE_GITHUB_USERNAME -> github.username
        builder = builder.add_source(
            Environment::with_prefix("SHOWCASE")
                .separator("_")
                .try_parsing(true),
        );

        match builder.build() {
            Ok(settings) => match settings.try_deserialize::<Config>() {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("failed to deserialize config: {}", e);
                    Config::default()
                }
            },
            Err(e) => {
                tracing::warn!("failed to build config: {}", e);
                Config::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml_content: &str) -> Config {
        let settings = ConfigBuilder::builder()
            .add_source(config::File::from_str(toml_content, FileFormat::Toml))
            .build()
            .unwrap();
        settings.try_deserialize().unwrap()
    }

    #[test]
    fn default_config_is_empty() {
        let config = Config::default();
        assert!(config.github.username.is_none());
        assert!(config.filters.min_stars.is_none());
        assert!(config.filters.require_topics.is_empty());
        assert!(config.filters.exclude_topics.is_empty());
    }

    #[test]
    fn full_config_parses() {
        let config = parse(
            r#"
            [github]
            username = "octocat"

            [filters]
            min_stars = 5
            require_topics = ["portfolio"]
            exclude_topics = ["archived", "wip"]
        "#,
        );

        assert_eq!(config.github.username, Some("octocat".to_string()));
        assert_eq!(config.filters.min_stars, Some(5));
        assert_eq!(config.filters.require_topics, vec!["portfolio"]);
        assert_eq!(config.filters.exclude_topics, vec!["archived", "wip"]);
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let config = parse(
            r#"
            [github]
            username = "octocat"
        "#,
        );

        assert_eq!(config.github.username, Some("octocat".to_string()));
        assert!(config.filters.min_stars.is_none());
        assert!(config.filters.require_topics.is_empty());
    }

    #[test]
    fn later_sources_override_earlier_ones() {
        let base = r#"
            [filters]
            min_stars = 5
            exclude_topics = ["archived"]
        "#;
        let overlay = r#"
            [filters]
            min_stars = 50
        "#;

        let settings = ConfigBuilder::builder()
            .add_source(config::File::from_str(base, FileFormat::Toml))
            .add_source(config::File::from_str(overlay, FileFormat::Toml))
            .build()
            .unwrap();
        let config: Config = settings.try_deserialize().unwrap();

        assert_eq!(config.filters.min_stars, Some(50));
        // Untouched keys survive from the base layer.
        assert_eq!(config.filters.exclude_topics, vec!["archived"]);
    }

    #[test]
    fn invalid_toml_fails_to_build() {
        let invalid = r#"
            [github
            username = "octocat"
        "#;

        let result = ConfigBuilder::builder()
            .add_source(config::File::from_str(invalid, FileFormat::Toml))
            .build();

        assert!(result.is_err());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let config = parse(
            r#"
            [github]
            username = "octocat"
            unknown_field = "should be ignored"
        "#,
        );

        assert_eq!(config.github.username, Some("octocat".to_string()));
    }

    #[test]
    fn environment_source_can_be_configured() {
        let env_source = Environment::with_prefix("SHOWCASE")
            .separator("_")
            .try_parsing(true);

        // Just verify it can be added to a builder without error.
        let _builder = ConfigBuilder::builder().add_source(env_source);
    }
}
