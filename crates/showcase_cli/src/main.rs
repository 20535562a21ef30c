//! Showcase CLI - command-line interface for the repository metadata sync.

mod commands;
mod config;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use showcase::GitHubClient;
use tracing_subscriber::EnvFilter;

use crate::commands::display::OutputFormat;
use crate::commands::repos::{DirectionArg, SortArg};

#[derive(Parser)]
#[command(name = "showcase")]
#[command(version)]
#[command(about = "GitHub repository metadata for project showcase pages")]
#[command(
    long_about = "Showcase fetches repository metadata from the GitHub API and normalizes \
it into display-ready records for project showcase pages. It accepts both \
web URLs and SSH remotes, respects the API rate limit, and caches responses \
to avoid repeat requests."
)]
#[command(after_long_help = r#"EXAMPLES
    Sync metadata for a repository page:
        $ showcase sync https://github.com/octocat/Hello-World

    Sync several remotes at once, emitting JSON:
        $ showcase sync git@github.com:rust-lang/rust.git https://github.com/rust-lang/cargo --output json

    List a user's public repositories, filtered:
        $ showcase repos octocat --min-stars 10 --exclude-topic archived

    Show how much API quota is left:
        $ showcase limits

    Generate shell completions:
        $ showcase completions bash > ~/.local/share/bash-completion/completions/showcase

CONFIGURATION
    Showcase reads configuration from:
      1. ~/.config/showcase/config.toml (or $XDG_CONFIG_HOME/showcase/config.toml)
      2. showcase.toml in the current directory
      3. Environment variables (SHOWCASE_* prefix)
      4. .env file in current directory

ENVIRONMENT VARIABLES
    SHOWCASE_GITHUB_USERNAME    Default account for the repos command
    RUST_LOG                    Log filter (default: showcase=info,showcase_cli=info)
"#)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch and normalize metadata for one or more repositories
    Sync {
        /// Repository references (https://github.com/owner/name or git@github.com:owner/name.git)
        #[arg(required = true)]
        references: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        output: OutputFormat,
    },
    /// List a user's public repositories
    Repos {
        /// GitHub username (default from config)
        username: Option<String>,

        #[command(flatten)]
        listing: ListingArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        output: OutputFormat,
    },
    /// Show current rate limit status
    Limits {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        output: OutputFormat,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
    /// Generate man page(s)
    Man {
        /// Output directory for man pages (prints to stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Listing options for the repos command.
#[derive(Debug, Clone, clap::Args)]
struct ListingArgs {
    /// Sort key for the listing
    #[arg(short, long, value_enum, default_value_t = SortArg::Updated)]
    sort: SortArg,

    /// Sort direction
    #[arg(short, long, value_enum, default_value_t = DirectionArg::Desc)]
    direction: DirectionArg,

    /// Repositories per page (the API caps this at 100)
    #[arg(short, long, default_value_t = showcase::types::DEFAULT_PAGE_SIZE)]
    page_size: u8,

    /// Keep only repositories with at least this many stars (default from config)
    #[arg(short = 'm', long)]
    min_stars: Option<u32>,

    /// Keep only repositories carrying any of these topics (repeatable; replaces config)
    #[arg(short = 't', long)]
    require_topic: Vec<String>,

    /// Drop repositories carrying any of these topics (repeatable; replaces config)
    #[arg(short = 'x', long)]
    exclude_topic: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new("showcase=info,showcase_cli=info"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    // Handle commands that don't require configuration or API access first
    match &cli.command {
        Commands::Completions { shell } => {
            commands::meta::handle_completions(*shell)?;
            return Ok(());
        }
        Commands::Man { output } => {
            commands::meta::handle_man(output.clone())?;
            return Ok(());
        }
        _ => {}
    }

    // Load configuration (config file -> env vars -> defaults)
    let config = config::Config::load();

    let client = GitHubClient::new()?;

    match cli.command {
        Commands::Sync { references, output } => {
            commands::sync::handle_sync(&client, &references, output).await?;
        }
        Commands::Repos {
            username,
            listing,
            output,
        } => {
            commands::repos::handle_repos(&client, username, &listing, &config, output).await?;
        }
        Commands::Limits { output } => {
            commands::limits::handle_limits(&client, output).await?;
        }
        Commands::Completions { .. } | Commands::Man { .. } => {}
    }

    Ok(())
}
