//! Sync repository references into normalized project metadata.

use showcase::{GitHubClient, ProjectMetadata};

use crate::commands::display::OutputFormat;

/// Widest description column a table row gets before truncation.
const DESCRIPTION_WIDTH: usize = 48;

/// Handle the sync command.
///
/// References are processed in order; a failing reference is reported on
/// stderr and does not stop the rest. JSON output carries the full
/// normalized metadata, the table a condensed view of it.
pub(crate) async fn handle_sync(
    client: &GitHubClient,
    references: &[String],
    output: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut projects = Vec::with_capacity(references.len());
    let mut failed = 0usize;

    for reference in references {
        match client.sync_repository(reference).await {
            Ok(metadata) => projects.push(metadata),
            Err(err) => {
                eprintln!("{}: {}", reference, err);
                failed += 1;
            }
        }
    }

    match output {
        OutputFormat::Table => {
            if !projects.is_empty() {
                let rows: Vec<ProjectRow> =
                    projects.iter().map(ProjectRow::from_metadata).collect();
                let mut table = tabled::Table::new(rows);
                table.with(tabled::settings::Style::rounded());
                println!("{}", table);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&projects)?);
        }
    }

    if failed > 0 {
        return Err(format!("{} of {} references failed", failed, references.len()).into());
    }
    Ok(())
}

/// One synced project as a table row.
#[derive(Debug, Clone, tabled::Tabled)]
pub(crate) struct ProjectRow {
    #[tabled(rename = "Repository")]
    pub repository: String,
    #[tabled(rename = "Description")]
    pub description: String,
    #[tabled(rename = "Stars")]
    pub stars: u32,
    #[tabled(rename = "Technologies")]
    pub technologies: String,
    #[tabled(rename = "Homepage")]
    pub homepage: String,
    #[tabled(rename = "Last Push")]
    pub last_push: String,
}

impl ProjectRow {
    pub(crate) fn from_metadata(metadata: &ProjectMetadata) -> Self {
        Self {
            repository: metadata.source_url.clone(),
            description: truncate(&metadata.description, DESCRIPTION_WIDTH),
            stars: metadata.stars,
            technologies: metadata.technologies.join(", "),
            homepage: metadata
                .homepage_url
                .clone()
                .unwrap_or_else(|| "-".to_string()),
            last_push: metadata.last_pushed_at.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Truncate text to at most `max_chars` characters, marking the cut.
fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let prefix: String = text.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", prefix)
    }
}
