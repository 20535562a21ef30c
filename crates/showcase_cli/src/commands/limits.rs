//! Rate limit status display.

use showcase::{GitHubClient, RateLimitResource};

use crate::commands::display::{OutputFormat, format_duration, print_rows};

/// Handle the limits command.
pub(crate) async fn handle_limits(
    client: &GitHubClient,
    output: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let status = client.rate_limit_status().await?;

    let mut items = vec![RateLimitDisplay::from_resource("core", &status.core)];
    if let Some(ref search) = status.search {
        items.push(RateLimitDisplay::from_resource("search", search));
    }

    // Sort by resource name for consistent output.
    items.sort_by(|a, b| a.resource.cmp(&b.resource));
    print_rows(items, output);

    Ok(())
}

/// Rate limit information for display.
#[derive(Debug, Clone, serde::Serialize, tabled::Tabled)]
pub(crate) struct RateLimitDisplay {
    #[tabled(rename = "Resource")]
    pub resource: String,
    #[tabled(rename = "Limit")]
    pub limit: String,
    #[tabled(rename = "Used")]
    pub used: String,
    #[tabled(rename = "Remaining")]
    pub remaining: String,
    #[tabled(rename = "Usage %")]
    pub usage_percent: String,
    #[tabled(rename = "Resets At")]
    pub reset_at: String,
    #[tabled(rename = "Resets In")]
    pub reset_in: String,
}

impl RateLimitDisplay {
    pub(crate) fn from_resource(name: &str, resource: &RateLimitResource) -> Self {
        let usage_percent = if resource.limit > 0 {
            (resource.used as f64 / resource.limit as f64) * 100.0
        } else {
            0.0
        };
        let reset_at = resource.reset_at();
        let reset_duration = reset_at.signed_duration_since(chrono::Utc::now());
        let reset_in = if reset_duration.num_seconds() > 0 {
            format_duration(reset_duration)
        } else {
            "now".to_string()
        };

        Self {
            resource: name.to_string(),
            limit: resource.limit.to_string(),
            used: resource.used.to_string(),
            remaining: resource.remaining.to_string(),
            usage_percent: format!("{:.1}%", usage_percent),
            reset_at: reset_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            reset_in,
        }
    }
}
