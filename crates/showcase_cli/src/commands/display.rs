//! Shared output helpers for command results.

use clap::ValueEnum;
use serde::Serialize;
use tabled::Tabled;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Display as a formatted table (default)
    #[default]
    Table,
    /// Display as JSON
    Json,
}

/// Print rows in the selected format.
pub(crate) fn print_rows<T>(rows: Vec<T>, format: OutputFormat)
where
    T: Tabled + Serialize,
{
    match format {
        OutputFormat::Table => {
            let mut table = tabled::Table::new(rows);
            table.with(tabled::settings::Style::rounded());
            println!("{}", table);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&rows).unwrap());
        }
    }
}

/// Format a duration in a human-readable way.
pub(crate) fn format_duration(duration: chrono::Duration) -> String {
    let total_secs = duration.num_seconds();
    if total_secs < 60 {
        format!("{}s", total_secs)
    } else if total_secs < 3600 {
        let mins = total_secs / 60;
        let secs = total_secs % 60;
        if secs > 0 {
            format!("{}m {}s", mins, secs)
        } else {
            format!("{}m", mins)
        }
    } else {
        let hours = total_secs / 3600;
        let mins = (total_secs % 3600) / 60;
        if mins > 0 {
            format!("{}h {}m", hours, mins)
        } else {
            format!("{}h", hours)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Serialize, Tabled)]
    struct SampleRow {
        #[tabled(rename = "Name")]
        name: String,
        #[tabled(rename = "Count")]
        count: usize,
    }

    #[test]
    fn output_format_default_is_table() {
        assert!(matches!(OutputFormat::default(), OutputFormat::Table));
    }

    #[test]
    fn format_duration_handles_seconds_minutes_and_hours() {
        assert_eq!(format_duration(chrono::Duration::seconds(42)), "42s");
        assert_eq!(format_duration(chrono::Duration::seconds(120)), "2m");
        assert_eq!(format_duration(chrono::Duration::seconds(125)), "2m 5s");
        assert_eq!(format_duration(chrono::Duration::seconds(3600)), "1h");
        assert_eq!(format_duration(chrono::Duration::seconds(3900)), "1h 5m");
    }

    #[test]
    fn print_rows_supports_json_and_table() {
        let rows = vec![SampleRow {
            name: "example".to_string(),
            count: 3,
        }];

        // Smoke tests: this should not panic in either output mode.
        print_rows(rows.clone(), OutputFormat::Json);
        print_rows(rows, OutputFormat::Table);
    }
}
