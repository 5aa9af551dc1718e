//! Output Formatting and Display Management
//!
//! Renders an [`AnalysisReport`] either as a colored terminal report or as JSON. Both
//! renderers return strings; printing is left to the caller.
//!
//! ## Terminal Report
//!
//! - Source file and line bookkeeping (total, skipped)
//! - Number of unique client addresses
//! - "Top N most visited URLs" table
//! - "Top N most active IPs" table
//!
//! ## JSON Output
//!
//! ```json
//! {
//!   "source": "logs/access.log",
//!   "totalLines": 6,
//!   "skippedLines": 0,
//!   "topN": 2,
//!   "totalRecords": 6,
//!   "uniqueOrigins": 3,
//!   "topPaths": [{ "key": "/home", "count": 3 }, { "key": "/about", "count": 2 }],
//!   "topOrigins": [{ "key": "192.168.0.1", "count": 3 }, { "key": "192.168.0.2", "count": 2 }]
//! }
//! ```

use crate::models::{AnalysisReport, Group};
use anyhow::{Context, Result};
use colored::Colorize;
use std::fmt::Write;

pub struct ReportDisplayManager {
    json_pretty: bool,
}

impl Default for ReportDisplayManager {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ReportDisplayManager {
    pub fn new(json_pretty: bool) -> Self {
        Self { json_pretty }
    }

    pub fn render(&self, report: &AnalysisReport, json_output: bool) -> Result<String> {
        if json_output {
            self.render_json(report)
        } else {
            Ok(self.render_text(report))
        }
    }

    pub fn render_json(&self, report: &AnalysisReport) -> Result<String> {
        let json = if self.json_pretty {
            serde_json::to_string_pretty(report)
        } else {
            serde_json::to_string(report)
        };
        json.context("Error serializing analysis report to JSON")
    }

    pub fn render_text(&self, report: &AnalysisReport) -> String {
        let mut out = String::new();
        let rule = "=".repeat(60);

        let _ = writeln!(out, "{}", rule.bright_cyan());
        let _ = writeln!(
            out,
            "{} {}",
            "Analysis results of log file:".bright_white().bold(),
            report.source.bright_white()
        );
        let _ = writeln!(out, "{}", rule.bright_cyan());
        let _ = writeln!(
            out,
            "\n{} {} of {} lines parsed",
            "📄".bright_yellow(),
            report.result.total_records.to_string().bright_white().bold(),
            report.total_lines.to_string().bright_white()
        );
        if report.skipped_lines > 0 {
            let _ = writeln!(
                out,
                "{} {} lines skipped (see warnings)",
                "⚠️ ".bright_yellow(),
                report.skipped_lines.to_string().bright_yellow().bold()
            );
        }
        let _ = writeln!(
            out,
            "\nUnique IP addresses: {}\n",
            report.result.distinct_origins.to_string().bright_green().bold()
        );

        let _ = writeln!(out, "Top {} most visited URLs:", report.top_n);
        render_table(&mut out, "URL", &report.result.top_paths);

        let _ = writeln!(out, "Top {} most active IPs:", report.top_n);
        render_table(&mut out, "IP", &report.result.top_origins);

        out
    }
}

fn render_table(out: &mut String, key_header: &str, groups: &[Group]) {
    let width = groups
        .iter()
        .map(|g| g.key.chars().count())
        .chain(std::iter::once(key_header.len()))
        .max()
        .unwrap_or(0);

    let _ = writeln!(
        out,
        "{}  {}",
        format!("{:<width$}", key_header, width = width).blue().underline(),
        "Count".blue().underline()
    );

    if groups.is_empty() {
        let _ = writeln!(out, "{}", "(none)".dimmed());
    }

    for group in groups {
        let _ = writeln!(
            out,
            "{}  {}",
            format!("{:<width$}", group.key, width = width).bright_blue(),
            group.count
        );
    }
    let _ = writeln!(out);
}
