//! Summary report generator for shell output.
//!
//! Provides a compact, human-readable summary for terminal usage.

use super::{ansi_color, ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::diff::{DiffResult, MultiDiffResult};

const NODE: (&str, &str) = ("node", "nodes");
const PROPERTY: (&str, &str) = ("property", "properties");

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn count_line(&self, count: usize, marker: char, color: &str, noun: (&str, &str), verb: &str) -> Option<String> {
        (count > 0).then(|| {
            format!(
                "  {} {} {verb}",
                self.color(&format!("{marker}{count}"), color),
                if count == 1 { noun.0 } else { noun.1 }
            )
        })
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate_diff_report(&self, result: &DiffResult, config: &ReportConfig) -> Result<String, ReportError> {
        let mut lines = Vec::new();
        let metadata = &config.metadata;
        let summary = &result.summary;

        lines.push(self.color(config.title.as_deref().unwrap_or("JSON-LD Diff Summary"), "bold"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));

        lines.push(format!(
            "{}  {} → {}",
            self.color("Files:", "cyan"),
            metadata.left_label(),
            metadata.right_label()
        ));
        if let (Some(left), Some(right)) = (&metadata.left, &metadata.right) {
            lines.push(format!(
                "{}   {} → {} nodes",
                self.color("Size:", "cyan"),
                left.node_count,
                right.node_count
            ));
        }

        lines.push(String::new());
        lines.push(self.color("Nodes:", "bold"));
        let node_lines: Vec<String> = [
            self.count_line(summary.nodes_added, '+', "green", NODE, "added"),
            self.count_line(summary.nodes_removed, '-', "red", NODE, "removed"),
            self.count_line(summary.nodes_modified, '~', "yellow", NODE, "modified"),
        ]
        .into_iter()
        .flatten()
        .collect();

        if node_lines.is_empty() {
            lines.push(format!("  {}", self.color("No changes", "dim")));
        } else {
            lines.extend(node_lines);

            lines.push(String::new());
            lines.push(self.color("Properties:", "bold"));
            lines.extend(
                [
                    self.count_line(summary.properties_added, '+', "green", PROPERTY, "added"),
                    self.count_line(summary.properties_removed, '-', "red", PROPERTY, "removed"),
                    self.count_line(summary.properties_modified, '~', "yellow", PROPERTY, "modified"),
                ]
                .into_iter()
                .flatten(),
            );
            if summary.context_changed {
                lines.push(format!("  {}", self.color("@context changed", "yellow")));
            }
        }

        Ok(lines.join("\n"))
    }

    fn generate_multi_report(
        &self,
        result: &MultiDiffResult,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();
        let summary = &result.summary;

        lines.push(self.color(config.title.as_deref().unwrap_or("JSON-LD Multi-Diff Summary"), "bold"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));
        lines.push(format!("{}  {}", self.color("Baseline:", "cyan"), result.baseline));
        lines.push(format!(
            "{}  {} total, {} identical, {} changed, {} failed",
            self.color("Targets:", "cyan"),
            summary.total_targets,
            summary.targets_identical,
            summary.targets_changed,
            summary.targets_failed
        ));
        lines.push(String::new());

        for comparison in &result.comparisons {
            let status = match (&comparison.diff, &comparison.error) {
                (Some(diff), _) if diff.has_changes() => self.color(
                    &format!(
                        "+{} -{} ~{}",
                        diff.summary.nodes_added, diff.summary.nodes_removed, diff.summary.nodes_modified
                    ),
                    "yellow",
                ),
                (Some(_), _) => self.color("identical", "green"),
                (None, Some(error)) => self.color(&format!("error: {error}"), "red"),
                (None, None) => self.color("error", "red"),
            };
            lines.push(format!("  {}  {status}", comparison.target));
        }

        if !summary.common_changed_nodes.is_empty() {
            lines.push(String::new());
            lines.push(self.color("Changed in every target:", "bold"));
            for id in &summary.common_changed_nodes {
                lines.push(format!("  {id}"));
            }
        }

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}
