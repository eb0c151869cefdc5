//! Changelog report generator.
//!
//! Renders one line per node and one indented line per property:
//!
//! ```text
//! ~ #/a
//!     - name: "x"
//!     + name: "y"
//! + #/b
//!     + @id: "#/b"
//! ```

use super::{ansi_color, ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::diff::{DiffResult, MultiDiffResult, NodeChangeKind, NodeDiff};
use serde_json::Value;
use std::collections::BTreeSet;
use std::fmt::Write;

/// Changelog reporter
pub struct ChangelogReporter {
    colored: bool,
}

impl ChangelogReporter {
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

    fn write_property(&self, out: &mut String, marker: char, key: &str, value: &Value) -> std::fmt::Result {
        let color = if marker == '+' { "green" } else { "red" };
        let rendered = serde_json::to_string(value).unwrap_or_else(|_| value.to_string());
        writeln!(out, "    {}", self.color(&format!("{marker} {key}: {rendered}"), color))
    }

    fn write_node(&self, out: &mut String, node: &NodeDiff) -> std::fmt::Result {
        let (marker, color) = match node.kind {
            NodeChangeKind::Added => ('+', "green"),
            NodeChangeKind::Removed => ('-', "red"),
            NodeChangeKind::Modified => ('~', "yellow"),
        };
        writeln!(out, "{}", self.color(&format!("{marker} {}", node.id), color))?;

        let keys: BTreeSet<&str> = node
            .removed
            .keys()
            .chain(node.added.keys())
            .map(String::as_str)
            .collect();
        for key in keys {
            if let Some(old) = node.removed.get(key) {
                self.write_property(out, '-', key, old)?;
            }
            if let Some(new) = node.added.get(key) {
                self.write_property(out, '+', key, new)?;
            }
        }
        Ok(())
    }

    fn write_nodes(&self, out: &mut String, result: &DiffResult, config: &ReportConfig) -> std::fmt::Result {
        if !result.has_changes() {
            return writeln!(out, "{}", self.color("No changes", "dim"));
        }
        let limit = config.max_items.unwrap_or(usize::MAX);
        for node in result.nodes.iter().take(limit) {
            self.write_node(out, node)?;
        }
        if result.nodes.len() > limit {
            writeln!(
                out,
                "{}",
                self.color(&format!("... and {} more", result.nodes.len() - limit), "dim")
            )?;
        }
        Ok(())
    }
}

impl Default for ChangelogReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for ChangelogReporter {
    fn generate_diff_report(&self, result: &DiffResult, config: &ReportConfig) -> Result<String, ReportError> {
        let mut out = String::new();
        let header = format!(
            "# {} → {}",
            config.metadata.left_label(),
            config.metadata.right_label()
        );
        writeln!(out, "{}", self.color(&header, "bold"))?;
        self.write_nodes(&mut out, result, config)?;
        Ok(out)
    }

    fn generate_multi_report(
        &self,
        result: &MultiDiffResult,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut out = String::new();
        for comparison in &result.comparisons {
            let header = format!("# {} → {}", result.baseline, comparison.target);
            writeln!(out, "{}", self.color(&header, "bold"))?;
            match (&comparison.diff, &comparison.error) {
                (Some(diff), _) => self.write_nodes(&mut out, diff, config)?,
                (None, error) => writeln!(
                    out,
                    "{}",
                    self.color(&format!("error: {}", error.as_deref().unwrap_or("unknown")), "red")
                )?,
            }
            out.push('\n');
        }
        Ok(out)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Changelog
    }
}
