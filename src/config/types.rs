//! Configuration types for jsonld-diff operations.

use crate::diff::DiffEngine;
use crate::error::OptionContext;
use crate::reports::ReportFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// CLI arguments are layered over file settings with [`AppConfig::merge`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Comparison options
    pub diff: DiffOptions,
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

impl AppConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    pub const fn include_context(mut self, include: bool) -> Self {
        self.config.diff.include_context = include;
        self
    }

    pub fn ignore_property(mut self, key: impl Into<String>) -> Self {
        self.config.diff.ignored_properties.push(key.into());
        self
    }

    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    pub const fn fail_on_change(mut self, fail: bool) -> Self {
        self.config.behavior.fail_on_change = fail;
        self
    }

    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.config.behavior.quiet = quiet;
        self
    }

    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Sub-configuration Types
// ============================================================================

/// Comparison options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct DiffOptions {
    /// Compare `@context` as an extra pseudo-node
    pub include_context: bool,
    /// Property keys skipped in every graph node (`@id` is not allowed)
    pub ignored_properties: Vec<String>,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            include_context: true,
            ignored_properties: Vec::new(),
        }
    }
}

impl DiffOptions {
    /// Build a diff engine carrying these options.
    #[must_use]
    pub fn engine(&self) -> DiffEngine {
        DiffEngine::new()
            .include_context(self.include_context)
            .with_ignored_properties(self.ignored_properties.iter().cloned())
    }
}

/// Output-related configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (None for stdout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
}

/// Behavior flags for diff operations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Exit with code 1 if any changes detected
    pub fail_on_change: bool,
    /// Suppress non-essential output
    pub quiet: bool,
}

// ============================================================================
// Command Configurations
// ============================================================================

/// Paths for a 1:1 comparison
#[derive(Debug, Clone)]
pub struct DiffPaths {
    /// Baseline (left) document
    pub left: PathBuf,
    /// Candidate (right) document
    pub right: PathBuf,
}

/// Configuration for the `diff` command
#[derive(Debug, Clone)]
pub struct DiffConfig {
    pub paths: DiffPaths,
    pub diff: DiffOptions,
    pub output: OutputConfig,
    pub behavior: BehaviorConfig,
}

/// Configuration for the `diff-multi` command
#[derive(Debug, Clone)]
pub struct MultiDiffConfig {
    /// Baseline document
    pub baseline: PathBuf,
    /// Documents compared against the baseline
    pub targets: Vec<PathBuf>,
    pub diff: DiffOptions,
    pub output: OutputConfig,
    pub behavior: BehaviorConfig,
}

impl MultiDiffConfig {
    /// Combine paths with application settings.
    #[must_use]
    pub fn from_app_config(baseline: PathBuf, targets: Vec<PathBuf>, app: AppConfig) -> Self {
        Self {
            baseline,
            targets,
            diff: app.diff,
            output: app.output,
            behavior: app.behavior,
        }
    }
}

/// Builder for [`DiffConfig`]
#[derive(Debug, Default)]
pub struct DiffConfigBuilder {
    left: Option<PathBuf>,
    right: Option<PathBuf>,
    diff: DiffOptions,
    output: OutputConfig,
    behavior: BehaviorConfig,
}

impl DiffConfigBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from application settings, typically file config merged with CLI flags.
    #[must_use]
    pub fn with_app_config(mut self, app: AppConfig) -> Self {
        self.diff = app.diff;
        self.output = app.output;
        self.behavior = app.behavior;
        self
    }

    #[must_use]
    pub fn left_path(mut self, path: PathBuf) -> Self {
        self.left = Some(path);
        self
    }

    #[must_use]
    pub fn right_path(mut self, path: PathBuf) -> Self {
        self.right = Some(path);
        self
    }

    #[must_use]
    pub const fn include_context(mut self, include: bool) -> Self {
        self.diff.include_context = include;
        self
    }

    #[must_use]
    pub fn ignore_properties<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.diff.ignored_properties.extend(keys.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.output.format = format;
        self
    }

    #[must_use]
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.output.file = file;
        self
    }

    #[must_use]
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.output.no_color = no_color;
        self
    }

    #[must_use]
    pub const fn fail_on_change(mut self, fail: bool) -> Self {
        self.behavior.fail_on_change = fail;
        self
    }

    #[must_use]
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.behavior.quiet = quiet;
        self
    }

    pub fn build(self) -> anyhow::Result<DiffConfig> {
        let left = self.left.context_none("left path is required")?;
        let right = self.right.context_none("right path is required")?;

        Ok(DiffConfig {
            paths: DiffPaths { left, right },
            diff: self.diff,
            output: self.output,
            behavior: self.behavior,
        })
    }
}
