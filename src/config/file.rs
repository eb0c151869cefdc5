//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::AppConfig;
use crate::reports::ReportFormat;
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
const CONFIG_FILE_NAMES: &[&str] = &[".jsonld-diff.yaml", ".jsonld-diff.yml", "jsonld-diff.yaml"];

/// Directory name under the user config directory.
const CONFIG_DIR_NAME: &str = "jsonld-diff";

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. Git repository root (if in a repo)
/// 4. User config directory (~/.config/jsonld-diff/)
/// 5. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    let cwd = std::env::current_dir().ok();
    let user_dir = dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME));

    cwd.into_iter()
        .chain(find_git_root())
        .chain(user_dir)
        .chain(dirs::home_dir())
        .find_map(|dir| find_config_in_dir(&dir))
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Find the git repository root by walking up the directory tree.
fn find_git_root() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    let mut current = cwd.as_path();

    loop {
        if current.join(".git").exists() {
            return Some(current.to_path_buf());
        }
        current = current.parent()?;
    }
}

/// Location a new user-level config file would be written to.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAMES[2]))
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug)]
pub enum ConfigFileError {
    /// File not found
    NotFound(PathBuf),
    /// IO error reading file
    Io(std::io::Error),
    /// YAML parsing error
    Parse(serde_yaml::Error),
}

impl std::fmt::Display for ConfigFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => write!(f, "Config file not found: {}", path.display()),
            Self::Io(e) => write!(f, "Failed to read config file: {e}"),
            Self::Parse(e) => write!(f, "Failed to parse config file: {e}"),
        }
    }
}

impl std::error::Error for ConfigFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigFileError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_yaml::Error> for ConfigFileError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse(err)
    }
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(AppConfig::default());
    }
    let config: AppConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Load config from discovered file, or return default.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => {
                tracing::debug!("Loaded config from {}", path.display());
                (config, Some(path))
            }
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    )
}

// ============================================================================
// Configuration Merging
// ============================================================================

impl AppConfig {
    /// Merge another config into this one, with `other` taking precedence.
    ///
    /// Only values that differ from the defaults override. Ignored
    /// properties accumulate.
    pub fn merge(&mut self, other: &Self) {
        if !other.diff.include_context {
            self.diff.include_context = false;
        }
        for key in &other.diff.ignored_properties {
            if !self.diff.ignored_properties.contains(key) {
                self.diff.ignored_properties.push(key.clone());
            }
        }

        if other.output.format != ReportFormat::Auto {
            self.output.format = other.output.format;
        }
        if other.output.file.is_some() {
            self.output.file.clone_from(&other.output.file);
        }
        if other.output.no_color {
            self.output.no_color = true;
        }

        if other.behavior.fail_on_change {
            self.behavior.fail_on_change = true;
        }
        if other.behavior.quiet {
            self.behavior.quiet = true;
        }
    }

    /// Load from file and merge with CLI overrides.
    #[must_use]
    pub fn from_file_with_overrides(config_path: Option<&Path>, cli_overrides: &Self) -> (Self, Option<PathBuf>) {
        let (mut config, loaded_from) = load_or_default(config_path);
        config.merge(cli_overrides);
        (config, loaded_from)
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate a commented example config file.
#[must_use]
pub fn generate_example_config() -> String {
    r"# jsonld-diff configuration
# Place this file at .jsonld-diff.yaml in your project root
# or at ~/.config/jsonld-diff/jsonld-diff.yaml for global config.
# CLI arguments always override file settings.

diff:
  # Compare @context as an extra pseudo-node
  include_context: true
  # Property keys skipped in every graph node
  ignored_properties: []
  # ignored_properties:
  #   - http://a.ml/vocabularies/document-source-maps#sources

output:
  # Format: auto, json, summary, changelog
  format: auto
  # Output file path (omit for stdout)
  # file: diff.json
  no_color: false

behavior:
  # Exit with code 1 if any changes detected
  fail_on_change: false
  quiet: false
"
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_load_config_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(".jsonld-diff.yaml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "diff:\n  include_context: false\noutput:\n  format: json").unwrap();

        let config = load_config_file(&path).unwrap();
        assert!(!config.diff.include_context);
        assert_eq!(config.output.format, ReportFormat::Json);
    }

    #[test]
    fn test_load_missing_and_invalid() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("missing.yaml");
        assert!(matches!(load_config_file(&missing), Err(ConfigFileError::NotFound(_))));

        let bad = tmp.path().join("bad.yaml");
        std::fs::write(&bad, "output:\n  format: [not, a, format]\n").unwrap();
        assert!(matches!(load_config_file(&bad), Err(ConfigFileError::Parse(_))));
    }

    #[test]
    fn test_empty_file_is_default() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("empty.yaml");
        std::fs::write(&path, "\n").unwrap();
        assert_eq!(load_config_file(&path).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_config_merge() {
        let mut base = AppConfig::builder().ignore_property("a").build();
        let overrides = AppConfig::builder()
            .include_context(false)
            .ignore_property("a")
            .ignore_property("b")
            .output_format(ReportFormat::Changelog)
            .fail_on_change(true)
            .build();

        base.merge(&overrides);

        assert!(!base.diff.include_context);
        assert_eq!(base.diff.ignored_properties, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(base.output.format, ReportFormat::Changelog);
        assert!(base.behavior.fail_on_change);
        assert!(!base.behavior.quiet);
    }

    #[test]
    fn test_generate_example_config_parses() {
        let example = generate_example_config();
        assert!(example.contains("ignored_properties"));
        let parsed: AppConfig = serde_yaml::from_str(&example).unwrap();
        assert_eq!(parsed, AppConfig::default());
    }

    #[test]
    fn test_discover_explicit_path() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("custom-config.yaml");
        std::fs::write(&config_path, "behavior:\n  quiet: true\n").unwrap();

        let discovered = discover_config_file(Some(&config_path));
        assert_eq!(discovered, Some(config_path));
    }
}
