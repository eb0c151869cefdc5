//! Configuration module for jsonld-diff.
//!
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Configuration File
//!
//! Place a `.jsonld-diff.yaml` file in your project root or
//! `~/.config/jsonld-diff/`:
//!
//! ```yaml
//! diff:
//!   ignored_properties:
//!     - http://a.ml/vocabularies/document-source-maps#sources
//! behavior:
//!   fail_on_change: true
//! ```

pub mod file;
mod types;
mod validation;

pub use types::{
    AppConfig, AppConfigBuilder, BehaviorConfig, DiffConfig, DiffConfigBuilder, DiffOptions, DiffPaths,
    MultiDiffConfig, OutputConfig,
};
pub use validation::{ConfigError, Validatable};

pub use file::{
    default_config_path, discover_config_file, generate_example_config, load_config_file, load_or_default,
    ConfigFileError,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// Editors can use it to validate and complete `.jsonld-diff.yaml` files.
pub fn generate_json_schema() -> Result<String, serde_json::Error> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
}
