//! Configuration validation for jsonld-diff.

use super::types::{AppConfig, BehaviorConfig, DiffConfig, DiffOptions, MultiDiffConfig, OutputConfig};
use crate::model::ID_KEY;
use std::path::Path;

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.diff.validate());
        errors.extend(self.output.validate());
        errors.extend(self.behavior.validate());
        errors
    }
}

impl Validatable for DiffOptions {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        for (i, key) in self.ignored_properties.iter().enumerate() {
            let field = format!("diff.ignored_properties[{i}]");
            if key.trim().is_empty() {
                errors.push(ConfigError::new(field, "Property key must not be empty"));
            } else if key == ID_KEY {
                errors.push(ConfigError::new(
                    field,
                    format!("'{ID_KEY}' is the node identity and cannot be ignored"),
                ));
            }
        }
        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if let Some(parent) = self.file.as_deref().and_then(Path::parent) {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                errors.push(ConfigError::new(
                    "output.file",
                    format!("Parent directory does not exist: {}", parent.display()),
                ));
            }
        }
        errors
    }
}

impl Validatable for BehaviorConfig {
    fn validate(&self) -> Vec<ConfigError> {
        Vec::new()
    }
}

fn check_exists(errors: &mut Vec<ConfigError>, field: String, path: &Path) {
    if !path.exists() {
        errors.push(ConfigError::new(field, format!("File not found: {}", path.display())));
    }
}

impl Validatable for DiffConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        check_exists(&mut errors, "paths.left".to_string(), &self.paths.left);
        check_exists(&mut errors, "paths.right".to_string(), &self.paths.right);
        errors.extend(self.diff.validate());
        errors.extend(self.output.validate());
        errors
    }
}

impl Validatable for MultiDiffConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        check_exists(&mut errors, "baseline".to_string(), &self.baseline);
        for (i, target) in self.targets.iter().enumerate() {
            check_exists(&mut errors, format!("targets[{i}]"), target);
        }
        if self.targets.is_empty() {
            errors.push(ConfigError::new("targets", "At least one target document is required"));
        }
        errors.extend(self.diff.validate());
        errors.extend(self.output.validate());
        errors
    }
}
