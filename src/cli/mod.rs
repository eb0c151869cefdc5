//! CLI command handlers.
//!
//! Testable command handlers invoked by main.rs. Each handler returns the
//! process exit code; the caller is responsible for exiting with it.

mod diff;
mod multi;

pub use diff::run_diff;
pub use multi::run_diff_multi;

// Re-export config types used by handlers
pub use crate::config::{DiffConfig, MultiDiffConfig};

use crate::config::{ConfigError, Validatable};

/// Fail with every validation problem of a command configuration.
fn ensure_valid(config: &impl Validatable) -> anyhow::Result<()> {
    let errors: Vec<ConfigError> = config.validate();
    if errors.is_empty() {
        return Ok(());
    }
    let details: Vec<String> = errors.iter().map(ToString::to_string).collect();
    anyhow::bail!("Invalid configuration:\n  {}", details.join("\n  "))
}
