//! Diff command handler.
//!
//! Implements the `diff` subcommand for comparing two documents.

use super::ensure_valid;
use crate::config::DiffConfig;
use crate::diff::DiffResult;
use crate::pipeline::{compute_diff, exit_codes, output_report, parse_document_with_context};
use anyhow::Result;

/// Run the diff command, returning the desired exit code.
#[allow(clippy::needless_pass_by_value)]
pub fn run_diff(config: DiffConfig) -> Result<i32> {
    ensure_valid(&config)?;
    let quiet = config.behavior.quiet;

    let left = parse_document_with_context(&config.paths.left, quiet)?;
    let right = parse_document_with_context(&config.paths.right, quiet)?;

    if !quiet {
        tracing::info!(
            "Parsed {} nodes from left document, {} from right document",
            left.node_count,
            right.node_count
        );
    }

    let result = compute_diff(&config, &left, &right)?;
    let exit_code = determine_exit_code(&config, &result);

    output_report(&config, &result, &left, &right)?;

    Ok(exit_code)
}

/// Determine the appropriate exit code based on diff results and config flags.
fn determine_exit_code(config: &DiffConfig, result: &DiffResult) -> i32 {
    if config.behavior.fail_on_change && result.has_changes() {
        return exit_codes::CHANGES_DETECTED;
    }
    exit_codes::SUCCESS
}
