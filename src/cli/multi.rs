//! Multi-document command handler.
//!
//! Implements the `diff-multi` subcommand.

use super::ensure_valid;
use crate::config::MultiDiffConfig;
use crate::diff::MultiDiffResult;
use crate::pipeline::{
    compute_multi_diff, exit_codes, output_multi_report, parse_document_with_context, ParsedDocument,
};
use anyhow::Result;

/// Run the diff-multi command (1:N comparison), returning the exit code.
///
/// Every file must parse; documents that parse but fail validation are
/// reported per target.
#[allow(clippy::needless_pass_by_value)]
pub fn run_diff_multi(config: MultiDiffConfig) -> Result<i32> {
    ensure_valid(&config)?;
    let quiet = config.behavior.quiet;

    let baseline = parse_document_with_context(&config.baseline, quiet)?;
    let targets = config
        .targets
        .iter()
        .map(|path| parse_document_with_context(path, quiet))
        .collect::<Result<Vec<ParsedDocument>>>()?;

    let result = compute_multi_diff(&config, &baseline, &targets)?;

    if !quiet {
        tracing::info!(
            "Multi-diff complete: {} identical, {} changed, {} failed",
            result.summary.targets_identical,
            result.summary.targets_changed,
            result.summary.targets_failed
        );
    }

    let exit_code = determine_exit_code(&config, &result);
    output_multi_report(&config, &result, &baseline, &targets)?;
    Ok(exit_code)
}

fn determine_exit_code(config: &MultiDiffConfig, result: &MultiDiffResult) -> i32 {
    if result.has_failures() {
        return exit_codes::ERROR;
    }
    if config.behavior.fail_on_change && result.has_changes() {
        return exit_codes::CHANGES_DETECTED;
    }
    exit_codes::SUCCESS
}
