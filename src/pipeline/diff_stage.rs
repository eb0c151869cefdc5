//! Diff computation stage.

use super::{ParsedDocument, PipelineError};
use crate::config::{DiffConfig, MultiDiffConfig};
use crate::diff::{DiffResult, MultiDiffEngine, MultiDiffResult};
use anyhow::Result;

/// Run the core diff computation between two documents.
pub fn compute_diff(config: &DiffConfig, left: &ParsedDocument, right: &ParsedDocument) -> Result<DiffResult> {
    let quiet = config.behavior.quiet;
    let engine = config.diff.engine();

    if !quiet {
        tracing::info!("Computing structured diff...");
    }
    if !engine.property_filter().is_empty() {
        tracing::debug!(
            "Ignoring properties: {}",
            engine.property_filter().ignored().collect::<Vec<_>>().join(", ")
        );
    }

    let result = engine
        .diff(&left.document, &right.document)
        .map_err(|source| PipelineError::DiffFailed { source })?;

    if !quiet {
        tracing::info!(
            "Diff complete: {} added, {} removed, {} modified nodes",
            result.summary.nodes_added,
            result.summary.nodes_removed,
            result.summary.nodes_modified
        );
    }

    Ok(result)
}

/// Compare a baseline against every target.
pub fn compute_multi_diff(
    config: &MultiDiffConfig,
    baseline: &ParsedDocument,
    targets: &[ParsedDocument],
) -> Result<MultiDiffResult> {
    let engine = MultiDiffEngine::with_engine(config.diff.engine());

    let labels: Vec<String> = targets.iter().map(|t| t.path.display().to_string()).collect();
    let pairs: Vec<(&str, &serde_json::Value)> = labels
        .iter()
        .zip(targets)
        .map(|(label, target)| (label.as_str(), &target.document))
        .collect();

    if !config.behavior.quiet {
        tracing::info!("Comparing baseline against {} targets...", pairs.len());
    }

    let result = engine
        .diff_multi(&baseline.path.display().to_string(), &baseline.document, &pairs)
        .map_err(|source| PipelineError::DiffFailed { source })?;

    for comparison in &result.comparisons {
        if let Some(error) = &comparison.error {
            tracing::warn!("{}: {}", comparison.target, error);
        }
    }

    Ok(result)
}
