//! 1:N comparison of a baseline document against several targets.
//!
//! Each baseline/target pair is an independent diff, so pairs run in
//! parallel on the rayon pool. A target that fails validation is reported
//! in its own [`ComparisonResult`] and does not abort the batch.

use super::validate::validate_document;
use super::{DiffEngine, DiffResult};
use crate::error::Result;
use crate::model::Side;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};

/// Result of 1:N baseline comparison
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultiDiffResult {
    /// Baseline label
    pub baseline: String,
    /// One entry per target, in input order
    pub comparisons: Vec<ComparisonResult>,
    /// Aggregated summary across all comparisons
    pub summary: MultiDiffSummary,
}

impl MultiDiffResult {
    /// Whether any target differs from the baseline
    #[must_use]
    pub fn has_changes(&self) -> bool {
        self.summary.targets_changed > 0
    }

    /// Whether any target could not be compared
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.summary.targets_failed > 0
    }
}

/// Baseline vs one target
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Target label
    pub target: String,
    /// Diff result, absent when the comparison failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff: Option<DiffResult>,
    /// Error message when the comparison failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ComparisonResult {
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.diff.is_some()
    }

    #[must_use]
    pub fn has_changes(&self) -> bool {
        self.diff.as_ref().is_some_and(DiffResult::has_changes)
    }
}

/// Aggregated statistics for a 1:N comparison
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiDiffSummary {
    pub total_targets: usize,
    pub targets_identical: usize,
    pub targets_changed: usize,
    pub targets_failed: usize,
    /// Node ids that differ in every successful comparison
    pub common_changed_nodes: Vec<String>,
    /// For each changed node id, how many targets it differs in
    pub node_change_frequency: BTreeMap<String, usize>,
}

impl MultiDiffSummary {
    fn from_comparisons(comparisons: &[ComparisonResult]) -> Self {
        let mut summary = Self {
            total_targets: comparisons.len(),
            ..Self::default()
        };

        let mut succeeded = 0;
        for comparison in comparisons {
            let Some(diff) = &comparison.diff else {
                summary.targets_failed += 1;
                continue;
            };
            succeeded += 1;
            if diff.has_changes() {
                summary.targets_changed += 1;
            } else {
                summary.targets_identical += 1;
            }
            let ids: BTreeSet<&str> = diff.nodes.iter().map(|n| n.id.as_str()).collect();
            for id in ids {
                *summary.node_change_frequency.entry(id.to_string()).or_default() += 1;
            }
        }

        if succeeded > 0 {
            summary.common_changed_nodes = summary
                .node_change_frequency
                .iter()
                .filter(|(_, count)| **count == succeeded)
                .map(|(id, _)| id.clone())
                .collect();
        }
        summary
    }
}

/// Engine for 1:N comparisons.
#[derive(Debug, Clone, Default)]
pub struct MultiDiffEngine {
    engine: DiffEngine,
}

impl MultiDiffEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a configured single-pair engine for every comparison
    #[must_use]
    pub const fn with_engine(engine: DiffEngine) -> Self {
        Self { engine }
    }

    #[must_use]
    pub const fn engine(&self) -> &DiffEngine {
        &self.engine
    }

    /// Compare `baseline` against each `(label, document)` target.
    ///
    /// An invalid baseline fails the whole call, since no comparison could
    /// succeed. Target failures are recorded per target.
    pub fn diff_multi(
        &self,
        baseline_name: &str,
        baseline: &Value,
        targets: &[(&str, &Value)],
    ) -> Result<MultiDiffResult> {
        validate_document(Side::Left, baseline)?;

        let comparisons: Vec<ComparisonResult> = targets
            .par_iter()
            .map(|(name, target)| match self.engine.diff(baseline, target) {
                Ok(diff) => ComparisonResult {
                    target: (*name).to_string(),
                    diff: Some(diff),
                    error: None,
                },
                Err(err) => {
                    tracing::warn!(target_name = %name, "comparison failed: {err}");
                    ComparisonResult {
                        target: (*name).to_string(),
                        diff: None,
                        error: Some(err.to_string()),
                    }
                }
            })
            .collect();

        let summary = MultiDiffSummary::from_comparisons(&comparisons);
        Ok(MultiDiffResult {
            baseline: baseline_name.to_string(),
            comparisons,
            summary,
        })
    }
}
