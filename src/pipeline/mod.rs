//! Pipeline orchestration for document comparisons.
//!
//! Shared parse → diff → report logic used by the CLI command handlers.

mod diff_stage;
mod output;
mod parse;
mod report_stage;

pub use diff_stage::{compute_diff, compute_multi_diff};
pub use output::{should_use_color, write_output, OutputTarget};
pub use parse::{parse_document_with_context, ParsedDocument};
pub use report_stage::{output_multi_report, output_report};

/// Structured pipeline error types for better diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Failed to read or parse a document file
    #[error("Parse failed for {path}: {source}")]
    ParseFailed {
        path: String,
        #[source]
        source: crate::error::LdDiffError,
    },

    /// Diff computation failed
    #[error("Diff failed: {source}")]
    DiffFailed {
        #[source]
        source: crate::error::LdDiffError,
    },

    /// Report generation or output failed
    #[error("Report failed: {source}")]
    ReportFailed {
        #[source]
        source: anyhow::Error,
    },
}

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success - no changes detected (or changes without --fail-on-change)
    pub const SUCCESS: i32 = 0;
    /// Changes were detected
    pub const CHANGES_DETECTED: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 3;
}
