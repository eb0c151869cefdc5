//! Report output stage.

use super::{should_use_color, write_output, OutputTarget, ParsedDocument, PipelineError};
use crate::config::{DiffConfig, MultiDiffConfig, OutputConfig};
use crate::diff::{DiffResult, MultiDiffResult};
use crate::reports::{create_reporter, ReportConfig, ReportError, ReportGenerator, ReportMetadata};
use anyhow::Result;

fn reporter_for(output: &OutputConfig, target: &OutputTarget) -> Box<dyn ReportGenerator> {
    let use_color = should_use_color(output.no_color, target);
    create_reporter(output.format, use_color)
}

fn report_failed(err: ReportError) -> PipelineError {
    PipelineError::ReportFailed { source: err.into() }
}

/// Output a diff report to the configured destination.
pub fn output_report(
    config: &DiffConfig,
    result: &DiffResult,
    left: &ParsedDocument,
    right: &ParsedDocument,
) -> Result<()> {
    let target = OutputTarget::from_option(config.output.file.clone());
    let reporter = reporter_for(&config.output, &target);
    let report_config = ReportConfig::with_metadata(ReportMetadata::for_pair(left.info(), right.info()));

    let report = reporter
        .generate_diff_report(result, &report_config)
        .map_err(report_failed)?;
    write_output(&report, &target, config.behavior.quiet)
}

/// Output a 1:N comparison report to the configured destination.
pub fn output_multi_report(
    config: &MultiDiffConfig,
    result: &MultiDiffResult,
    baseline: &ParsedDocument,
    targets: &[ParsedDocument],
) -> Result<()> {
    let target = OutputTarget::from_option(config.output.file.clone());
    let reporter = reporter_for(&config.output, &target);
    let report_config = ReportConfig::with_metadata(ReportMetadata {
        left: Some(baseline.info()),
        right: None,
        targets: targets
            .iter()
            .map(|t| (t.path.display().to_string(), t.info()))
            .collect(),
    });

    let report = reporter
        .generate_multi_report(result, &report_config)
        .map_err(report_failed)?;
    write_output(&report, &target, config.behavior.quiet)
}
