//! Integration tests for jsonld-diff
//!
//! These tests verify end-to-end functionality of document parsing,
//! the diff engine, and report generation.

use jsonld_diff::{
    diff::{DiffEngine, MultiDiffEngine, NodeChangeKind},
    parsers::{parse_document, parse_document_str},
    LdDiffError, Side,
};
use serde_json::{json, Value};
use std::path::Path;

// ============================================================================
// Test Fixtures
// ============================================================================

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture_path(name: &str) -> std::path::PathBuf {
    Path::new(FIXTURES_DIR).join(name)
}

fn fixture(name: &str) -> Value {
    parse_document(&fixture_path(name)).expect("failed to parse fixture")
}

// ============================================================================
// Parser Tests
// ============================================================================

mod parser_tests {
    use super::*;
    use jsonld_diff::parsers::{detect_format, DocumentFormat};

    #[test]
    fn test_parse_jsonld_fixture() {
        let doc = fixture("api-v1.jsonld");
        assert_eq!(doc["@graph"].as_array().map(Vec::len), Some(4));
        assert_eq!(doc["@context"]["@base"], "api.raml");
    }

    #[test]
    fn test_detect_fixture_formats() {
        let jsonld = std::fs::read_to_string(fixture_path("api-v1.jsonld")).unwrap();
        let plain = std::fs::read_to_string(fixture_path("plain.json")).unwrap();
        assert_eq!(detect_format(&jsonld), DocumentFormat::JsonLd);
        assert_eq!(detect_format(&plain), DocumentFormat::Json);
    }

    #[test]
    fn test_parse_truncated_fails() {
        let err = parse_document(&fixture_path("truncated.jsonld")).unwrap_err();
        assert!(matches!(err, LdDiffError::Parse { .. }));
        assert!(err.to_string().contains("truncated.jsonld"));
    }

    #[test]
    fn test_parse_missing_file_fails() {
        let err = parse_document(&fixture_path("does-not-exist.jsonld")).unwrap_err();
        assert!(matches!(err, LdDiffError::Io { .. }));
    }

    #[test]
    fn test_parse_empty_string_fails() {
        assert!(parse_document_str("   \n").is_err());
    }
}

// ============================================================================
// Diff Engine Tests
// ============================================================================

mod diff_tests {
    use super::*;

    #[test]
    fn test_identical_documents() {
        let doc = fixture("api-v1.jsonld");
        let result = DiffEngine::new().diff(&doc, &doc).unwrap();
        assert!(!result.has_changes());
        assert_eq!(result.summary.total_changes, 0);
    }

    #[test]
    fn test_reordered_document_has_no_changes() {
        let left = fixture("api-v1.jsonld");
        let right = fixture("api-v1-reordered.jsonld");
        let result = DiffEngine::new().diff(&left, &right).unwrap();
        assert!(
            !result.has_changes(),
            "graph, array and key order must not matter: {:?}",
            result.nodes
        );
    }

    #[test]
    fn test_version_bump() {
        let left = fixture("api-v1.jsonld");
        let right = fixture("api-v2.jsonld");
        let result = DiffEngine::new().diff(&left, &right).unwrap();

        let ids: Vec<_> = result.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["#/api", "#/endpoint/groups", "#/endpoint/user", "#/op/list", "@context"]
        );

        let api = result.find_node("#/api").unwrap();
        assert_eq!(api.kind, NodeChangeKind::Modified);
        assert_eq!(api.removed["core:version"], json!("1.0"));
        assert_eq!(api.added["core:version"], json!("2.0"));
        assert_eq!(
            api.added["apiContract:endpoint"],
            json!([{"@id": "#/endpoint/groups"}])
        );
        assert!(!api.removed.contains_key("apiContract:endpoint"));

        let groups = result.find_node("#/endpoint/groups").unwrap();
        assert_eq!(groups.kind, NodeChangeKind::Added);
        assert_eq!(groups.added["@id"], json!("#/endpoint/groups"));
        assert_eq!(groups.added["apiContract:path"], json!("/groups"));
        assert!(groups.removed.is_empty());

        let list = result.find_node("#/op/list").unwrap();
        assert_eq!(list.removed["core:description"], json!("List users"));
        assert!(list.added.is_empty());

        let context = result.find_node("@context").unwrap();
        assert_eq!(context.removed["@base"], json!("api.raml"));
        assert_eq!(context.added["@base"], json!("api-v2.raml"));
    }

    #[test]
    fn test_version_bump_summary() {
        let result = DiffEngine::new()
            .diff(&fixture("api-v1.jsonld"), &fixture("api-v2.jsonld"))
            .unwrap();
        let summary = &result.summary;

        assert_eq!(summary.total_changes, 5);
        assert_eq!(summary.nodes_added, 1);
        assert_eq!(summary.nodes_removed, 0);
        assert_eq!(summary.nodes_modified, 4);
        assert_eq!(summary.properties_added, 1);
        assert_eq!(summary.properties_removed, 1);
        assert_eq!(summary.properties_modified, 3);
        assert!(summary.context_changed);
    }

    #[test]
    fn test_endpoint_removed() {
        let result = DiffEngine::new()
            .diff(&fixture("api-v1.jsonld"), &fixture("api-v3.jsonld"))
            .unwrap();

        let ids: Vec<_> = result.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["#/api", "#/endpoint/user"]);

        let removed = result.find_node("#/endpoint/user").unwrap();
        assert_eq!(removed.kind, NodeChangeKind::Removed);
        assert_eq!(removed.removed["apiContract:path"], json!("/users/{id}"));

        let api = result.find_node("#/api").unwrap();
        assert_eq!(
            api.removed["apiContract:endpoint"],
            json!([{"@id": "#/endpoint/user"}])
        );
    }

    #[test]
    fn test_swapped_inputs_swap_sides() {
        let v1 = fixture("api-v1.jsonld");
        let v3 = fixture("api-v3.jsonld");
        let forward = DiffEngine::new().diff(&v1, &v3).unwrap();
        let backward = DiffEngine::new().diff(&v3, &v1).unwrap();

        assert_eq!(forward.nodes.len(), backward.nodes.len());
        for (f, b) in forward.nodes.iter().zip(&backward.nodes) {
            assert_eq!(f.id, b.id);
            assert_eq!(f.added, b.removed);
            assert_eq!(f.removed, b.added);
        }
    }

    #[test]
    fn test_without_context() {
        let result = DiffEngine::new()
            .include_context(false)
            .diff(&fixture("api-v1.jsonld"), &fixture("api-v2.jsonld"))
            .unwrap();
        assert!(result.find_node("@context").is_none());
        assert!(!result.summary.context_changed);
        assert_eq!(result.nodes.len(), 4);
    }

    #[test]
    fn test_ignored_properties() {
        let result = DiffEngine::new()
            .with_ignored_properties(["core:version", "apiContract:path", "core:description"])
            .diff(&fixture("api-v1.jsonld"), &fixture("api-v2.jsonld"))
            .unwrap();

        let ids: Vec<_> = result.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["#/api", "#/endpoint/groups", "@context"]);

        let groups = result.find_node("#/endpoint/groups").unwrap();
        assert!(!groups.added.contains_key("apiContract:path"));
        assert!(groups.added.contains_key("@id"));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = DiffEngine::new()
            .diff(&fixture("api-v1.jsonld"), &fixture("duplicate-ids.jsonld"))
            .unwrap_err();
        assert_eq!(err.side(), Some(Side::Right));
        assert!(err.to_string().contains("#/api"));
    }

    #[test]
    fn test_malformed_reference_rejected() {
        let err = DiffEngine::new()
            .diff(&fixture("api-v1.jsonld"), &fixture("malformed-reference.jsonld"))
            .unwrap_err();
        match err {
            LdDiffError::Contract(violation) => {
                assert_eq!(violation.id, "#/api");
                assert_eq!(violation.property.as_deref(), Some("apiContract:endpoint"));
            }
            other => panic!("expected contract violation, got {other:?}"),
        }
    }

    #[test]
    fn test_plain_json_rejected() {
        let err = DiffEngine::new()
            .diff(&fixture("plain.json"), &fixture("api-v1.jsonld"))
            .unwrap_err();
        assert_eq!(err.side(), Some(Side::Left));
    }
}

// ============================================================================
// Multi Diff Tests
// ============================================================================

mod multi_diff_tests {
    use super::*;

    #[test]
    fn test_baseline_against_fixtures() {
        let baseline = fixture("api-v1.jsonld");
        let reordered = fixture("api-v1-reordered.jsonld");
        let v2 = fixture("api-v2.jsonld");
        let v3 = fixture("api-v3.jsonld");
        let duplicate = fixture("duplicate-ids.jsonld");

        let result = MultiDiffEngine::new()
            .diff_multi(
                "api-v1",
                &baseline,
                &[
                    ("reordered", &reordered),
                    ("v2", &v2),
                    ("v3", &v3),
                    ("duplicate", &duplicate),
                ],
            )
            .unwrap();

        assert_eq!(result.summary.total_targets, 4);
        assert_eq!(result.summary.targets_identical, 1);
        assert_eq!(result.summary.targets_changed, 2);
        assert_eq!(result.summary.targets_failed, 1);
        assert!(result.has_changes());
        assert!(result.has_failures());

        let targets: Vec<_> = result.comparisons.iter().map(|c| c.target.as_str()).collect();
        assert_eq!(targets, vec!["reordered", "v2", "v3", "duplicate"]);
        assert!(result.comparisons[3].error.is_some());

        // The identical target keeps every node out of the common set
        assert!(result.summary.common_changed_nodes.is_empty());
        assert_eq!(result.summary.node_change_frequency.get("#/api"), Some(&2));
    }

    #[test]
    fn test_invalid_baseline_is_fatal() {
        let baseline = fixture("duplicate-ids.jsonld");
        let v1 = fixture("api-v1.jsonld");
        assert!(MultiDiffEngine::new()
            .diff_multi("dup", &baseline, &[("v1", &v1)])
            .is_err());
    }
}

// ============================================================================
// Report Tests
// ============================================================================

mod report_tests {
    use super::*;
    use jsonld_diff::reports::{
        ChangelogReporter, JsonReporter, ReportConfig, ReportGenerator, SummaryReporter,
    };

    fn version_bump() -> jsonld_diff::DiffResult {
        DiffEngine::new()
            .diff(&fixture("api-v1.jsonld"), &fixture("api-v2.jsonld"))
            .unwrap()
    }

    #[test]
    fn test_json_report_is_valid_json() {
        let report = JsonReporter::new()
            .generate_diff_report(&version_bump(), &ReportConfig::default())
            .unwrap();
        let value: Value = serde_json::from_str(&report).unwrap();

        assert_eq!(value["summary"]["nodes_added"], 1);
        assert_eq!(value["nodes"][1]["id"], "#/endpoint/groups");
        assert_eq!(value["nodes"][1]["kind"], "added");
        assert_eq!(value["metadata"]["tool"]["name"], "jsonld-diff");
    }

    #[test]
    fn test_summary_report() {
        let report = SummaryReporter::new()
            .no_color()
            .generate_diff_report(&version_bump(), &ReportConfig::default())
            .unwrap();

        assert!(report.contains("+1 node added"));
        assert!(report.contains("~4 nodes modified"));
        assert!(report.contains("~3 properties modified"));
        assert!(report.contains("-1 property removed"));
        assert!(report.contains("@context changed"));
    }

    #[test]
    fn test_changelog_report() {
        let report = ChangelogReporter::new()
            .no_color()
            .generate_diff_report(&version_bump(), &ReportConfig::default())
            .unwrap();

        assert!(report.starts_with("# left → right"));
        assert!(report.contains("~ #/api\n"));
        assert!(report.contains("    - core:version: \"1.0\"\n    + core:version: \"2.0\""));
        assert!(report.contains("+ #/endpoint/groups\n"));
        assert!(report.contains("    - core:description: \"List users\""));
        assert!(report.contains("~ @context\n"));
    }

    #[test]
    fn test_changelog_max_items() {
        let config = ReportConfig {
            max_items: Some(2),
            ..ReportConfig::default()
        };
        let report = ChangelogReporter::new()
            .no_color()
            .generate_diff_report(&version_bump(), &config)
            .unwrap();
        assert!(report.contains("... and 3 more"));
        assert!(!report.contains("@context"));
    }
}
