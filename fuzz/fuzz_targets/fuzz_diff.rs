#![no_main]
use jsonld_diff::find_differences;
use jsonld_diff::parsers::parse_document_str;
use libfuzzer_sys::fuzz_target;
use serde_json::json;

const MAX_WRAPPED_INPUT_LEN: usize = 10_000;

/// Diff arbitrary documents against a small fixed graph and against themselves.
///
/// Input is also wrapped as graph nodes so most runs get past validation
/// and reach the property differ.
fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let fixed = json!({"@graph": [{"@id": "#/a", "name": "x", "items": [{"@id": "#/b"}]}]});

    let mut candidates = Vec::new();
    if let Ok(doc) = parse_document_str(s) {
        candidates.push(doc);
    }
    if s.len() < MAX_WRAPPED_INPUT_LEN {
        if let Ok(doc) = parse_document_str(&format!(r#"{{"@graph":[{s}]}}"#)) {
            candidates.push(doc);
        }
    }

    for doc in &candidates {
        let _ = find_differences(&fixed, doc);
        let _ = find_differences(doc, &fixed);
        if let Ok(diffs) = find_differences(doc, doc) {
            assert!(diffs.is_empty(), "a document must not differ from itself");
        }
    }
});
