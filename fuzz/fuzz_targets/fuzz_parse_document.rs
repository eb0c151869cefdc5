#![no_main]
use jsonld_diff::parsers::parse_document_str;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = parse_document_str(s);
    }
});
