#![no_main]
use jsonld_diff::parsers::detect_format;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = detect_format(s);
    }
});
