#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let verdict = logsift_engine::validate(text);
    if text.trim().is_empty() {
        assert!(!verdict.is_valid());
    }
});
