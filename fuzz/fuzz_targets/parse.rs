#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // 패닉 없이 Ok 또는 Err을 반환해야 한다
    if let Ok(result) = logsift_engine::parse(text) {
        let counted = result.warnings + result.info + result.debug + result.error_occurrences();
        assert!(counted <= result.total_lines);
        for group in &result.errors {
            assert!(group.count >= 1);
            assert!(group.samples.len() <= 3);
        }
    }
});
