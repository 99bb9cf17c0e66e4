#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use logsift_engine::{EngineConfigBuilder, LogEngine};

/// 퍼저용 구조적 입력 -- 임의의 엔진 한계값과 로그 줄
#[derive(Arbitrary, Debug)]
struct FuzzInput {
    max_lines: u16,
    min_lines: u8,
    validation_sample_lines: u16,
    format_sample_lines: u16,
    lines: Vec<String>,
}

fuzz_target!(|input: FuzzInput| {
    let Ok(config) = EngineConfigBuilder::new()
        .max_lines(input.max_lines as usize)
        .min_lines(input.min_lines as usize)
        .validation_sample_lines(input.validation_sample_lines as usize)
        .format_sample_lines(input.format_sample_lines as usize)
        .build()
    else {
        return;
    };

    let engine = LogEngine::new(config);
    let text = input.lines.join("\n");

    let verdict = engine.validate(&text);
    let parsed = engine.parse(&text);

    // validate를 통과한 입력은 parse도 통과해야 한다
    if verdict.is_valid() {
        assert!(parsed.is_ok());
    }
});
