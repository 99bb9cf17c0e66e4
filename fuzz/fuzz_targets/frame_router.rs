#![no_main]

use logsift_engine::FrameRouter;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(line) = std::str::from_utf8(data) else {
        return;
    };

    let router = FrameRouter::with_defaults();

    // 연속 줄이면 항상 프레임이 나와야 한다 (최소한 unknown 프레임)
    let frame = router.structure(line, true);
    assert!(frame.is_some());
    let _ = logsift_engine::classify(line);
});
