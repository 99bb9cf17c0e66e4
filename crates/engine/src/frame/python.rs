//! Python 트레이스백 프레임 매처

use std::sync::LazyLock;

use regex::Regex;

use logsift_core::types::StackFrame;

use super::{FrameMatcher, last_path_segment};

static PYTHON_FRAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^File "([^"]+)", line (\d+)(?:, in (.+))?$"#)
        .expect("python frame regex is valid")
});

/// `File "<경로>", line <N>[, in <이름>]` 형식 매처
///
/// 파일은 경로의 마지막 구성 요소만 남깁니다. 클래스는 항상 없습니다.
#[derive(Debug, Clone, Copy, Default)]
pub struct PythonFrameMatcher;

impl FrameMatcher for PythonFrameMatcher {
    fn dialect(&self) -> &str {
        "python"
    }

    fn try_match(&self, line: &str) -> Option<StackFrame> {
        let caps = PYTHON_FRAME_RE.captures(line)?;

        Some(StackFrame {
            file: last_path_segment(&caps[1]).to_owned(),
            line: caps[2].parse().ok(),
            method: caps.get(3).map(|m| m.as_str().trim().to_owned()),
            class: None,
            raw: line.to_owned(),
        })
    }
}
