//! Node.js 스택 프레임 매처
//!
//! 두 가지 형식을 인식합니다.
//! - 이름 있는 프레임: `at <이름> (<파일>:<줄>:<열>)`
//! - 이름 없는 프레임: `at <파일>:<줄>:<열>`
//!
//! 열 번호는 매칭에만 쓰고 보존하지 않습니다.

use std::sync::LazyLock;

use regex::Regex;

use logsift_core::types::StackFrame;

use super::{FrameMatcher, last_path_segment, split_qualified};

static NODE_NAMED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^at\s+(?:async\s+)?(.+?)\s+\((.+?):(\d+):(\d+)\)$")
        .expect("node named frame regex is valid")
});

static NODE_BARE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^at\s+(?:async\s+)?(.+?):(\d+):(\d+)$").expect("node bare frame regex is valid")
});

/// Node.js (V8) 스택 프레임 매처
#[derive(Debug, Clone, Copy, Default)]
pub struct NodeFrameMatcher;

impl FrameMatcher for NodeFrameMatcher {
    fn dialect(&self) -> &str {
        "node"
    }

    fn try_match(&self, line: &str) -> Option<StackFrame> {
        if let Some(caps) = NODE_NAMED_RE.captures(line) {
            let (class, method) = split_qualified(&caps[1]);
            return Some(StackFrame {
                file: last_path_segment(&caps[2]).to_owned(),
                line: caps[3].parse().ok(),
                method: Some(method),
                class,
                raw: line.to_owned(),
            });
        }

        let caps = NODE_BARE_RE.captures(line)?;
        Some(StackFrame {
            file: last_path_segment(&caps[1]).to_owned(),
            line: caps[2].parse().ok(),
            method: None,
            class: None,
            raw: line.to_owned(),
        })
    }
}
