//! 스택 프레임 구조화 모듈 -- Java, Python, Node.js 방언별 매처
//!
//! [`FrameRouter`]는 스택 트레이스 줄 하나를 등록된 매처에 순서대로 넘기고
//! 첫 번째로 맞는 매처의 결과를 사용합니다. 각 매처는 [`FrameMatcher`] trait을
//! 구현하며 서로 독립적으로 테스트할 수 있습니다.
//!
//! # 지원 방언
//! - Java: `at com.example.Foo.bar(Foo.java:42)` ([`JavaFrameMatcher`])
//! - Python: `File "/app/main.py", line 3, in main` ([`PythonFrameMatcher`])
//! - Node.js: `at handler (/app/index.js:10:5)`, `at /app/index.js:10:5` ([`NodeFrameMatcher`])
//!
//! # 사용 예시
//! ```
//! use logsift_engine::frame::FrameRouter;
//!
//! let router = FrameRouter::with_defaults();
//! let frame = router.structure("at com.example.Foo.bar(Foo.java:42)", true).unwrap();
//! assert_eq!(frame.class.as_deref(), Some("com.example.Foo"));
//! assert_eq!(frame.line, Some(42));
//! ```

pub mod java;
pub mod node;
pub mod python;

pub use java::JavaFrameMatcher;
pub use node::NodeFrameMatcher;
pub use python::PythonFrameMatcher;

use logsift_core::types::StackFrame;

/// 스택 프레임 매처 trait
///
/// 새 언어의 스택 트레이스를 지원하려면 이 trait을 구현합니다.
/// 맞지 않는 줄에는 `None`을 반환하며 절대 패닉하지 않아야 합니다.
pub trait FrameMatcher: Send + Sync {
    /// 매처가 다루는 방언 이름
    fn dialect(&self) -> &str;

    /// 공백이 제거된 줄에서 프레임 추출을 시도합니다.
    fn try_match(&self, line: &str) -> Option<StackFrame>;
}

/// 프레임 라우터 -- 등록 순서대로 매처를 시도합니다.
pub struct FrameRouter {
    /// 등록된 매처 목록 (순서대로 시도)
    matchers: Vec<Box<dyn FrameMatcher>>,
}

impl FrameRouter {
    /// 매처가 없는 라우터를 생성합니다.
    pub fn new() -> Self {
        Self {
            matchers: Vec::new(),
        }
    }

    /// 기본 매처 세트 (Java, Python, Node 순)로 라우터를 생성합니다.
    pub fn with_defaults() -> Self {
        Self::new()
            .register(Box::new(JavaFrameMatcher))
            .register(Box::new(PythonFrameMatcher))
            .register(Box::new(NodeFrameMatcher))
    }

    /// 매처를 등록합니다. 등록 순서대로 시도됩니다.
    pub fn register(mut self, matcher: Box<dyn FrameMatcher>) -> Self {
        self.matchers.push(matcher);
        self
    }

    /// 매처만 시도합니다. 아무것도 맞지 않으면 `None`입니다.
    pub fn try_structure(&self, line: &str) -> Option<StackFrame> {
        let trimmed = line.trim();
        self.matchers.iter().find_map(|m| m.try_match(trimmed))
    }

    /// 줄을 구조화합니다.
    ///
    /// 매처가 모두 실패해도 연속 줄이면 파일 이름이 `"unknown"`인
    /// 최소 프레임을 반환합니다. 연속 줄이 아니면 `None`입니다.
    pub fn structure(&self, line: &str, is_continuation: bool) -> Option<StackFrame> {
        match self.try_structure(line) {
            Some(frame) => Some(frame),
            None if is_continuation => Some(StackFrame::unresolved(line.trim())),
            None => None,
        }
    }

    /// 등록된 방언 이름 목록을 반환합니다.
    pub fn registered_dialects(&self) -> Vec<&str> {
        self.matchers.iter().map(|m| m.dialect()).collect()
    }
}

impl Default for FrameRouter {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// 마지막 `.`을 기준으로 클래스와 메서드를 나눕니다.
///
/// 점이 없으면 클래스 없이 전체를 메서드로 봅니다.
pub(crate) fn split_qualified(name: &str) -> (Option<String>, String) {
    match name.rsplit_once('.') {
        Some((class, method)) if !class.is_empty() && !method.is_empty() => {
            (Some(class.to_owned()), method.to_owned())
        }
        _ => (None, name.to_owned()),
    }
}

/// 경로의 마지막 구성 요소 (`/`와 `\` 모두 구분자로 취급)
pub(crate) fn last_path_segment(path: &str) -> &str {
    path.rsplit(['/', '\\'])
        .find(|s| !s.is_empty())
        .unwrap_or(path)
}
