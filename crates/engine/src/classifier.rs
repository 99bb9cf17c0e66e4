//! 줄 분류기 -- 로그 한 줄을 타임스탬프, 레벨, 메시지, 연속 줄 여부로 분해합니다.
//!
//! 분류는 줄 단위로 독립적이며 상태를 갖지 않습니다.
//! 반환되는 [`ClassifiedLine`]은 입력 문자열을 빌려 쓰므로 할당이 없습니다.
//!
//! # 분해 순서
//! 1. 앞뒤 공백 제거
//! 2. 줄 맨 앞의 ISO-8601 계열 타임스탬프 추출
//! 3. 나머지에서 첫 번째 심각도 토큰 검색 (대소문자 무시, 단어 경계)
//! 4. 레벨 토큰 뒤의 텍스트를 메시지로 사용 (레벨이 없으면 나머지 전체)

use std::sync::LazyLock;

use regex::Regex;

use logsift_core::types::Level;

/// 줄 맨 앞의 타임스탬프
static TIMESTAMP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}[T ]\d{2}:\d{2}:\d{2}(?:\.\d+)?(?:Z|[+-]\d{2}:\d{2})?")
        .expect("timestamp regex is valid")
});

/// 심각도 토큰 (ASCII 대소문자만 무시)
static LEVEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i-u)\b(ERROR|FATAL|CRITICAL|SEVERE|WARNING|WARN|INFO|DEBUG|TRACE)\b")
        .expect("level regex is valid")
});

/// Python 트레이스백 프레임 줄
static PYTHON_FRAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^File "[^"]+", line \d+"#).expect("python frame regex is valid")
});

/// 메시지 맨 앞의 예외 타입 또는 트레이스백 헤더
static EXCEPTION_SIGNATURE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:(?:[A-Za-z_$][\w$]*\.)*[A-Za-z_$][\w$]*(?:Error|Exception)\b|Traceback \(most recent call last\))",
    )
    .expect("exception signature regex is valid")
});

/// 메시지 안의 예외 타입 이름 (패키지 경로 포함 가능)
static ERROR_TYPE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:[a-z_][\w$]*\.)*[A-Z][\w$]*(?:Exception|Error)\b")
        .expect("error type regex is valid")
});

/// 분류된 로그 줄
///
/// 모든 문자열 필드는 원본 줄을 빌려 씁니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedLine<'a> {
    /// 줄 맨 앞의 타임스탬프
    pub timestamp: Option<&'a str>,
    /// 심각도
    pub level: Option<Level>,
    /// 메시지 본문
    pub message: &'a str,
    /// 스택 트레이스 연속 줄 여부
    pub is_continuation: bool,
}

impl ClassifiedLine<'_> {
    /// 이 줄이 새 에러 발생을 여는지 확인합니다.
    ///
    /// 연속 줄은 레벨 토큰이 있어도 에러를 열지 않습니다.
    /// (`at handler (/app/error-handler.js:10:5)` 같은 Node 프레임)
    pub fn opens_error(&self) -> bool {
        if self.is_continuation {
            return false;
        }
        self.level.is_some_and(|l| l.is_error()) || is_exception_signature(self.message)
    }
}

/// 로그 한 줄을 분류합니다.
///
/// 절대 실패하지 않습니다. 아무 패턴도 맞지 않으면 레벨과 타임스탬프가 없고
/// 메시지는 공백이 제거된 줄 전체입니다.
pub fn classify(line: &str) -> ClassifiedLine<'_> {
    let trimmed = line.trim();
    let is_continuation = is_continuation(trimmed);

    let (timestamp, rest) = match TIMESTAMP_RE.find(trimmed) {
        Some(m) => (Some(m.as_str()), &trimmed[m.end()..]),
        None => (None, trimmed),
    };

    let (level, message) = match LEVEL_RE
        .find(rest)
        .and_then(|m| Level::parse(m.as_str()).map(|level| (level, m.end())))
    {
        Some((level, end)) => (Some(level), rest[end..].trim()),
        None => (None, rest.trim()),
    };

    ClassifiedLine {
        timestamp,
        level,
        message,
        is_continuation,
    }
}

/// 스택 트레이스의 연속 줄인지 확인합니다.
///
/// - `at ` 으로 시작 (Java, Node)
/// - `File "...", line N` (Python)
/// - `Caused by:` (Java 원인 체인)
pub fn is_continuation(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with("at ")
        || trimmed.starts_with("Caused by:")
        || PYTHON_FRAME_RE.is_match(trimmed)
}

/// 줄에 심각도 토큰이 하나라도 있는지 확인합니다.
pub(crate) fn has_level_token(line: &str) -> bool {
    LEVEL_RE.is_match(line)
}

/// 메시지가 예외 타입 이름이나 트레이스백 헤더로 시작하는지 확인합니다.
pub fn is_exception_signature(message: &str) -> bool {
    EXCEPTION_SIGNATURE_RE.is_match(message)
}

/// 메시지에서 첫 번째 예외 타입 이름을 추출합니다.
///
/// 패키지 경로가 있으면 포함합니다. (`java.lang.NullPointerException`)
pub fn extract_error_type(message: &str) -> Option<&str> {
    ERROR_TYPE_RE.find(message).map(|m| m.as_str())
}
