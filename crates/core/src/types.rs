//! 도메인 타입 — 파싱 엔진의 출력 모델
//!
//! 엔진이 만들어 내고 CLI와 하위 분석 단계가 소비하는 데이터 구조를 정의합니다.
//! 직렬화 시 필드 이름은 하위 JSON 소비자에 맞춰 camelCase를 사용합니다.

use std::fmt;

use chrono::{DateTime, NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};

/// 심각도 레벨
///
/// 로그 줄에서 단어 단위로 인식되는 고정된 심각도 토큰 집합입니다.
/// `WARN`과 `WARNING`처럼 원문 토큰을 구분하여 보존합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    Error,
    Fatal,
    Critical,
    Severe,
    Warn,
    Warning,
    Info,
    Debug,
    Trace,
}

impl Level {
    /// 문자열에서 레벨을 파싱합니다.
    ///
    /// 대소문자를 구분하지 않습니다.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "ERROR" => Some(Self::Error),
            "FATAL" => Some(Self::Fatal),
            "CRITICAL" => Some(Self::Critical),
            "SEVERE" => Some(Self::Severe),
            "WARN" => Some(Self::Warn),
            "WARNING" => Some(Self::Warning),
            "INFO" => Some(Self::Info),
            "DEBUG" => Some(Self::Debug),
            "TRACE" => Some(Self::Trace),
            _ => None,
        }
    }

    /// 대문자 토큰 문자열을 반환합니다.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
            Self::Critical => "CRITICAL",
            Self::Severe => "SEVERE",
            Self::Warn => "WARN",
            Self::Warning => "WARNING",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
            Self::Trace => "TRACE",
        }
    }

    /// 새 에러 레코드를 여는 레벨인지 확인합니다.
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            Self::Error | Self::Fatal | Self::Critical | Self::Severe
        )
    }

    /// 경고 레벨(`WARN`, `WARNING`)인지 확인합니다.
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::Warn | Self::Warning)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 감지된 로그 방언 레이블
///
/// 참고용 메타데이터일 뿐, 줄 분류 로직에는 영향을 주지 않습니다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogFormat {
    #[serde(rename = "Java/Spring Boot")]
    JavaSpringBoot,
    #[serde(rename = "Python")]
    Python,
    #[serde(rename = "Node.js/Winston (JSON)")]
    NodeJson,
    #[serde(rename = "AWS CloudWatch")]
    AwsCloudWatch,
    #[serde(rename = "Generic")]
    Generic,
    #[default]
    #[serde(rename = "Unknown")]
    Unknown,
}

impl LogFormat {
    /// 사용자에게 보여주는 레이블을 반환합니다.
    pub fn label(&self) -> &'static str {
        match self {
            Self::JavaSpringBoot => "Java/Spring Boot",
            Self::Python => "Python",
            Self::NodeJson => "Node.js/Winston (JSON)",
            Self::AwsCloudWatch => "AWS CloudWatch",
            Self::Generic => "Generic",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 구조화된 스택 프레임
///
/// 스택 트레이스 줄 하나에서 추출한 호출 위치입니다.
/// 원문 줄(`raw`)은 항상 보존됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StackFrame {
    /// 파일 이름 (해석 불가 시 `"unknown"`)
    pub file: String,
    /// 줄 번호 (네이티브 프레임 등은 없음)
    pub line: Option<u32>,
    /// 메서드/함수 이름
    pub method: Option<String>,
    /// 클래스 또는 네임스페이스
    pub class: Option<String>,
    /// 원문 줄
    pub raw: String,
}

impl StackFrame {
    /// 해석 불가한 프레임에 쓰는 파일 이름
    pub const UNKNOWN_FILE: &'static str = "unknown";

    /// 어떤 방언 패턴에도 맞지 않는 줄을 위한 최소 프레임을 생성합니다.
    pub fn unresolved(raw: impl Into<String>) -> Self {
        Self {
            file: Self::UNKNOWN_FILE.to_owned(),
            line: None,
            method: None,
            class: None,
            raw: raw.into(),
        }
    }

    /// 파일 위치가 해석된 프레임인지 확인합니다.
    pub fn is_resolved(&self) -> bool {
        self.file != Self::UNKNOWN_FILE
    }
}

impl fmt::Display for StackFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.class, &self.method) {
            (Some(class), Some(method)) => write!(f, "{class}.{method}")?,
            (None, Some(method)) => write!(f, "{method}")?,
            _ => write!(f, "<anonymous>")?,
        }
        match self.line {
            Some(line) => write!(f, " ({}:{})", self.file, line),
            None => write!(f, " ({})", self.file),
        }
    }
}

/// 중복 제거된 에러 그룹
///
/// 같은 정규 메시지를 가진 에러 발생들을 하나로 묶은 출력 단위입니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorGroup {
    /// 마지막으로 관측된 발생의 타임스탬프
    pub timestamp: Option<String>,
    /// 심각도 (명시적 토큰이 없으면 ERROR)
    pub level: Level,
    /// 정규 메시지 (중복 제거 키)
    pub message: String,
    /// 발생 횟수
    pub count: usize,
    /// 원문 샘플 (최대 3개, 가장 이른 발생부터)
    pub samples: Vec<String>,
    /// 이 그룹에 기여한 모든 원문 줄
    pub raw_lines: Vec<String>,
    /// 뒤따르는 스택 트레이스 텍스트
    pub stack_trace: Option<Vec<String>>,
    /// 구조화된 스택 프레임
    pub stack_frames: Option<Vec<StackFrame>>,
    /// 첫 발생 위치 (1부터 시작하는 줄 번호)
    pub first_line: usize,
}

/// 문서 순서상 처음과 마지막 타임스탬프
///
/// 수치상의 최소/최대가 아닙니다. 로그가 시간순이 아니면
/// `start`가 `end`보다 늦을 수 있습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeRange {
    pub start: String,
    pub end: String,
}

impl TimeRange {
    /// 두 끝점 사이의 부호 있는 시간 차이를 계산합니다.
    ///
    /// 어느 한쪽이라도 해석할 수 없으면 `None`을 반환합니다.
    /// 순서가 뒤바뀐 로그에서는 음수가 나올 수 있습니다.
    pub fn span(&self) -> Option<TimeDelta> {
        let start = parse_log_timestamp(&self.start)?;
        let end = parse_log_timestamp(&self.end)?;
        Some(end - start)
    }
}

/// ISO-8601 계열 로그 타임스탬프를 해석합니다.
///
/// 지원 형식:
/// - `2024-01-15T12:00:00Z`, `2024-01-15T12:00:00.123+09:00`
/// - `2024-01-15 12:00:00.123` (오프셋 없음, UTC로 간주)
fn parse_log_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let normalized = raw.trim().replacen(' ', "T", 1);

    if let Ok(dt) = DateTime::parse_from_rfc3339(&normalized) {
        return Some(dt.naive_utc());
    }

    NaiveDateTime::parse_from_str(&normalized, "%Y-%m-%dT%H:%M:%S%.f").ok()
}

/// 파싱 결과
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResult {
    /// 입력 전체 줄 수 (빈 줄 포함)
    pub total_lines: usize,
    /// 발생 횟수 내림차순으로 정렬된 에러 그룹
    pub errors: Vec<ErrorGroup>,
    /// WARN/WARNING 줄 수
    pub warnings: usize,
    /// INFO 줄 수
    pub info: usize,
    /// DEBUG/TRACE 줄 수
    pub debug: usize,
    /// 문서 순서상 첫/마지막 타임스탬프
    pub time_range: Option<TimeRange>,
    /// 감지된 형식 레이블
    pub format: LogFormat,
}

impl ParseResult {
    /// 모든 그룹의 발생 횟수 합계를 반환합니다.
    pub fn error_occurrences(&self) -> usize {
        self.errors.iter().map(|g| g.count).sum()
    }

    /// 상위 `n`개 그룹을 반환합니다.
    pub fn top(&self, n: usize) -> &[ErrorGroup] {
        &self.errors[..n.min(self.errors.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_parse_is_case_insensitive() {
        assert_eq!(Level::parse("error"), Some(Level::Error));
        assert_eq!(Level::parse("Warning"), Some(Level::Warning));
        assert_eq!(Level::parse("WARN"), Some(Level::Warn));
        assert_eq!(Level::parse("trace"), Some(Level::Trace));
        assert_eq!(Level::parse("notice"), None);
    }

    #[test]
    fn level_error_classes() {
        for level in [Level::Error, Level::Fatal, Level::Critical, Level::Severe] {
            assert!(level.is_error(), "{level} should open an error");
        }
        for level in [Level::Warn, Level::Info, Level::Debug, Level::Trace] {
            assert!(!level.is_error(), "{level} should not open an error");
        }
        assert!(Level::Warning.is_warning());
    }

    #[test]
    fn level_serializes_as_token() {
        let json = serde_json::to_string(&Level::Severe).unwrap();
        assert_eq!(json, "\"SEVERE\"");
        let parsed: Level = serde_json::from_str("\"WARNING\"").unwrap();
        assert_eq!(parsed, Level::Warning);
    }

    #[test]
    fn log_format_serializes_as_label() {
        let json = serde_json::to_string(&LogFormat::NodeJson).unwrap();
        assert_eq!(json, "\"Node.js/Winston (JSON)\"");
        assert_eq!(LogFormat::JavaSpringBoot.to_string(), "Java/Spring Boot");
        assert_eq!(LogFormat::default(), LogFormat::Unknown);
    }

    #[test]
    fn unresolved_frame_uses_sentinel() {
        let frame = StackFrame::unresolved("at <native>");
        assert_eq!(frame.file, "unknown");
        assert!(!frame.is_resolved());
        assert_eq!(frame.raw, "at <native>");
    }

    #[test]
    fn frame_display() {
        let frame = StackFrame {
            file: "PaymentService.java".to_owned(),
            line: Some(142),
            method: Some("process".to_owned()),
            class: Some("com.example.payment.PaymentService".to_owned()),
            raw: String::new(),
        };
        assert_eq!(
            frame.to_string(),
            "com.example.payment.PaymentService.process (PaymentService.java:142)"
        );
    }

    #[test]
    fn time_range_span_forward() {
        let range = TimeRange {
            start: "2025-10-25 12:00:01.234".to_owned(),
            end: "2025-10-25 12:00:11.234".to_owned(),
        };
        assert_eq!(range.span(), Some(TimeDelta::seconds(10)));
    }

    #[test]
    fn time_range_span_can_be_negative() {
        // 순서가 뒤바뀐 로그는 정렬하지 않고 그대로 보고한다
        let range = TimeRange {
            start: "2025-10-25T12:05:00Z".to_owned(),
            end: "2025-10-25T12:00:00Z".to_owned(),
        };
        assert_eq!(range.span(), Some(TimeDelta::minutes(-5)));
    }

    #[test]
    fn time_range_span_with_offset() {
        let range = TimeRange {
            start: "2025-10-25T12:00:00+02:00".to_owned(),
            end: "2025-10-25T10:30:00Z".to_owned(),
        };
        assert_eq!(range.span(), Some(TimeDelta::minutes(30)));
    }

    #[test]
    fn time_range_span_unparseable() {
        let range = TimeRange {
            start: "yesterday".to_owned(),
            end: "2025-10-25T10:30:00Z".to_owned(),
        };
        assert!(range.span().is_none());
    }

    #[test]
    fn parse_result_helpers() {
        let group = |message: &str, count: usize| ErrorGroup {
            timestamp: None,
            level: Level::Error,
            message: message.to_owned(),
            count,
            samples: vec![],
            raw_lines: vec![],
            stack_trace: None,
            stack_frames: None,
            first_line: 1,
        };
        let result = ParseResult {
            total_lines: 10,
            errors: vec![group("a", 3), group("b", 2)],
            warnings: 1,
            info: 2,
            debug: 0,
            time_range: None,
            format: LogFormat::Unknown,
        };
        assert_eq!(result.error_occurrences(), 5);
        assert_eq!(result.top(1).len(), 1);
        assert_eq!(result.top(10).len(), 2);
    }

    #[test]
    fn parse_result_serializes_camel_case() {
        let result = ParseResult {
            total_lines: 5,
            errors: vec![],
            warnings: 0,
            info: 5,
            debug: 0,
            time_range: Some(TimeRange {
                start: "a".to_owned(),
                end: "b".to_owned(),
            }),
            format: LogFormat::Generic,
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["totalLines"], 5);
        assert_eq!(value["timeRange"]["start"], "a");
        assert_eq!(value["format"], "Generic");
    }
}
