//! 에러 타입 — 도메인별 에러 정의

/// logsift 최상위 에러 타입
#[derive(Debug, thiserror::Error)]
pub enum LogsiftError {
    /// 설정 관련 에러
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// 입력 거부
    #[error("input rejected: {0}")]
    Input(#[from] InputError),

    /// I/O 에러
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// 설정 관련 에러
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// 설정 파일을 찾을 수 없음
    #[error("config file not found: {path}")]
    FileNotFound { path: String },

    /// 설정 파싱 실패
    #[error("failed to parse config: {reason}")]
    ParseFailed { reason: String },

    /// 유효하지 않은 설정 값
    #[error("invalid config value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

/// 입력 거부 사유
///
/// `validate`와 `parse`가 호출자에게 돌려주는 사람이 읽을 수 있는 거부 사유입니다.
/// `Display` 문자열은 호출자가 그대로 화면에 표시할 수 있도록 고정되어 있습니다.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    /// 빈 입력 또는 공백만 있는 입력
    #[error("log text is empty")]
    Empty,

    /// 비어 있지 않은 줄 수가 최소치 미만
    #[error("too few lines: found {found} non-empty lines, need at least {min}")]
    TooFewLines { found: usize, min: usize },

    /// 줄 수가 상한 초과
    #[error("too many lines: {found} exceeds the limit of {max}")]
    TooManyLines { found: usize, max: usize },

    /// 로그로 보이는 신호가 하나도 없음
    #[error(
        "input does not look like log output (no timestamps, levels, stack traces or error keywords found)"
    )]
    NotLogLike,
}

impl InputError {
    /// 메트릭 레이블 등에 쓰는 짧은 식별자를 반환합니다.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::TooFewLines { .. } => "too_few_lines",
            Self::TooManyLines { .. } => "too_many_lines",
            Self::NotLogLike => "not_log_like",
        }
    }
}
