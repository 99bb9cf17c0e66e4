//! 엔진 에러 타입
//!
//! [`EngineError`]는 파싱 엔진 내부에서 발생하는 모든 에러를 표현합니다.
//! `From<EngineError> for LogsiftError` 변환이 구현되어 있어
//! 상위 레이어에서 `?` 연산자로 자연스럽게 전파할 수 있습니다.

use logsift_core::error::{ConfigError, InputError, LogsiftError};

/// 파싱 엔진 도메인 에러
///
/// 엔진 자체에는 치명적 에러가 없습니다. 입력 거부와 잘못된 설정만 존재합니다.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// 입력 거부 (빈 입력, 줄 수 부족 등)
    ///
    /// 메시지는 [`InputError`]의 고정 문자열을 그대로 노출합니다.
    #[error(transparent)]
    Input(#[from] InputError),

    /// 설정 에러
    #[error("config error: {field}: {reason}")]
    Config {
        /// 설정 필드명
        field: String,
        /// 에러 사유
        reason: String,
    },
}

impl EngineError {
    /// 입력 거부 사유를 반환합니다. 설정 에러이면 `None`입니다.
    pub fn as_input(&self) -> Option<&InputError> {
        match self {
            Self::Input(e) => Some(e),
            Self::Config { .. } => None,
        }
    }
}

impl From<EngineError> for LogsiftError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::Input(e) => LogsiftError::Input(e),
            EngineError::Config { field, reason } => {
                LogsiftError::Config(ConfigError::InvalidValue { field, reason })
            }
        }
    }
}
