//! 엔진 설정
//!
//! [`EngineConfig`]는 core의 [`EngineSettings`](logsift_core::config::EngineSettings)를
//! 기반으로 엔진이 사용하는 입력 한계값과 샘플 크기를 제공합니다.
//!
//! # 사용 예시
//! ```
//! use logsift_core::config::LogsiftConfig;
//! use logsift_engine::config::EngineConfig;
//!
//! let core_config = LogsiftConfig::default();
//! let config = EngineConfig::from_core(&core_config.engine);
//! assert_eq!(config.min_lines, 5);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// 허용되는 `max_lines` 상한
const MAX_LINES_CEILING: usize = 1_000_000;
/// 허용되는 `validation_sample_lines` 상한
const MAX_VALIDATION_SAMPLE: usize = 10_000;
/// 허용되는 `format_sample_lines` 상한
const MAX_FORMAT_SAMPLE: usize = 1_000;

/// 엔진 설정
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// 입력 최대 줄 수 (개행 기준, 빈 줄 포함)
    pub max_lines: usize,
    /// 비어 있지 않은 최소 줄 수
    pub min_lines: usize,
    /// 로그 여부 판정에 쓰는 샘플 줄 수
    pub validation_sample_lines: usize,
    /// 형식 감지에 쓰는 샘플 줄 수
    pub format_sample_lines: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_lines: 100_000,
            min_lines: 5,
            validation_sample_lines: 100,
            format_sample_lines: 10,
        }
    }
}

impl EngineConfig {
    /// core의 `EngineSettings`에서 엔진 설정을 생성합니다.
    pub fn from_core(core: &logsift_core::config::EngineSettings) -> Self {
        Self {
            max_lines: core.max_lines,
            min_lines: core.min_lines,
            validation_sample_lines: core.validation_sample_lines,
            format_sample_lines: core.format_sample_lines,
        }
    }

    /// 설정값의 유효성을 검증합니다.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.min_lines == 0 {
            return Err(EngineError::Config {
                field: "min_lines".to_owned(),
                reason: "must be greater than 0".to_owned(),
            });
        }

        if self.max_lines < self.min_lines || self.max_lines > MAX_LINES_CEILING {
            return Err(EngineError::Config {
                field: "max_lines".to_owned(),
                reason: format!("must be {}-{}", self.min_lines, MAX_LINES_CEILING),
            });
        }

        if self.validation_sample_lines == 0 || self.validation_sample_lines > MAX_VALIDATION_SAMPLE
        {
            return Err(EngineError::Config {
                field: "validation_sample_lines".to_owned(),
                reason: format!("must be 1-{}", MAX_VALIDATION_SAMPLE),
            });
        }

        if self.format_sample_lines == 0 || self.format_sample_lines > MAX_FORMAT_SAMPLE {
            return Err(EngineError::Config {
                field: "format_sample_lines".to_owned(),
                reason: format!("must be 1-{}", MAX_FORMAT_SAMPLE),
            });
        }

        Ok(())
    }
}

/// 엔진 설정 빌더
#[derive(Default)]
pub struct EngineConfigBuilder {
    config: EngineConfig,
}

impl EngineConfigBuilder {
    /// 새 빌더를 생성합니다.
    pub fn new() -> Self {
        Self::default()
    }

    /// 최대 줄 수를 설정합니다.
    pub fn max_lines(mut self, lines: usize) -> Self {
        self.config.max_lines = lines;
        self
    }

    /// 최소 줄 수를 설정합니다.
    pub fn min_lines(mut self, lines: usize) -> Self {
        self.config.min_lines = lines;
        self
    }

    /// 검증 샘플 크기를 설정합니다.
    pub fn validation_sample_lines(mut self, lines: usize) -> Self {
        self.config.validation_sample_lines = lines;
        self
    }

    /// 형식 감지 샘플 크기를 설정합니다.
    pub fn format_sample_lines(mut self, lines: usize) -> Self {
        self.config.format_sample_lines = lines;
        self
    }

    /// 설정을 검증하고 `EngineConfig`를 생성합니다.
    pub fn build(self) -> Result<EngineConfig, EngineError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
