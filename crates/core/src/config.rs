//! 설정 관리 — logsift.toml 파싱 및 런타임 설정
//!
//! [`LogsiftConfig`]는 모든 구성 요소의 설정을 담는 최상위 구조체입니다.
//!
//! # 설정 로딩 우선순위
//! 1. CLI 인자 (최고 우선)
//! 2. 환경변수 (`LOGSIFT_ENGINE_MAX_LINES=50000` 형식)
//! 3. 설정 파일 (`logsift.toml`)
//! 4. 기본값 (`Default` 구현)
//!
//! # 사용 예시
//! ```no_run
//! # async fn example() -> Result<(), logsift_core::error::LogsiftError> {
//! use logsift_core::config::LogsiftConfig;
//!
//! // 파일에서 로드 + 환경변수 오버라이드
//! let config = LogsiftConfig::load("logsift.toml").await?;
//!
//! // TOML 문자열에서 직접 파싱
//! let config = LogsiftConfig::parse("[general]\nlog_level = \"debug\"")?;
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{ConfigError, LogsiftError};

/// logsift 통합 설정
///
/// `logsift.toml` 파일의 최상위 구조를 나타냅니다.
/// 각 구성 요소는 자기 섹션만 읽어 사용합니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogsiftConfig {
    /// 일반 설정
    #[serde(default)]
    pub general: GeneralConfig,
    /// 파싱 엔진 설정
    #[serde(default)]
    pub engine: EngineSettings,
    /// 분석 요청 설정
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

impl LogsiftConfig {
    /// TOML 파일에서 설정을 로드하고 환경변수 오버라이드를 적용합니다.
    ///
    /// 설정 로딩 순서:
    /// 1. TOML 파일 파싱
    /// 2. 환경변수 오버라이드 적용
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, LogsiftError> {
        let mut config = Self::from_file(path).await?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// TOML 파일에서 설정을 로드합니다 (환경변수 오버라이드 없음).
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, LogsiftError> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                LogsiftError::Config(ConfigError::FileNotFound {
                    path: path.display().to_string(),
                })
            } else {
                LogsiftError::Io(e)
            }
        })?;
        let config = Self::parse(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// TOML 문자열에서 설정을 파싱합니다.
    pub fn parse(toml_str: &str) -> Result<Self, LogsiftError> {
        toml::from_str(toml_str).map_err(|e| {
            LogsiftError::Config(ConfigError::ParseFailed {
                reason: e.to_string(),
            })
        })
    }

    /// 환경변수로 설정값을 오버라이드합니다.
    ///
    /// 환경변수 네이밍 규칙: `LOGSIFT_{SECTION}_{FIELD}`
    /// 예: `LOGSIFT_GENERAL_LOG_LEVEL=debug`
    pub fn apply_env_overrides(&mut self) {
        // General
        override_string(&mut self.general.log_level, "LOGSIFT_GENERAL_LOG_LEVEL");
        override_string(&mut self.general.log_format, "LOGSIFT_GENERAL_LOG_FORMAT");

        // Engine
        override_usize(&mut self.engine.max_lines, "LOGSIFT_ENGINE_MAX_LINES");
        override_usize(&mut self.engine.min_lines, "LOGSIFT_ENGINE_MIN_LINES");
        override_usize(
            &mut self.engine.validation_sample_lines,
            "LOGSIFT_ENGINE_VALIDATION_SAMPLE_LINES",
        );
        override_usize(
            &mut self.engine.format_sample_lines,
            "LOGSIFT_ENGINE_FORMAT_SAMPLE_LINES",
        );

        // Analysis
        override_string(&mut self.analysis.service_id, "LOGSIFT_ANALYSIS_SERVICE_ID");
        override_usize(
            &mut self.analysis.snippet_context_lines,
            "LOGSIFT_ANALYSIS_SNIPPET_CONTEXT_LINES",
        );
        override_usize(
            &mut self.analysis.max_locations,
            "LOGSIFT_ANALYSIS_MAX_LOCATIONS",
        );
    }

    /// 설정값의 유효성을 검증합니다.
    ///
    /// 엔진 한계값의 세부 범위 검증은 엔진 크레이트의 `EngineConfig`가 담당합니다.
    pub fn validate(&self) -> Result<(), LogsiftError> {
        // log_level 검증
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.general.log_level.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "general.log_level".to_owned(),
                reason: format!("must be one of: {}", valid_levels.join(", ")),
            }
            .into());
        }

        // log_format 검증
        let valid_formats = ["json", "pretty"];
        if !valid_formats.contains(&self.general.log_format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "general.log_format".to_owned(),
                reason: format!("must be one of: {}", valid_formats.join(", ")),
            }
            .into());
        }

        if self.engine.min_lines == 0 {
            return Err(ConfigError::InvalidValue {
                field: "engine.min_lines".to_owned(),
                reason: "must be greater than 0".to_owned(),
            }
            .into());
        }

        if self.engine.max_lines < self.engine.min_lines {
            return Err(ConfigError::InvalidValue {
                field: "engine.max_lines".to_owned(),
                reason: format!(
                    "must be at least engine.min_lines ({})",
                    self.engine.min_lines
                ),
            }
            .into());
        }

        if self.analysis.service_id.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "analysis.service_id".to_owned(),
                reason: "must not be empty".to_owned(),
            }
            .into());
        }

        if self.analysis.max_locations == 0 {
            return Err(ConfigError::InvalidValue {
                field: "analysis.max_locations".to_owned(),
                reason: "must be greater than 0".to_owned(),
            }
            .into());
        }

        Ok(())
    }
}

/// 일반 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// 로그 레벨 (trace, debug, info, warn, error)
    pub log_level: String,
    /// 로그 형식 (json, pretty)
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_owned(),
            log_format: "pretty".to_owned(),
        }
    }
}

/// 파싱 엔진 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// 입력 최대 줄 수 (개행 기준, 빈 줄 포함)
    pub max_lines: usize,
    /// 비어 있지 않은 최소 줄 수
    pub min_lines: usize,
    /// 로그 여부 판정에 쓰는 샘플 줄 수
    pub validation_sample_lines: usize,
    /// 형식 감지에 쓰는 샘플 줄 수
    pub format_sample_lines: usize,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            max_lines: 100_000,
            min_lines: 5,
            validation_sample_lines: 100,
            format_sample_lines: 10,
        }
    }
}

/// 분석 요청 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// 요청에 실리는 서비스 식별자
    pub service_id: String,
    /// 코드 발췌 시 대상 줄 앞뒤로 포함할 줄 수
    pub snippet_context_lines: usize,
    /// 요청에 포함할 최대 소스 위치 수
    pub max_locations: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            service_id: "default".to_owned(),
            snippet_context_lines: 5,
            max_locations: 20,
        }
    }
}

// --- 환경변수 오버라이드 헬퍼 ---

fn override_string(target: &mut String, env_key: &str) {
    if let Ok(val) = std::env::var(env_key) {
        *target = val;
    }
}

fn override_usize(target: &mut usize, env_key: &str) {
    if let Ok(val) = std::env::var(env_key) {
        match val.parse::<usize>() {
            Ok(parsed) => *target = parsed,
            Err(_) => warn!(
                env_key,
                value = val.as_str(),
                "failed to parse usize from env var, ignoring"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn default_config_has_sane_values() {
        let config = LogsiftConfig::default();
        assert_eq!(config.general.log_level, "warn");
        assert_eq!(config.general.log_format, "pretty");
        assert_eq!(config.engine.max_lines, 100_000);
        assert_eq!(config.engine.min_lines, 5);
        assert_eq!(config.engine.validation_sample_lines, 100);
        assert_eq!(config.engine.format_sample_lines, 10);
        assert_eq!(config.analysis.snippet_context_lines, 5);
    }

    #[test]
    fn default_config_passes_validation() {
        LogsiftConfig::default().validate().unwrap();
    }

    #[test]
    fn from_str_empty_toml_uses_defaults() {
        let config = LogsiftConfig::parse("").unwrap();
        assert_eq!(config.engine.max_lines, 100_000);
        assert_eq!(config.analysis.service_id, "default");
    }

    #[test]
    fn from_str_partial_toml_merges_with_defaults() {
        let config = LogsiftConfig::parse(
            r#"
[engine]
min_lines = 3
"#,
        )
        .unwrap();
        assert_eq!(config.engine.min_lines, 3);
        assert_eq!(config.engine.max_lines, 100_000);
        assert_eq!(config.general.log_level, "warn");
    }

    #[test]
    fn from_str_invalid_toml_returns_error() {
        let err = LogsiftConfig::parse("[general\nlog_level = ").unwrap_err();
        assert!(matches!(
            err,
            LogsiftError::Config(ConfigError::ParseFailed { .. })
        ));
    }

    #[test]
    fn validate_rejects_invalid_log_level() {
        let mut config = LogsiftConfig::default();
        config.general.log_level = "verbose".to_owned();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_invalid_log_format() {
        let mut config = LogsiftConfig::default();
        config.general.log_format = "xml".to_owned();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_min_lines() {
        let mut config = LogsiftConfig::default();
        config.engine.min_lines = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_max_below_min() {
        let mut config = LogsiftConfig::default();
        config.engine.max_lines = 2;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("engine.max_lines"));
    }

    #[test]
    fn validate_rejects_blank_service_id() {
        let mut config = LogsiftConfig::default();
        config.analysis.service_id = "  ".to_owned();
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn env_override_string() {
        // SAFETY: serial 테스트에서만 환경변수를 변경한다
        unsafe { std::env::set_var("LOGSIFT_GENERAL_LOG_LEVEL", "debug") };
        let mut config = LogsiftConfig::default();
        config.apply_env_overrides();
        unsafe { std::env::remove_var("LOGSIFT_GENERAL_LOG_LEVEL") };
        assert_eq!(config.general.log_level, "debug");
    }

    #[test]
    #[serial]
    fn env_override_usize_valid() {
        unsafe { std::env::set_var("LOGSIFT_ENGINE_MAX_LINES", "5000") };
        let mut config = LogsiftConfig::default();
        config.apply_env_overrides();
        unsafe { std::env::remove_var("LOGSIFT_ENGINE_MAX_LINES") };
        assert_eq!(config.engine.max_lines, 5000);
    }

    #[test]
    #[serial]
    fn env_override_usize_invalid_keeps_original() {
        unsafe { std::env::set_var("LOGSIFT_ENGINE_MIN_LINES", "many") };
        let mut config = LogsiftConfig::default();
        config.apply_env_overrides();
        unsafe { std::env::remove_var("LOGSIFT_ENGINE_MIN_LINES") };
        assert_eq!(config.engine.min_lines, 5);
    }

    #[test]
    fn env_override_missing_var_keeps_original() {
        let mut val = "original".to_owned();
        override_string(&mut val, "TEST_LOGSIFT_NONEXISTENT_12345");
        assert_eq!(val, "original");
    }

    #[test]
    fn config_serialize_roundtrip() {
        let config = LogsiftConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed = LogsiftConfig::parse(&toml_str).unwrap();
        assert_eq!(config.general.log_level, parsed.general.log_level);
        assert_eq!(config.engine.max_lines, parsed.engine.max_lines);
        assert_eq!(config.analysis.service_id, parsed.analysis.service_id);
    }

    #[tokio::test]
    async fn from_file_not_found() {
        let result = LogsiftConfig::from_file("/nonexistent/path/logsift.toml").await;
        let err = result.unwrap_err();
        assert!(matches!(
            err,
            LogsiftError::Config(ConfigError::FileNotFound { .. })
        ));
    }

    #[tokio::test]
    async fn from_file_reads_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logsift.toml");
        tokio::fs::write(&path, "[analysis]\nservice_id = \"checkout\"\n")
            .await
            .unwrap();
        let config = LogsiftConfig::from_file(&path).await.unwrap();
        assert_eq!(config.analysis.service_id, "checkout");
    }
}
