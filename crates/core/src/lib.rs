#![doc = include_str!("../README.md")]

pub mod analysis;
pub mod config;
pub mod error;
pub mod metrics;
pub mod types;

// --- 주요 타입 re-export ---
// 각 모듈의 핵심 타입을 크레이트 루트에서 바로 사용할 수 있도록 합니다.

// 에러
pub use error::{ConfigError, InputError, LogsiftError};

// 설정
pub use config::{AnalysisConfig, EngineSettings, GeneralConfig, LogsiftConfig};

// 분석 요청 스키마
pub use analysis::{AnalysisRequest, AnalysisResponse, CodeFix, SourceContext};

// 도메인 타입
pub use types::{ErrorGroup, Level, LogFormat, ParseResult, StackFrame, TimeRange};
