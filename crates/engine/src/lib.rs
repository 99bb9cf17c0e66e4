#![doc = include_str!("../README.md")]
//!
//! # 모듈 구성
//!
//! - [`validator`]: 파싱 전 입력 검증 (줄 수 한계, 휴리스틱 신호)
//! - [`detector`]: 로그 방언 추정 (참고용 레이블)
//! - [`classifier`]: 줄 단위 타임스탬프/레벨/메시지/연속 줄 분류
//! - [`frame`]: 방언별 스택 프레임 매처와 순차 라우터
//! - [`aggregator`]: 에러 그룹화 상태 머신
//! - [`engine`]: 검증과 파싱 파사드
//! - [`locate`]: 스택 프레임에서 애플리케이션 코드 위치 추출
//! - [`fixture`]: 예제 로그
//! - [`config`]: 엔진 설정 (core 설정 확장)
//! - [`error`]: 도메인 에러 타입
//!
//! # 아키텍처
//!
//! ```text
//! text -> Validator -> detect_format -> classify -> Aggregator -> ParseResult
//!                                                     |
//!                                                FrameRouter
//!                                              Java/Python/Node
//! ```

pub mod aggregator;
pub mod classifier;
pub mod config;
pub mod detector;
pub mod engine;
pub mod error;
pub mod fixture;
pub mod frame;
pub mod locate;
pub mod validator;

// --- 주요 타입 re-export ---

// 엔진
pub use engine::{LogEngine, parse, validate};

// 설정
pub use config::{EngineConfig, EngineConfigBuilder};

// 에러
pub use error::EngineError;

// 검증
pub use validator::{Signals, Validator, Verdict};

// 분류와 형식 감지
pub use classifier::{ClassifiedLine, classify};
pub use detector::detect_format;

// 스택 프레임
pub use frame::{FrameMatcher, FrameRouter};

// 집계
pub use aggregator::{Aggregation, Aggregator};

// 코드 위치
pub use locate::{CodeLocation, extract_locations};

// 예제 로그
pub use fixture::EXAMPLE_LOGS;
