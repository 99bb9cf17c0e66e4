//! 엔진 파사드 -- 검증과 파싱 두 연산만 외부에 노출합니다.
//!
//! [`LogEngine`]은 불변 설정만 보관하며 호출 사이에 상태를 공유하지 않습니다.
//! 크레이트 루트의 [`validate`]와 [`parse`]는 호출마다 새 기본 엔진을 만듭니다.
//!
//! # 처리 흐름
//! ```text
//! Validator -> detect_format -> classify (줄마다) -> Aggregator (+ FrameRouter) -> ParseResult
//! ```

use std::time::Instant;

use tracing::{debug, debug_span};

use logsift_core::error::InputError;
use logsift_core::metrics as m;
use logsift_core::types::{ParseResult, TimeRange};

use crate::aggregator::Aggregator;
use crate::classifier::classify;
use crate::config::EngineConfig;
use crate::detector::detect_format;
use crate::error::EngineError;
use crate::frame::FrameRouter;
use crate::validator::{Validator, Verdict};

/// 로그 파싱 엔진
pub struct LogEngine {
    config: EngineConfig,
    validator: Validator,
    router: FrameRouter,
}

impl LogEngine {
    /// 설정으로 엔진을 생성합니다.
    ///
    /// 설정 검증은 호출자 책임입니다. (`EngineConfigBuilder::build` 참고)
    pub fn new(config: EngineConfig) -> Self {
        Self {
            validator: Validator::new(&config),
            router: FrameRouter::with_defaults(),
            config,
        }
    }

    /// 사용자 정의 프레임 라우터를 지정합니다.
    pub fn with_router(mut self, router: FrameRouter) -> Self {
        self.router = router;
        self
    }

    /// 엔진 설정을 반환합니다.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// 입력이 로그처럼 보이는지 판정합니다.
    pub fn validate(&self, text: &str) -> Verdict {
        let verdict = self.validator.validate(text);
        if let Verdict::Invalid(reason) = &verdict {
            record_rejection(reason);
        }
        verdict
    }

    /// 입력을 파싱하여 중복 제거된 에러 모델을 만듭니다.
    ///
    /// 빈 입력과 최소 줄 수 미달만 거부합니다. 에러가 하나도 없어도
    /// 정상 결과를 반환합니다.
    pub fn parse(&self, text: &str) -> Result<ParseResult, EngineError> {
        let _span = debug_span!("parse", bytes = text.len()).entered();
        let started = Instant::now();

        if let Err(reason) = self.validator.check_min_lines(text) {
            record_rejection(&reason);
            return Err(reason.into());
        }

        let format = detect_format(text, self.config.format_sample_lines);
        let mut aggregator = Aggregator::new(&self.router);
        let mut first_timestamp: Option<&str> = None;
        let mut last_timestamp: Option<&str> = None;
        let mut total_lines = 0;

        for (idx, raw) in text.lines().enumerate() {
            total_lines += 1;
            if raw.trim().is_empty() {
                continue;
            }

            let line = classify(raw);
            if let Some(ts) = line.timestamp {
                first_timestamp.get_or_insert(ts);
                last_timestamp = Some(ts);
            }
            aggregator.feed(idx + 1, raw, &line);
        }

        let aggregation = aggregator.finish();
        let time_range = match (first_timestamp, last_timestamp) {
            (Some(start), Some(end)) => Some(TimeRange {
                start: start.to_owned(),
                end: end.to_owned(),
            }),
            _ => None,
        };

        let result = ParseResult {
            total_lines,
            errors: aggregation.groups,
            warnings: aggregation.warnings,
            info: aggregation.info,
            debug: aggregation.debug,
            time_range,
            format,
        };

        let elapsed = started.elapsed();
        metrics::counter!(m::ENGINE_LINES_PROCESSED_TOTAL).increment(total_lines as u64);
        metrics::counter!(m::ENGINE_ERROR_OCCURRENCES_TOTAL)
            .increment(result.error_occurrences() as u64);
        metrics::counter!(m::ENGINE_ERROR_GROUPS_TOTAL).increment(result.errors.len() as u64);
        metrics::counter!(m::ENGINE_PARSES_TOTAL, m::LABEL_FORMAT => format.label()).increment(1);
        metrics::histogram!(m::ENGINE_PARSE_DURATION_SECONDS).record(elapsed.as_secs_f64());

        debug!(
            total_lines,
            groups = result.errors.len(),
            occurrences = result.error_occurrences(),
            warnings = result.warnings,
            info = result.info,
            debug = result.debug,
            format = %format,
            elapsed_us = elapsed.as_micros() as u64,
            "parsed log text"
        );

        Ok(result)
    }
}

impl Default for LogEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

fn record_rejection(reason: &InputError) {
    debug!(reason = reason.code(), "input rejected: {reason}");
    metrics::counter!(m::ENGINE_INPUT_REJECTED_TOTAL, m::LABEL_REASON => reason.code())
        .increment(1);
}

/// 기본 설정의 새 엔진으로 입력을 검증합니다.
pub fn validate(text: &str) -> Verdict {
    LogEngine::default().validate(text)
}

/// 기본 설정의 새 엔진으로 입력을 파싱합니다.
pub fn parse(text: &str) -> Result<ParseResult, EngineError> {
    LogEngine::default().parse(text)
}
