//! 입력 검증기 -- 파싱 전에 텍스트가 로그처럼 보이는지 가볍게 판정합니다.
//!
//! 의도적으로 관대한 1차 필터입니다. 하나의 신호만 충분히 강해도 통과시키며,
//! 더 엄격한 판단은 하위 단계의 몫입니다.
//!
//! # 검사 순서
//! 1. 빈 입력 (공백만 있는 경우 포함)
//! 2. 최대 줄 수 초과 (개행 기준, 빈 줄 포함)
//! 3. 최소 줄 수 미달 (비어 있지 않은 줄 기준)
//! 4. 샘플(앞쪽의 비어 있지 않은 줄)에 대한 휴리스틱 신호

use std::sync::LazyLock;

use regex::{Regex, RegexSet};
use serde::Serialize;
use tracing::debug;

use logsift_core::error::InputError;

use crate::classifier;
use crate::config::EngineConfig;

/// 줄 맨 앞의 타임스탬프 패턴 (ISO-8601, 미국식 날짜, syslog, Unix epoch)
static TIMESTAMP_PREFIX_SET: LazyLock<RegexSet> = LazyLock::new(|| {
    RegexSet::new([
        r"^\[?\d{4}-\d{2}-\d{2}[T ]\d{2}:\d{2}:\d{2}",
        r"^\[?\d{1,2}/\d{1,2}/\d{2,4}[ ,T]+\d{1,2}:\d{2}",
        r"^[A-Z][a-z]{2}\s+\d{1,2}\s+\d{2}:\d{2}:\d{2}",
        r"^\d{10}(?:\d{3})?\b",
    ])
    .expect("timestamp prefix patterns are valid")
});

/// 에러/예외 키워드
static ERROR_KEYWORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"Exception|Error|Caused by|Failed|Failure|Timeout|Connection refused|Cannot|Unable to",
    )
    .expect("error keyword regex is valid")
});

/// 구조화 로그 표식 (JSON level 필드, 대괄호 태그, key=value)
static STRUCTURED_SET: LazyLock<RegexSet> = LazyLock::new(|| {
    RegexSet::new([r#""level"\s*:"#, r"\[[\w.-]+\]", r"\b\w+=\S+"])
        .expect("structured log patterns are valid")
});

/// 검증 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// 로그로 판정됨
    Valid,
    /// 거부됨 (사유 포함)
    Invalid(InputError),
}

impl Verdict {
    /// 입력이 통과했는지 확인합니다.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// 거부 사유를 반환합니다.
    pub fn reason(&self) -> Option<&InputError> {
        match self {
            Self::Valid => None,
            Self::Invalid(reason) => Some(reason),
        }
    }
}

/// 샘플에서 관측된 휴리스틱 신호
///
/// 각 카운트는 해당 패턴에 맞은 샘플 줄 수입니다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Signals {
    /// 샘플 줄 수
    pub sample_size: usize,
    /// 타임스탬프가 있는 줄 수
    pub timestamp_lines: usize,
    /// 심각도 토큰이 있는 줄 수
    pub level_lines: usize,
    /// 스택 트레이스 줄 수
    pub stack_trace_lines: usize,
    /// 에러 키워드가 있는 줄 수
    pub error_keyword_lines: usize,
    /// JSON/key=value 구조화 줄 수
    pub structured_lines: usize,
}

impl Signals {
    /// 샘플 대비 백분율을 계산합니다.
    pub fn rate(&self, count: usize) -> f64 {
        if self.sample_size == 0 {
            return 0.0;
        }
        count as f64 * 100.0 / self.sample_size as f64
    }

    /// 신호 중 하나라도 로그로 판정할 만큼 강한지 확인합니다.
    pub fn looks_like_logs(&self) -> bool {
        self.rate(self.timestamp_lines) > 25.0
            || self.rate(self.level_lines) > 20.0
            || self.rate(self.stack_trace_lines) > 10.0
            || (self.rate(self.error_keyword_lines) > 20.0
                && self.rate(self.structured_lines) > 10.0)
            || (self.stack_trace_lines >= 1 && self.error_keyword_lines >= 1)
            || self.error_keyword_lines >= 3
            || self.stack_trace_lines >= 3
            || self.level_lines >= 3
    }
}

/// 입력 검증기
///
/// 상태가 없으며 설정값만 보관합니다.
#[derive(Debug, Clone)]
pub struct Validator {
    max_lines: usize,
    min_lines: usize,
    sample_lines: usize,
}

impl Validator {
    /// 엔진 설정으로 검증기를 생성합니다.
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            max_lines: config.max_lines,
            min_lines: config.min_lines,
            sample_lines: config.validation_sample_lines,
        }
    }

    /// 입력을 검증합니다.
    pub fn validate(&self, text: &str) -> Verdict {
        match self.check(text) {
            Ok(()) => Verdict::Valid,
            Err(reason) => Verdict::Invalid(reason),
        }
    }

    fn check(&self, text: &str) -> Result<(), InputError> {
        self.check_line_counts(text)?;

        let signals = self.signals(text);
        debug!(
            sample_size = signals.sample_size,
            timestamp_lines = signals.timestamp_lines,
            level_lines = signals.level_lines,
            stack_trace_lines = signals.stack_trace_lines,
            error_keyword_lines = signals.error_keyword_lines,
            structured_lines = signals.structured_lines,
            "computed validation signals"
        );

        if signals.looks_like_logs() {
            Ok(())
        } else {
            Err(InputError::NotLogLike)
        }
    }

    /// 빈 입력, 최대 줄 수, 최소 줄 수만 검사합니다.
    ///
    /// `parse`는 휴리스틱 없이 이 검사만 수행합니다.
    pub(crate) fn check_line_counts(&self, text: &str) -> Result<(), InputError> {
        if text.trim().is_empty() {
            return Err(InputError::Empty);
        }

        let total = text.split('\n').count();
        if total > self.max_lines {
            return Err(InputError::TooManyLines {
                found: total,
                max: self.max_lines,
            });
        }

        self.check_min_lines(text)
    }

    /// 빈 입력과 최소 줄 수만 검사합니다.
    pub(crate) fn check_min_lines(&self, text: &str) -> Result<(), InputError> {
        if text.trim().is_empty() {
            return Err(InputError::Empty);
        }

        let non_empty = non_empty_lines(text).count();
        if non_empty < self.min_lines {
            return Err(InputError::TooFewLines {
                found: non_empty,
                min: self.min_lines,
            });
        }

        Ok(())
    }

    /// 샘플 줄에 대해 휴리스틱 신호를 계산합니다.
    pub fn signals(&self, text: &str) -> Signals {
        let mut signals = Signals::default();

        for line in non_empty_lines(text).take(self.sample_lines) {
            signals.sample_size += 1;
            if TIMESTAMP_PREFIX_SET.is_match(line) {
                signals.timestamp_lines += 1;
            }
            if classifier::has_level_token(line) {
                signals.level_lines += 1;
            }
            if classifier::is_continuation(line) {
                signals.stack_trace_lines += 1;
            }
            if ERROR_KEYWORD_RE.is_match(line) {
                signals.error_keyword_lines += 1;
            }
            if STRUCTURED_SET.is_match(line) {
                signals.structured_lines += 1;
            }
        }

        signals
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

/// 공백이 제거된 비어 있지 않은 줄
fn non_empty_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|l| !l.is_empty())
}
