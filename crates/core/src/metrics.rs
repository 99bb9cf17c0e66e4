//! 메트릭 상수 및 설명 등록
//!
//! 엔진이 기록하는 메트릭의 이름과 설명을 중앙에서 정의합니다.
//! 엔진은 이 상수를 사용하여 `metrics::counter!()`, `metrics::histogram!()`
//! 매크로를 호출합니다. 레코더가 설치되지 않으면 기록은 무시됩니다.
//!
//! # 네이밍 컨벤션
//!
//! - 접두어: `logsift_engine_`
//! - 접미어: `_total` (counter), `_seconds` (histogram)
//!
//! # 사용 예시
//!
//! ```ignore
//! use metrics::counter;
//!
//! counter!(logsift_core::metrics::ENGINE_LINES_PROCESSED_TOTAL).increment(1);
//! ```

// ─── 레이블 키 상수 ────────────────────────────────────────────────

/// 거부 사유 레이블 키 (empty, too_few_lines, too_many_lines, not_log_like)
pub const LABEL_REASON: &str = "reason";

/// 형식 레이블 키 (감지된 로그 방언)
pub const LABEL_FORMAT: &str = "format";

// ─── Engine 메트릭 ──────────────────────────────────────────────────

/// Engine: 처리된 전체 줄 수 (counter)
pub const ENGINE_LINES_PROCESSED_TOTAL: &str = "logsift_engine_lines_processed_total";

/// Engine: 집계된 에러 발생 수 (counter)
pub const ENGINE_ERROR_OCCURRENCES_TOTAL: &str = "logsift_engine_error_occurrences_total";

/// Engine: 생성된 에러 그룹 수 (counter)
pub const ENGINE_ERROR_GROUPS_TOTAL: &str = "logsift_engine_error_groups_total";

/// Engine: 거부된 입력 수 (counter, label: reason)
pub const ENGINE_INPUT_REJECTED_TOTAL: &str = "logsift_engine_input_rejected_total";

/// Engine: 완료된 파싱 호출 수 (counter, label: format)
pub const ENGINE_PARSES_TOTAL: &str = "logsift_engine_parses_total";

/// Engine: 파싱 소요 시간 (histogram, 초)
pub const ENGINE_PARSE_DURATION_SECONDS: &str = "logsift_engine_parse_duration_seconds";

/// 모든 메트릭의 설명을 등록합니다.
///
/// 레코더 설치 직후 한 번 호출합니다.
/// `metrics::describe_counter!()`, `describe_histogram!()`을 사용합니다.
pub fn describe_all() {
    use metrics::{describe_counter, describe_histogram};

    describe_counter!(
        ENGINE_LINES_PROCESSED_TOTAL,
        "Total number of input lines processed by the engine"
    );
    describe_counter!(
        ENGINE_ERROR_OCCURRENCES_TOTAL,
        "Total number of error occurrences aggregated"
    );
    describe_counter!(
        ENGINE_ERROR_GROUPS_TOTAL,
        "Total number of deduplicated error groups produced"
    );
    describe_counter!(
        ENGINE_INPUT_REJECTED_TOTAL,
        "Total number of inputs rejected by validation, by reason"
    );
    describe_counter!(
        ENGINE_PARSES_TOTAL,
        "Total number of completed parse calls, by detected format"
    );
    describe_histogram!(
        ENGINE_PARSE_DURATION_SECONDS,
        "Wall-clock duration of a single parse call"
    );
}
