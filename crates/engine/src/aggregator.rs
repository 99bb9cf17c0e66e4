//! 에러 집계기 -- 분류된 줄 스트림을 한 번 훑으며 에러를 묶고 중복을 제거합니다.
//!
//! 명시적인 두 상태 머신입니다.
//! - `Idle`: 열린 에러 없음
//! - `Open`: 현재 에러와 뒤따르는 스택 트레이스를 누적 중
//!
//! # 전이 규칙
//! - 새 에러 줄: 열린 에러가 있으면 먼저 그룹으로 내보낸(flush) 뒤 새 에러를 엽니다.
//! - 연속 줄 (에러가 열려 있을 때): 원문, 스택 트레이스 텍스트, 구조화 프레임을 누적합니다.
//! - 그 밖의 줄: 열린 에러를 내보내고 `Idle`로 돌아간 뒤 레벨별 카운트만 올립니다.
//! - 입력 끝: 열린 에러를 무조건 내보냅니다.
//!
//! 그룹 키는 에러를 열 때 한 번 계산한 정규 메시지이며 다시 계산하지 않습니다.

use std::collections::HashMap;

use tracing::trace;

use logsift_core::types::{ErrorGroup, Level, StackFrame};

use crate::classifier::{ClassifiedLine, extract_error_type};
use crate::frame::FrameRouter;

/// 그룹당 보존하는 최대 샘플 수
pub const MAX_SAMPLES: usize = 3;

/// 정규 메시지 최대 길이 (문자 수)
pub const MAX_MESSAGE_CHARS: usize = 200;

/// 집계 결과
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregation {
    /// 발생 횟수 내림차순 그룹 (동률이면 처음 삽입된 순서)
    pub groups: Vec<ErrorGroup>,
    /// WARN/WARNING 줄 수
    pub warnings: usize,
    /// INFO 줄 수
    pub info: usize,
    /// DEBUG/TRACE 줄 수
    pub debug: usize,
}

/// 현재 열려 있는 에러
#[derive(Debug)]
struct OpenError {
    timestamp: Option<String>,
    level: Level,
    message: String,
    sample: String,
    raw_lines: Vec<String>,
    stack_trace: Vec<String>,
    stack_frames: Vec<StackFrame>,
    first_line: usize,
}

impl OpenError {
    fn start(position: usize, raw: &str, line: &ClassifiedLine<'_>) -> Self {
        let message = match extract_error_type(line.message) {
            Some(error_type) => error_type.to_owned(),
            None => line.message.chars().take(MAX_MESSAGE_CHARS).collect(),
        };

        Self {
            timestamp: line.timestamp.map(str::to_owned),
            level: line.level.unwrap_or(Level::Error),
            message,
            sample: raw.to_owned(),
            raw_lines: vec![raw.to_owned()],
            stack_trace: Vec::new(),
            stack_frames: Vec::new(),
            first_line: position,
        }
    }

    fn push_continuation(&mut self, raw: &str, router: &FrameRouter) {
        let trimmed = raw.trim();
        self.raw_lines.push(raw.to_owned());
        self.stack_trace.push(trimmed.to_owned());
        if let Some(frame) = router.structure(trimmed, true) {
            self.stack_frames.push(frame);
        }
    }
}

#[derive(Debug)]
enum State {
    Idle,
    Open(OpenError),
}

/// 정규 메시지로 색인된 그룹 목록 (삽입 순서 유지)
#[derive(Debug, Default)]
struct GroupTable {
    groups: Vec<ErrorGroup>,
    index: HashMap<String, usize>,
}

impl GroupTable {
    fn merge(&mut self, error: OpenError) {
        if let Some(&idx) = self.index.get(&error.message) {
            let group = &mut self.groups[idx];
            group.count += 1;
            if group.samples.len() < MAX_SAMPLES {
                group.samples.push(error.sample);
            }
            group.raw_lines.extend(error.raw_lines);
            // 마지막 발생의 타임스탬프가 이깁니다. 샘플은 가장 이른 것부터 유지됩니다.
            if error.timestamp.is_some() {
                group.timestamp = error.timestamp;
            }
            if group.stack_trace.is_none() && !error.stack_trace.is_empty() {
                group.stack_trace = Some(error.stack_trace);
                group.stack_frames = Some(error.stack_frames);
            }
            trace!(message = %group.message, count = group.count, "merged error occurrence");
            return;
        }

        trace!(message = %error.message, first_line = error.first_line, "new error group");
        self.index.insert(error.message.clone(), self.groups.len());
        self.groups.push(ErrorGroup {
            timestamp: error.timestamp,
            level: error.level,
            message: error.message,
            count: 1,
            samples: vec![error.sample],
            raw_lines: error.raw_lines,
            stack_trace: (!error.stack_trace.is_empty()).then_some(error.stack_trace),
            stack_frames: (!error.stack_frames.is_empty()).then_some(error.stack_frames),
            first_line: error.first_line,
        });
    }
}

/// 단일 패스 에러 집계기
///
/// `parse` 호출 하나에서만 사용하고 버립니다.
pub struct Aggregator<'r> {
    router: &'r FrameRouter,
    state: State,
    table: GroupTable,
    warnings: usize,
    info: usize,
    debug: usize,
}

impl<'r> Aggregator<'r> {
    /// 프레임 라우터를 빌려 새 집계기를 생성합니다.
    pub fn new(router: &'r FrameRouter) -> Self {
        Self {
            router,
            state: State::Idle,
            table: GroupTable::default(),
            warnings: 0,
            info: 0,
            debug: 0,
        }
    }

    /// 에러가 열려 있는지 확인합니다.
    pub fn is_open(&self) -> bool {
        matches!(self.state, State::Open(_))
    }

    /// 분류된 줄 하나를 처리합니다.
    ///
    /// `position`은 1부터 시작하는 줄 위치, `raw`는 원문 줄입니다.
    pub fn feed(&mut self, position: usize, raw: &str, line: &ClassifiedLine<'_>) {
        if line.opens_error() {
            self.flush();
            self.state = State::Open(OpenError::start(position, raw, line));
            return;
        }

        if line.is_continuation {
            let router = self.router;
            if let State::Open(open) = &mut self.state {
                open.push_continuation(raw, router);
                return;
            }
        }

        self.flush();
        self.tally(line.level);
    }

    /// 남은 에러를 내보내고 정렬된 결과를 반환합니다.
    pub fn finish(mut self) -> Aggregation {
        self.flush();

        let mut groups = self.table.groups;
        // 안정 정렬: 동률은 처음 삽입된 순서를 유지
        groups.sort_by(|a, b| b.count.cmp(&a.count));

        Aggregation {
            groups,
            warnings: self.warnings,
            info: self.info,
            debug: self.debug,
        }
    }

    fn flush(&mut self) {
        if let State::Open(error) = std::mem::replace(&mut self.state, State::Idle) {
            self.table.merge(error);
        }
    }

    fn tally(&mut self, level: Option<Level>) {
        match level {
            Some(Level::Warn | Level::Warning) => self.warnings += 1,
            Some(Level::Info) => self.info += 1,
            Some(Level::Debug | Level::Trace) => self.debug += 1,
            _ => {}
        }
    }
}
