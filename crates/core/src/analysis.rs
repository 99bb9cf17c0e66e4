//! 분석 요청/응답 스키마 — 외부 근본 원인 분석 서비스와의 경계
//!
//! 파싱 엔진은 이 타입들을 만들기 위한 구조화된 입력만 제공합니다.
//! 전송, 재시도, 표시 로직은 이 크레이트의 범위 밖입니다.
//!
//! # 사용 예시
//! ```
//! use logsift_core::analysis::{AnalysisRequest, SourceContext};
//!
//! let request = AnalysisRequest::new("checkout-api", "2025-10-25 ERROR boom")
//!     .with_location(SourceContext::new("PaymentService.java").line_number(142));
//! assert_eq!(request.locations.len(), 1);
//! ```

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 분석 서비스로 보내는 요청 페이로드
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    /// 요청 ID (UUID v4)
    pub request_id: Uuid,
    /// 서비스 식별자
    pub service_id: String,
    /// 원문 로그 텍스트
    pub raw_logs: String,
    /// 찾아낸 소스 코드 위치
    pub locations: Vec<SourceContext>,
}

impl AnalysisRequest {
    /// 위치 정보 없이 새 요청을 생성합니다.
    pub fn new(service_id: impl Into<String>, raw_logs: impl Into<String>) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            service_id: service_id.into(),
            raw_logs: raw_logs.into(),
            locations: Vec::new(),
        }
    }

    /// 소스 위치를 추가합니다.
    pub fn with_location(mut self, location: SourceContext) -> Self {
        self.locations.push(location);
        self
    }
}

/// 소스 코드 문맥 하나
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceContext {
    /// 파일 경로
    pub file_path: String,
    /// 파일 내용 또는 발췌
    pub file_content: Option<String>,
    /// 줄 번호
    pub line_number: Option<u32>,
    /// 언어 힌트 (java, python, javascript 등)
    pub language_hint: Option<String>,
}

impl SourceContext {
    pub fn new(file_path: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            file_content: None,
            line_number: None,
            language_hint: None,
        }
    }

    pub fn line_number(mut self, line: u32) -> Self {
        self.line_number = Some(line);
        self
    }

    pub fn language_hint(mut self, hint: impl Into<String>) -> Self {
        self.language_hint = Some(hint.into());
        self
    }

    pub fn file_content(mut self, content: impl Into<String>) -> Self {
        self.file_content = Some(content.into());
        self
    }
}

/// 분석 서비스의 응답
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    /// 근본 원인 설명
    pub root_cause: String,
    /// 근거 목록
    #[serde(default)]
    pub evidence: Vec<String>,
    /// 권장 조치 목록
    #[serde(default)]
    pub suggested_actions: Vec<String>,
    /// 제안된 코드 수정 (최대 1개)
    #[serde(default)]
    pub code_fix: Option<CodeFix>,
}

/// 단일 코드 수정 제안
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeFix {
    pub file: String,
    pub line: u32,
    #[serde(default)]
    pub original_code: Option<String>,
    pub fixed_code: String,
    pub explanation: String,
}
