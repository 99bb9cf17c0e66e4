//! 소스 위치 추출 -- 파싱 결과의 스택 프레임에서 애플리케이션 코드 위치를 뽑습니다.
//!
//! 파일 시스템에 접근하지 않습니다. 결과는 분석 요청의
//! [`SourceContext`]를 채우는 데 쓰입니다.

use serde::Serialize;

use logsift_core::analysis::SourceContext;
use logsift_core::types::{ParseResult, StackFrame};

use crate::frame::last_path_segment;

/// 런타임/프레임워크 클래스 접두어
const LIBRARY_CLASS_PREFIXES: &[&str] = &[
    "java.",
    "javax.",
    "jakarta.",
    "sun.",
    "com.sun.",
    "jdk.",
    "kotlin.",
    "scala.",
    "org.springframework.",
    "org.apache.",
];

/// 런타임/서드파티 경로 표식
const LIBRARY_PATH_MARKERS: &[&str] = &[
    "node_modules/",
    "node:internal",
    "site-packages/",
    "/lib/python",
];

/// 확장자별 언어 힌트
const LANGUAGE_BY_EXTENSION: &[(&str, &str)] = &[
    ("java", "java"),
    ("py", "python"),
    ("js", "javascript"),
    ("mjs", "javascript"),
    ("cjs", "javascript"),
    ("ts", "typescript"),
    ("kt", "kotlin"),
    ("go", "go"),
    ("rb", "ruby"),
    ("cs", "csharp"),
];

/// 스택 프레임에서 찾은 코드 위치
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeLocation {
    pub file: String,
    pub line: Option<u32>,
    pub language_hint: Option<&'static str>,
}

impl From<CodeLocation> for SourceContext {
    fn from(location: CodeLocation) -> Self {
        let mut context = SourceContext::new(location.file);
        if let Some(line) = location.line {
            context = context.line_number(line);
        }
        if let Some(hint) = location.language_hint {
            context = context.language_hint(hint);
        }
        context
    }
}

/// 파싱 결과에서 중복 없는 코드 위치를 최대 `limit`개 추출합니다.
///
/// 그룹 순서(발생 횟수 내림차순)와 프레임 순서를 따르며,
/// 해석되지 않은 프레임과 라이브러리 프레임은 건너뜁니다.
/// 파일은 항상 마지막 경로 조각만 남기므로 절대 경로나 `..`가 나오지 않습니다.
pub fn extract_locations(result: &ParseResult, limit: usize) -> Vec<CodeLocation> {
    let mut locations: Vec<CodeLocation> = Vec::new();

    let frames = result
        .errors
        .iter()
        .filter_map(|group| group.stack_frames.as_deref())
        .flatten();

    for frame in frames {
        if locations.len() >= limit {
            break;
        }
        if !frame.is_resolved() || is_library_frame(frame) {
            continue;
        }
        let Some(file) = file_name(&frame.file) else {
            continue;
        };
        if locations
            .iter()
            .any(|l| l.file == file && l.line == frame.line)
        {
            continue;
        }
        locations.push(CodeLocation {
            file: file.to_owned(),
            line: frame.line,
            language_hint: language_hint(file),
        });
    }

    locations
}

/// 프레임 파일의 마지막 경로 조각. `.`/`..`뿐인 경로는 `None`입니다.
fn file_name(path: &str) -> Option<&str> {
    match last_path_segment(path) {
        "" | "." | ".." => None,
        name => Some(name),
    }
}

/// 런타임이나 서드파티 코드의 프레임인지 확인합니다.
pub fn is_library_frame(frame: &StackFrame) -> bool {
    let class_is_library = frame
        .class
        .as_deref()
        .is_some_and(|class| LIBRARY_CLASS_PREFIXES.iter().any(|p| class.starts_with(p)));

    class_is_library || LIBRARY_PATH_MARKERS.iter().any(|m| frame.raw.contains(m))
}

/// 파일 확장자로 언어를 추정합니다.
pub fn language_hint(file: &str) -> Option<&'static str> {
    let (_, ext) = file.rsplit_once('.')?;
    LANGUAGE_BY_EXTENSION
        .iter()
        .find(|(candidate, _)| candidate.eq_ignore_ascii_case(ext))
        .map(|(_, language)| *language)
}
