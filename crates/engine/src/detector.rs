//! 형식 감지기 -- 샘플 텍스트로 로그 방언을 추정합니다.
//!
//! 결과는 참고용 레이블이며 줄 분류에는 영향을 주지 않습니다.
//! 검사는 순서가 있고 첫 번째로 맞는 패턴이 이깁니다.

use std::sync::LazyLock;

use regex::Regex;

use logsift_core::types::LogFormat;

/// 방언별 감지 패턴 (검사 순서대로)
static FORMAT_PATTERNS: LazyLock<Vec<(LogFormat, Regex)>> = LazyLock::new(|| {
    [
        (
            LogFormat::JavaSpringBoot,
            r"(?m)^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}\.\d{3}\s+(?:ERROR|WARN|INFO|DEBUG|TRACE|FATAL)\b",
        ),
        (
            LogFormat::Python,
            r"(?m)^(?:DEBUG|INFO|WARNING|ERROR|CRITICAL):[\w.]+:",
        ),
        (
            LogFormat::NodeJson,
            r#"(?i)"level"\s*:\s*"(?:error|warn|warning|info|debug|trace|fatal|verbose|silly|http)""#,
        ),
        (
            LogFormat::AwsCloudWatch,
            r"(?m)^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}(?:\.\d+)?Z",
        ),
        (
            LogFormat::Generic,
            r"(?i)\[(?:ERROR|WARN|WARNING|INFO|DEBUG|TRACE|FATAL|CRITICAL)\]",
        ),
    ]
    .into_iter()
    .map(|(format, pattern)| {
        (
            format,
            Regex::new(pattern).expect("format detection pattern is valid"),
        )
    })
    .collect()
});

/// 앞쪽 `sample_lines`개의 비어 있지 않은 줄로 형식을 추정합니다.
///
/// 아무 패턴도 맞지 않으면 [`LogFormat::Unknown`]을 반환합니다.
pub fn detect_format(text: &str, sample_lines: usize) -> LogFormat {
    let sample = text
        .lines()
        .filter(|l| !l.trim().is_empty())
        .take(sample_lines)
        .collect::<Vec<_>>()
        .join("\n");

    FORMAT_PATTERNS
        .iter()
        .find(|(_, re)| re.is_match(&sample))
        .map(|(format, _)| *format)
        .unwrap_or_default()
}
