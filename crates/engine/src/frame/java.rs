//! Java 스택 프레임 매처
//!
//! `at <패키지.클래스.메서드>(<파일>:<줄>)` 형식을 인식합니다.
//! Java 9 이후의 모듈 접두어(`java.base/`, `app//`)는 건너뜁니다.

use std::sync::LazyLock;

use regex::Regex;

use logsift_core::types::StackFrame;

use super::{FrameMatcher, split_qualified};

static JAVA_FRAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^at\s+(?:[\w.$@-]+//?)?([\w$.<>]+)\(([^:()]+):(\d+)\)")
        .expect("java frame regex is valid")
});

/// Java/JVM 스택 프레임 매처
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaFrameMatcher;

impl FrameMatcher for JavaFrameMatcher {
    fn dialect(&self) -> &str {
        "java"
    }

    fn try_match(&self, line: &str) -> Option<StackFrame> {
        let caps = JAVA_FRAME_RE.captures(line)?;
        let (class, method) = split_qualified(&caps[1]);

        Some(StackFrame {
            file: caps[2].to_owned(),
            line: caps[3].parse().ok(),
            method: Some(method),
            class,
            raw: line.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_qualified_frame() {
        let frame = JavaFrameMatcher
            .try_match("at com.example.payment.PaymentService.process(PaymentService.java:142)")
            .unwrap();
        assert_eq!(frame.class.as_deref(), Some("com.example.payment.PaymentService"));
        assert_eq!(frame.method.as_deref(), Some("process"));
        assert_eq!(frame.file, "PaymentService.java");
        assert_eq!(frame.line, Some(142));
        assert_eq!(
            frame.raw,
            "at com.example.payment.PaymentService.process(PaymentService.java:142)"
        );
    }

    #[test]
    fn parses_constructor_and_lambda() {
        let frame = JavaFrameMatcher
            .try_match("at com.example.Order.<init>(Order.java:12)")
            .unwrap();
        assert_eq!(frame.method.as_deref(), Some("<init>"));

        let frame = JavaFrameMatcher
            .try_match("at com.example.Worker.lambda$run$0(Worker.java:55)")
            .unwrap();
        assert_eq!(frame.class.as_deref(), Some("com.example.Worker"));
        assert_eq!(frame.method.as_deref(), Some("lambda$run$0"));
    }

    #[test]
    fn skips_module_prefix() {
        let frame = JavaFrameMatcher
            .try_match("at java.base/java.lang.Thread.run(Thread.java:833)")
            .unwrap();
        assert_eq!(frame.class.as_deref(), Some("java.lang.Thread"));
        assert_eq!(frame.method.as_deref(), Some("run"));

        let frame = JavaFrameMatcher
            .try_match("at app//com.example.Main.main(Main.java:3)")
            .unwrap();
        assert_eq!(frame.class.as_deref(), Some("com.example.Main"));
    }

    #[test]
    fn undotted_path_has_no_class() {
        let frame = JavaFrameMatcher.try_match("at main(Main.java:1)").unwrap();
        assert!(frame.class.is_none());
        assert_eq!(frame.method.as_deref(), Some("main"));
    }

    #[test]
    fn oversized_line_number_is_dropped() {
        let frame = JavaFrameMatcher
            .try_match("at a.B.c(B.java:99999999999)")
            .unwrap();
        assert_eq!(frame.line, None);
        assert_eq!(frame.file, "B.java");
    }

    #[test]
    fn rejects_other_shapes() {
        assert!(JavaFrameMatcher
            .try_match("at java.lang.Thread.sleep(Native Method)")
            .is_none());
        assert!(JavaFrameMatcher
            .try_match("at Object.<anonymous> (/app/index.js:1:2)")
            .is_none());
        assert!(JavaFrameMatcher.try_match("... 42 more").is_none());
    }
}
