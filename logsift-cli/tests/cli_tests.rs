//! Integration tests for the `logsift` binary.
//!
//! Each test runs the compiled binary inside a temp directory so no stray
//! `logsift.toml` is picked up, and checks stdout and the exit code.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

const SHORT_PYTHON_LOG: &str = r#"INFO:app.server:Listening on 0.0.0.0:8000
ERROR:app.orders:Unhandled exception while creating order
Traceback (most recent call last):
  File "/srv/app/orders/views.py", line 57, in create_order
KeyError: 'customer_id'
WARNING:app.orders:Order 42 marked as failed
"#;

fn logsift(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_logsift"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("should run logsift binary")
}

fn logsift_with_stdin(dir: &Path, args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_logsift"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("should spawn logsift binary");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("should write stdin");

    child.wait_with_output().expect("should wait for logsift")
}

fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

fn write_example_log(dir: &Path) -> std::path::PathBuf {
    let out = logsift(dir, &["example"]);
    assert!(out.status.success(), "example should succeed");
    let path = dir.join("example.log");
    fs::write(&path, &out.stdout).expect("should write example log");
    path
}

#[test]
fn test_example_then_parse_json() {
    // Given: the bundled example log written to a file
    let dir = TempDir::new().expect("should create temp dir");
    write_example_log(dir.path());

    // When: parsing it with JSON output
    let out = logsift(dir.path(), &["--output", "json", "parse", "example.log"]);

    // Then: two groups, NullPointerException first
    assert!(out.status.success(), "parse should succeed");
    let json = stdout_json(&out);
    assert_eq!(json["totalGroups"], 2);
    assert_eq!(json["errorOccurrences"], 5);
    assert_eq!(json["errors"][0]["message"], "java.lang.NullPointerException");
    assert_eq!(json["errors"][0]["count"], 3);
    assert_eq!(json["format"], "Java/Spring Boot");
}

#[test]
fn test_parse_top_limits_json_groups() {
    let dir = TempDir::new().expect("should create temp dir");
    write_example_log(dir.path());

    let out = logsift(
        dir.path(),
        &["parse", "example.log", "--top", "1", "--output", "json"],
    );

    assert!(out.status.success());
    let json = stdout_json(&out);
    assert_eq!(json["errors"].as_array().map(Vec::len), Some(1));
    assert_eq!(json["totalGroups"], 2);
}

#[test]
fn test_parse_reads_stdin() {
    let dir = TempDir::new().expect("should create temp dir");

    let out = logsift_with_stdin(dir.path(), &["parse", "--output", "json"], SHORT_PYTHON_LOG);

    assert!(out.status.success(), "stdin parse should succeed");
    let json = stdout_json(&out);
    assert_eq!(json["source"], "<stdin>");
    assert_eq!(json["format"], "Python");
    assert_eq!(json["warnings"], 1);
}

#[test]
fn test_parse_too_few_lines_exits_5() {
    let dir = TempDir::new().expect("should create temp dir");
    fs::write(dir.path().join("short.log"), "ERROR a\nERROR b\n").expect("should write log");

    let out = logsift(dir.path(), &["parse", "short.log"]);

    assert_eq!(out.status.code(), Some(5), "rejected input should exit 5");
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("too few lines: found 2 non-empty lines, need at least 5"));
}

#[test]
fn test_parse_missing_file_exits_10() {
    let dir = TempDir::new().expect("should create temp dir");

    let out = logsift(dir.path(), &["parse", "does-not-exist.log"]);

    assert_eq!(out.status.code(), Some(10), "io error should exit 10");
}

#[test]
fn test_validate_valid_example() {
    let dir = TempDir::new().expect("should create temp dir");
    write_example_log(dir.path());

    let out = logsift(dir.path(), &["validate", "example.log", "--output", "json"]);

    assert!(out.status.success());
    let json = stdout_json(&out);
    assert_eq!(json["valid"], true);
    assert_eq!(json["signals"]["sampleSize"], 28);
}

#[test]
fn test_validate_prose_is_rejected() {
    let dir = TempDir::new().expect("should create temp dir");
    let prose = "The quick brown fox\njumps over the lazy dog\nand keeps running\nacross the field\nuntil it is dark\n";

    let out = logsift_with_stdin(dir.path(), &["validate", "--output", "json"], prose);

    assert_eq!(out.status.code(), Some(5));
    let json = stdout_json(&out);
    assert_eq!(json["valid"], false);
    assert_eq!(json["code"], "not_log_like");
}

#[test]
fn test_validate_empty_input() {
    let dir = TempDir::new().expect("should create temp dir");

    let out = logsift_with_stdin(dir.path(), &["validate", "--output", "json"], "  \n\n");

    assert_eq!(out.status.code(), Some(5));
    assert_eq!(stdout_json(&out)["code"], "empty");
}

#[test]
fn test_request_with_source_root_attaches_snippet() {
    // Given: the example log and a source tree holding PaymentService.java
    let dir = TempDir::new().expect("should create temp dir");
    write_example_log(dir.path());
    let src = dir.path().join("src");
    fs::create_dir(&src).expect("should create src dir");
    let source: String = (1..=200).map(|n| format!("// line {n}\n")).collect();
    fs::write(src.join("PaymentService.java"), source).expect("should write source");

    // When: building the request
    let out = logsift(
        dir.path(),
        &[
            "request",
            "example.log",
            "--service",
            "payment-processor",
            "--source-root",
            "src",
            "--output",
            "json",
        ],
    );

    // Then: the first location has a snippet of 5 lines either side of 142
    assert!(out.status.success(), "request should succeed");
    let json = stdout_json(&out);
    assert_eq!(json["serviceId"], "payment-processor");
    assert!(json["requestId"].is_string());

    let first = &json["locations"][0];
    assert_eq!(first["filePath"], "PaymentService.java");
    assert_eq!(first["lineNumber"], 142);
    assert_eq!(first["languageHint"], "java");
    let snippet = first["fileContent"].as_str().expect("snippet attached");
    assert_eq!(snippet.lines().count(), 11);
    assert!(snippet.starts_with("// line 137"));
    assert!(snippet.ends_with("// line 147"));

    // GatewayClient.java is absent from src, so no content is attached
    let second = &json["locations"][1];
    assert_eq!(second["filePath"], "GatewayClient.java");
    assert!(second["fileContent"].is_null());
}

#[test]
fn test_request_uses_configured_service_id() {
    let dir = TempDir::new().expect("should create temp dir");
    write_example_log(dir.path());
    fs::write(
        dir.path().join("logsift.toml"),
        "[analysis]\nservice_id = \"checkout-api\"\nmax_locations = 1\n",
    )
    .expect("should write config");

    let out = logsift(dir.path(), &["request", "example.log", "--output", "json"]);

    assert!(out.status.success());
    let json = stdout_json(&out);
    assert_eq!(json["serviceId"], "checkout-api");
    assert_eq!(json["locations"].as_array().map(Vec::len), Some(1));
}

#[test]
fn test_config_validate_defaults() {
    let dir = TempDir::new().expect("should create temp dir");

    let out = logsift(dir.path(), &["config", "validate", "--output", "json"]);

    assert!(out.status.success());
    let json = stdout_json(&out);
    assert_eq!(json["source"], "<defaults>");
    assert_eq!(json["valid"], true);
}

#[test]
fn test_config_validate_malformed_toml_exits_2() {
    let dir = TempDir::new().expect("should create temp dir");
    fs::write(dir.path().join("bad.toml"), "[general\nlog_level = \"info\"\n")
        .expect("should write bad config");

    let out = logsift(
        dir.path(),
        &["--config", "bad.toml", "config", "validate", "--output", "json"],
    );

    assert_eq!(out.status.code(), Some(2));
    let json = stdout_json(&out);
    assert_eq!(json["valid"], false);
    assert_eq!(json["errors"].as_array().map(Vec::len), Some(1));
}

#[test]
fn test_config_missing_explicit_file_exits_2() {
    let dir = TempDir::new().expect("should create temp dir");

    let out = logsift(dir.path(), &["--config", "missing.toml", "example"]);
    // example does not read the config
    assert!(out.status.success());

    let out = logsift(dir.path(), &["--config", "missing.toml", "parse", "-"]);
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn test_config_show_section() {
    let dir = TempDir::new().expect("should create temp dir");
    fs::write(dir.path().join("logsift.toml"), "[engine]\nmin_lines = 3\n")
        .expect("should write config");

    let out = logsift(dir.path(), &["config", "show", "--section", "engine"]);

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("min_lines = 3"));
    assert!(!stdout.contains("service_id"));
}

#[test]
fn test_config_show_unknown_section_exits_1() {
    let dir = TempDir::new().expect("should create temp dir");

    let out = logsift(dir.path(), &["config", "show", "--section", "ebpf"]);

    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn test_request_never_reads_outside_source_root() {
    // Given: frames pointing at an absolute path and a parent-relative path
    let dir = TempDir::new().expect("should create temp dir");
    let secret = dir.path().join("secret.txt");
    fs::write(&secret, "top secret\n").expect("should write secret");
    fs::create_dir(dir.path().join("src")).expect("should create src dir");

    let log = format!(
        "2025-10-25 14:32:15.123 INFO 1 --- [main] c.e.App : started\n\
         2025-10-25 14:32:16.000 ERROR 1 --- [main] c.e.App : java.lang.IllegalStateException: x\n\
         \tat com.example.A.run({}:1)\n\
         \tat com.example.B.run(../secret.txt:2)\n\
         2025-10-25 14:32:17.000 INFO 1 --- [main] c.e.App : done\n\
         2025-10-25 14:32:18.000 WARN 1 --- [main] c.e.App : slow\n",
        secret.display()
    );
    fs::write(dir.path().join("app.log"), log).expect("should write log");

    // When: building the request with a source root
    let out = logsift(
        dir.path(),
        &["request", "app.log", "--source-root", "src", "--output", "json"],
    );

    // Then: only bare file names are reported and nothing is attached
    assert!(out.status.success(), "request should succeed");
    let json = stdout_json(&out);
    let locations = json["locations"].as_array().expect("locations array");
    assert_eq!(locations.len(), 2);
    for location in locations {
        assert_eq!(location["filePath"], "secret.txt");
        assert!(location["fileContent"].is_null());
    }
    assert!(!out.stdout.windows(10).any(|w| w == b"top secret"));
}
