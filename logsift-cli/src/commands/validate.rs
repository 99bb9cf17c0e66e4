//! `logsift validate` command handler

use std::io::Write;

use serde::Serialize;
use tracing::info;

use logsift_core::config::LogsiftConfig;
use logsift_engine::{Signals, Validator, Verdict};

use crate::cli::ValidateArgs;
use crate::commands::{build_engine, input_label, read_input};
use crate::error::CliError;
use crate::output::{OutputWriter, Render};

/// Execute the `validate` command.
///
/// The report is always rendered; a rejected input then fails with exit code 5.
pub async fn execute(
    args: ValidateArgs,
    config: &LogsiftConfig,
    writer: &OutputWriter,
) -> Result<(), CliError> {
    let engine = build_engine(config)?;
    let text = read_input(&args.input).await?;
    let source = input_label(&args.input);

    info!(source = %source, bytes = text.len(), "validating log input");

    let verdict = engine.validate(&text);
    let signals = Validator::new(engine.config()).signals(&text);
    let report = ValidationReport::new(source, &verdict, signals);

    writer.render(&report)?;

    match verdict {
        Verdict::Valid => Ok(()),
        Verdict::Invalid(reason) => Err(CliError::InputRejected(reason)),
    }
}

/// Input validation report.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub source: String,
    pub valid: bool,
    /// Human-readable rejection reason
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Stable machine identifier of the rejection reason
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<&'static str>,
    pub signals: Signals,
}

impl ValidationReport {
    fn new(source: String, verdict: &Verdict, signals: Signals) -> Self {
        Self {
            source,
            valid: verdict.is_valid(),
            reason: verdict.reason().map(ToString::to_string),
            code: verdict.reason().map(|r| r.code()),
            signals,
        }
    }
}

impl Render for ValidationReport {
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()> {
        use colored::Colorize;

        writeln!(w, "Log Validation: {}", self.source.bold())?;

        if self.valid {
            writeln!(w, "  Result: {}", "VALID".green().bold())?;
        } else {
            writeln!(w, "  Result: {}", "INVALID".red().bold())?;
            if let Some(ref reason) = self.reason {
                writeln!(w, "  Reason: {}", reason.red())?;
            }
        }

        let s = &self.signals;
        writeln!(w)?;
        writeln!(w, "  Sampled lines: {}", s.sample_size)?;
        for (label, count) in [
            ("Timestamps", s.timestamp_lines),
            ("Severity levels", s.level_lines),
            ("Stack trace lines", s.stack_trace_lines),
            ("Error keywords", s.error_keyword_lines),
            ("Structured lines", s.structured_lines),
        ] {
            writeln!(w, "  {:<18} {:>6} ({:.1}%)", label, count, s.rate(count))?;
        }

        Ok(())
    }
}
