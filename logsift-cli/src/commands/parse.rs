//! `logsift parse` command handler

use std::io::Write;

use serde::Serialize;
use tracing::info;

use logsift_core::config::LogsiftConfig;
use logsift_core::types::{ErrorGroup, Level, ParseResult};

use crate::cli::ParseArgs;
use crate::commands::{build_engine, input_label, read_input};
use crate::error::CliError;
use crate::output::{OutputWriter, Render};

/// Longest message shown in the text table before truncation.
const MESSAGE_COLUMN_WIDTH: usize = 80;

/// Execute the `parse` command.
pub async fn execute(
    args: ParseArgs,
    config: &LogsiftConfig,
    writer: &OutputWriter,
) -> Result<(), CliError> {
    let engine = build_engine(config)?;
    let text = read_input(&args.input).await?;
    let source = input_label(&args.input);

    info!(source = %source, bytes = text.len(), "parsing log input");

    let result = engine.parse(&text)?;
    let report = ParseReport::new(source, result, args.top);

    writer.render(&report)?;

    Ok(())
}

/// Parse report.
///
/// `result.errors` holds only the displayed groups when `--top` is given;
/// the totals always cover every group.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseReport {
    pub source: String,
    pub total_groups: usize,
    pub error_occurrences: usize,
    #[serde(flatten)]
    pub result: ParseResult,
}

impl ParseReport {
    pub fn new(source: String, mut result: ParseResult, top: Option<usize>) -> Self {
        let total_groups = result.errors.len();
        let error_occurrences = result.error_occurrences();
        if let Some(n) = top {
            result.errors.truncate(n);
        }
        Self {
            source,
            total_groups,
            error_occurrences,
            result,
        }
    }
}

impl Render for ParseReport {
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()> {
        use colored::Colorize;

        let r = &self.result;

        writeln!(w, "Parse: {}", self.source.bold())?;
        writeln!(w, "Format: {}", r.format)?;
        writeln!(w, "Total lines: {}", r.total_lines)?;

        let summary = format!(
            "{} occurrences in {} groups",
            self.error_occurrences, self.total_groups
        );
        if self.error_occurrences > 0 {
            writeln!(w, "Errors: {}", summary.red().bold())?;
        } else {
            writeln!(w, "Errors: {}", summary.green().bold())?;
        }
        writeln!(
            w,
            "Warnings: {}  Info: {}  Debug: {}",
            r.warnings, r.info, r.debug
        )?;

        if let Some(ref range) = r.time_range {
            match range.span() {
                Some(span) => writeln!(
                    w,
                    "Time range: {} -> {} ({}s)",
                    range.start,
                    range.end,
                    span.num_seconds()
                )?,
                None => writeln!(w, "Time range: {} -> {}", range.start, range.end)?,
            }
        }

        writeln!(w)?;

        if r.errors.is_empty() {
            writeln!(w, "{}", "No errors found.".green())?;
            return Ok(());
        }

        writeln!(
            w,
            "{:>6} {:<9} {:>6}  Message",
            "Count", "Level", "Line"
        )?;
        writeln!(w, "{}", "-".repeat(80))?;

        for group in &r.errors {
            render_group(w, group)?;
        }

        if r.errors.len() < self.total_groups {
            writeln!(w)?;
            writeln!(
                w,
                "{}",
                format!(
                    "... {} more groups not shown",
                    self.total_groups - r.errors.len()
                )
                .dimmed()
            )?;
        }

        Ok(())
    }
}

fn render_group(w: &mut dyn Write, group: &ErrorGroup) -> std::io::Result<()> {
    use colored::Colorize;

    let level = group.level.as_str();
    let level_colored = match group.level {
        Level::Fatal | Level::Critical => level.red().bold(),
        _ => level.red(),
    };

    writeln!(
        w,
        "{:>6} {:<9} {:>6}  {}",
        group.count,
        level_colored,
        group.first_line,
        truncate(&group.message, MESSAGE_COLUMN_WIDTH)
    )?;

    if let Some(frame) = group
        .stack_frames
        .as_deref()
        .and_then(|frames| frames.iter().find(|f| f.is_resolved()))
    {
        writeln!(w, "{:>24}at {}", "", frame.to_string().dimmed())?;
    }

    Ok(())
}

fn truncate(message: &str, max_chars: usize) -> String {
    if message.chars().count() <= max_chars {
        return message.to_owned();
    }
    let mut shortened: String = message.chars().take(max_chars.saturating_sub(3)).collect();
    shortened.push_str("...");
    shortened
}
