//! `logsift request` command handler
//!
//! Parses the input, extracts application code locations from the stack
//! frames and packages everything as an `AnalysisRequest` payload. With
//! `--source-root`, each location is read as `<root>/<file>` and a snippet
//! around the reported line is attached.

use std::io::Write;
use std::path::{Component, Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};

use logsift_core::analysis::{AnalysisRequest, SourceContext};
use logsift_core::config::LogsiftConfig;
use logsift_engine::{CodeLocation, extract_locations};

use crate::cli::RequestArgs;
use crate::commands::{build_engine, input_label, read_input};
use crate::error::CliError;
use crate::output::{OutputWriter, Render};

/// Execute the `request` command.
pub async fn execute(
    args: RequestArgs,
    config: &LogsiftConfig,
    writer: &OutputWriter,
) -> Result<(), CliError> {
    let engine = build_engine(config)?;
    let text = read_input(&args.input).await?;

    info!(source = %input_label(&args.input), bytes = text.len(), "building analysis request");

    let result = engine.parse(&text)?;
    let locations = extract_locations(&result, config.analysis.max_locations);
    debug!(
        groups = result.errors.len(),
        locations = locations.len(),
        "extracted code locations"
    );

    let service_id = args
        .service
        .unwrap_or_else(|| config.analysis.service_id.clone());
    let mut request = AnalysisRequest::new(service_id, text);

    for location in locations {
        let snippet = match args.source_root.as_deref() {
            Some(root) => {
                load_snippet(root, &location, config.analysis.snippet_context_lines).await
            }
            None => None,
        };

        let mut context = SourceContext::from(location);
        if let Some(snippet) = snippet {
            context = context.file_content(snippet);
        }
        request = request.with_location(context);
    }

    writer.render(&RequestReport(request))?;

    Ok(())
}

/// Read `<root>/<file>` and cut a snippet around the location's line.
///
/// Missing or unreadable files are logged and skipped, and so is any file
/// name that would resolve outside `root`.
async fn load_snippet(
    root: &Path,
    location: &CodeLocation,
    context_lines: usize,
) -> Option<String> {
    let line = location.line?;
    let Some(path) = source_path(root, &location.file) else {
        warn!(file = %location.file, "source path escapes the source root, skipping");
        return None;
    };

    match tokio::fs::read_to_string(&path).await {
        Ok(content) => {
            let snippet = snippet(&content, line, context_lines);
            if snippet.is_none() {
                warn!(path = %path.display(), line, "line is outside the source file");
            }
            snippet
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "cannot read source file");
            None
        }
    }
}

/// `<root>/<file>` when `file` is a plain relative path.
fn source_path(root: &Path, file: &str) -> Option<PathBuf> {
    let relative = Path::new(file);
    let mut components = relative.components().peekable();
    components.peek()?;
    if components.all(|c| matches!(c, Component::Normal(_))) {
        Some(root.join(relative))
    } else {
        None
    }
}

/// Lines `line - context ..= line + context` of `content` (1-indexed, clamped).
///
/// Returns `None` when `line` is not inside the file.
pub fn snippet(content: &str, line: u32, context: usize) -> Option<String> {
    let lines: Vec<&str> = content.lines().collect();
    let index = usize::try_from(line).ok()?.checked_sub(1)?;
    if index >= lines.len() {
        return None;
    }

    let start = index.saturating_sub(context);
    let end = index.saturating_add(context).min(lines.len() - 1);
    Some(lines[start..=end].join("\n"))
}

/// Analysis request payload.
///
/// JSON output is exactly the `AnalysisRequest`.
#[derive(Serialize)]
#[serde(transparent)]
pub struct RequestReport(pub AnalysisRequest);

impl Render for RequestReport {
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()> {
        use colored::Colorize;

        let request = &self.0;
        writeln!(
            w,
            "Analysis request {}",
            request.request_id.to_string().bold()
        )?;
        writeln!(w, "Service: {}", request.service_id)?;
        writeln!(w, "Raw logs: {} bytes", request.raw_logs.len())?;
        writeln!(w)?;

        if request.locations.is_empty() {
            writeln!(w, "{}", "No application code locations found.".yellow())?;
            return Ok(());
        }

        writeln!(w, "Locations ({}):", request.locations.len())?;
        for location in &request.locations {
            let position = match location.line_number {
                Some(line) => format!("{}:{}", location.file_path, line),
                None => location.file_path.clone(),
            };
            let language = location.language_hint.as_deref().unwrap_or("-");
            match location.file_content {
                Some(ref content) => writeln!(
                    w,
                    "  {:<40} {:<12} {}",
                    position,
                    language,
                    format!("snippet: {} lines", content.lines().count()).green()
                )?,
                None => writeln!(w, "  {:<40} {}", position, language)?,
            }
        }

        Ok(())
    }
}
