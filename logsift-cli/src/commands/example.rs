//! `logsift example` command handler

use std::io::Write;

use serde::Serialize;

use logsift_engine::EXAMPLE_LOGS;

use crate::error::CliError;
use crate::output::{OutputWriter, Render};

/// Execute the `example` command.
pub fn execute(writer: &OutputWriter) -> Result<(), CliError> {
    writer.render(&ExampleReport { logs: EXAMPLE_LOGS })
}

/// The bundled example log, printed verbatim in text mode.
#[derive(Serialize)]
pub struct ExampleReport {
    pub logs: &'static str,
}

impl Render for ExampleReport {
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()> {
        write!(w, "{}", self.logs)?;
        if !self.logs.ends_with('\n') {
            writeln!(w)?;
        }
        Ok(())
    }
}
