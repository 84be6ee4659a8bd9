use crate::ports::outbound::OutputPresenter;
use crate::shared::Result;
use anyhow::Context;
use std::io::{self, Write};

/// Writes the rendered report to stdout, keeping stderr free for progress.
#[derive(Debug, Default)]
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }

    /// Writes `content` to `out`, terminated by exactly one trailing newline.
    fn write_report(out: &mut impl Write, content: &str) -> io::Result<()> {
        out.write_all(content.as_bytes())?;
        if !content.ends_with('\n') {
            out.write_all(b"\n")?;
        }
        out.flush()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        Self::write_report(&mut io::stdout().lock(), content)
            .context("Failed to write the report to stdout")
    }
}
