//! # Output Rendering
//!
//! Every subcommand builds a serializable report, then renders it either as
//! line-oriented text or as a single pretty-printed JSON document.

use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

/// How reports are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One line per input.
    #[default]
    Text,
    /// One JSON document for the whole run.
    Json,
}

impl OutputFormat {
    /// Select the format from the global `--json` flag.
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Text
        }
    }
}

/// Write `report` as pretty JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize>(out: &mut W, report: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report).context("failed to serialize report")?;
    writeln!(out).context("failed to write output")?;
    Ok(())
}
