//! Output formatting utilities for CLI operations.

use std::io::Write;

use exhibit::WorkflowError;
use exhibit::artifacts::FetchedArtifact;
use exhibit::links::LinkCheck;

/// Message printed when no artifact matches the requested name.
pub const NO_ARTIFACT_MESSAGE: &str = "No matching artifact found; skip.";

/// Message printed when a rewrite leaves the description unchanged.
pub const NO_OP_MESSAGE: &str = "no-op: evidence block already up-to-date";

/// Writes one line to the given writer.
pub fn write_line_to<W: Write>(writer: &mut W, line: &str) -> Result<(), WorkflowError> {
    writeln!(writer, "{line}").map_err(|e| io_error(&e))
}

/// Writes one report row per evidence label.
pub fn write_link_report_to<W: Write>(
    writer: &mut W,
    checks: &[LinkCheck],
) -> Result<(), WorkflowError> {
    for check in checks {
        writeln!(writer, "{check}").map_err(|e| io_error(&e))?;
    }
    Ok(())
}

/// Writes the extracted paths and, when present, the trace archive.
pub fn write_fetch_report_to<W: Write>(
    writer: &mut W,
    fetched: Option<&FetchedArtifact>,
) -> Result<(), WorkflowError> {
    let Some(artifact) = fetched else {
        return write_line_to(writer, NO_ARTIFACT_MESSAGE);
    };

    for path in &artifact.extracted {
        writeln!(writer, "EXTRACTED: {path}").map_err(|e| io_error(&e))?;
    }
    if let Some(trace) = artifact.trace_archive() {
        writeln!(writer, "TRACE_ZIP_READY: {trace}").map_err(|e| io_error(&e))?;
    }
    Ok(())
}

fn io_error(error: &std::io::Error) -> WorkflowError {
    WorkflowError::Io {
        message: error.to_string(),
    }
}
