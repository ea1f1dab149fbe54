//! Zip extraction confined to an output directory.

use std::io::{self, Cursor};

use camino::{Utf8Path, Utf8PathBuf};
use zip::ZipArchive;

use crate::github::WorkflowError;
use crate::workspace;

fn archive_error(error: &impl std::fmt::Display) -> WorkflowError {
    WorkflowError::Archive {
        message: error.to_string(),
    }
}

/// Extracts every file of a zip archive below `output_dir`.
///
/// Entries whose names are absolute or contain `..` are skipped with a
/// warning. Returns the paths of the written files in archive order.
///
/// # Errors
///
/// Returns [`WorkflowError::Archive`] when the bytes are not a readable zip
/// and [`WorkflowError::Io`] when a file cannot be written.
pub fn extract_archive(bytes: &[u8], output_dir: &Utf8Path) -> Result<Vec<Utf8PathBuf>, WorkflowError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).map_err(|error| archive_error(&error))?;
    let dir = workspace::open_dir(output_dir)?;
    let mut extracted = Vec::new();

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index).map_err(|error| archive_error(&error))?;
        let Some(relative) = entry
            .enclosed_name()
            .and_then(|name| Utf8PathBuf::from_path_buf(name).ok())
        else {
            tracing::warn!(entry = entry.name(), "skipping unsafe archive entry");
            continue;
        };

        if entry.is_dir() {
            dir.create_dir_all(&relative)
                .map_err(|error| WorkflowError::io(&format!("failed to create '{relative}'"), &error))?;
            continue;
        }

        if let Some(parent) = relative.parent().filter(|parent| !parent.as_str().is_empty()) {
            dir.create_dir_all(parent)
                .map_err(|error| WorkflowError::io(&format!("failed to create '{parent}'"), &error))?;
        }
        let mut file = dir
            .create(&relative)
            .map_err(|error| WorkflowError::io(&format!("failed to create '{relative}'"), &error))?;
        io::copy(&mut entry, &mut file)
            .map_err(|error| WorkflowError::io(&format!("failed to write '{relative}'"), &error))?;

        extracted.push(output_dir.join(&relative));
    }

    Ok(extracted)
}
