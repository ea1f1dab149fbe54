//! Sandboxed file access for the CI log directory and artifact output.
//!
//! Every write resolves a directory handle first and then operates on paths
//! relative to it through `cap-std`, so relative paths taken from untrusted
//! input (such as zip entry names) cannot climb out of that directory.

use std::io::{self, Write};

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs::OpenOptions;
use cap_std::fs_utf8::{Dir, File};

use crate::github::WorkflowError;

/// Opens `path` as a directory, creating it and its parents when missing.
///
/// # Errors
///
/// Returns [`WorkflowError::Io`] when the directory cannot be created or
/// opened.
pub fn open_dir(path: &Utf8Path) -> Result<Dir, WorkflowError> {
    let (root, relative) = if path.is_absolute() {
        let relative = path.strip_prefix("/").map_err(|_| WorkflowError::Io {
            message: format!("failed to normalise directory '{path}'"),
        })?;
        (open_ambient("/")?, relative)
    } else {
        (open_ambient(".")?, path)
    };

    if relative.as_str().is_empty() || relative == Utf8Path::new(".") {
        return Ok(root);
    }

    root.create_dir_all(relative)
        .map_err(|error| WorkflowError::io(&format!("failed to create directory '{path}'"), &error))?;
    root.open_dir(relative)
        .map_err(|error| WorkflowError::io(&format!("failed to open directory '{path}'"), &error))
}

fn open_ambient(path: &str) -> Result<Dir, WorkflowError> {
    Dir::open_ambient_dir(path, ambient_authority())
        .map_err(|error| WorkflowError::io(&format!("failed to open directory '{path}'"), &error))
}

/// Splits a file path into its opened parent directory and file name.
fn open_parent(path: &Utf8Path) -> Result<(Dir, &str), WorkflowError> {
    let parent = path.parent().unwrap_or_else(|| Utf8Path::new("."));
    let file_name = path.file_name().ok_or_else(|| WorkflowError::Io {
        message: format!("invalid file path '{path}': no file name"),
    })?;
    Ok((open_dir(parent)?, file_name))
}

/// Writes `contents` to `path`, replacing any existing file.
///
/// Parent directories are created when needed.
///
/// # Errors
///
/// Returns [`WorkflowError::Io`] when the file cannot be written.
pub fn write_file(path: &Utf8Path, contents: impl AsRef<[u8]>) -> Result<(), WorkflowError> {
    let (dir, file_name) = open_parent(path)?;
    dir.write(file_name, contents)
        .map_err(|error| WorkflowError::io(&format!("failed to write '{path}'"), &error))
}

/// Writes a JSON value to `path` in pretty-printed form.
///
/// # Errors
///
/// Returns [`WorkflowError::Io`] when serialisation or the write fails.
pub fn write_json(path: &Utf8Path, value: &serde_json::Value) -> Result<(), WorkflowError> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|error| WorkflowError::io(&format!("failed to serialise '{path}'"), &error))?;
    write_file(path, rendered)
}

/// Reads `path` as UTF-8, returning `None` when the file does not exist.
///
/// # Errors
///
/// Returns [`WorkflowError::Io`] for failures other than a missing file.
pub fn read_optional(path: &Utf8Path) -> Result<Option<String>, WorkflowError> {
    let parent = path.parent().unwrap_or_else(|| Utf8Path::new("."));
    let parent = if parent.as_str().is_empty() {
        Utf8Path::new(".")
    } else {
        parent
    };
    let file_name = path.file_name().ok_or_else(|| WorkflowError::Io {
        message: format!("invalid file path '{path}': no file name"),
    })?;

    let dir = match Dir::open_ambient_dir(parent, ambient_authority()) {
        Ok(dir) => dir,
        Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(error) => {
            return Err(WorkflowError::io(&format!("failed to open '{parent}'"), &error));
        }
    };

    match dir.read_to_string(file_name) {
        Ok(contents) => Ok(Some(contents)),
        Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(error) => Err(WorkflowError::io(&format!("failed to read '{path}'"), &error)),
    }
}

/// Append-only line log.
#[derive(Debug)]
pub struct LineLog {
    path: Utf8PathBuf,
    file: File,
}

impl LineLog {
    /// Opens `path` for appending, creating it and its parents when needed.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::Io`] when the file cannot be opened.
    pub fn open(path: &Utf8Path) -> Result<Self, WorkflowError> {
        let (dir, file_name) = open_parent(path)?;
        let file = dir
            .open_with(file_name, OpenOptions::new().create(true).append(true))
            .map_err(|error| WorkflowError::io(&format!("failed to open log '{path}'"), &error))?;
        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }

    /// Appends one line and flushes it.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::Io`] when the write fails.
    pub fn append_line(&mut self, line: &str) -> Result<(), WorkflowError> {
        writeln!(self.file, "{line}")
            .and_then(|()| self.file.flush())
            .map_err(|error| {
                WorkflowError::io(&format!("failed to append to '{}'", self.path), &error)
            })
    }

    /// Path of the log file.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        self.path.as_path()
    }
}
