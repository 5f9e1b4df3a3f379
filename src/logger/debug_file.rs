//! Debug dump file on disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the dump file inside the debug directory.
pub const DEBUG_FILE_NAME: &str = "debug.log";

/// Errors while writing a debug dump.
#[derive(Debug, Error)]
pub enum DumpError {
    /// The debug directory could not be created.
    #[error("Could not create debug folder {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The dump file could not be written.
    #[error("Could not write debug file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result type for debug dump operations.
pub type DumpResult<T> = Result<T, DumpError>;

/// Create `dir` (with intermediates) and overwrite `dir/debug.log` with `contents`.
pub fn write_debug_file(dir: &Path, contents: &str) -> DumpResult<PathBuf> {
    fs::create_dir_all(dir).map_err(|source| DumpError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(DEBUG_FILE_NAME);
    fs::write(&path, contents).map_err(|source| DumpError::Write {
        path: path.clone(),
        source,
    })?;

    tracing::debug!(path = ?path, bytes = contents.len(), "Debug dump written");
    Ok(path)
}
