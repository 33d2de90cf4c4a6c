//! Utility functions for error handling
//!
//! Opening input files goes through here so that a missing extract or
//! registry file names both the path and what it was needed for.

use std::fs;
use std::io;
use std::path::Path;

use log::debug;

use crate::error::{MatchupError, Result};

/// Open a file for reading, failing with the path and purpose attached
///
/// # Arguments
/// * `path` - The path to the file to open
/// * `purpose` - Why the file is being opened (for error context)
pub fn safe_open_file(path: &Path, purpose: &str) -> Result<fs::File> {
    if !path.is_file() {
        return Err(MatchupError::io(
            path,
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("file not found, needed for: {purpose}"),
            ),
        ));
    }

    debug!("Opening {} for {purpose}", path.display());
    fs::File::open(path).map_err(|e| {
        let context = match e.kind() {
            io::ErrorKind::PermissionDenied => {
                format!("permission denied, needed for: {purpose}")
            }
            _ => format!("failed to open file for: {purpose}"),
        };
        MatchupError::io(path, io::Error::new(e.kind(), context))
    })
}

/// Create (or truncate) a file for writing an output
pub fn safe_create_file(path: &Path, purpose: &str) -> Result<fs::File> {
    debug!("Creating {} for {purpose}", path.display());
    fs::File::create(path).map_err(|e| MatchupError::io(path, e))
}

/// Check that a directory exists before reading several files from it
pub fn validate_directory(path: &Path, purpose: &str) -> Result<()> {
    if !path.is_dir() {
        return Err(MatchupError::io(
            path,
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("directory not found, needed for: {purpose}"),
            ),
        ));
    }
    Ok(())
}
