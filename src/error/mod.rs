//! Error handling for the matchup pipeline.
//!
//! Only failures that abort a run live here. Per-object outcomes such as an
//! ambiguous parent are not errors; see [`crate::algorithm::matching::SkipReason`].

pub mod util;

use std::io;
use std::path::{Path, PathBuf};

/// Specialized error type for loading inputs and writing outputs
#[derive(Debug, thiserror::Error)]
pub enum MatchupError {
    /// Error opening, reading or writing a file
    #[error("IO error on {}: {source}", path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Malformed CSV in an extract or registry file
    #[error("CSV error in {}: {source}", path.display())]
    CsvError {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Malformed OSM XML
    #[error("XML error: {0}")]
    XmlError(#[from] quick_xml::Error),

    /// Malformed attribute inside OSM XML
    #[error("XML attribute error: {0}")]
    XmlAttributeError(#[from] quick_xml::events::attributes::AttrError),

    /// JSON (de)serialization of config or match output
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Configuration that cannot drive a run
    #[error("Config error: {0}")]
    ConfigError(String),

    /// Unrecognised category name or registry code
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}

impl MatchupError {
    /// Attach a path to an IO error
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::IoError {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Attach a path to a CSV error
    pub fn csv(path: impl AsRef<Path>, source: csv::Error) -> Self {
        Self::CsvError {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

/// Result type for matchup operations
pub type Result<T> = std::result::Result<T, MatchupError>;
