//! Error types for an import run.

use std::path::PathBuf;

use habitica::HabiticaError;
use thiserror::Error;

/// Failures that end an import run.
///
/// Rejected tag or task requests are not errors at this level; they are
/// recovered inside the loop and reported through the run summary.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The input file does not exist
    #[error("File not found: {}", .0.display())]
    MissingInput(PathBuf),

    /// The input file exists but could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input file is not a valid task export
    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Communication with the remote service broke down
    #[error("Habitica request failed: {0}")]
    Service(#[from] HabiticaError),
}
