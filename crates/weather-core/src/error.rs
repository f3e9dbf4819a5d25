use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors produced by the weatherman pipeline.
///
/// Malformed data rows are deliberately not represented here: they are
/// reported and skipped inside the ingestion layer so that one bad record
/// never aborts a whole run.
#[derive(Error, Debug)]
pub enum WeatherError {
    /// The data directory named on the command line does not exist.
    #[error("Data directory '{0}' does not exist.")]
    DataDirNotFound(PathBuf),

    /// A data file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A month argument did not match the `YYYY/MM` syntax.
    #[error("Invalid month format: {0} (expected YYYY/MM)")]
    MonthFormat(String),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the weatherman crates.
pub type Result<T> = std::result::Result<T, WeatherError>;
