use std::path::Path;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use weather_core::error::{Result, WeatherError};

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Map a CLI log-level name to a tracing filter directive.
///
/// Unrecognised names fall back to `warn`, the default level, so parse
/// diagnostics stay visible.
fn level_directive(log_level: &str) -> &'static str {
    match log_level.to_uppercase().as_str() {
        "DEBUG" => "debug",
        "INFO" => "info",
        "ERROR" | "CRITICAL" => "error",
        _ => "warn",
    }
}

/// Initialise the global `tracing` subscriber.
///
/// All diagnostics go to stderr; stdout belongs to the reports alone, so
/// output stays pipeable.
pub fn setup_logging(log_level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(level_directive(log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let subscriber = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .init();

    Ok(())
}

// ── Data directory check ───────────────────────────────────────────────────────

/// Verify the data directory exists before any ingestion starts.
///
/// A path that exists but is not a directory fails the same way as a
/// missing one.
pub fn check_data_dir(path: &Path) -> Result<()> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(WeatherError::DataDirNotFound(path.to_path_buf()))
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
