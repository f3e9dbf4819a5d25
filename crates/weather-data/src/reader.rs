//! Weather data file discovery and loading.
//!
//! Scans a data directory for `.csv` and `.txt` observation files and turns
//! them into a single date-sorted `Vec<Reading>`. A row that fails to parse
//! is logged and skipped; a file that cannot be read at all aborts the run.

use std::io::BufRead;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use weather_core::error::{Result, WeatherError};
use weather_core::models::Reading;

use crate::parser::FileKind;

// ── Public API ────────────────────────────────────────────────────────────────

/// Find all weather data files directly inside `data_dir`, sorted by path.
///
/// Only the directory itself is scanned; subdirectories are ignored, as is
/// every file whose extension is not a recognised [`FileKind`].
pub fn find_weather_files(data_dir: &Path) -> Vec<PathBuf> {
    if !data_dir.exists() {
        warn!("Data directory does not exist: {}", data_dir.display());
        return Vec::new();
    }

    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(data_dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| FileKind::from_path(path).is_some())
        .collect();

    files.sort();
    files
}

/// Load every reading from every recognised file under `data_dir`, sorted
/// by date.
///
/// Readings with the same date keep their file discovery order, so output
/// is deterministic for a given directory. Malformed rows are reported via
/// `tracing` and dropped; only an unreadable file is a hard error.
pub fn load_readings(data_dir: &Path) -> Result<Vec<Reading>> {
    let files = find_weather_files(data_dir);
    if files.is_empty() {
        warn!("No weather data files found in {}", data_dir.display());
        return Ok(Vec::new());
    }

    let mut readings: Vec<Reading> = Vec::new();
    for path in &files {
        let kind = match FileKind::from_path(path) {
            Some(kind) => kind,
            None => continue,
        };
        readings.extend(read_file(path, kind)?);
    }

    // Stable sort; same-date readings stay in discovery order.
    readings.sort_by_key(|reading| reading.date);

    debug!(
        "Collected {} readings from {} files",
        readings.len(),
        files.len()
    );
    Ok(readings)
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Read one file, skipping its header lines and any rows that fail to parse.
fn read_file(path: &Path, kind: FileKind) -> Result<Vec<Reading>> {
    let file = std::fs::File::open(path).map_err(|e| file_read_error(path, e))?;
    let reader = std::io::BufReader::new(file);
    let mut lines = reader.lines();

    // Header lines are discarded unconditionally, whatever they contain.
    for _ in 0..kind.header_lines() {
        match lines.next() {
            Some(result) => {
                result.map_err(|e| file_read_error(path, e))?;
            }
            None => return Ok(Vec::new()),
        }
    }

    let mut readings: Vec<Reading> = Vec::new();
    let mut rows_read = 0u64;
    let mut rows_skipped = 0u64;

    for line_result in lines {
        let line = line_result.map_err(|e| file_read_error(path, e))?;
        let record = line.trim();
        if record.is_empty() {
            continue;
        }
        rows_read += 1;
        match kind.parse_record(record) {
            Ok(reading) => readings.push(reading),
            Err(err) => {
                rows_skipped += 1;
                warn!("{}: skipping record \"{}\": {}", path.display(), record, err);
            }
        }
    }

    debug!(
        "File {}: {} rows read, {} parsed, {} skipped",
        path.display(),
        rows_read,
        readings.len(),
        rows_skipped
    );
    Ok(readings)
}

fn file_read_error(path: &Path, source: std::io::Error) -> WeatherError {
    WeatherError::FileRead {
        path: path.to_path_buf(),
        source,
    }
}
