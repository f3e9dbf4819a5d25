//! Row-level parsing of weather data files.
//!
//! Two on-disk formats carry the same four observations per row: comma
//! separated `.csv` files with a header line, and whitespace separated
//! `.txt` files whose values wear unit suffixes (`21C`, `93%`). Both are
//! mapped onto [`Reading`]; a malformed row yields a [`RecordError`] so the
//! caller can report it and move on without losing the rest of the file.

use std::path::Path;

use chrono::NaiveDate;
use thiserror::Error;
use weather_core::models::Reading;

// ── Record errors ─────────────────────────────────────────────────────────────

/// Why a single data row could not be turned into a [`Reading`].
///
/// These never escape the ingestion layer as fatal errors; they are logged
/// per record and the row is skipped.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RecordError {
    /// The date field did not match `YYYY-MM-DD`.
    #[error("invalid date \"{0}\": expected YYYY-MM-DD")]
    Date(String),

    /// A measurement field was not a whole number.
    #[error("invalid {field} \"{value}\"")]
    Number {
        field: &'static str,
        value: String,
    },

    /// The row had fewer fields than the format requires.
    #[error("expected at least {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },
}

// ── File formats ──────────────────────────────────────────────────────────────

/// The two data file formats weatherman ingests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Comma separated values with one header line.
    Csv,
    /// Whitespace separated tokens with unit suffixes, no header.
    Txt,
}

impl FileKind {
    /// Classify a path by its extension, case-insensitively.
    /// Returns `None` for anything weatherman does not ingest.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        if ext.eq_ignore_ascii_case("csv") {
            Some(Self::Csv)
        } else if ext.eq_ignore_ascii_case("txt") {
            Some(Self::Txt)
        } else {
            None
        }
    }

    /// Number of leading lines that are headers rather than records.
    pub fn header_lines(self) -> usize {
        match self {
            Self::Csv => 1,
            Self::Txt => 0,
        }
    }

    /// Parse one record line in this format.
    pub fn parse_record(self, raw: &str) -> Result<Reading, RecordError> {
        match self {
            Self::Csv => parse_csv_row(raw),
            Self::Txt => parse_txt_line(raw),
        }
    }
}

// ── Row parsing ───────────────────────────────────────────────────────────────

/// Parse a CSV record: `date,max,min,humidity`, surplus columns ignored.
///
/// Each column is trimmed first, so `2002-02-01, 21, 5, 93` is accepted.
pub fn parse_csv_row(row: &str) -> Result<Reading, RecordError> {
    let columns: Vec<&str> = row.split(',').map(str::trim).collect();
    if columns.len() < 4 {
        return Err(RecordError::FieldCount {
            expected: 4,
            found: columns.len(),
        });
    }

    Ok(Reading {
        date: parse_date(columns[0])?,
        max_temp: parse_number(columns[1], "max temperature")?,
        min_temp: parse_number(columns[2], "min temperature")?,
        humidity: parse_number(columns[3], "humidity")?,
    })
}

/// Parse a TXT record: `date maxC minC humidity%`, surplus tokens ignored.
///
/// The unit suffixes are optional; `21C` and `21` both read as 21.
pub fn parse_txt_line(line: &str) -> Result<Reading, RecordError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < 4 {
        return Err(RecordError::FieldCount {
            expected: 4,
            found: tokens.len(),
        });
    }

    Ok(Reading {
        date: parse_date(tokens[0])?,
        max_temp: parse_suffixed(tokens[1], 'C', "max temperature")?,
        min_temp: parse_suffixed(tokens[2], 'C', "min temperature")?,
        humidity: parse_suffixed(tokens[3], '%', "humidity")?,
    })
}

fn parse_date(value: &str) -> Result<NaiveDate, RecordError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| RecordError::Date(value.to_string()))
}

fn parse_number(value: &str, field: &'static str) -> Result<i32, RecordError> {
    value.parse().map_err(|_| RecordError::Number {
        field,
        value: value.to_string(),
    })
}

/// Strip an optional unit suffix, then parse. Errors cite the unstripped
/// token so diagnostics show what was actually in the file.
fn parse_suffixed(token: &str, unit: char, field: &'static str) -> Result<i32, RecordError> {
    let bare = token.strip_suffix(unit).unwrap_or(token);
    bare.parse().map_err(|_| RecordError::Number {
        field,
        value: token.to_string(),
    })
}
