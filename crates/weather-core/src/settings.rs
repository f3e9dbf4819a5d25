use clap::Parser;
use std::path::PathBuf;

use crate::models::MonthYear;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Weather reports from historical daily observation files
#[derive(Parser, Debug, Clone)]
#[command(
    name = "weatherman",
    about = "Weather reports from historical daily observation files",
    version
)]
pub struct Settings {
    /// Directory containing the weather data files
    pub data_dir: PathBuf,

    /// Report the temperature and humidity extremes of this year
    #[arg(short = 'e', long = "year", value_name = "YYYY")]
    pub year: Option<i32>,

    /// Report the average temperatures and humidity of this month
    #[arg(short = 'a', long = "average", value_name = "YYYY/MM")]
    pub average: Option<MonthYear>,

    /// Chart the daily temperature spread of this month
    #[arg(short = 'c', long = "chart", value_name = "YYYY/MM")]
    pub chart: Option<MonthYear>,

    /// When to color the chart bars
    #[arg(long, default_value = "auto", value_parser = ["auto", "always", "never"])]
    pub color: String,

    /// Logging level
    #[arg(long, default_value = "WARNING", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"])]
    pub log_level: String,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Settings {
    /// Whether any report was requested at all. A run without report flags
    /// still validates and ingests the data directory, it just prints nothing.
    pub fn wants_report(&self) -> bool {
        self.year.is_some() || self.average.is_some() || self.chart.is_some()
    }

    /// Logging level after applying the `--debug` override.
    pub fn effective_log_level(&self) -> &str {
        if self.debug {
            "DEBUG"
        } else {
            &self.log_level
        }
    }
}
