//! The monthly averages report.

use std::io::Write;

use weather_core::error::Result;
use weather_core::models::{MonthYear, MonthlyAverages};

/// Write the monthly averages report for `window` onto `out`.
///
/// `None` means the month had no readings and prints the no-data line
/// instead of a report.
pub fn render(out: &mut impl Write, averages: Option<&MonthlyAverages>, window: MonthYear) -> Result<()> {
    let averages = match averages {
        Some(averages) => averages,
        None => {
            writeln!(out, "No data found for {}.", window)?;
            return Ok(());
        }
    };

    writeln!(out)?;
    writeln!(out, "Monthly Averages for {}:", window)?;
    writeln!(out, "Highest Average: {}C", averages.avg_max)?;
    writeln!(out, "Lowest Average: {}C", averages.avg_min)?;
    writeln!(out, "Average Mean Humidity: {}%", averages.avg_humidity)?;
    Ok(())
}
