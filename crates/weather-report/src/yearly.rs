//! The yearly extremes report.

use std::io::Write;

use weather_core::error::Result;
use weather_core::formatting::format_month_day;
use weather_core::models::YearlyExtremes;

/// Write the yearly extremes report for `year` onto `out`.
///
/// `None` means the year had no readings and prints the no-data line
/// instead of a report.
pub fn render(out: &mut impl Write, extremes: Option<&YearlyExtremes>, year: i32) -> Result<()> {
    let extremes = match extremes {
        Some(extremes) => extremes,
        None => {
            writeln!(out, "No data found for year {}.", year)?;
            return Ok(());
        }
    };

    writeln!(out)?;
    writeln!(out, "Year {} Report:", year)?;
    writeln!(
        out,
        "Highest: {}C on {}",
        extremes.highest.value,
        format_month_day(extremes.highest.date)
    )?;
    writeln!(
        out,
        "Lowest: {}C on {}",
        extremes.lowest.value,
        format_month_day(extremes.lowest.date)
    )?;
    writeln!(
        out,
        "Humidity: {}% on {}",
        extremes.most_humid.value,
        format_month_day(extremes.most_humid.date)
    )?;
    Ok(())
}
