//! The daily temperature bar chart.
//!
//! Two lines per day: the maximum temperature bar with high emphasis, then
//! the minimum temperature bar with low emphasis. Bar length is one `+` per
//! degree Celsius.

use std::io::Write;

use weather_core::error::Result;
use weather_core::formatting::month_year_heading;
use weather_core::models::{DaySummary, MonthYear};

use crate::style::{Emphasis, Styler};

/// Write the daily temperature chart for `window` onto `out`.
///
/// `None` means the month had no readings and prints the no-data line
/// instead of a chart.
pub fn render(
    out: &mut impl Write,
    series: Option<&[DaySummary]>,
    window: MonthYear,
    styler: &Styler,
) -> Result<()> {
    let series = match series {
        Some(series) => series,
        None => {
            writeln!(out, "No data found for {}.", window)?;
            return Ok(());
        }
    };

    writeln!(out)?;
    writeln!(out, "{}", month_year_heading(window))?;
    for day in series {
        let label = day.date.format("%d").to_string();
        writeln!(
            out,
            "{} {} {}C",
            label,
            styler.paint(&bar(day.max_temp), Emphasis::High),
            day.max_temp
        )?;
        writeln!(
            out,
            "{} {} {}C",
            label,
            styler.paint(&bar(day.min_temp), Emphasis::Low),
            day.min_temp
        )?;
    }
    Ok(())
}

/// One `+` per degree; zero and sub-zero temperatures get an empty bar.
fn bar(temp: i32) -> String {
    "+".repeat(usize::try_from(temp).unwrap_or(0))
}
