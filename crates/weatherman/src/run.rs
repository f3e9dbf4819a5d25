//! Report generation over the loaded readings.
//!
//! One sink, fixed order: yearly extremes, then monthly averages, then the
//! daily chart. A window with no data prints its no-data line and the
//! remaining reports still run.

use std::io::Write;

use weather_core::error::Result;
use weather_core::models::Reading;
use weather_core::settings::Settings;
use weather_data::aggregate;
use weather_report::style::Styler;
use weather_report::{chart, monthly, yearly};

/// Render every report requested in `settings` onto `out`.
pub fn generate_reports(
    settings: &Settings,
    readings: &[Reading],
    out: &mut impl Write,
) -> Result<()> {
    if let Some(year) = settings.year {
        let extremes = aggregate::yearly_extremes(readings, year);
        yearly::render(out, extremes.as_ref(), year)?;
    }

    if let Some(window) = settings.average {
        let averages = aggregate::monthly_averages(readings, window.year, window.month);
        monthly::render(out, averages.as_ref(), window)?;
    }

    if let Some(window) = settings.chart {
        let series = aggregate::daily_series(readings, window.year, window.month);
        let styler = Styler::from_choice(&settings.color);
        chart::render(out, series.as_deref(), window, &styler)?;
    }

    Ok(())
}
