use chrono::NaiveDate;

use crate::models::MonthYear;

/// Format a date as the full month name followed by the zero-padded day,
/// the way extremes are cited in the yearly report.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use weather_core::formatting::format_month_day;
///
/// let date = NaiveDate::from_ymd_opt(2002, 6, 23).unwrap();
/// assert_eq!(format_month_day(date), "June 23");
///
/// let date = NaiveDate::from_ymd_opt(2002, 6, 5).unwrap();
/// assert_eq!(format_month_day(date), "June 05");
/// ```
pub fn format_month_day(date: NaiveDate) -> String {
    date.format("%B %d").to_string()
}

/// Format a month window as the full month name followed by the year,
/// used as the chart heading.
///
/// # Examples
///
/// ```
/// use weather_core::formatting::month_year_heading;
/// use weather_core::models::MonthYear;
///
/// let window = MonthYear { year: 2011, month: 3 };
/// assert_eq!(month_year_heading(window), "March 2011");
/// ```
pub fn month_year_heading(window: MonthYear) -> String {
    // Months outside 1..=12 cannot occur through `MonthYear::from_str`, but
    // a literal could carry one; fall back to the numeric form rather than
    // panic inside a formatter.
    match NaiveDate::from_ymd_opt(window.year, window.month, 1) {
        Some(first_of_month) => first_of_month.format("%B %Y").to_string(),
        None => window.to_string(),
    }
}
