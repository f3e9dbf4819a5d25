use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

use crate::error::WeatherError;

/// One day of weather observations from a single data file row.
///
/// Temperatures are whole degrees Celsius, humidity a whole percentage.
/// Several readings may exist for the same calendar date when files overlap;
/// the aggregation layer decides how duplicates combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reading {
    /// Calendar date of the observation.
    pub date: NaiveDate,
    /// Highest temperature recorded that day, in °C.
    pub max_temp: i32,
    /// Lowest temperature recorded that day, in °C.
    pub min_temp: i32,
    /// Mean relative humidity that day, in percent.
    pub humidity: i32,
}

/// A `YYYY/MM` month window selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthYear {
    /// Calendar year.
    pub year: i32,
    /// Month number, always in `1..=12`.
    pub month: u32,
}

impl FromStr for MonthYear {
    type Err = WeatherError;

    /// Parse a `YYYY/MM` argument such as `2011/3` or `2011/03`.
    ///
    /// # Examples
    ///
    /// ```
    /// use weather_core::models::MonthYear;
    ///
    /// let window: MonthYear = "2011/3".parse().unwrap();
    /// assert_eq!(window, MonthYear { year: 2011, month: 3 });
    /// assert!("2011-03".parse::<MonthYear>().is_err());
    /// assert!("2011/13".parse::<MonthYear>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || WeatherError::MonthFormat(s.to_string());
        let (year, month) = s.split_once('/').ok_or_else(invalid)?;
        let year: i32 = year.trim().parse().map_err(|_| invalid())?;
        let month: u32 = month.trim().parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&month) {
            return Err(invalid());
        }
        Ok(Self { year, month })
    }
}

impl fmt::Display for MonthYear {
    /// Render the window back in its CLI form, with a zero-padded month.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{:02}", self.year, self.month)
    }
}

/// A single record value paired with the date it was observed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extreme {
    /// The extreme measurement itself (°C or percent, depending on context).
    pub value: i32,
    /// Date on which the extreme occurred.
    pub date: NaiveDate,
}

/// The three record observations of one calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearlyExtremes {
    /// Highest maximum temperature of the year.
    pub highest: Extreme,
    /// Lowest minimum temperature of the year.
    pub lowest: Extreme,
    /// Highest mean humidity of the year.
    pub most_humid: Extreme,
}

/// Rounded mean observations over one month window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyAverages {
    /// Mean of the daily maximum temperatures, in °C.
    pub avg_max: i32,
    /// Mean of the daily minimum temperatures, in °C.
    pub avg_min: i32,
    /// Mean of the daily humidity values, in percent.
    pub avg_humidity: i32,
}

/// Temperature span of one day within a month window, for charting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaySummary {
    /// Calendar date of the day.
    pub date: NaiveDate,
    /// Highest maximum temperature reported for the day, in °C.
    pub max_temp: i32,
    /// Lowest minimum temperature reported for the day, in °C.
    pub min_temp: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── MonthYear parsing ──────────────────────────────────────────────────

    #[test]
    fn test_month_year_parses_padded_and_bare_months() {
        let padded: MonthYear = "2002/07".parse().unwrap();
        let bare: MonthYear = "2002/7".parse().unwrap();
        assert_eq!(padded, MonthYear { year: 2002, month: 7 });
        assert_eq!(padded, bare);
    }

    #[test]
    fn test_month_year_rejects_wrong_separator() {
        assert!("2002-07".parse::<MonthYear>().is_err());
        assert!("200207".parse::<MonthYear>().is_err());
    }

    #[test]
    fn test_month_year_rejects_out_of_range_months() {
        assert!("2002/0".parse::<MonthYear>().is_err());
        assert!("2002/13".parse::<MonthYear>().is_err());
    }

    #[test]
    fn test_month_year_rejects_non_numeric_parts() {
        assert!("two thousand two/7".parse::<MonthYear>().is_err());
        assert!("2002/July".parse::<MonthYear>().is_err());
        assert!("2002/7/5".parse::<MonthYear>().is_err());
        assert!("".parse::<MonthYear>().is_err());
    }

    #[test]
    fn test_month_year_display_pads_month() {
        let window = MonthYear { year: 2011, month: 3 };
        assert_eq!(window.to_string(), "2011/03");
        let window = MonthYear { year: 2011, month: 12 };
        assert_eq!(window.to_string(), "2011/12");
    }
}
