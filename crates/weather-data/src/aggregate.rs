//! Aggregation of readings over yearly and monthly windows.
//!
//! Every function filters to its window first and answers `None` when the
//! window holds no readings, so the report layer can print one uniform
//! no-data message instead of a degenerate report.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::Datelike;
use weather_core::models::{DaySummary, Extreme, MonthlyAverages, Reading, YearlyExtremes};

// ── Public API ────────────────────────────────────────────────────────────────

/// The highest temperature, lowest temperature and highest humidity of one
/// calendar year, each with the date it occurred on.
///
/// Ties on the value go to the earliest date; a tie on value and date keeps
/// the reading seen first.
pub fn yearly_extremes(readings: &[Reading], year: i32) -> Option<YearlyExtremes> {
    let in_year: Vec<&Reading> = readings
        .iter()
        .filter(|reading| reading.date.year() == year)
        .collect();
    if in_year.is_empty() {
        return None;
    }

    let highest = largest_by(&in_year, |r| r.max_temp);
    let lowest = smallest_by(&in_year, |r| r.min_temp);
    let most_humid = largest_by(&in_year, |r| r.humidity);

    Some(YearlyExtremes {
        highest: Extreme {
            value: highest.max_temp,
            date: highest.date,
        },
        lowest: Extreme {
            value: lowest.min_temp,
            date: lowest.date,
        },
        most_humid: Extreme {
            value: most_humid.humidity,
            date: most_humid.date,
        },
    })
}

/// Rounded mean of the maximum temperatures, minimum temperatures and
/// humidity values inside one month window.
pub fn monthly_averages(readings: &[Reading], year: i32, month: u32) -> Option<MonthlyAverages> {
    let mut count = 0i64;
    let mut max_sum = 0i64;
    let mut min_sum = 0i64;
    let mut humidity_sum = 0i64;

    for reading in in_month(readings, year, month) {
        count += 1;
        max_sum += i64::from(reading.max_temp);
        min_sum += i64::from(reading.min_temp);
        humidity_sum += i64::from(reading.humidity);
    }
    if count == 0 {
        return None;
    }

    Some(MonthlyAverages {
        avg_max: mean_rounded(max_sum, count),
        avg_min: mean_rounded(min_sum, count),
        avg_humidity: mean_rounded(humidity_sum, count),
    })
}

/// Per-day temperature spans of one month window, in day order.
///
/// Days without readings are absent rather than zero-filled. When several
/// readings cover the same day they collapse into one summary holding the
/// day's overall maximum and minimum.
pub fn daily_series(readings: &[Reading], year: i32, month: u32) -> Option<Vec<DaySummary>> {
    // BTreeMap keys keep the days sorted as they accumulate.
    let mut days: BTreeMap<u32, DaySummary> = BTreeMap::new();

    for reading in in_month(readings, year, month) {
        days.entry(reading.date.day())
            .and_modify(|summary| {
                summary.max_temp = summary.max_temp.max(reading.max_temp);
                summary.min_temp = summary.min_temp.min(reading.min_temp);
            })
            .or_insert(DaySummary {
                date: reading.date,
                max_temp: reading.max_temp,
                min_temp: reading.min_temp,
            });
    }

    if days.is_empty() {
        return None;
    }
    Some(days.into_values().collect())
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn in_month(readings: &[Reading], year: i32, month: u32) -> impl Iterator<Item = &Reading> {
    readings
        .iter()
        .filter(move |reading| reading.date.year() == year && reading.date.month() == month)
}

/// Reading with the largest key; earliest date wins a tie.
/// Callers guarantee `readings` is non-empty.
fn largest_by<'a>(readings: &[&'a Reading], key: impl Fn(&Reading) -> i32) -> &'a Reading {
    let mut best = readings[0];
    for &candidate in &readings[1..] {
        if key(candidate) > key(best) || (key(candidate) == key(best) && candidate.date < best.date)
        {
            best = candidate;
        }
    }
    best
}

/// Reading with the smallest key; earliest date wins a tie.
/// Callers guarantee `readings` is non-empty.
fn smallest_by<'a>(readings: &[&'a Reading], key: impl Fn(&Reading) -> i32) -> &'a Reading {
    let mut best = readings[0];
    for &candidate in &readings[1..] {
        if key(candidate) < key(best) || (key(candidate) == key(best) && candidate.date < best.date)
        {
            best = candidate;
        }
    }
    best
}

/// Mean of `sum` over `count`, rounded half to even, computed exactly on
/// integers. `count` must be positive.
fn mean_rounded(sum: i64, count: i64) -> i32 {
    let quotient = sum.div_euclid(count);
    let remainder = sum.rem_euclid(count);
    let rounded = match (2 * remainder).cmp(&count) {
        Ordering::Less => quotient,
        Ordering::Greater => quotient + 1,
        Ordering::Equal => {
            if quotient % 2 == 0 {
                quotient
            } else {
                quotient + 1
            }
        }
    };
    rounded as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn reading(year: i32, month: u32, day: u32, max: i32, min: i32, humidity: i32) -> Reading {
        Reading {
            date: NaiveDate::from_ymd_opt(year, month, day).unwrap(),
            max_temp: max,
            min_temp: min,
            humidity,
        }
    }

    // ── yearly_extremes ──────────────────────────────────────────────────────

    #[test]
    fn test_yearly_extremes_basic() {
        let readings = [
            reading(2002, 3, 10, 28, 12, 60),
            reading(2002, 6, 23, 45, 29, 35),
            reading(2002, 12, 5, 8, -3, 95),
        ];

        let extremes = yearly_extremes(&readings, 2002).unwrap();
        assert_eq!(extremes.highest.value, 45);
        assert_eq!(extremes.highest.date, NaiveDate::from_ymd_opt(2002, 6, 23).unwrap());
        assert_eq!(extremes.lowest.value, -3);
        assert_eq!(extremes.lowest.date, NaiveDate::from_ymd_opt(2002, 12, 5).unwrap());
        assert_eq!(extremes.most_humid.value, 95);
        assert_eq!(extremes.most_humid.date, NaiveDate::from_ymd_opt(2002, 12, 5).unwrap());
    }

    #[test]
    fn test_yearly_extremes_ignores_other_years() {
        let readings = [
            reading(2001, 7, 1, 50, 30, 20),
            reading(2002, 7, 1, 40, 25, 45),
            reading(2003, 7, 1, 55, 35, 10),
        ];

        let extremes = yearly_extremes(&readings, 2002).unwrap();
        assert_eq!(extremes.highest.value, 40);
        assert_eq!(extremes.lowest.value, 25);
        assert_eq!(extremes.most_humid.value, 45);
    }

    #[test]
    fn test_yearly_extremes_empty_window() {
        let readings = [reading(2002, 7, 1, 40, 25, 45)];
        assert!(yearly_extremes(&readings, 1999).is_none());
        assert!(yearly_extremes(&[], 2002).is_none());
    }

    #[test]
    fn test_yearly_extremes_value_tie_prefers_earlier_date() {
        let tied_late_first = [
            reading(2002, 8, 20, 45, 30, 50),
            reading(2002, 5, 11, 45, 28, 50),
        ];
        let extremes = yearly_extremes(&tied_late_first, 2002).unwrap();
        assert_eq!(extremes.highest.date, NaiveDate::from_ymd_opt(2002, 5, 11).unwrap());
        assert_eq!(extremes.most_humid.date, NaiveDate::from_ymd_opt(2002, 5, 11).unwrap());

        // Input order must not matter for the winner.
        let tied_early_first = [
            reading(2002, 5, 11, 45, 28, 50),
            reading(2002, 8, 20, 45, 30, 50),
        ];
        let extremes = yearly_extremes(&tied_early_first, 2002).unwrap();
        assert_eq!(extremes.highest.date, NaiveDate::from_ymd_opt(2002, 5, 11).unwrap());
    }

    #[test]
    fn test_yearly_extremes_lowest_tie_prefers_earlier_date() {
        let readings = [
            reading(2002, 11, 30, 10, -5, 40),
            reading(2002, 1, 15, 12, -5, 42),
        ];
        let extremes = yearly_extremes(&readings, 2002).unwrap();
        assert_eq!(extremes.lowest.date, NaiveDate::from_ymd_opt(2002, 1, 15).unwrap());
    }

    // ── monthly_averages ─────────────────────────────────────────────────────

    #[test]
    fn test_monthly_averages_exact_division() {
        let readings = [
            reading(2002, 7, 1, 30, 20, 60),
            reading(2002, 7, 2, 34, 22, 70),
            reading(2002, 7, 3, 32, 24, 80),
        ];

        let averages = monthly_averages(&readings, 2002, 7).unwrap();
        assert_eq!(
            averages,
            MonthlyAverages {
                avg_max: 32,
                avg_min: 22,
                avg_humidity: 70,
            }
        );
    }

    #[test]
    fn test_monthly_averages_multiple_readings_per_day() {
        let readings = [
            reading(2002, 2, 1, 21, 5, 93),
            reading(2002, 2, 1, 18, 2, 90),
            reading(2002, 2, 2, 25, 10, 80),
        ];

        let averages = monthly_averages(&readings, 2002, 2).unwrap();
        assert_eq!(averages.avg_max, 21); // 64 / 3 = 21.33
        assert_eq!(averages.avg_min, 6); // 17 / 3 = 5.67
        assert_eq!(averages.avg_humidity, 88); // 263 / 3 = 87.67
    }

    #[test]
    fn test_monthly_averages_round_half_to_even() {
        // 21 + 22 = 43, mean 21.5, rounds up to the even 22.
        let up = [reading(2002, 7, 1, 21, 20, 50), reading(2002, 7, 2, 22, 21, 50)];
        assert_eq!(monthly_averages(&up, 2002, 7).unwrap().avg_max, 22);

        // 20 + 21 = 41, mean 20.5, rounds down to the even 20.
        let down = [reading(2002, 7, 1, 20, 19, 50), reading(2002, 7, 2, 21, 20, 50)];
        assert_eq!(monthly_averages(&down, 2002, 7).unwrap().avg_max, 20);
    }

    #[test]
    fn test_monthly_averages_negative_half_rounds_to_even() {
        // -2 + -3 = -5, mean -2.5, rounds toward the even -2.
        let readings = [
            reading(2004, 1, 1, -2, -8, 70),
            reading(2004, 1, 2, -3, -9, 70),
        ];
        let averages = monthly_averages(&readings, 2004, 1).unwrap();
        assert_eq!(averages.avg_max, -2);
    }

    #[test]
    fn test_monthly_averages_empty_window() {
        let readings = [reading(2002, 7, 1, 30, 20, 60)];
        assert!(monthly_averages(&readings, 2002, 8).is_none());
        assert!(monthly_averages(&readings, 2001, 7).is_none());
    }

    // ── daily_series ─────────────────────────────────────────────────────────

    #[test]
    fn test_daily_series_merges_readings_on_the_same_day() {
        let readings = [
            reading(2002, 2, 1, 21, 5, 93),
            reading(2002, 2, 1, 18, 2, 90),
            reading(2002, 2, 2, 25, 10, 80),
        ];

        let series = daily_series(&readings, 2002, 2).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].date, NaiveDate::from_ymd_opt(2002, 2, 1).unwrap());
        assert_eq!(series[0].max_temp, 21);
        assert_eq!(series[0].min_temp, 2);
        assert_eq!(series[1].max_temp, 25);
        assert_eq!(series[1].min_temp, 10);
    }

    #[test]
    fn test_daily_series_sorted_by_day_regardless_of_input_order() {
        let readings = [
            reading(2002, 2, 14, 20, 8, 50),
            reading(2002, 2, 3, 18, 6, 55),
            reading(2002, 2, 27, 22, 9, 45),
        ];

        let series = daily_series(&readings, 2002, 2).unwrap();
        let days: Vec<u32> = series.iter().map(|s| s.date.day()).collect();
        assert_eq!(days, vec![3, 14, 27]);
    }

    #[test]
    fn test_daily_series_keeps_gaps_absent() {
        let readings = [
            reading(2002, 2, 1, 21, 5, 93),
            reading(2002, 2, 3, 22, 9, 70),
        ];

        let series = daily_series(&readings, 2002, 2).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series[1].date.day(), 3);
    }

    #[test]
    fn test_daily_series_filters_window() {
        let readings = [
            reading(2002, 2, 1, 21, 5, 93),
            reading(2002, 3, 1, 30, 15, 40),
            reading(2001, 2, 1, 19, 4, 88),
        ];

        let series = daily_series(&readings, 2002, 2).unwrap();
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].max_temp, 21);
    }

    #[test]
    fn test_daily_series_empty_window() {
        assert!(daily_series(&[], 2002, 2).is_none());
        let readings = [reading(2002, 2, 1, 21, 5, 93)];
        assert!(daily_series(&readings, 2002, 6).is_none());
    }

    // ── mean_rounded ─────────────────────────────────────────────────────────

    #[test]
    fn test_mean_rounded_halves_go_to_even() {
        assert_eq!(mean_rounded(5, 2), 2); // 2.5
        assert_eq!(mean_rounded(7, 2), 4); // 3.5
        assert_eq!(mean_rounded(-5, 2), -2); // -2.5
        assert_eq!(mean_rounded(-7, 2), -4); // -3.5
    }

    #[test]
    fn test_mean_rounded_ordinary_cases() {
        assert_eq!(mean_rounded(64, 3), 21); // 21.33
        assert_eq!(mean_rounded(17, 3), 6); // 5.67
        assert_eq!(mean_rounded(263, 3), 88); // 87.67
        assert_eq!(mean_rounded(-10, 4), -2); // -2.5 rounds to even -2
        assert_eq!(mean_rounded(9, 3), 3);
    }
}
