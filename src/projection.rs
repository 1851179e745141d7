//! Per-record display projections.
//!
//! Everything here is pure and total: missing or malformed input degrades to
//! a sentinel, never a panic or an error.

use chrono::NaiveDate;

use crate::constants::format::{CURRENCY_PREFIX, CURRENCY_SUFFIX, MAX_INITIALS, NOT_AVAILABLE};
use crate::data::SeriesPoint;
use crate::dates::parse_date;

/// Value at the maximum parseable date in a series.
///
/// Points with unparseable dates are skipped. On equal dates the last point
/// in original order wins. Empty series, or series with no parseable dates,
/// yield `None`.
pub fn latest_of_series(series: &[SeriesPoint]) -> Option<f64> {
    let mut best: Option<(NaiveDate, f64)> = None;
    for point in series {
        let Some(date) = parse_date(Some(&point.date)) else {
            continue;
        };
        match best {
            Some((best_date, _)) if date < best_date => {}
            _ => best = Some((date, point.value)),
        }
    }
    best.map(|(_, value)| value)
}

/// Percent change from the earliest to the latest parseable point.
///
/// Needs at least two parseable points and a nonzero baseline; otherwise
/// `None`.
pub fn growth_percent(series: &[SeriesPoint]) -> Option<f64> {
    let mut earliest: Option<(NaiveDate, f64)> = None;
    let mut latest: Option<(NaiveDate, f64)> = None;
    let mut parseable = 0usize;
    for point in series {
        let Some(date) = parse_date(Some(&point.date)) else {
            continue;
        };
        parseable += 1;
        match earliest {
            Some((first_date, _)) if date >= first_date => {}
            _ => earliest = Some((date, point.value)),
        }
        match latest {
            Some((last_date, _)) if date < last_date => {}
            _ => latest = Some((date, point.value)),
        }
    }
    if parseable < 2 {
        return None;
    }
    let (_, first) = earliest?;
    let (_, last) = latest?;
    if first == 0.0 {
        return None;
    }
    Some((last - first) / first * 100.0)
}

/// Format a percentage with exactly two decimals and a trailing `%`.
pub fn format_percent(value: Option<f64>) -> String {
    match value {
        Some(value) => format!("{value:.2}%"),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Format a dollar amount as thousands: `+$1,250K`.
///
/// The amount is divided by 1000 and rounded to whole thousands before
/// grouping.
pub fn format_thousands_currency(amount: Option<f64>) -> String {
    let Some(amount) = amount else {
        return NOT_AVAILABLE.to_string();
    };
    let thousands = (amount / 1000.0).round() as i64;
    format!(
        "{CURRENCY_PREFIX}{}{CURRENCY_SUFFIX}",
        group_thousands(thousands)
    )
}

/// Up to two uppercase initials from space-separated words in a name.
///
/// Used as the avatar fallback when no logo image is available.
pub fn initials(display_name: &str) -> String {
    display_name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(MAX_INITIALS)
        .flat_map(char::to_uppercase)
        .collect()
}

fn group_thousands(value: i64) -> String {
    let negative = value < 0;
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if negative {
        format!("-{grouped}")
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(date: &str, value: f64) -> SeriesPoint {
        SeriesPoint {
            date: date.to_string(),
            value,
        }
    }

    #[test]
    fn latest_of_series_picks_max_date() {
        let series = vec![
            point("2024-01-01", 10.0),
            point("2024-06-01", 30.0),
            point("2024-03-01", 20.0),
        ];
        assert_eq!(latest_of_series(&series), Some(30.0));
    }

    #[test]
    fn latest_of_series_tie_takes_last_in_order() {
        let series = vec![point("2024-06-01", 1.0), point("2024-06-01", 2.0)];
        assert_eq!(latest_of_series(&series), Some(2.0));
    }

    #[test]
    fn latest_of_series_skips_unparseable_and_handles_empty() {
        assert_eq!(latest_of_series(&[]), None);
        let junk = vec![point("soon", 5.0)];
        assert_eq!(latest_of_series(&junk), None);
        let mixed = vec![point("garbage", 9.0), point("2024-01-01", 4.0)];
        assert_eq!(latest_of_series(&mixed), Some(4.0));
    }

    #[test]
    fn growth_percent_spans_earliest_to_latest() {
        let series = vec![
            point("2024-01-01", 200.0),
            point("2024-03-01", 180.0),
            point("2024-06-01", 250.0),
        ];
        assert_eq!(growth_percent(&series), Some(25.0));
    }

    #[test]
    fn growth_percent_degrades_on_thin_or_zero_baseline_series() {
        assert_eq!(growth_percent(&[]), None);
        assert_eq!(growth_percent(&[point("2024-01-01", 5.0)]), None);
        let zero_base = vec![point("2024-01-01", 0.0), point("2024-02-01", 5.0)];
        assert_eq!(growth_percent(&zero_base), None);
    }

    #[test]
    fn format_percent_has_two_decimals_and_sentinel() {
        assert_eq!(format_percent(Some(12.3456)), "12.35%");
        assert_eq!(format_percent(Some(0.0)), "0.00%");
        assert_eq!(format_percent(None), "--");
    }

    #[test]
    fn format_thousands_currency_groups_and_degrades() {
        assert_eq!(format_thousands_currency(Some(2_500_000.0)), "+$2,500K");
        assert_eq!(format_thousands_currency(Some(950.0)), "+$1K");
        assert_eq!(format_thousands_currency(Some(1_234_567_000.0)), "+$1,234,567K");
        assert_eq!(format_thousands_currency(None), "--");
    }

    #[test]
    fn initials_cap_at_two_and_uppercase() {
        assert_eq!(initials("acme robotics inc"), "AR");
        assert_eq!(initials("Solo"), "S");
        assert_eq!(initials(""), "");
        assert_eq!(initials("  spaced   out  "), "SO");
    }
}
