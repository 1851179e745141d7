//! Lenient calendar-date parsing shared by sorting, buckets, and projections.

use chrono::NaiveDate;

/// Date string formats accepted from the backing service, tried in order.
const DATE_FORMATS: [&str; 6] = [
    "%Y-%m-%d",  // 2024-10-15 (ISO)
    "%m/%d/%Y",  // 10/15/2024
    "%b %d, %Y", // Oct 15, 2024
    "%B %d, %Y", // October 15, 2024
    "%b. %d, %Y", // Oct. 15, 2024
    "%d.%m.%Y",  // 15.10.2024
];

/// Parse raw date text against the accepted format variants.
///
/// Returns `None` for absent or unparseable input; callers treat that as
/// "no date" and degrade per their own sentinel rules.
pub fn parse_date(raw: Option<&str>) -> Option<NaiveDate> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}

/// Whole months from `as_of` until `date`, rounded toward zero.
///
/// Dates in the past yield negative values so they land in the shortest
/// lease-term bucket rather than vanishing from the table.
pub fn months_until(as_of: NaiveDate, date: NaiveDate) -> i64 {
    let days = date.signed_duration_since(as_of).num_days();
    // Calendar-agnostic approximation; bucket edges are coarse enough that
    // a 30.44-day month matches the upstream behavior.
    (days as f64 / 30.44) as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_accepts_known_variants() {
        let expected = NaiveDate::from_ymd_opt(2024, 10, 15).unwrap();
        for raw in [
            "2024-10-15",
            "10/15/2024",
            "Oct 15, 2024",
            "October 15, 2024",
            "Oct. 15, 2024",
            "15.10.2024",
        ] {
            assert_eq!(parse_date(Some(raw)), Some(expected), "variant {raw}");
        }
    }

    #[test]
    fn parse_date_rejects_garbage_and_blanks() {
        assert_eq!(parse_date(None), None);
        assert_eq!(parse_date(Some("")), None);
        assert_eq!(parse_date(Some("   ")), None);
        assert_eq!(parse_date(Some("soon")), None);
        assert_eq!(parse_date(Some("2024-13-40")), None);
    }

    #[test]
    fn months_until_rounds_toward_zero() {
        let as_of = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        let six_months = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert_eq!(months_until(as_of, six_months), 6);
        assert_eq!(months_until(as_of, as_of), 0);

        let past = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert!(months_until(as_of, past) < 0);
    }
}
