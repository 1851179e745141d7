use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::constants::filter::{
    BUCKET_0_6_MAX, BUCKET_13_18_MAX, BUCKET_13_18_MIN, BUCKET_7_12_MAX, BUCKET_7_12_MIN,
    MISSING_TERM_MONTHS,
};
use crate::data::Record;
use crate::dates::{months_until, parse_date};
use crate::selection::SelectionState;
use crate::types::CategoryName;

/// Mutually exclusive lease-term-remaining buckets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TermBucket {
    /// Six months or less remaining (including expired leases).
    #[serde(rename = "0-6")]
    Months0To6,
    /// Seven through twelve months remaining, inclusive.
    #[serde(rename = "7-12")]
    Months7To12,
    /// Thirteen through eighteen months remaining, inclusive.
    #[serde(rename = "13-18")]
    Months13To18,
    /// More than eighteen months remaining, including records with no
    /// parseable expiration ("no urgency").
    #[serde(rename = "18+")]
    Over18Months,
}

impl TermBucket {
    /// Whether a months-remaining value falls inside this bucket.
    pub fn contains(self, months: i64) -> bool {
        match self {
            TermBucket::Months0To6 => months <= BUCKET_0_6_MAX,
            TermBucket::Months7To12 => (BUCKET_7_12_MIN..=BUCKET_7_12_MAX).contains(&months),
            TermBucket::Months13To18 => (BUCKET_13_18_MIN..=BUCKET_13_18_MAX).contains(&months),
            TermBucket::Over18Months => months > BUCKET_13_18_MAX,
        }
    }
}

/// Composite filter specification for the record table.
///
/// Each dimension is an independent predicate; a record passes the spec iff
/// every active dimension passes (logical AND). Inactive dimensions (empty
/// search, no checked categories, no bucket, empty selection) always pass.
/// Specs are immutable values: every user action goes through a `with_*`
/// reducer that returns a new spec.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterSpec {
    /// Free-text query matched against name, sector, city, and state.
    pub search_text: String,
    /// Closed map of category options to their checked state.
    pub categories: IndexMap<CategoryName, bool>,
    /// Active lease-term bucket, if any.
    pub term_bucket: Option<TermBucket>,
    /// Hierarchical location selection.
    pub selected_locations: SelectionState,
}

impl FilterSpec {
    /// Spec with a closed category option list, all unchecked.
    pub fn with_category_options<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            categories: options.into_iter().map(|name| (name.into(), false)).collect(),
            ..Self::default()
        }
    }

    /// New spec with updated search text.
    pub fn with_search_text(&self, text: impl Into<String>) -> Self {
        Self {
            search_text: text.into(),
            ..self.clone()
        }
    }

    /// New spec with one category's checked state flipped.
    ///
    /// Unknown category names are ignored; the option list is closed.
    pub fn with_category_toggled(&self, name: &str) -> Self {
        let mut next = self.clone();
        if let Some(checked) = next.categories.get_mut(name) {
            *checked = !*checked;
        }
        next
    }

    /// New spec with the term bucket replaced (buckets are mutually
    /// exclusive); passing the currently active bucket clears it.
    pub fn with_term_bucket(&self, bucket: Option<TermBucket>) -> Self {
        let next_bucket = if bucket == self.term_bucket { None } else { bucket };
        Self {
            term_bucket: next_bucket,
            ..self.clone()
        }
    }

    /// New spec with the location selection replaced.
    pub fn with_selection(&self, selection: SelectionState) -> Self {
        Self {
            selected_locations: selection,
            ..self.clone()
        }
    }

    /// New spec with every dimension back to its inactive state, keeping the
    /// closed category option list.
    pub fn cleared(&self) -> Self {
        Self {
            search_text: String::new(),
            categories: self
                .categories
                .keys()
                .map(|name| (name.clone(), false))
                .collect(),
            term_bucket: None,
            selected_locations: SelectionState::new(),
        }
    }

    /// Checked category names in option order.
    pub fn checked_categories(&self) -> impl Iterator<Item = &CategoryName> {
        self.categories
            .iter()
            .filter_map(|(name, checked)| checked.then_some(name))
    }

    /// Evaluate all predicates against one record.
    ///
    /// `as_of` anchors the lease-term bucket math; predicates are otherwise
    /// pure functions of the record and spec. Evaluation short-circuits but
    /// the result never depends on predicate order.
    pub fn matches(&self, record: &Record, as_of: NaiveDate) -> bool {
        self.matches_search(record)
            && self.matches_categories(record)
            && self.matches_term_bucket(record, as_of)
            && self.selected_locations.matches_record(record)
    }

    /// Search predicate: case-insensitive substring over name, sector, city,
    /// and state, in that order; any hit passes. The query is matched as
    /// typed, whitespace included.
    pub fn matches_search(&self, record: &Record) -> bool {
        if self.search_text.is_empty() {
            return true;
        }
        let query = self.search_text.to_lowercase();
        record.display_name.to_lowercase().contains(&query)
            || record.sector_lower().contains(&query)
            || record.city_lower().contains(&query)
            || record.state_lower().contains(&query)
    }

    /// Categorical predicate: zero checked passes; otherwise the record's
    /// sector text must contain at least one checked name as a
    /// case-insensitive substring.
    pub fn matches_categories(&self, record: &Record) -> bool {
        let mut checked = self.checked_categories().peekable();
        if checked.peek().is_none() {
            return true;
        }
        let sector = record.sector_lower();
        checked.any(|name| sector.contains(&name.to_lowercase()))
    }

    /// Term-bucket predicate: no active bucket passes; records with no
    /// parseable expiration count as far-future.
    pub fn matches_term_bucket(&self, record: &Record, as_of: NaiveDate) -> bool {
        let Some(bucket) = self.term_bucket else {
            return true;
        };
        bucket.contains(months_remaining(record, as_of))
    }
}

/// Months of lease term remaining for `record` relative to `as_of`.
///
/// Missing or unparseable expirations map to a very large value so they read
/// as "no urgency" in both bucket filters and ascending-urgency sorts.
pub fn months_remaining(record: &Record, as_of: NaiveDate) -> i64 {
    match parse_date(record.lease_expiration.as_deref()) {
        Some(date) => months_until(as_of, date),
        None => MISSING_TERM_MONTHS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::fixtures::AS_OF;
    use crate::data::{Location, RecordKind};

    fn as_of() -> NaiveDate {
        AS_OF.parse().unwrap()
    }

    fn record(name: &str, sector: Option<&str>, expiration: Option<&str>) -> Record {
        Record {
            id: format!("tenant::{name}"),
            kind: RecordKind::Tenant { sq_ft: None },
            display_name: name.to_string(),
            location: Some(Location {
                city: Some("Seattle".to_string()),
                state: Some("WA".to_string()),
            }),
            score: 0.0,
            sector: sector.map(str::to_string),
            lease_expiration: expiration.map(str::to_string),
            time_series: Vec::new(),
            logo_url: None,
        }
    }

    #[test]
    fn empty_spec_passes_everything() {
        let spec = FilterSpec::default();
        assert!(spec.matches(&record("Acme", None, None), as_of()));
    }

    #[test]
    fn search_scans_name_sector_city_state() {
        let rec = record("Acme Robotics", Some("Technology"), None);
        for query in ["acme", "TECH", "seattle", "wa"] {
            let spec = FilterSpec::default().with_search_text(query);
            assert!(spec.matches_search(&rec), "query {query}");
        }
        let spec = FilterSpec::default().with_search_text("portland");
        assert!(!spec.matches_search(&rec));
    }

    #[test]
    fn search_query_is_matched_as_typed_without_trimming() {
        let rec = record("Acme Robotics", Some("Technology"), None);
        // The padding is part of the query: "acme " occurs in the name,
        // " acme " does not.
        let trailing = FilterSpec::default().with_search_text("acme ");
        assert!(trailing.matches_search(&rec));
        let padded = FilterSpec::default().with_search_text(" acme ");
        assert!(!padded.matches_search(&rec));
        // Whitespace-only queries are active, not an implicit empty filter.
        let spaces = FilterSpec::default().with_search_text(" ");
        assert!(spaces.matches_search(&rec));
        assert!(!spaces.matches_search(&record("Solo", None, None)));
    }

    #[test]
    fn category_matching_is_substring_over_sector_text() {
        let spec = FilterSpec::with_category_options(["Technology", "Healthcare"])
            .with_category_toggled("Technology");
        // A raw sector string may embed several checked terms.
        assert!(spec.matches_categories(&record("A", Some("Technology, Logistics"), None)));
        assert!(!spec.matches_categories(&record("B", Some("Healthcare"), None)));
        assert!(!spec.matches_categories(&record("C", None, None)));
    }

    #[test]
    fn unchecked_categories_pass_unconditionally() {
        let spec = FilterSpec::with_category_options(["Technology"]);
        assert!(spec.matches_categories(&record("A", None, None)));
    }

    #[test]
    fn category_toggle_ignores_unknown_names() {
        let spec = FilterSpec::with_category_options(["Technology"]);
        let same = spec.with_category_toggled("Mystery");
        assert_eq!(spec, same);
    }

    #[test]
    fn term_buckets_partition_months() {
        for (months, expected) in [
            (-3, TermBucket::Months0To6),
            (0, TermBucket::Months0To6),
            (6, TermBucket::Months0To6),
            (7, TermBucket::Months7To12),
            (12, TermBucket::Months7To12),
            (13, TermBucket::Months13To18),
            (18, TermBucket::Months13To18),
            (19, TermBucket::Over18Months),
            (MISSING_TERM_MONTHS, TermBucket::Over18Months),
        ] {
            for bucket in [
                TermBucket::Months0To6,
                TermBucket::Months7To12,
                TermBucket::Months13To18,
                TermBucket::Over18Months,
            ] {
                assert_eq!(
                    bucket.contains(months),
                    bucket == expected,
                    "months {months} bucket {bucket:?}"
                );
            }
        }
    }

    #[test]
    fn missing_expiration_lands_in_open_bucket_only() {
        let rec = record("Acme", None, None);
        let far = FilterSpec::default().with_term_bucket(Some(TermBucket::Over18Months));
        assert!(far.matches_term_bucket(&rec, as_of()));
        let near = FilterSpec::default().with_term_bucket(Some(TermBucket::Months0To6));
        assert!(!near.matches_term_bucket(&rec, as_of()));
    }

    #[test]
    fn setting_active_bucket_again_clears_it() {
        let spec = FilterSpec::default().with_term_bucket(Some(TermBucket::Months0To6));
        assert_eq!(spec.term_bucket, Some(TermBucket::Months0To6));
        let cleared = spec.with_term_bucket(Some(TermBucket::Months0To6));
        assert_eq!(cleared.term_bucket, None);
        let replaced = spec.with_term_bucket(Some(TermBucket::Months7To12));
        assert_eq!(replaced.term_bucket, Some(TermBucket::Months7To12));
    }

    #[test]
    fn cleared_keeps_option_list_but_resets_state() {
        let spec = FilterSpec::with_category_options(["Technology"])
            .with_category_toggled("Technology")
            .with_search_text("acme")
            .with_term_bucket(Some(TermBucket::Months0To6));
        let cleared = spec.cleared();
        assert_eq!(cleared.categories.len(), 1);
        assert_eq!(cleared.checked_categories().count(), 0);
        assert!(cleared.search_text.is_empty());
        assert_eq!(cleared.term_bucket, None);
    }

    #[test]
    fn serde_names_match_dashboard_options() {
        assert_eq!(
            serde_json::to_string(&TermBucket::Over18Months).unwrap(),
            "\"18+\""
        );
        let bucket: TermBucket = serde_json::from_str("\"7-12\"").unwrap();
        assert_eq!(bucket, TermBucket::Months7To12);
    }
}
