use std::collections::BTreeSet;

use tracing::warn;

use crate::data::Record;
use crate::taxonomy::LocationTaxonomy;
use crate::types::LocationName;

/// Set of selected county and submarket names.
///
/// Invariant: a county name is present **iff** all of its submarket names are
/// present. Toggle operations re-establish the invariant on every mutation and
/// return a new state rather than mutating in place.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: BTreeSet<LocationName>,
}

impl SelectionState {
    /// Empty selection (matches every record).
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a selection from explicit names, without invariant repair.
    ///
    /// Intended for restoring session state whose names were produced by the
    /// toggle operations and therefore already satisfy the invariant.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            selected: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `name` is currently selected.
    pub fn contains(&self, name: &str) -> bool {
        self.selected.contains(name)
    }

    /// Number of selected names (counties and submarkets both count).
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Selected names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &LocationName> {
        self.selected.iter()
    }

    /// Toggle a county: select it with all of its submarkets, or deselect all.
    ///
    /// Unknown county names are ignored.
    pub fn toggle_county(&self, taxonomy: &LocationTaxonomy, county: &str) -> Self {
        let Some(submarkets) = taxonomy.submarkets_of(county) else {
            warn!(county, "ignoring toggle for unknown county");
            return self.clone();
        };
        let mut next = self.selected.clone();
        if next.contains(county) {
            next.remove(county);
            for sub in submarkets {
                next.remove(sub);
            }
        } else {
            next.insert(county.to_string());
            for sub in submarkets {
                next.insert(sub.clone());
            }
        }
        Self { selected: next }
    }

    /// Toggle a single submarket, then recompute its county's membership.
    ///
    /// The county recompute runs from scratch (county present iff every one of
    /// its submarkets is present), so it is correct even when the county was
    /// never fully selected before. Unknown submarket names are ignored.
    pub fn toggle_submarket(&self, taxonomy: &LocationTaxonomy, submarket: &str) -> Self {
        let Some(county) = taxonomy.county_of(submarket) else {
            warn!(submarket, "ignoring toggle for unknown submarket");
            return self.clone();
        };
        let mut next = self.selected.clone();
        if !next.remove(submarket) {
            next.insert(submarket.to_string());
        }

        let all_selected = taxonomy
            .submarkets_of(county)
            .is_some_and(|subs| subs.iter().all(|sub| next.contains(sub)));
        if all_selected {
            next.insert(county.clone());
        } else {
            next.remove(county);
        }
        Self { selected: next }
    }

    /// Deselect everything.
    pub fn clear(&self) -> Self {
        Self::new()
    }

    /// Location predicate used by the filter pipeline.
    ///
    /// Empty selection matches every record. Otherwise a record matches when
    /// its city or state text contains any selected name, case-insensitively.
    /// This is literal name containment, not taxonomy traversal: selecting a
    /// county matches records whose location text mentions the county name,
    /// which is the dashboard's historical behavior.
    pub fn matches_record(&self, record: &Record) -> bool {
        if self.selected.is_empty() {
            return true;
        }
        let city = record.city_lower();
        let state = record.state_lower();
        self.selected.iter().any(|name| {
            let name = name.to_lowercase();
            city.contains(&name) || state.contains(&name)
        })
    }
}
