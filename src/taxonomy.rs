use indexmap::IndexMap;

use crate::errors::DashboardError;
use crate::types::{CountyName, SubmarketName};

/// Two-level location reference tree: county → submarkets.
///
/// Static, read-only data; insertion order is presentation order. Lookups are
/// case-sensitive because names come from the same reference data the UI
/// renders, never from free text.
#[derive(Clone, Debug, Default)]
pub struct LocationTaxonomy {
    counties: IndexMap<CountyName, Vec<SubmarketName>>,
}

impl LocationTaxonomy {
    /// Build a taxonomy from `(county, submarkets)` pairs, preserving order.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<S>)>,
        S: Into<String>,
    {
        let counties = pairs
            .into_iter()
            .map(|(county, subs)| {
                (
                    county.into(),
                    subs.into_iter().map(Into::into).collect::<Vec<_>>(),
                )
            })
            .collect();
        Self { counties }
    }

    /// Validate that every name resolves unambiguously.
    ///
    /// The selection toggles rely on reverse lookup, so a submarket may not
    /// appear under two counties and no name may be both a county and a
    /// submarket.
    pub fn validated(self) -> Result<Self, DashboardError> {
        let mut seen_submarkets: Vec<&SubmarketName> = Vec::new();
        for subs in self.counties.values() {
            for sub in subs {
                if self.counties.contains_key(sub) {
                    return Err(DashboardError::Configuration(format!(
                        "'{sub}' is both a county and a submarket"
                    )));
                }
                if seen_submarkets.contains(&sub) {
                    return Err(DashboardError::Configuration(format!(
                        "submarket '{sub}' appears under more than one county"
                    )));
                }
                seen_submarkets.push(sub);
            }
        }
        Ok(self)
    }

    /// Counties in presentation order.
    pub fn counties(&self) -> impl Iterator<Item = &CountyName> {
        self.counties.keys()
    }

    /// Submarkets of `county`, or `None` for unknown counties.
    pub fn submarkets_of(&self, county: &str) -> Option<&[SubmarketName]> {
        self.counties.get(county).map(Vec::as_slice)
    }

    /// Reverse lookup: the county owning `submarket`, if any.
    pub fn county_of(&self, submarket: &str) -> Option<&CountyName> {
        self.counties
            .iter()
            .find(|(_, subs)| subs.iter().any(|s| s == submarket))
            .map(|(county, _)| county)
    }

    /// Whether `name` exists as a county.
    pub fn is_county(&self, name: &str) -> bool {
        self.counties.contains_key(name)
    }

    /// Whether `name` exists as a submarket under any county.
    pub fn is_submarket(&self, name: &str) -> bool {
        self.county_of(name).is_some()
    }

    /// Total number of county entries.
    pub fn len(&self) -> usize {
        self.counties.len()
    }

    /// Whether the taxonomy has no counties.
    pub fn is_empty(&self) -> bool {
        self.counties.is_empty()
    }
}

/// Built-in Puget Sound taxonomy used by the leasing dashboard.
pub fn default_taxonomy() -> LocationTaxonomy {
    LocationTaxonomy::from_pairs([
        ("King County", vec!["Seattle", "Bellevue", "Redmond", "Kent"]),
        ("Pierce County", vec!["Tacoma", "Puyallup", "Lakewood"]),
        ("Snohomish County", vec!["Everett", "Lynnwood", "Bothell"]),
    ])
}
