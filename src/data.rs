use serde::{Deserialize, Serialize};

pub use crate::types::{RawDate, RecordId, SectorText};

/// Canonical record payload fetched from the backing service.
///
/// Records are immutable once fetched; identity is `id`. Optional fields are
/// genuinely optional in the upstream data and every consumer degrades to a
/// sentinel or neutral value when they are absent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Stable record identifier (used for watchlist keys and determinism).
    pub id: RecordId,
    /// Dashboard collection this record belongs to.
    pub kind: RecordKind,
    /// Name shown in table rows and used for search/initials.
    pub display_name: String,
    /// City/state location text, when the upstream data carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    /// Relative ranking score supplied by the backing service.
    pub score: f64,
    /// Raw sector/category text (may embed several category terms).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sector: Option<SectorText>,
    /// Nearest lease expiration as raw date text; parsing is lenient.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lease_expiration: Option<RawDate>,
    /// Historical metric series (e.g. headcount or revenue over time).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub time_series: Vec<SeriesPoint>,
    /// Logo image URL; `None` means the view falls back to initials.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
}

/// Dashboard collection variants.
///
/// Variant payloads are display-only extras; the filter engine treats all
/// kinds uniformly.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum RecordKind {
    /// Listed property.
    Property,
    /// Leasing tenant.
    Tenant {
        /// Leased square footage, when known.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        sq_ft: Option<f64>,
    },
    /// Prospective buyer.
    Buyer {
        /// Fund size in dollars, when known.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        fund_size: Option<f64>,
    },
}

/// City/state location text carried on a record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// City or submarket text as fetched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// State or county text as fetched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// One point in a record's historical metric series.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Observation date as raw text; unparseable dates are skipped by projections.
    pub date: RawDate,
    /// Metric value at the observation date.
    pub value: f64,
}

impl Record {
    /// Lowercased city text, or empty when absent.
    pub fn city_lower(&self) -> String {
        self.location
            .as_ref()
            .and_then(|loc| loc.city.as_deref())
            .unwrap_or_default()
            .to_lowercase()
    }

    /// Lowercased state text, or empty when absent.
    pub fn state_lower(&self) -> String {
        self.location
            .as_ref()
            .and_then(|loc| loc.state.as_deref())
            .unwrap_or_default()
            .to_lowercase()
    }

    /// Lowercased sector text, or empty when absent.
    pub fn sector_lower(&self) -> String {
        self.sector.as_deref().unwrap_or_default().to_lowercase()
    }
}
