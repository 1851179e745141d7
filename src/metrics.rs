use std::collections::HashMap;

use crate::data::Record;
use crate::types::SectorText;

/// Aggregate sector distribution over a filtered result.
#[derive(Clone, Debug, PartialEq)]
pub struct SectorMix {
    /// Number of records in the result set.
    pub total: usize,
    /// Number of distinct sector groups.
    pub sectors: usize,
    /// Per-sector shares, count descending then sector name.
    pub per_sector: Vec<SectorShare>,
}

/// Per-sector share of a result set.
#[derive(Clone, Debug, PartialEq)]
pub struct SectorShare {
    /// Raw sector text, or [`UNCLASSIFIED_SECTOR`].
    pub sector: SectorText,
    /// Records carrying this sector text.
    pub count: usize,
    /// Fraction of the result set, 0.0 through 1.0.
    pub share: f64,
}

/// Label used for records without sector text.
pub const UNCLASSIFIED_SECTOR: &str = "(unclassified)";

/// Compute the sector mix of a record set.
///
/// Records without sector text are grouped under [`UNCLASSIFIED_SECTOR`].
/// Shares are sorted by count descending, then sector name, so the output is
/// deterministic.
pub fn sector_mix(records: &[Record]) -> Option<SectorMix> {
    if records.is_empty() {
        return None;
    }
    let mut counts: HashMap<SectorText, usize> = HashMap::new();
    for record in records {
        let sector = record
            .sector
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(UNCLASSIFIED_SECTOR);
        *counts.entry(sector.to_string()).or_insert(0) += 1;
    }
    let total = records.len();
    let mut per_sector: Vec<SectorShare> = counts
        .into_iter()
        .map(|(sector, count)| SectorShare {
            sector,
            count,
            share: count as f64 / total as f64,
        })
        .collect();
    per_sector.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.sector.cmp(&b.sector)));
    Some(SectorMix {
        total,
        sectors: per_sector.len(),
        per_sector,
    })
}
