use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::page::DEFAULT_PAGE_SIZE;
use crate::data::Record;
use crate::dates::parse_date;
use crate::filter::FilterSpec;

/// Sortable columns. Currently the table sorts only by nearest expiration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    /// Nearest lease-expiration date.
    #[default]
    LeaseExpiration,
}

/// Sort direction for real date values.
///
/// Direction flips comparisons between two real dates only; records without a
/// parseable date sort last either way.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    /// Earliest real date first.
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    /// Latest real date first.
    #[serde(rename = "desc")]
    Descending,
}

/// Sort specification for the pipeline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    /// Column the table is sorted by.
    pub key: SortKey,
    /// Direction applied to real date values.
    pub direction: SortDirection,
}

impl SortSpec {
    /// New spec with the direction toggled.
    pub fn toggled(self) -> Self {
        let direction = match self.direction {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        };
        Self { direction, ..self }
    }
}

/// Page sizes the dashboard offers.
///
/// Serializes as the raw row count (`10`, `25`, `50`, `100`) to match the
/// dashboard's option values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum PageSize {
    /// 10 rows per page.
    #[default]
    Ten,
    /// 25 rows per page.
    TwentyFive,
    /// 50 rows per page.
    Fifty,
    /// 100 rows per page.
    Hundred,
}

impl PageSize {
    /// Number of rows per page.
    pub fn as_usize(self) -> usize {
        match self {
            PageSize::Ten => 10,
            PageSize::TwentyFive => 25,
            PageSize::Fifty => 50,
            PageSize::Hundred => 100,
        }
    }

    /// Map a raw row count to an offered page size, if it is one.
    pub fn from_usize(rows: usize) -> Option<Self> {
        match rows {
            10 => Some(PageSize::Ten),
            25 => Some(PageSize::TwentyFive),
            50 => Some(PageSize::Fifty),
            100 => Some(PageSize::Hundred),
            _ => None,
        }
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> usize {
        size.as_usize()
    }
}

impl TryFrom<usize> for PageSize {
    type Error = String;

    fn try_from(rows: usize) -> Result<Self, Self::Error> {
        PageSize::from_usize(rows).ok_or_else(|| format!("unsupported page size: {rows}"))
    }
}

/// Pagination specification: 0-based page index plus rows per page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSpec {
    /// 0-based page position within the matched set.
    pub page_index: usize,
    /// Rows per page.
    pub page_size: PageSize,
}

impl Default for PageSpec {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: PageSize::from_usize(DEFAULT_PAGE_SIZE).unwrap_or_default(),
        }
    }
}

impl PageSpec {
    /// New spec on a different page, same size.
    pub fn with_page_index(self, page_index: usize) -> Self {
        Self { page_index, ..self }
    }

    /// New spec with a different size; the index resets to the first page so
    /// the view is never stranded past the end.
    pub fn with_page_size(self, page_size: PageSize) -> Self {
        Self {
            page_index: 0,
            page_size,
        }
    }
}

/// Result of one pipeline run: the visible page plus the total match count.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageView {
    /// Records on the requested page, in sorted order.
    pub page_records: Vec<Record>,
    /// Number of records matching the filter across all pages.
    pub total_matched: usize,
}

/// The pure filter→sort→paginate transform.
///
/// `as_of` anchors the lease-term bucket predicate. Given identical inputs
/// the output is identical; the sort is stable, so records with equal (or
/// equally missing) dates keep their fetched relative order.
pub fn run_pipeline(
    records: &[Record],
    filter: &FilterSpec,
    sort: &SortSpec,
    page: &PageSpec,
    as_of: NaiveDate,
) -> PageView {
    let ordered = filter_and_sort(records, filter, sort, as_of);
    let total_matched = ordered.len();
    PageView {
        page_records: paginate(&ordered, page),
        total_matched,
    }
}

/// Filter and stable-sort a collection without slicing a page.
///
/// Exposed separately so a cache can reuse the ordered intermediate across
/// page-index changes.
pub fn filter_and_sort(
    records: &[Record],
    filter: &FilterSpec,
    sort: &SortSpec,
    as_of: NaiveDate,
) -> Vec<Record> {
    let mut matched: Vec<Record> = records
        .iter()
        .filter(|record| filter.matches(record, as_of))
        .cloned()
        .collect();
    matched.sort_by(|a, b| compare_records(a, b, sort));
    matched
}

/// Slice one page out of an ordered collection.
///
/// Out-of-range page indexes yield an empty page, never an error.
pub fn paginate(ordered: &[Record], page: &PageSpec) -> Vec<Record> {
    let size = page.page_size.as_usize();
    let start = page.page_index.saturating_mul(size);
    if start >= ordered.len() {
        return Vec::new();
    }
    let end = start.saturating_add(size).min(ordered.len());
    ordered[start..end].to_vec()
}

fn compare_records(a: &Record, b: &Record, sort: &SortSpec) -> Ordering {
    match sort.key {
        SortKey::LeaseExpiration => compare_dates(
            parse_date(a.lease_expiration.as_deref()),
            parse_date(b.lease_expiration.as_deref()),
            sort.direction,
        ),
    }
}

/// Missing dates compare greater than any real date in both directions; only
/// the ordering between two real dates follows the direction.
fn compare_dates(
    a: Option<NaiveDate>,
    b: Option<NaiveDate>,
    direction: SortDirection,
) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => match direction {
            SortDirection::Ascending => a.cmp(&b),
            SortDirection::Descending => b.cmp(&a),
        },
    }
}

/// Memoizing wrapper over the pipeline.
///
/// Keeps the filtered+sorted intermediate and re-slices it while the store
/// revision, filter, sort, and `as_of` anchor are unchanged; any of those
/// changing triggers a full recompute.
#[derive(Debug, Default)]
pub struct PipelineCache {
    cached: Option<CachedOrder>,
}

#[derive(Debug)]
struct CachedOrder {
    revision: u64,
    filter: FilterSpec,
    sort: SortSpec,
    as_of: NaiveDate,
    ordered: Vec<Record>,
}

impl PipelineCache {
    /// Empty cache; the first call always computes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Produce the page view, reusing the ordered intermediate when valid.
    ///
    /// `revision` identifies the record collection (bumped whenever the store
    /// is replaced).
    pub fn page(
        &mut self,
        revision: u64,
        records: &[Record],
        filter: &FilterSpec,
        sort: &SortSpec,
        page: &PageSpec,
        as_of: NaiveDate,
    ) -> PageView {
        let valid = self.cached.as_ref().is_some_and(|cached| {
            cached.revision == revision
                && cached.as_of == as_of
                && cached.filter == *filter
                && cached.sort == *sort
        });
        if !valid {
            debug!(revision, "pipeline cache recompute");
            self.cached = Some(CachedOrder {
                revision,
                filter: filter.clone(),
                sort: *sort,
                as_of,
                ordered: filter_and_sort(records, filter, sort, as_of),
            });
        } else {
            debug!(revision, page_index = page.page_index, "pipeline cache re-slice");
        }
        let ordered = self
            .cached
            .as_ref()
            .map(|cached| cached.ordered.as_slice())
            .unwrap_or_default();
        PageView {
            page_records: paginate(ordered, page),
            total_matched: ordered.len(),
        }
    }

    /// Drop the cached intermediate.
    pub fn invalidate(&mut self) {
        self.cached = None;
    }
}

/// Session-scoped view state: the three specs plus the reset-on-change rules
/// that tie them together.
///
/// Every transition returns a new state; specs are never mutated in place.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewState {
    /// Active composite filter.
    pub filter: FilterSpec,
    /// Active sort specification.
    pub sort: SortSpec,
    /// Active pagination specification.
    pub page: PageSpec,
}

impl ViewState {
    /// Fresh state with default specs and a closed category option list.
    pub fn with_category_options<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            filter: FilterSpec::with_category_options(options),
            ..Self::default()
        }
    }

    /// Replace the filter; the page index resets so a shrunken result set
    /// cannot strand the view on an empty page.
    pub fn set_filter(&self, filter: FilterSpec) -> Self {
        Self {
            filter,
            sort: self.sort,
            page: self.page.with_page_index(0),
        }
    }

    /// Replace the sort, keeping filter and page.
    pub fn set_sort(&self, sort: SortSpec) -> Self {
        Self {
            sort,
            ..self.clone()
        }
    }

    /// Move to another page of the current results.
    pub fn set_page_index(&self, page_index: usize) -> Self {
        Self {
            page: self.page.with_page_index(page_index),
            ..self.clone()
        }
    }

    /// Change the page size; the index resets to the first page.
    pub fn set_page_size(&self, page_size: PageSize) -> Self {
        Self {
            page: self.page.with_page_size(page_size),
            ..self.clone()
        }
    }
}
