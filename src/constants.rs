/// Constants used by lease-term bucket boundaries.
pub mod filter {
    /// Upper bound (inclusive) of the shortest lease-term bucket, in months.
    pub const BUCKET_0_6_MAX: i64 = 6;
    /// Lower bound (inclusive) of the 7-12 month bucket.
    pub const BUCKET_7_12_MIN: i64 = 7;
    /// Upper bound (inclusive) of the 7-12 month bucket.
    pub const BUCKET_7_12_MAX: i64 = 12;
    /// Lower bound (inclusive) of the 13-18 month bucket.
    pub const BUCKET_13_18_MIN: i64 = 13;
    /// Upper bound (inclusive) of the 13-18 month bucket.
    pub const BUCKET_13_18_MAX: i64 = 18;
    /// Months-remaining assigned to records with no parseable expiration.
    ///
    /// Treated as "far future / no urgency": such records fall only into the
    /// open-ended `>18` bucket and sort after every dated record.
    pub const MISSING_TERM_MONTHS: i64 = i64::MAX;
}

/// Constants used by display projections.
pub mod format {
    /// Sentinel shown when a numeric display value is unavailable.
    pub const NOT_AVAILABLE: &str = "--";
    /// Prefix for currency-in-thousands values.
    pub const CURRENCY_PREFIX: &str = "+$";
    /// Suffix for currency-in-thousands values.
    pub const CURRENCY_SUFFIX: &str = "K";
    /// Maximum number of initials derived from a display name.
    pub const MAX_INITIALS: usize = 2;
}

/// Constants used by pagination.
pub mod page {
    /// Page sizes the dashboard offers, in presentation order.
    pub const PAGE_SIZES: [usize; 4] = [10, 25, 50, 100];
    /// Default page size for a fresh session.
    pub const DEFAULT_PAGE_SIZE: usize = 10;
}

/// Constants used by test fixtures.
#[cfg(test)]
pub mod fixtures {
    /// Reference "today" used by lease-term math in unit tests.
    pub const AS_OF: &str = "2024-07-01";
    /// County name used by selection unit tests.
    pub const COUNTY: &str = "King County";
    /// Submarket names used by selection unit tests.
    pub const SUBMARKETS: [&str; 2] = ["Seattle", "Bellevue"];
}
