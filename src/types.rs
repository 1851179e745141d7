/// Unique record identifier (stable across fetches).
/// Example: `tenant::acme-robotics`
pub type RecordId = String;
/// County-level location name in the taxonomy.
/// Examples: `King County`, `Pierce County`
pub type CountyName = String;
/// Submarket-level location name in the taxonomy.
/// Examples: `Seattle`, `Bellevue`, `Tacoma`
pub type SubmarketName = String;
/// Any selectable location name (county or submarket).
/// Examples: `King County`, `Seattle`
pub type LocationName = String;
/// Categorical filter option name matched against record sectors.
/// Examples: `Technology`, `Healthcare`, `Industrial`
pub type CategoryName = String;
/// Raw sector/category text carried on a record.
/// Example: `Technology, Light Industrial`
pub type SectorText = String;
/// Raw date text as fetched from the backing service.
/// Examples: `2025-01-01`, `02/25/2025`, `Oct 15, 2024`
pub type RawDate = String;
/// Identifier for the source that produced a record collection.
/// Examples: `crm_api`, `in_memory`
pub type SourceId = String;
