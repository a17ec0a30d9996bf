use std::time::Duration;

/// Placeholder for a missing descriptive value
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Placeholder shown when a coin's country cannot be determined
pub const UNKNOWN_COUNTRY: &str = UNKNOWN_LABEL;

/// Placeholder for missing numeric or catalog fields
pub const NOT_AVAILABLE: &str = "N/A";

/// Placeholder for a missing mint year
pub const UNKNOWN_YEAR: &str = "?";

/// Cache scope for resolved coin details
pub const COIN_DETAIL_QUERY_SCOPE: &str = "coin_detail";

/// Bump whenever the shape of `CoinDetail` changes so older cache entries are never served
pub const COIN_DETAIL_SCHEMA_VERSION: u32 = 2;

/// Freshness window for resolved coin details
pub const COIN_DETAIL_STALE_TIME: Duration = Duration::from_secs(30 * 60);

/// Maximum number of coin details held in memory
pub const COIN_DETAIL_CACHE_CAPACITY: u64 = 2_000;

/// Cache scope for the gallery listing
pub const CATALOG_QUERY_SCOPE: &str = "coins";

pub const CATALOG_SCHEMA_VERSION: u32 = 1;

/// Freshness window for the gallery listing
pub const CATALOG_STALE_TIME: Duration = Duration::from_secs(5 * 60);

/// Default number of coins fetched for the gallery
pub const DEFAULT_CATALOG_LIMIT: usize = 1_000;
