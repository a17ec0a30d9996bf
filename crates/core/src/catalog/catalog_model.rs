use serde::{Deserialize, Serialize};

use crate::coins::{Category, CoinRecord};

/// Ordering applied to the gallery
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    YearAsc,
    YearDesc,
    PriceAsc,
    PriceDesc,
    NameAsc,
}

/// Filter and sort configuration chosen in the gallery toolbar
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CoinFilters {
    /// Category (`type_id`) to restrict to
    pub category: Option<i64>,
    pub owned_only: bool,
    pub sort_by: SortKey,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCount {
    pub type_id: Option<i64>,
    pub type_name: String,
    pub count: usize,
}

/// Filter options available to the toolbar
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogMetadata {
    pub categories: Vec<CategoryCount>,
}

/// Filtered, ordered gallery content with its header counts
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinCatalog {
    pub coins: Vec<CoinRecord>,
    /// Owned coins in the whole fetched collection, regardless of filters
    pub owned_count: usize,
    pub display_count: usize,
    pub metadata: CatalogMetadata,
}

/// Unfiltered listing as fetched, shared between cache readers
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogSnapshot {
    pub coins: Vec<CoinRecord>,
    pub categories: Vec<Category>,
}
