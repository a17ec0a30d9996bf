//! Catalog module - gallery listing with client-side filtering and sorting.

mod catalog_model;
mod catalog_service;

pub use catalog_model::{
    CatalogMetadata, CatalogSnapshot, CategoryCount, CoinCatalog, CoinFilters, SortKey,
};
pub use catalog_service::{build_catalog, sort_coins, CatalogService, CatalogServiceTrait};
