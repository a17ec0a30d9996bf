use async_trait::async_trait;
use log::debug;
use std::cmp::Ordering;
use std::sync::Arc;
use std::time::Duration;

use super::catalog_model::{
    CatalogMetadata, CatalogSnapshot, CategoryCount, CoinCatalog, CoinFilters, SortKey,
};
use crate::coins::{CoinRecord, CoinRepositoryTrait};
use crate::constants::{
    CATALOG_QUERY_SCOPE, CATALOG_SCHEMA_VERSION, CATALOG_STALE_TIME, DEFAULT_CATALOG_LIMIT,
};
use crate::errors::Result;
use crate::query::{QueryCache, QueryKey};

/// Trait defining the contract for the gallery listing.
#[async_trait]
pub trait CatalogServiceTrait: Send + Sync {
    async fn get_catalog(&self, filters: &CoinFilters) -> Result<CoinCatalog>;

    /// Drop the cached listing so the next call refetches it.
    async fn refresh(&self);
}

pub struct CatalogService {
    repository: Arc<dyn CoinRepositoryTrait>,
    cache: QueryCache<Arc<CatalogSnapshot>>,
    limit: usize,
}

impl CatalogService {
    pub fn new(repository: Arc<dyn CoinRepositoryTrait>) -> Self {
        Self::with_options(repository, CATALOG_STALE_TIME, DEFAULT_CATALOG_LIMIT)
    }

    pub fn with_options(
        repository: Arc<dyn CoinRepositoryTrait>,
        stale_time: Duration,
        limit: usize,
    ) -> Self {
        Self {
            repository,
            cache: QueryCache::new(stale_time, 1),
            limit,
        }
    }

    fn query_key() -> QueryKey {
        QueryKey::new(CATALOG_QUERY_SCOPE, CATALOG_SCHEMA_VERSION, "all")
    }

    async fn load_snapshot(&self) -> Result<Arc<CatalogSnapshot>> {
        let coins = self.repository.list_coins(self.limit).await?;
        let categories = self.repository.list_categories().await?;
        debug!(
            "Loaded {} coins and {} categories for the gallery",
            coins.len(),
            categories.len()
        );
        Ok(Arc::new(CatalogSnapshot { coins, categories }))
    }
}

#[async_trait]
impl CatalogServiceTrait for CatalogService {
    async fn get_catalog(&self, filters: &CoinFilters) -> Result<CoinCatalog> {
        let snapshot = self
            .cache
            .get_or_fetch(Self::query_key(), self.load_snapshot())
            .await?;
        Ok(build_catalog(&snapshot, filters))
    }

    async fn refresh(&self) {
        self.cache.invalidate(&Self::query_key()).await;
    }
}

/// Apply `filters` to a fetched listing and compute the header counts.
pub fn build_catalog(snapshot: &CatalogSnapshot, filters: &CoinFilters) -> CoinCatalog {
    let mut coins: Vec<CoinRecord> = snapshot
        .coins
        .iter()
        .filter(|coin| filters.category.is_none() || coin.type_id == filters.category)
        .filter(|coin| !filters.owned_only || coin.owned())
        .cloned()
        .collect();
    sort_coins(&mut coins, filters.sort_by);

    let categories = snapshot
        .categories
        .iter()
        .map(|category| CategoryCount {
            type_id: category.type_id,
            type_name: category.type_name.clone(),
            count: snapshot
                .coins
                .iter()
                .filter(|coin| category.type_id.is_some() && coin.type_id == category.type_id)
                .count(),
        })
        .collect();

    CoinCatalog {
        owned_count: snapshot.coins.iter().filter(|coin| coin.owned()).count(),
        display_count: coins.len(),
        coins,
        metadata: CatalogMetadata { categories },
    }
}

/// Stable sort; coins missing the sort field go last in either direction.
pub fn sort_coins(coins: &mut [CoinRecord], sort_by: SortKey) {
    match sort_by {
        SortKey::YearAsc => coins.sort_by(|a, b| missing_last(a.year, b.year, false)),
        SortKey::YearDesc => coins.sort_by(|a, b| missing_last(a.year, b.year, true)),
        SortKey::PriceAsc => coins.sort_by(|a, b| missing_last(a.price_usd, b.price_usd, false)),
        SortKey::PriceDesc => coins.sort_by(|a, b| missing_last(a.price_usd, b.price_usd, true)),
        SortKey::NameAsc => {
            coins.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        }
    }
}

fn missing_last<T: Ord>(a: Option<T>, b: Option<T>, descending: bool) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) if descending => b.cmp(&a),
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
