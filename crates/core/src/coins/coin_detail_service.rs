use async_trait::async_trait;
use log::{debug, warn};
use std::sync::Arc;
use tokio::sync::watch;

use super::coins_model::{CoinDetail, CountryResolution};
use super::coins_traits::{CoinDetailServiceTrait, CoinRepositoryTrait};
use crate::constants::{
    COIN_DETAIL_CACHE_CAPACITY, COIN_DETAIL_QUERY_SCOPE, COIN_DETAIL_SCHEMA_VERSION,
    COIN_DETAIL_STALE_TIME,
};
use crate::errors::Result;
use crate::query::{spawn_query, QueryCache, QueryKey, QueryState};

/// Resolves coin details and caches them per coin for the freshness window.
pub struct CoinDetailService {
    repository: Arc<dyn CoinRepositoryTrait>,
    cache: Arc<QueryCache<Option<CoinDetail>>>,
}

impl CoinDetailService {
    pub fn new(repository: Arc<dyn CoinRepositoryTrait>) -> Self {
        Self::with_cache(
            repository,
            Arc::new(QueryCache::new(
                COIN_DETAIL_STALE_TIME,
                COIN_DETAIL_CACHE_CAPACITY,
            )),
        )
    }

    pub fn with_cache(
        repository: Arc<dyn CoinRepositoryTrait>,
        cache: Arc<QueryCache<Option<CoinDetail>>>,
    ) -> Self {
        Self { repository, cache }
    }

    pub fn query_key(coin_id: i64) -> QueryKey {
        QueryKey::new(COIN_DETAIL_QUERY_SCOPE, COIN_DETAIL_SCHEMA_VERSION, coin_id)
    }

    /// Start resolving `coin_id` in the background and observe its progress.
    pub fn observe(self: &Arc<Self>, coin_id: i64) -> watch::Receiver<QueryState<CoinDetail>> {
        let service = Arc::clone(self);
        spawn_query(async move { service.get_coin_detail(coin_id).await })
    }

    /// Uncached resolution: primary fetch, then the country lookup.
    async fn resolve(&self, coin_id: i64) -> Result<Option<CoinDetail>> {
        let Some(coin) = self.repository.get_coin_detail(coin_id).await? else {
            debug!("Coin {} not found", coin_id);
            return Ok(None);
        };

        if coin.period.is_none() {
            warn!(
                "Coin {} came back without its period, treating it as not found",
                coin_id
            );
            return Ok(None);
        }

        let country = match coin.period_id {
            Some(period_id) => self.resolve_country(period_id).await,
            None => CountryResolution::Unlinked,
        };

        Ok(Some(CoinDetail::new(coin, country)))
    }

    /// Period -> link row -> country name. Failures degrade to a sentinel.
    async fn resolve_country(&self, period_id: i64) -> CountryResolution {
        let country_id = match self.repository.get_period_country_id(period_id).await {
            Ok(Some(country_id)) => country_id,
            Ok(None) => {
                debug!("Period {} has no linked country", period_id);
                return CountryResolution::Unlinked;
            }
            Err(e) => {
                warn!("Country link lookup failed for period {}: {}", period_id, e);
                return CountryResolution::Failed(e.to_string());
            }
        };

        match self.repository.get_country_name(country_id).await {
            Ok(Some(name)) if !name.trim().is_empty() => CountryResolution::Resolved(name),
            Ok(_) => {
                debug!("Country {} has no name", country_id);
                CountryResolution::Unlinked
            }
            Err(e) => {
                warn!("Country name lookup failed for country {}: {}", country_id, e);
                CountryResolution::Failed(e.to_string())
            }
        }
    }
}

#[async_trait]
impl CoinDetailServiceTrait for CoinDetailService {
    async fn get_coin_detail(&self, coin_id: i64) -> Result<Option<CoinDetail>> {
        self.cache
            .get_or_fetch(Self::query_key(coin_id), self.resolve(coin_id))
            .await
    }

    async fn invalidate(&self, coin_id: i64) {
        self.cache.invalidate(&Self::query_key(coin_id)).await;
    }
}
