use async_trait::async_trait;

use denarii_core::coins::{Category, CoinRecord, CoinRepositoryTrait};
use denarii_core::errors::Result;

use super::model::{CategoryDB, CoinDB, CountryDB, PeriodCountryDB};
use crate::client::SupabaseClient;
use crate::schema::{
    CATEGORIES_TABLE, CATEGORY_SELECT, COINS_TABLE, COIN_DETAIL_SELECT, COIN_LIST_SELECT,
    COUNTRIES_TABLE, PERIODS_COUNTRIES_TABLE,
};

/// Coin repository backed by the hosted PostgREST API
pub struct SupabaseCoinRepository {
    client: SupabaseClient,
}

impl SupabaseCoinRepository {
    pub fn new(client: SupabaseClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CoinRepositoryTrait for SupabaseCoinRepository {
    async fn get_coin_detail(&self, coin_id: i64) -> Result<Option<CoinRecord>> {
        let row = self
            .client
            .table(COINS_TABLE)
            .select(COIN_DETAIL_SELECT)
            .eq("coin_id", coin_id)
            .maybe_single::<CoinDB>()
            .await?;
        Ok(row.map(CoinRecord::from))
    }

    async fn get_period_country_id(&self, period_id: i64) -> Result<Option<i64>> {
        let links = self
            .client
            .table(PERIODS_COUNTRIES_TABLE)
            .select("country_id")
            .eq("period_id", period_id)
            .limit(1)
            .fetch::<PeriodCountryDB>()
            .await?;
        Ok(links.into_iter().next().and_then(|link| link.country_id))
    }

    async fn get_country_name(&self, country_id: i64) -> Result<Option<String>> {
        let countries = self
            .client
            .table(COUNTRIES_TABLE)
            .select("country_name")
            .eq("country_id", country_id)
            .limit(1)
            .fetch::<CountryDB>()
            .await?;
        Ok(countries
            .into_iter()
            .next()
            .and_then(|country| country.country_name))
    }

    async fn list_coins(&self, limit: usize) -> Result<Vec<CoinRecord>> {
        let rows = self
            .client
            .table(COINS_TABLE)
            .select(COIN_LIST_SELECT)
            .order("coin_id", true)
            .limit(limit)
            .fetch::<CoinDB>()
            .await?;
        Ok(rows.into_iter().map(CoinRecord::from).collect())
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        let rows = self
            .client
            .table(CATEGORIES_TABLE)
            .select(CATEGORY_SELECT)
            .order("type_name", true)
            .fetch::<CategoryDB>()
            .await?;
        Ok(rows.into_iter().map(Category::from).collect())
    }
}
