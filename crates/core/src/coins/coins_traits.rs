use async_trait::async_trait;

use super::coins_model::{Category, CoinDetail, CoinRecord};
use crate::errors::Result;

/// Trait defining the contract for coin catalog storage.
///
/// Absence is reported as `Ok(None)`; `Err` is reserved for failures.
#[async_trait]
pub trait CoinRepositoryTrait: Send + Sync {
    /// Fetch one coin with its denomination, series, category and period
    /// joins. Coins without a resolvable period are not returned.
    async fn get_coin_detail(&self, coin_id: i64) -> Result<Option<CoinRecord>>;

    /// First country linked to a period, if any.
    async fn get_period_country_id(&self, period_id: i64) -> Result<Option<i64>>;

    async fn get_country_name(&self, country_id: i64) -> Result<Option<String>>;

    /// Coins for the gallery, with denomination and category joins.
    async fn list_coins(&self, limit: usize) -> Result<Vec<CoinRecord>>;

    async fn list_categories(&self) -> Result<Vec<Category>>;
}

/// Trait defining the contract for coin detail resolution.
#[async_trait]
pub trait CoinDetailServiceTrait: Send + Sync {
    /// Resolve a coin with its joins and country name.
    ///
    /// `Ok(None)` means the coin does not exist.
    async fn get_coin_detail(&self, coin_id: i64) -> Result<Option<CoinDetail>>;

    /// Drop any cached detail for `coin_id`.
    async fn invalidate(&self, coin_id: i64);
}
