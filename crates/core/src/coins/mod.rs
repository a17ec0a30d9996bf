//! Coins module - domain models, detail resolution, merge overlay and traits.

mod coin_detail_service;
mod coins_merge;
mod coins_model;
mod coins_traits;


pub use coin_detail_service::CoinDetailService;
pub use coins_merge::{display_coin, merge_coin_view};
pub use coins_model::{
    Category, CoinDetail, CoinImages, CoinRecord, CoinView, CountryResolution, CountryStatus,
    Denomination, ImageVariants, Period, Series,
};
pub use coins_traits::{CoinDetailServiceTrait, CoinRepositoryTrait};
