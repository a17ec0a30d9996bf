//! Row models for the coin tables.

use rust_decimal::Decimal;
use serde::Deserialize;

use denarii_core::coins::{Category, CoinImages, CoinRecord, Denomination, Period, Series};

/// Row of `f_coins`, with whichever dimensions were embedded by the select
#[derive(Deserialize, Debug, Clone)]
pub struct CoinDB {
    pub coin_id: i64,
    pub name: Option<String>,
    pub year: Option<i32>,
    pub price_usd: Option<Decimal>,
    pub km: Option<String>,
    pub subject: Option<String>,
    pub marked: Option<bool>,
    pub is_owned: Option<bool>,
    pub images: Option<CoinImages>,
    pub denomination_id: Option<i64>,
    pub series_id: Option<i64>,
    pub type_id: Option<i64>,
    pub period_id: Option<i64>,
    #[serde(default)]
    pub d_period: Option<PeriodDB>,
    #[serde(default)]
    pub d_series: Option<SeriesDB>,
    #[serde(default)]
    pub d_categories: Option<CategoryDB>,
    #[serde(default)]
    pub d_denominations: Option<DenominationDB>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct PeriodDB {
    pub period_name: Option<String>,
    pub period_link: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct SeriesDB {
    pub series_name: Option<String>,
    pub series_link: Option<String>,
    pub series_range: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct CategoryDB {
    pub type_id: Option<i64>,
    pub type_name: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct DenominationDB {
    pub denomination_name: Option<String>,
}

/// Row of `b_periods_countries`
#[derive(Deserialize, Debug, Clone)]
pub struct PeriodCountryDB {
    pub country_id: Option<i64>,
}

/// Row of `d_countries`
#[derive(Deserialize, Debug, Clone)]
pub struct CountryDB {
    pub country_name: Option<String>,
}

impl From<PeriodDB> for Period {
    fn from(db: PeriodDB) -> Self {
        Self {
            period_name: db.period_name.unwrap_or_default(),
            period_link: db.period_link,
        }
    }
}

impl From<SeriesDB> for Series {
    fn from(db: SeriesDB) -> Self {
        Self {
            series_name: db.series_name.unwrap_or_default(),
            series_link: db.series_link,
            series_range: db.series_range,
        }
    }
}

impl From<CategoryDB> for Category {
    fn from(db: CategoryDB) -> Self {
        Self {
            type_id: db.type_id,
            type_name: db.type_name.unwrap_or_default(),
        }
    }
}

impl From<DenominationDB> for Denomination {
    fn from(db: DenominationDB) -> Self {
        Self {
            denomination_name: db.denomination_name.unwrap_or_default(),
        }
    }
}

impl From<CoinDB> for CoinRecord {
    fn from(db: CoinDB) -> Self {
        Self {
            coin_id: db.coin_id,
            name: db.name.unwrap_or_default(),
            year: db.year,
            price_usd: db.price_usd,
            km: db.km,
            subject: db.subject,
            marked: db.marked.unwrap_or(false),
            is_owned: db.is_owned,
            images: db.images,
            denomination_id: db.denomination_id,
            series_id: db.series_id,
            type_id: db.type_id,
            period_id: db.period_id,
            denomination: db.d_denominations.map(Denomination::from),
            series: db.d_series.map(Series::from),
            category: db.d_categories.map(Category::from),
            period: db.d_period.map(Period::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_coin_row_with_embedded_dimensions() {
        let row: CoinDB = serde_json::from_value(serde_json::json!({
            "coin_id": 42,
            "name": "Denarius of Julius Caesar",
            "year": -44,
            "price_usd": 850.5,
            "km": "480/1",
            "marked": true,
            "images": {
                "obverse": { "original": "o.jpg", "medium": "o_m.jpg" },
                "reverse": null
            },
            "period_id": 7,
            "d_period": { "period_name": "Late Republic", "period_link": null },
            "d_series": null,
            "d_categories": { "type_id": 2, "type_name": "Silver" },
            "d_denominations": { "denomination_name": "Denarius" }
        }))
        .unwrap();

        let coin = CoinRecord::from(row);
        assert_eq!(coin.coin_id, 42);
        assert_eq!(coin.price_usd, Some(dec!(850.5)));
        assert!(coin.marked);
        assert_eq!(coin.is_owned, None);
        assert_eq!(coin.period.unwrap().period_name, "Late Republic");
        assert!(coin.series.is_none());
        assert_eq!(coin.category.unwrap().type_id, Some(2));
        assert_eq!(
            coin.images.unwrap().obverse.unwrap().preferred_url(),
            Some("o.jpg")
        );
    }
}
