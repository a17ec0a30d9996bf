//! Coin domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{NOT_AVAILABLE, UNKNOWN_COUNTRY, UNKNOWN_LABEL, UNKNOWN_YEAR};

/// Historical period a coin was struck in
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Period {
    pub period_name: String,
    pub period_link: Option<String>,
}

/// Coin series with its free-text date range (e.g. "27 BC - AD 14")
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    pub series_name: String,
    pub series_link: Option<String>,
    pub series_range: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub type_id: Option<i64>,
    pub type_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Denomination {
    pub denomination_name: String,
}

/// URLs for one face of a coin at different resolutions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageVariants {
    pub original: Option<String>,
    pub medium: Option<String>,
    pub thumbnail: Option<String>,
}

impl ImageVariants {
    /// Best available URL for full-size display.
    pub fn preferred_url(&self) -> Option<&str> {
        self.original.as_deref().or(self.medium.as_deref())
    }

    /// URL used for gallery cards and list rows.
    pub fn card_url(&self) -> Option<&str> {
        self.medium.as_deref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoinImages {
    pub obverse: Option<ImageVariants>,
    pub reverse: Option<ImageVariants>,
}

/// A coin as held by the gallery, with whatever joins the fetch included.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CoinRecord {
    pub coin_id: i64,
    pub name: String,
    pub year: Option<i32>,
    pub price_usd: Option<Decimal>,
    /// Catalog number (Krause-Mishler)
    pub km: Option<String>,
    pub subject: Option<String>,
    /// Notable piece, shown with a "rare" badge
    pub marked: bool,
    pub is_owned: Option<bool>,
    pub images: Option<CoinImages>,
    pub denomination_id: Option<i64>,
    pub series_id: Option<i64>,
    pub type_id: Option<i64>,
    pub period_id: Option<i64>,
    pub denomination: Option<Denomination>,
    pub series: Option<Series>,
    pub category: Option<Category>,
    pub period: Option<Period>,
}

impl CoinRecord {
    pub fn owned(&self) -> bool {
        self.is_owned.unwrap_or(false)
    }
}

/// Outcome of the period -> country lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountryResolution {
    Resolved(String),
    /// The period has no linked country, or the linked country has no name
    Unlinked,
    /// One of the lookups failed; the message is kept for diagnostics only
    Failed(String),
}

impl CountryResolution {
    pub fn display_name(&self) -> &str {
        match self {
            CountryResolution::Resolved(name) => name,
            CountryResolution::Unlinked | CountryResolution::Failed(_) => UNKNOWN_COUNTRY,
        }
    }

    pub fn status(&self) -> CountryStatus {
        match self {
            CountryResolution::Resolved(_) => CountryStatus::Resolved,
            CountryResolution::Unlinked => CountryStatus::Unknown,
            CountryResolution::Failed(_) => CountryStatus::Error,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountryStatus {
    Resolved,
    Unknown,
    Error,
}

/// Fully joined coin with its resolved country.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinDetail {
    #[serde(flatten)]
    pub coin: CoinRecord,
    pub country_name: String,
    pub country_status: CountryStatus,
    pub fetched_at: DateTime<Utc>,
}

impl CoinDetail {
    pub fn new(coin: CoinRecord, country: CountryResolution) -> Self {
        Self {
            coin,
            country_name: country.display_name().to_string(),
            country_status: country.status(),
            fetched_at: Utc::now(),
        }
    }
}

/// What presentation code renders: the caller's record overlaid with the
/// fetched detail once it is available.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinView {
    #[serde(flatten)]
    pub coin: CoinRecord,
    /// `None` until the detail has been resolved
    pub country_name: Option<String>,
    pub country_status: Option<CountryStatus>,
}

impl CoinView {
    pub fn is_owned(&self) -> bool {
        self.coin.owned()
    }

    pub fn obverse_url(&self) -> Option<&str> {
        self.coin
            .images
            .as_ref()?
            .obverse
            .as_ref()?
            .preferred_url()
    }

    pub fn reverse_url(&self) -> Option<&str> {
        self.coin
            .images
            .as_ref()?
            .reverse
            .as_ref()?
            .preferred_url()
    }

    pub fn price_label(&self) -> String {
        match self.coin.price_usd {
            Some(price) if !price.is_zero() => format!("${:.2}", price),
            _ => NOT_AVAILABLE.to_string(),
        }
    }

    pub fn year_label(&self) -> String {
        match self.coin.year {
            Some(year) if year != 0 => year.to_string(),
            _ => UNKNOWN_YEAR.to_string(),
        }
    }

    pub fn catalog_number_label(&self) -> &str {
        self.coin
            .km
            .as_deref()
            .filter(|km| !km.is_empty())
            .unwrap_or(NOT_AVAILABLE)
    }

    pub fn denomination_label(&self) -> &str {
        self.coin
            .denomination
            .as_ref()
            .map(|d| d.denomination_name.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or(UNKNOWN_LABEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn view(coin: CoinRecord) -> CoinView {
        CoinView {
            coin,
            country_name: None,
            country_status: None,
        }
    }

    #[test]
    fn test_preferred_url_falls_back_to_medium() {
        let variants = ImageVariants {
            original: None,
            medium: Some("m.jpg".into()),
            thumbnail: Some("t.jpg".into()),
        };
        assert_eq!(variants.preferred_url(), Some("m.jpg"));
        assert_eq!(variants.card_url(), Some("m.jpg"));
    }

    #[test]
    fn test_labels_for_missing_fields() {
        let v = view(CoinRecord::default());
        assert_eq!(v.price_label(), "N/A");
        assert_eq!(v.year_label(), "?");
        assert_eq!(v.catalog_number_label(), "N/A");
        assert_eq!(v.denomination_label(), "Unknown");
        assert!(v.obverse_url().is_none());
    }

    #[test]
    fn test_price_label_has_two_decimals() {
        let v = view(CoinRecord {
            price_usd: Some(dec!(12.5)),
            year: Some(-44),
            ..Default::default()
        });
        assert_eq!(v.price_label(), "$12.50");
        assert_eq!(v.year_label(), "-44");
    }

    #[test]
    fn test_country_resolution_sentinel() {
        assert_eq!(
            CountryResolution::Resolved("Republic of Rome".into()).display_name(),
            "Republic of Rome"
        );
        assert_eq!(CountryResolution::Unlinked.display_name(), "Unknown");
        assert_eq!(
            CountryResolution::Failed("boom".into()).status(),
            CountryStatus::Error
        );
    }

    #[test]
    fn test_partial_record_deserializes_with_defaults() {
        let coin: CoinRecord = serde_json::from_value(serde_json::json!({
            "coinId": 42,
            "name": "Denarius of Caesar",
            "isOwned": true,
            "images": { "obverse": { "medium": "o.jpg" } }
        }))
        .unwrap();

        assert_eq!(coin.coin_id, 42);
        assert!(coin.owned());
        assert!(!coin.marked);
        assert!(coin.period.is_none());
    }
}
