//! Overlay of a fetched coin detail onto the record the caller already holds.
//!
//! The gallery list fetch carries the ownership flag and image URLs, which the
//! detail fetch may not. Those two fields keep the caller's value unless the
//! detail provides one; every other field comes from the detail.

use super::coins_model::{CoinDetail, CoinRecord, CoinView};
use crate::query::QueryState;

pub fn merge_coin_view(partial: &CoinRecord, detail: Option<&CoinDetail>) -> CoinView {
    let Some(detail) = detail else {
        return CoinView {
            coin: partial.clone(),
            country_name: None,
            country_status: None,
        };
    };

    let mut coin = detail.coin.clone();
    if !coin.owned() {
        coin.is_owned = partial.is_owned;
    }
    if coin.images.is_none() {
        coin.images = partial.images.clone();
    }

    CoinView {
        coin,
        country_name: Some(detail.country_name.clone()),
        country_status: Some(detail.country_status),
    }
}

/// View for the current state of a detail query: the partial record while
/// loading, on failure or when the coin was not found.
pub fn display_coin(partial: &CoinRecord, state: &QueryState<CoinDetail>) -> CoinView {
    merge_coin_view(partial, state.data())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coins::coins_model::{
        CoinImages, CountryResolution, CountryStatus, ImageVariants, Period,
    };
    use crate::errors::ErrorInfo;
    use rust_decimal_macros::dec;

    fn images(prefix: &str) -> CoinImages {
        CoinImages {
            obverse: Some(ImageVariants {
                original: Some(format!("{prefix}/obverse.jpg")),
                medium: Some(format!("{prefix}/obverse_m.jpg")),
                thumbnail: None,
            }),
            reverse: Some(ImageVariants {
                original: None,
                medium: Some(format!("{prefix}/reverse_m.jpg")),
                thumbnail: None,
            }),
        }
    }

    fn partial() -> CoinRecord {
        CoinRecord {
            coin_id: 42,
            name: "Denarius".into(),
            is_owned: Some(true),
            images: Some(images("list")),
            ..Default::default()
        }
    }

    fn fetched(is_owned: Option<bool>, images: Option<CoinImages>) -> CoinDetail {
        CoinDetail::new(
            CoinRecord {
                coin_id: 42,
                name: "Denarius of Julius Caesar".into(),
                price_usd: Some(dec!(850)),
                period_id: Some(7),
                period: Some(Period {
                    period_name: "Late Republic".into(),
                    period_link: None,
                }),
                is_owned,
                images,
                ..Default::default()
            },
            CountryResolution::Resolved("Republic of Rome".into()),
        )
    }

    #[test]
    fn test_missing_ownership_keeps_partial_flag() {
        let view = merge_coin_view(&partial(), Some(&fetched(None, None)));
        assert!(view.is_owned());
    }

    #[test]
    fn test_false_ownership_keeps_partial_flag() {
        let view = merge_coin_view(&partial(), Some(&fetched(Some(false), None)));
        assert_eq!(view.coin.is_owned, Some(true));
    }

    #[test]
    fn test_fetched_ownership_wins_when_true() {
        let mut not_owned = partial();
        not_owned.is_owned = Some(false);

        let view = merge_coin_view(&not_owned, Some(&fetched(Some(true), None)));
        assert_eq!(view.coin.is_owned, Some(true));
    }

    #[test]
    fn test_absent_fetched_images_keep_partial_images() {
        let view = merge_coin_view(&partial(), Some(&fetched(None, None)));
        assert_eq!(view.coin.images, Some(images("list")));
        assert_eq!(view.obverse_url(), Some("list/obverse.jpg"));
    }

    #[test]
    fn test_present_fetched_images_replace_partial_images() {
        let view = merge_coin_view(&partial(), Some(&fetched(None, Some(images("detail")))));
        assert_eq!(view.coin.images, Some(images("detail")));
        assert_eq!(view.reverse_url(), Some("detail/reverse_m.jpg"));
    }

    #[test]
    fn test_other_fields_come_from_detail() {
        let view = merge_coin_view(&partial(), Some(&fetched(None, None)));
        assert_eq!(view.coin.name, "Denarius of Julius Caesar");
        assert_eq!(view.price_label(), "$850.00");
        assert_eq!(view.country_name.as_deref(), Some("Republic of Rome"));
        assert_eq!(view.country_status, Some(CountryStatus::Resolved));
    }

    #[test]
    fn test_merge_is_idempotent() {
        let detail = fetched(None, None);
        let once = merge_coin_view(&partial(), Some(&detail));
        let twice = merge_coin_view(&once.coin, Some(&detail));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_display_coin_uses_partial_until_ready() {
        let loading = display_coin(&partial(), &QueryState::Loading);
        assert_eq!(loading.coin, partial());
        assert!(loading.country_name.is_none());

        let failed = display_coin(
            &partial(),
            &QueryState::Failed(ErrorInfo {
                kind: "network".into(),
                message: "offline".into(),
            }),
        );
        assert_eq!(failed.coin, partial());

        let ready = display_coin(&partial(), &QueryState::Ready(Some(fetched(None, None))));
        assert_eq!(ready.country_name.as_deref(), Some("Republic of Rome"));
    }
}
