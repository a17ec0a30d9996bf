use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use crate::{
    error::{core_status, ApiError, ApiResult},
    main_lib::AppState,
};
use denarii_core::{
    catalog::{CoinCatalog, CoinFilters, SortKey},
    coins::{display_coin, CoinDetail, CoinRecord, CoinView},
    errors::Error as CoreError,
    query::{QueryResult, QueryState},
};

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct CatalogQuery {
    /// Category id, or `all`
    category: Option<String>,
    owned_only: Option<bool>,
    sort_by: Option<SortKey>,
}

impl TryFrom<CatalogQuery> for CoinFilters {
    type Error = ApiError;

    fn try_from(query: CatalogQuery) -> Result<Self, Self::Error> {
        let category = match query.category.as_deref().map(str::trim) {
            None | Some("") | Some("all") => None,
            Some(raw) => Some(
                raw.parse::<i64>()
                    .map_err(|_| ApiError::BadRequest(format!("Invalid category: {}", raw)))?,
            ),
        };
        Ok(CoinFilters {
            category,
            owned_only: query.owned_only.unwrap_or(false),
            sort_by: query.sort_by.unwrap_or_default(),
        })
    }
}

async fn get_catalog(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CatalogQuery>,
) -> ApiResult<Json<CoinCatalog>> {
    let filters = CoinFilters::try_from(query)?;
    let catalog = state.catalog_service.get_catalog(&filters).await?;
    Ok(Json(catalog))
}

async fn get_coin_detail(
    Path(id): Path<i64>,
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<QueryResult<CoinDetail>>) {
    let result = state.coin_detail_service.get_coin_detail(id).await;
    let status = match &result {
        Ok(Some(_)) => StatusCode::OK,
        Ok(None) => StatusCode::NOT_FOUND,
        Err(err) => {
            tracing::error!("Failed to resolve coin {}: {}", id, err);
            core_status(err)
        }
    };
    (status, Json(QueryState::from_result(result).into()))
}

/// Overlay the resolved detail on the caller's list record.
async fn get_coin_view(
    Path(id): Path<i64>,
    State(state): State<Arc<AppState>>,
    Json(mut partial): Json<CoinRecord>,
) -> ApiResult<Json<CoinView>> {
    // A body without `coinId` deserializes to 0
    if partial.coin_id != 0 && partial.coin_id != id {
        return Err(CoreError::Validation(format!(
            "Body coinId {} does not match path id {}",
            partial.coin_id, id
        ))
        .into());
    }
    partial.coin_id = id;
    let detail = QueryState::from_result(state.coin_detail_service.get_coin_detail(id).await);
    if let Some(err) = detail.error() {
        tracing::warn!("Serving list fields for coin {}: {}", id, err.message);
    }
    Ok(Json(display_coin(&partial, &detail)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/coins", get(get_catalog))
        .route("/coins/{id}", get(get_coin_detail))
        .route("/coins/{id}/view", post(get_coin_view))
}
