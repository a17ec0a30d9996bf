use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;
use denarii_core::{
    catalog::{CatalogService, CatalogServiceTrait},
    coins::{CoinDetailService, CoinDetailServiceTrait, CoinRepositoryTrait},
    constants::COIN_DETAIL_CACHE_CAPACITY,
    query::QueryCache,
};
use denarii_supabase::{SupabaseClient, SupabaseCoinRepository, SupabaseConfig};

pub struct AppState {
    pub coin_detail_service: Arc<dyn CoinDetailServiceTrait>,
    pub catalog_service: Arc<dyn CatalogServiceTrait>,
}

pub fn init_tracing() {
    let log_format = std::env::var("DENARII_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let supabase_config = SupabaseConfig::new(&config.supabase_url, &config.supabase_anon_key)
        .with_timeout(config.request_timeout);
    let client = SupabaseClient::new(&supabase_config)?;
    tracing::info!("Catalog backend: {}", client.rest_url());

    let repository: Arc<dyn CoinRepositoryTrait> = Arc::new(SupabaseCoinRepository::new(client));
    Ok(build_state_with_repository(repository, config))
}

/// Wire the services on top of an already constructed repository.
pub fn build_state_with_repository(
    repository: Arc<dyn CoinRepositoryTrait>,
    config: &Config,
) -> Arc<AppState> {
    let detail_cache = Arc::new(QueryCache::new(
        config.detail_stale_time,
        COIN_DETAIL_CACHE_CAPACITY,
    ));
    let coin_detail_service = Arc::new(CoinDetailService::with_cache(
        repository.clone(),
        detail_cache,
    ));
    let catalog_service = Arc::new(CatalogService::with_options(
        repository,
        config.catalog_stale_time,
        config.catalog_limit,
    ));

    Arc::new(AppState {
        coin_detail_service,
        catalog_service,
    })
}
