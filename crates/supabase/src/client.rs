//! Supabase REST client

use reqwest::Client;
use std::time::Duration;

use crate::errors::SupabaseError;
use crate::headers::supabase_headers;
use crate::query::QueryBuilder;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for a Supabase project
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    /// Project URL, e.g. `https://abc.supabase.co`
    pub url: String,
    pub anon_key: String,
    pub timeout: Duration,
}

impl SupabaseConfig {
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            anon_key: anon_key.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Client for the project's PostgREST endpoint (`{url}/rest/v1`)
#[derive(Clone)]
pub struct SupabaseClient {
    http: Client,
    rest_url: String,
}

impl SupabaseClient {
    pub fn new(config: &SupabaseConfig) -> Result<Self, SupabaseError> {
        let url = config.url.trim().trim_end_matches('/');
        if url.is_empty() {
            return Err(SupabaseError::Config("Supabase URL is empty".into()));
        }
        if config.anon_key.trim().is_empty() {
            return Err(SupabaseError::Config("Supabase anon key is empty".into()));
        }

        let http = Client::builder()
            .default_headers(supabase_headers(config.anon_key.trim())?)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http,
            rest_url: format!("{}/rest/v1", url),
        })
    }

    /// Start a query against `table`
    pub fn table(&self, table: &str) -> QueryBuilder<'_> {
        QueryBuilder::new(&self.http, &self.rest_url, table)
    }

    pub fn rest_url(&self) -> &str {
        &self.rest_url
    }
}
