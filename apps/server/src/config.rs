use anyhow::{anyhow, Context};
use std::{net::SocketAddr, time::Duration};

use denarii_core::constants::{CATALOG_STALE_TIME, COIN_DETAIL_STALE_TIME, DEFAULT_CATALOG_LIMIT};

/// Longest accepted freshness window
const MAX_STALE_MINUTES: u64 = 24 * 60;

const MAX_REQUEST_TIMEOUT_MS: u64 = 60 * 60 * 1000;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub supabase_url: String,
    pub supabase_anon_key: String,
    pub detail_stale_time: Duration,
    pub catalog_stale_time: Duration,
    pub catalog_limit: usize,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
}

impl Config {
    /// Read settings from the process environment, loading `.env` first if present.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let listen_addr: SocketAddr = var("DENARII_LISTEN_ADDR")
            .unwrap_or_else(|| "0.0.0.0:8080".to_string())
            .parse()
            .context("Invalid DENARII_LISTEN_ADDR")?;

        // The public-prefixed names are what the web frontend's .env already carries
        let supabase_url = var("SUPABASE_URL")
            .or_else(|| var("NEXT_PUBLIC_SUPABASE_URL"))
            .ok_or_else(|| anyhow!("SUPABASE_URL is not set"))?;
        let supabase_anon_key = var("SUPABASE_ANON_KEY")
            .or_else(|| var("NEXT_PUBLIC_SUPABASE_ANON_KEY"))
            .ok_or_else(|| anyhow!("SUPABASE_ANON_KEY is not set"))?;

        let detail_stale_time = match var("DENARII_DETAIL_STALE_MINUTES") {
            Some(raw) => minutes(&raw).context("Invalid DENARII_DETAIL_STALE_MINUTES")?,
            None => COIN_DETAIL_STALE_TIME,
        };
        let catalog_stale_time = match var("DENARII_CATALOG_STALE_MINUTES") {
            Some(raw) => minutes(&raw).context("Invalid DENARII_CATALOG_STALE_MINUTES")?,
            None => CATALOG_STALE_TIME,
        };
        let catalog_limit = match var("DENARII_CATALOG_LIMIT") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .context("Invalid DENARII_CATALOG_LIMIT")?,
            None => DEFAULT_CATALOG_LIMIT,
        };

        let cors_allow = var("DENARII_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = var("DENARII_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|| "30000".into())
            .trim()
            .parse()
            .context("Invalid DENARII_REQUEST_TIMEOUT_MS")?;
        if timeout_ms == 0 || timeout_ms > MAX_REQUEST_TIMEOUT_MS {
            return Err(anyhow!(
                "Invalid DENARII_REQUEST_TIMEOUT_MS: must be between 1 and {}",
                MAX_REQUEST_TIMEOUT_MS
            ));
        }

        Ok(Self {
            listen_addr,
            supabase_url,
            supabase_anon_key,
            detail_stale_time,
            catalog_stale_time,
            catalog_limit,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
        })
    }
}

fn minutes(raw: &str) -> anyhow::Result<Duration> {
    let minutes: u64 = raw.trim().parse()?;
    if minutes == 0 || minutes > MAX_STALE_MINUTES {
        return Err(anyhow!(
            "must be between 1 and {} minutes",
            MAX_STALE_MINUTES
        ));
    }
    let secs = minutes
        .checked_mul(60)
        .ok_or_else(|| anyhow!("{} minutes is out of range", minutes))?;
    Ok(Duration::from_secs(secs))
}
