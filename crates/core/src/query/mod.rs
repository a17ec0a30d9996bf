//! Query caching and observable query state.
//!
//! - [`QueryCache`]: in-memory keyed store with a freshness window, built on moka
//! - [`QueryState`]: loading / failed / ready tri-state handed to consumers

mod query_cache;
mod query_state;

pub use query_cache::{QueryCache, QueryKey};
pub use query_state::{spawn_query, QueryResult, QueryState};
