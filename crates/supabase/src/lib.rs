//! Supabase storage implementation for the Denarii District gallery.
//!
//! This crate talks to the hosted catalog database through its PostgREST
//! endpoint. It implements the repository traits defined in `denarii-core`
//! and contains:
//! - A small PostgREST query builder over `reqwest`
//! - Table and column names of the hosted schema
//! - Row types for the coin tables and their conversion to core models
//!
//! # Architecture
//!
//! ```text
//!        core (domain)
//!              │
//!              ▼
//!     supabase (this crate)
//!              │
//!              ▼
//!    PostgREST /rest/v1 (hosted)
//! ```

pub mod client;
pub mod coins;
pub mod errors;
pub mod headers;
pub mod query;
pub mod schema;

pub use client::{SupabaseClient, SupabaseConfig};
pub use coins::SupabaseCoinRepository;
pub use errors::SupabaseError;

// Re-export from denarii-core for convenience
pub use denarii_core::errors::{Error, Result};
