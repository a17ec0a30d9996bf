//! Denarii Core - Coin catalog models, services, and traits.
//!
//! This crate contains the catalog logic of the Denarii District gallery:
//! detail resolution with its country lookup, the merge overlay used by
//! presentation code, gallery filtering and the versioned query cache.
//! It is backend-agnostic and defines traits that are implemented by the
//! `supabase` crate.

pub mod catalog;
pub mod coins;
pub mod constants;
pub mod errors;
pub mod query;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
