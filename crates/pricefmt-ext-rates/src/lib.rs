//! # Pricefmt Rate Providers
//!
//! Reference [`ExchangeRateProvider`](pricefmt_traits::ExchangeRateProvider)
//! implementations:
//!
//! - [`StaticRateTable`]: rates held in memory, optionally loaded from JSON
//! - [`CachedRateProvider`]: per-pair TTL cache (one hour by default) around
//!   any other provider, such as a client for a remote rate service

#![warn(missing_docs)]
#![warn(clippy::all)]

mod cache;
mod table;

pub use cache::{CachedRateProvider, DEFAULT_RATE_TTL};
pub use table::StaticRateTable;
