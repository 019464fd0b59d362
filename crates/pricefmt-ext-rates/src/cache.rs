//! Time-to-live cache in front of any rate provider.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use dashmap::DashMap;
use rust_decimal::Decimal;
use tracing::debug;

use pricefmt_traits::{CurrencyPair, ExchangeRateProvider, TraitError};

/// Default lifetime of a cached rate.
pub const DEFAULT_RATE_TTL: Duration = Duration::from_secs(60 * 60);

#[derive(Debug, Clone, Copy)]
struct CachedRate {
    rate: Decimal,
    fetched_at: Instant,
}

/// Caches rates per pair for a fixed lifetime.
///
/// Failures are not cached; the next call asks the inner provider again.
#[derive(Debug)]
pub struct CachedRateProvider<P> {
    inner: P,
    ttl: Duration,
    cache: DashMap<CurrencyPair, CachedRate>,
}

impl<P: ExchangeRateProvider> CachedRateProvider<P> {
    /// Wraps `inner` with the default one-hour lifetime.
    pub fn new(inner: P) -> Self {
        Self::with_ttl(inner, DEFAULT_RATE_TTL)
    }

    /// Wraps `inner` with a custom lifetime.
    pub fn with_ttl(inner: P, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            cache: DashMap::new(),
        }
    }

    /// The wrapped provider.
    pub fn inner(&self) -> &P {
        &self.inner
    }

    /// Drops every cached rate.
    pub fn invalidate(&self) {
        self.cache.clear();
    }

    /// Number of cached pairs, fresh or not.
    pub fn cached_pairs(&self) -> usize {
        self.cache.len()
    }

    fn fresh(&self, pair: &CurrencyPair) -> Option<Decimal> {
        self.cache
            .get(pair)
            .filter(|entry| entry.fetched_at.elapsed() < self.ttl)
            .map(|entry| entry.rate)
    }
}

#[async_trait]
impl<P: ExchangeRateProvider> ExchangeRateProvider for CachedRateProvider<P> {
    async fn rate(&self, from: &str, to: &str) -> Result<Decimal, TraitError> {
        let pair = CurrencyPair::new(from, to);
        if let Some(rate) = self.fresh(&pair) {
            debug!(%pair, %rate, "exchange rate served from cache");
            return Ok(rate);
        }

        let rate = self.inner.rate(from, to).await?;
        debug!(%pair, %rate, "exchange rate fetched");
        self.cache.insert(
            pair,
            CachedRate {
                rate,
                fetched_at: Instant::now(),
            },
        );
        Ok(rate)
    }
}
