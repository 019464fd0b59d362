//! Exchange rate source trait.
//!
//! A provider answers `rate(from, to)`: how many units of `to` one unit of
//! `from` buys. Caching, timeouts and retries belong to the provider.

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::TraitError;

/// An ordered currency pair, `from` then `to`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CurrencyPair {
    /// Source currency code.
    pub from: String,
    /// Target currency code.
    pub to: String,
}

impl CurrencyPair {
    /// Creates a pair.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// The same pair in the opposite direction.
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self {
            from: self.to.clone(),
            to: self.from.clone(),
        }
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.from, self.to)
    }
}

/// Source of exchange rates for `convert`.
#[async_trait]
pub trait ExchangeRateProvider: Send + Sync {
    /// Units of `to` per unit of `from`.
    async fn rate(&self, from: &str, to: &str) -> Result<Decimal, TraitError>;
}

#[async_trait]
impl<P: ExchangeRateProvider + ?Sized> ExchangeRateProvider for std::sync::Arc<P> {
    async fn rate(&self, from: &str, to: &str) -> Result<Decimal, TraitError> {
        (**self).rate(from, to).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::sync::Arc;

    struct Fixed(Decimal);

    #[async_trait]
    impl ExchangeRateProvider for Fixed {
        async fn rate(&self, _from: &str, _to: &str) -> Result<Decimal, TraitError> {
            Ok(self.0)
        }
    }

    #[test]
    fn test_pair_inverse_and_display() {
        let pair = CurrencyPair::new("USD", "EGP");
        assert_eq!(pair.to_string(), "USD/EGP");
        assert_eq!(pair.inverse(), CurrencyPair::new("EGP", "USD"));
    }

    #[tokio::test]
    async fn test_arc_provider_delegates() {
        let provider: Arc<dyn ExchangeRateProvider> = Arc::new(Fixed(dec!(48.5)));
        assert_eq!(provider.rate("USD", "EGP").await.unwrap(), dec!(48.5));
    }
}
