//! In-memory exchange rate table.

use std::path::Path;

use async_trait::async_trait;
use dashmap::DashMap;
use rust_decimal::Decimal;
use serde::Deserialize;

use pricefmt_traits::{CurrencyPair, ExchangeRateProvider, TraitError};

/// JSON record for a rate file entry.
#[derive(Debug, Deserialize)]
struct RateRecord {
    from: String,
    to: String,
    rate: Decimal,
}

/// Fixed rates held in memory, e.g. loaded from an end-of-day file.
///
/// A pair missing in one direction is answered from the other as `1 / rate`.
///
/// # Example
///
/// ```rust
/// use pricefmt_ext_rates::StaticRateTable;
/// use rust_decimal_macros::dec;
///
/// let table = StaticRateTable::new().with_rate("USD", "EGP", dec!(50));
/// assert_eq!(table.lookup("EGP", "USD"), Some(dec!(0.02)));
/// ```
#[derive(Debug, Default)]
pub struct StaticRateTable {
    rates: DashMap<CurrencyPair, Decimal>,
}

impl StaticRateTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to add a rate.
    #[must_use]
    pub fn with_rate(self, from: &str, to: &str, rate: Decimal) -> Self {
        self.insert(from, to, rate);
        self
    }

    /// Adds or replaces a rate.
    pub fn insert(&self, from: &str, to: &str, rate: Decimal) {
        self.rates.insert(CurrencyPair::new(from, to), rate);
    }

    /// Parses `[{"from": "USD", "to": "EGP", "rate": 48.5}, ...]`.
    pub fn from_json_str(json: &str) -> Result<Self, TraitError> {
        let records: Vec<RateRecord> =
            serde_json::from_str(json).map_err(|e| TraitError::ParseError(e.to_string()))?;
        let table = Self::new();
        for record in records {
            if record.rate <= Decimal::ZERO {
                return Err(TraitError::InvalidInput(format!(
                    "rate {}/{} must be positive, got {}",
                    record.from, record.to, record.rate
                )));
            }
            table.insert(&record.from, &record.to, record.rate);
        }
        Ok(table)
    }

    /// Loads a JSON rate file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, TraitError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| TraitError::SourceNotAvailable(format!("{}: {e}", path.display())))?;
        Self::from_json_str(&json)
    }

    /// Rate for a pair, direct or inverted.
    pub fn lookup(&self, from: &str, to: &str) -> Option<Decimal> {
        if from == to {
            return Some(Decimal::ONE);
        }
        let pair = CurrencyPair::new(from, to);
        if let Some(rate) = self.rates.get(&pair) {
            return Some(*rate);
        }
        self.rates
            .get(&pair.inverse())
            .and_then(|rate| Decimal::ONE.checked_div(*rate))
    }

    /// Number of stored pairs.
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Returns true if no rate is stored.
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

#[async_trait]
impl ExchangeRateProvider for StaticRateTable {
    async fn rate(&self, from: &str, to: &str) -> Result<Decimal, TraitError> {
        self.lookup(from, to)
            .ok_or_else(|| TraitError::NotFound(CurrencyPair::new(from, to).to_string()))
    }
}
