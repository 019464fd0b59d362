//! Error types for the Pricefmt library.
//!
//! Resolution and rendering either produce a complete string or fail with one
//! of the variants below. No partially formatted output is ever returned.

use rust_decimal::Decimal;
use thiserror::Error;

/// A specialized Result type for formatting operations.
pub type FormatResult<T> = Result<T, FormatError>;

/// The main error type for formatting operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormatError {
    /// No country or currency settings resolved and strict lookup was requested.
    #[error("Currency with code '{country}' not found.")]
    CurrencyNotFound {
        /// The country (or currency) key that failed to resolve.
        country: String,
    },

    /// A rounding mode name outside the supported set.
    #[error(
        "Invalid rounding mode '{mode}'. Supported modes are: 'ceil', 'floor', 'half_up', 'half_down'."
    )]
    InvalidRoundingMode {
        /// The rejected mode name.
        mode: String,
    },

    /// The exchange rate provider could not supply a rate.
    #[error("Exchange rate from {from} to {to} unavailable: {reason}")]
    RateUnavailable {
        /// Source currency code.
        from: String,
        /// Target currency code.
        to: String,
        /// Provider-supplied reason.
        reason: String,
    },

    /// Compact thresholds are not strictly increasing.
    #[error(
        "Compact thresholds must strictly increase (thousand {thousand} < million {million} < billion {billion})"
    )]
    InvalidCompactThresholds {
        /// Thousand tier threshold.
        thousand: Decimal,
        /// Million tier threshold.
        million: Decimal,
        /// Billion tier threshold.
        billion: Decimal,
    },

    /// Spelling out an amount failed or no speller is installed.
    #[error("Spell-out unavailable: {reason}")]
    SpellOutUnavailable {
        /// Description of the failure.
        reason: String,
    },

    /// An amount is too large for the requested arithmetic.
    #[error("Amount overflow: {reason}")]
    Overflow {
        /// What overflowed.
        reason: String,
    },

    /// A resolved setting is outside its valid range.
    #[error("Invalid formatting configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },
}

impl FormatError {
    /// Creates a currency not found error.
    #[must_use]
    pub fn currency_not_found(country: impl Into<String>) -> Self {
        Self::CurrencyNotFound {
            country: country.into(),
        }
    }

    /// Creates an invalid rounding mode error.
    #[must_use]
    pub fn invalid_rounding_mode(mode: impl Into<String>) -> Self {
        Self::InvalidRoundingMode { mode: mode.into() }
    }

    /// Creates a rate unavailable error.
    #[must_use]
    pub fn rate_unavailable(
        from: impl Into<String>,
        to: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::RateUnavailable {
            from: from.into(),
            to: to.into(),
            reason: reason.into(),
        }
    }

    /// Creates an overflow error.
    #[must_use]
    pub fn overflow(reason: impl Into<String>) -> Self {
        Self::Overflow {
            reason: reason.into(),
        }
    }

    /// Creates an invalid configuration error.
    #[must_use]
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}
