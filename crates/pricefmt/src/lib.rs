//! # Pricefmt
//!
//! Locale-aware monetary amount formatting.
//!
//! A [`PriceFormatter`] turns an amount plus an optional country and language
//! into a display string. Settings come from a fallback chain, highest
//! priority first:
//!
//! 1. per-call [`FormatOptions`]
//! 2. the country's format for the language
//! 3. the country's `en` format
//! 4. a format synthesized from the built-in currency catalog
//! 5. the global default
//!
//! Rendering then rounds, groups digits, optionally compacts (1.5K) or
//! parenthesizes negatives, transcribes to Eastern Arabic digits where the
//! language or configuration asks for it, and places the symbol.
//!
//! ## Quick Start
//!
//! ```rust
//! use pricefmt::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let formatter = PriceFormatter::default();
//! let none = FormatOptions::new();
//!
//! assert_eq!(formatter.format(dec!(5), Some("EG"), Some("en"), &none).unwrap(), "5 LE");
//! assert_eq!(formatter.format(dec!(1000), Some("JP"), Some("en"), &none).unwrap(), "¥1,000");
//! assert_eq!(formatter.format(dec!(15), Some("XX"), Some("en"), &none).unwrap(), "$15.00");
//! assert_eq!(formatter.format_percentage(dec!(0.255), 1, None, &none).unwrap(), "25.5%");
//! ```
//!
//! ## Dependency Injection
//!
//! Exchange rates, spell-out and the ambient locale are capabilities supplied
//! by the caller:
//!
//! ```rust
//! use std::sync::Arc;
//! use pricefmt::prelude::*;
//! use pricefmt::FixedLocale;
//!
//! let formatter = PriceFormatter::builder()
//!     .with_config(FormatConfig::default())
//!     .with_locale_provider(Arc::new(FixedLocale::new("ar")))
//!     .build()
//!     .unwrap();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod builder;
mod formatter;

pub use builder::PriceFormatterBuilder;
pub use formatter::PriceFormatter;

// Re-export the layers a caller needs
pub use pricefmt_catalog::{CatalogError, CurrencyCatalog, CurrencyEntry};
pub use pricefmt_config::{
    ConfigError, ConfigResult, CountryConfig, FormatConfig, FormatLayer, FormatOptions,
    LocaleConfig, Resolution, SettingsSource, Validate,
};
pub use pricefmt_core::amount::{extract_amount, is_monetary_value};
pub use pricefmt_core::numerals::NumeralPolicy;
pub use pricefmt_core::{
    CompactSettings, FormatError, FormatResult, FormatSettings, Position, RoundingMode,
};
pub use pricefmt_traits::{
    CurrentLocaleProvider, ExchangeRateProvider, FixedLocale, SpellOut, TraitError,
};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::builder::PriceFormatterBuilder;
    pub use crate::formatter::PriceFormatter;
    pub use pricefmt_config::{FormatConfig, FormatLayer, FormatOptions};
    pub use pricefmt_core::amount::{extract_amount, is_monetary_value};
    pub use pricefmt_core::{FormatError, FormatResult, Position, RoundingMode};
}
