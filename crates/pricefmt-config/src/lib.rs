//! # Pricefmt Configuration Layer
//!
//! Configuration and settings resolution for Pricefmt.
//!
//! # Features
//!
//! - **Configuration root**: per-country, per-language formats, global default,
//!   numeral policy, locale mapping and custom dataset path ([`FormatConfig`])
//! - **Partial layers**: typed optional fields with a field-by-field merge
//!   ([`FormatLayer`], [`FormatOptions`])
//! - **Validation**: every violation reported at once ([`Validate`])
//! - **Loading**: JSON or TOML, from a string or a file
//! - **Resolution**: the country / language / catalog / default fallback chain
//!   ([`SettingsResolver`])
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use pricefmt_config::{FormatConfig, FormatOptions, SettingsResolver, SettingsSource};
//!
//! let config = Arc::new(FormatConfig::default());
//! let catalog = Arc::new(config.load_catalog());
//! let resolver = SettingsResolver::new(config, catalog);
//!
//! // Not configured, found in the catalog by its ISO alpha-2 code.
//! let resolved = resolver.resolve(Some("JP"), Some("en"), &FormatOptions::new()).unwrap();
//! assert_eq!(resolved.settings.symbol, "¥");
//! assert_eq!(resolved.source, SettingsSource::Catalog { currency_code: "JPY".into() });
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod config;
mod error;
mod layer;
mod resolver;

// Re-export core types
pub use config::{CountryConfig, FormatConfig, LocaleConfig};
pub use error::{ConfigError, ConfigResult, Validate, ValidationError};
pub use layer::{CompactLayer, FormatLayer, FormatOptions, TierLayer};
pub use resolver::{
    Resolution, SettingsResolver, SettingsSource, FALLBACK_LANGUAGE, SYMBOL_FIRST_CURRENCIES,
};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::FormatConfig;
    pub use crate::error::{ConfigError, ConfigResult, Validate};
    pub use crate::layer::{FormatLayer, FormatOptions};
    pub use crate::resolver::{Resolution, SettingsResolver};
}
