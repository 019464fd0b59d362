//! # Pricefmt Traits
//!
//! Capabilities the formatter consumes but does not implement.
//!
//! - [`rates`]: exchange rates for currency conversion
//! - [`spell_out`]: amounts in words
//! - [`locale`]: the caller's ambient language
//!
//! ## Dependency Injection
//!
//! ```ignore
//! PriceFormatter::builder()
//!     .with_rate_provider(impl ExchangeRateProvider)
//!     .with_spell_out(impl SpellOut)
//!     .with_locale_provider(impl CurrentLocaleProvider)
//!     .build()
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod locale;
pub mod rates;
pub mod spell_out;

// Re-export commonly used types
pub use error::TraitError;
pub use locale::{CurrentLocaleProvider, FixedLocale};
pub use rates::{CurrencyPair, ExchangeRateProvider};
pub use spell_out::SpellOut;
