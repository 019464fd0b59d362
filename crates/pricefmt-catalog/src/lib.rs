//! # Pricefmt Catalog
//!
//! World currency dataset for Pricefmt: currency code, country, minor-unit
//! digits and per-language symbols.
//!
//! The dataset ships embedded in the crate (`data/currencies.json`) and is
//! parsed once per process. A custom dataset of the same shape can be merged
//! over it; custom entries win on currency-code conflicts. A custom dataset
//! that cannot be read or parsed is ignored with a warning, since currency
//! display must not fail because of an optional enrichment source.
//!
//! ```json
//! {
//!   "currencies": {
//!     "XYZ": {
//!       "name": "Test Currency",
//!       "country": "TEST",
//!       "countries": ["TS"],
//!       "decimals": 2,
//!       "symbol": { "en": "T$", "native": "T$" }
//!     }
//!   }
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod catalog;
mod entry;
mod error;

pub use catalog::CurrencyCatalog;
pub use entry::{CurrencyEntry, NATIVE_SYMBOL_KEY};
pub use error::{CatalogError, CatalogResult};
