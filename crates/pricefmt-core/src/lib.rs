//! # Pricefmt Core
//!
//! Core value types and the deterministic rendering stages of Pricefmt.
//!
//! - **Types**: [`FormatSettings`], [`CompactSettings`], [`Position`], [`RoundingMode`]
//! - **Rounding**: ceil / floor / half-up / half-down at a fixed precision
//! - **Numerals**: Eastern Arabic digit transcription and the policy deciding when it applies
//! - **Rendering**: grouping, compaction, symbol placement and sign handling
//!
//! Nothing here knows about countries or languages beyond a language code
//! string; settings resolution lives in `pricefmt-config`.
//!
//! ## Example
//!
//! ```rust
//! use pricefmt_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let settings = FormatSettings {
//!     symbol: "LE".into(),
//!     position: Position::After,
//!     separator: " ".into(),
//!     ..FormatSettings::default()
//! };
//! let policy = NumeralPolicy::default();
//! let out = Renderer::new(&policy).render(dec!(5), &settings, "en").unwrap();
//! assert_eq!(out, "5.00 LE");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::doc_markdown)]

pub mod amount;
pub mod error;
pub mod numerals;
pub mod render;
pub mod rounding;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::amount::{extract_amount, is_monetary_value};
    pub use crate::error::{FormatError, FormatResult};
    pub use crate::numerals::NumeralPolicy;
    pub use crate::render::Renderer;
    pub use crate::rounding::round;
    pub use crate::types::{CompactSettings, FormatSettings, Position, RoundingMode};
}

// Re-export commonly used types at crate root
pub use error::{FormatError, FormatResult};
pub use types::{CompactSettings, FormatSettings, Position, RoundingMode};
