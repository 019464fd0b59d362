//! Value types shared by every formatting stage.
//!
//! - [`FormatSettings`]: fully resolved rendering settings
//! - [`CompactSettings`]: magnitude compaction (K / M / B)
//! - [`Position`]: symbol placement
//! - [`RoundingMode`]: rounding policy

mod position;
mod rounding_mode;
mod settings;

pub use position::Position;
pub use rounding_mode::RoundingMode;
pub use settings::{
    CompactSettings, CompactSymbols, CompactThresholds, CompactTier, FormatSettings, MAX_DECIMALS,
};
