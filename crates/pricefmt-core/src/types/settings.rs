//! Fully resolved rendering settings.
//!
//! A [`FormatSettings`] value is produced fresh for every formatting call by
//! merging configuration layers, and is never mutated afterwards.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Position, RoundingMode};
use crate::error::{FormatError, FormatResult};

/// Largest number of decimal places a [`Decimal`] can carry.
pub const MAX_DECIMALS: u32 = 28;

// =============================================================================
// FORMAT SETTINGS
// =============================================================================

/// Concrete settings used to render one amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatSettings {
    /// Currency symbol.
    pub symbol: String,
    /// Symbol placement.
    pub position: Position,
    /// Inserted between symbol and number.
    pub separator: String,
    /// Fractional point.
    pub decimal_separator: String,
    /// Digit group separator.
    pub thousand_separator: String,
    /// Number of decimal places.
    pub decimals: u32,
    /// Drop the fraction entirely when the rounded amount is whole.
    pub trim_zero_decimals: bool,
    /// `None` means "decide from the language".
    pub use_eastern_arabic_numerals: Option<bool>,
    /// Rounding policy.
    pub rounding_mode: RoundingMode,
    /// Wrap negatives in parentheses instead of a leading minus.
    pub accounting_format: bool,
    /// Magnitude compaction (disabled unless `compact.enabled`).
    #[serde(alias = "compact_format")]
    pub compact: CompactSettings,
}

impl Default for FormatSettings {
    fn default() -> Self {
        Self {
            symbol: "$".to_string(),
            position: Position::Before,
            separator: String::new(),
            decimal_separator: ".".to_string(),
            thousand_separator: ",".to_string(),
            decimals: 2,
            trim_zero_decimals: false,
            use_eastern_arabic_numerals: Some(false),
            rounding_mode: RoundingMode::HalfUp,
            accounting_format: false,
            compact: CompactSettings::default(),
        }
    }
}

impl FormatSettings {
    /// Settings for a percentage: `%` after the number with no separator.
    ///
    /// Grouping and fractional separators are taken from `base`.
    #[must_use]
    pub fn percentage(decimals: u32, base: &FormatSettings) -> Self {
        Self {
            symbol: "%".to_string(),
            position: Position::After,
            separator: String::new(),
            decimal_separator: base.decimal_separator.clone(),
            thousand_separator: base.thousand_separator.clone(),
            decimals,
            trim_zero_decimals: false,
            use_eastern_arabic_numerals: None,
            rounding_mode: RoundingMode::HalfUp,
            accounting_format: false,
            compact: CompactSettings::default(),
        }
    }

    /// Checks the invariants the renderer relies on.
    pub fn validate(&self) -> FormatResult<()> {
        if self.decimals > MAX_DECIMALS {
            return Err(FormatError::invalid_config(format!(
                "decimals {} exceeds maximum of {MAX_DECIMALS}",
                self.decimals
            )));
        }
        self.compact.validate()
    }
}

// =============================================================================
// COMPACT SETTINGS
// =============================================================================

/// Abbreviated magnitude display (1.5K, 1.5M, 1.5B).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompactSettings {
    /// Whether compaction applies.
    pub enabled: bool,
    /// Lower bound of each tier.
    pub thresholds: CompactThresholds,
    /// Suffix of each tier.
    pub symbols: CompactSymbols,
    /// Decimal places of the compacted number.
    pub precision: u32,
}

impl Default for CompactSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            thresholds: CompactThresholds::default(),
            symbols: CompactSymbols::default(),
            precision: 1,
        }
    }
}

/// Tier thresholds; must strictly increase.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompactThresholds {
    /// Thousand tier.
    pub thousand: Decimal,
    /// Million tier.
    pub million: Decimal,
    /// Billion tier.
    pub billion: Decimal,
}

impl Default for CompactThresholds {
    fn default() -> Self {
        Self {
            thousand: Decimal::from(1_000),
            million: Decimal::from(1_000_000),
            billion: Decimal::from(1_000_000_000),
        }
    }
}

/// Tier suffixes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompactSymbols {
    /// Thousand tier suffix.
    pub thousand: String,
    /// Million tier suffix.
    pub million: String,
    /// Billion tier suffix.
    pub billion: String,
}

impl Default for CompactSymbols {
    fn default() -> Self {
        Self {
            thousand: "K".to_string(),
            million: "M".to_string(),
            billion: "B".to_string(),
        }
    }
}

/// A selected compaction tier, ordered by magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CompactTier {
    /// Below the thousand threshold; nothing is divided.
    None,
    /// Thousand tier.
    Thousand,
    /// Million tier.
    Million,
    /// Billion tier.
    Billion,
}

impl CompactSettings {
    /// Rejects thresholds that are not positive and strictly increasing.
    pub fn validate(&self) -> FormatResult<()> {
        let t = &self.thresholds;
        if t.thousand <= Decimal::ZERO || t.thousand >= t.million || t.million >= t.billion {
            return Err(FormatError::InvalidCompactThresholds {
                thousand: t.thousand,
                million: t.million,
                billion: t.billion,
            });
        }
        if self.precision > MAX_DECIMALS {
            return Err(FormatError::invalid_config(format!(
                "compact precision {} exceeds maximum of {MAX_DECIMALS}",
                self.precision
            )));
        }
        Ok(())
    }

    /// Selects the largest tier whose threshold is at or below `magnitude`.
    #[must_use]
    pub fn tier_for(&self, magnitude: Decimal) -> CompactTier {
        let t = &self.thresholds;
        if magnitude >= t.billion {
            CompactTier::Billion
        } else if magnitude >= t.million {
            CompactTier::Million
        } else if magnitude >= t.thousand {
            CompactTier::Thousand
        } else {
            CompactTier::None
        }
    }

    /// Returns the divisor and suffix for a tier.
    #[must_use]
    pub fn divisor_and_suffix(&self, tier: CompactTier) -> (Decimal, &str) {
        match tier {
            CompactTier::None => (Decimal::ONE, ""),
            CompactTier::Thousand => (self.thresholds.thousand, &self.symbols.thousand),
            CompactTier::Million => (self.thresholds.million, &self.symbols.million),
            CompactTier::Billion => (self.thresholds.billion, &self.symbols.billion),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(FormatSettings::default().validate().is_ok());
    }

    #[test]
    fn test_tier_selection() {
        let compact = CompactSettings::default();
        assert_eq!(compact.tier_for(dec!(999)), CompactTier::None);
        assert_eq!(compact.tier_for(dec!(1000)), CompactTier::Thousand);
        assert_eq!(compact.tier_for(dec!(1500000)), CompactTier::Million);
        assert_eq!(compact.tier_for(dec!(2000000000)), CompactTier::Billion);
    }

    proptest! {
        #[test]
        fn prop_tier_selection_is_monotone(
            thousand in 1i64..1_000_000,
            million_gap in 1i64..1_000_000,
            billion_gap in 1i64..1_000_000,
            scale in 0u32..4,
            a in 0u64..10_000_000_000,
            b in 0u64..10_000_000_000,
        ) {
            let mut compact = CompactSettings::default();
            compact.thresholds = CompactThresholds {
                thousand: Decimal::new(thousand, scale),
                million: Decimal::new(thousand + million_gap, scale),
                billion: Decimal::new(thousand + million_gap + billion_gap, scale),
            };
            prop_assert!(compact.validate().is_ok());

            let (low, high) = (Decimal::from(a.min(b)), Decimal::from(a.max(b)));
            prop_assert!(compact.tier_for(low) <= compact.tier_for(high));

            for magnitude in [low, high] {
                let tier = compact.tier_for(magnitude);
                if tier != CompactTier::None {
                    let (threshold, _) = compact.divisor_and_suffix(tier);
                    prop_assert!(threshold <= magnitude);
                }
            }
        }
    }

    #[test]
    fn test_tier_order() {
        assert!(CompactTier::None < CompactTier::Thousand);
        assert!(CompactTier::Million < CompactTier::Billion);
    }

    #[test]
    fn test_non_increasing_thresholds_rejected() {
        let mut compact = CompactSettings::default();
        compact.thresholds.million = dec!(1000);
        assert!(matches!(
            compact.validate(),
            Err(FormatError::InvalidCompactThresholds { .. })
        ));
    }

    #[test]
    fn test_zero_threshold_rejected() {
        let mut compact = CompactSettings::default();
        compact.thresholds.thousand = Decimal::ZERO;
        assert!(compact.validate().is_err());
    }

    #[test]
    fn test_decimals_limit() {
        let settings = FormatSettings {
            decimals: 29,
            ..FormatSettings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(FormatError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings: FormatSettings =
            serde_json::from_str(r#"{"symbol": "€", "position": "after"}"#).unwrap();
        assert_eq!(settings.symbol, "€");
        assert_eq!(settings.position, Position::After);
        assert_eq!(settings.decimals, 2);
        assert_eq!(settings.compact.precision, 1);
    }

    #[test]
    fn test_percentage_settings() {
        let base = FormatSettings {
            decimal_separator: ",".into(),
            thousand_separator: ".".into(),
            ..FormatSettings::default()
        };
        let pct = FormatSettings::percentage(1, &base);
        assert_eq!(pct.symbol, "%");
        assert_eq!(pct.position, Position::After);
        assert_eq!(pct.decimal_separator, ",");
        assert_eq!(pct.decimals, 1);
    }
}
