//! Partial format settings and their field-by-field merge.
//!
//! Every configuration source below the global default (a country's
//! per-language format, a catalog-synthesized format, per-call overrides)
//! is a [`FormatLayer`]: each field is either set or inherited. Applying a
//! layer to a complete [`FormatSettings`] overwrites exactly the set fields.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use pricefmt_core::{CompactSettings, FormatSettings, Position, RoundingMode};

// =============================================================================
// FORMAT LAYER
// =============================================================================

/// A partial [`FormatSettings`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatLayer {
    /// Currency symbol.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    /// Symbol placement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    /// Inserted between symbol and number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separator: Option<String>,
    /// Fractional point.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decimal_separator: Option<String>,
    /// Digit group separator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thousand_separator: Option<String>,
    /// Number of decimal places.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decimals: Option<u32>,
    /// Drop the fraction of whole amounts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trim_zero_decimals: Option<bool>,
    /// Explicit numeral script choice.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_eastern_arabic_numerals: Option<bool>,
    /// Rounding policy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rounding_mode: Option<RoundingMode>,
    /// Parenthesized negatives.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accounting_format: Option<bool>,
    /// Compact notation fields.
    #[serde(alias = "compact_format", skip_serializing_if = "Option::is_none")]
    pub compact: Option<CompactLayer>,
}

impl FormatLayer {
    /// Creates an empty layer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no field is set.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Overwrites the fields of `base` that this layer sets.
    #[must_use]
    pub fn apply(&self, mut base: FormatSettings) -> FormatSettings {
        set(&mut base.symbol, &self.symbol);
        set(&mut base.position, &self.position);
        set(&mut base.separator, &self.separator);
        set(&mut base.decimal_separator, &self.decimal_separator);
        set(&mut base.thousand_separator, &self.thousand_separator);
        set(&mut base.decimals, &self.decimals);
        set(&mut base.trim_zero_decimals, &self.trim_zero_decimals);
        set(&mut base.rounding_mode, &self.rounding_mode);
        set(&mut base.accounting_format, &self.accounting_format);
        if let Some(flag) = self.use_eastern_arabic_numerals {
            base.use_eastern_arabic_numerals = Some(flag);
        }
        if let Some(compact) = &self.compact {
            base.compact = compact.apply(base.compact);
        }
        base
    }

    /// Layers `higher` over `self`; fields set in `higher` win.
    #[must_use]
    pub fn overlay(mut self, higher: &FormatLayer) -> Self {
        overlay(&mut self.symbol, &higher.symbol);
        overlay(&mut self.position, &higher.position);
        overlay(&mut self.separator, &higher.separator);
        overlay(&mut self.decimal_separator, &higher.decimal_separator);
        overlay(&mut self.thousand_separator, &higher.thousand_separator);
        overlay(&mut self.decimals, &higher.decimals);
        overlay(&mut self.trim_zero_decimals, &higher.trim_zero_decimals);
        overlay(
            &mut self.use_eastern_arabic_numerals,
            &higher.use_eastern_arabic_numerals,
        );
        overlay(&mut self.rounding_mode, &higher.rounding_mode);
        overlay(&mut self.accounting_format, &higher.accounting_format);
        self.compact = match (self.compact.take(), &higher.compact) {
            (Some(low), Some(high)) => Some(low.overlay(high)),
            (low, high) => high.clone().or(low),
        };
        self
    }

    /// Builder method to set the symbol.
    #[must_use]
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Builder method to set the symbol position.
    #[must_use]
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    /// Builder method to set the symbol separator.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    /// Builder method to set the decimal and thousand separators.
    #[must_use]
    pub fn with_number_separators(
        mut self,
        decimal: impl Into<String>,
        thousand: impl Into<String>,
    ) -> Self {
        self.decimal_separator = Some(decimal.into());
        self.thousand_separator = Some(thousand.into());
        self
    }

    /// Builder method to set the decimal places.
    #[must_use]
    pub fn with_decimals(mut self, decimals: u32) -> Self {
        self.decimals = Some(decimals);
        self
    }

    /// Builder method to set whole-amount fraction trimming.
    #[must_use]
    pub fn with_trim_zero_decimals(mut self, trim: bool) -> Self {
        self.trim_zero_decimals = Some(trim);
        self
    }

    /// Builder method to choose the numeral script explicitly.
    #[must_use]
    pub fn with_eastern_arabic_numerals(mut self, eastern: bool) -> Self {
        self.use_eastern_arabic_numerals = Some(eastern);
        self
    }

    /// Builder method to set the rounding mode.
    #[must_use]
    pub fn with_rounding_mode(mut self, mode: RoundingMode) -> Self {
        self.rounding_mode = Some(mode);
        self
    }

    /// Builder method to toggle accounting format.
    #[must_use]
    pub fn with_accounting(mut self, accounting: bool) -> Self {
        self.accounting_format = Some(accounting);
        self
    }

    /// Builder method to toggle compact notation.
    #[must_use]
    pub fn with_compact(mut self, enabled: bool) -> Self {
        let mut compact = self.compact.take().unwrap_or_default();
        compact.enabled = Some(enabled);
        self.compact = Some(compact);
        self
    }
}

fn set<T: Clone>(target: &mut T, value: &Option<T>) {
    if let Some(v) = value {
        *target = v.clone();
    }
}

fn overlay<T: Clone>(target: &mut Option<T>, higher: &Option<T>) {
    if higher.is_some() {
        target.clone_from(higher);
    }
}

// =============================================================================
// COMPACT LAYER
// =============================================================================

/// A partial [`CompactSettings`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompactLayer {
    /// Whether compaction applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Tier thresholds.
    #[serde(skip_serializing_if = "TierLayer::is_empty")]
    pub thresholds: TierLayer<Decimal>,
    /// Tier suffixes.
    #[serde(skip_serializing_if = "TierLayer::is_empty")]
    pub symbols: TierLayer<String>,
    /// Decimal places of the compacted number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precision: Option<u32>,
}

/// Per-tier optional values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierLayer<T> {
    /// Thousand tier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thousand: Option<T>,
    /// Million tier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub million: Option<T>,
    /// Billion tier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billion: Option<T>,
}

impl<T> Default for TierLayer<T> {
    fn default() -> Self {
        Self {
            thousand: None,
            million: None,
            billion: None,
        }
    }
}

impl<T: Clone> TierLayer<T> {
    /// Returns true if no tier is set.
    pub fn is_empty(&self) -> bool {
        self.thousand.is_none() && self.million.is_none() && self.billion.is_none()
    }

    fn overlay(mut self, higher: &TierLayer<T>) -> Self {
        overlay(&mut self.thousand, &higher.thousand);
        overlay(&mut self.million, &higher.million);
        overlay(&mut self.billion, &higher.billion);
        self
    }
}

impl CompactLayer {
    /// Overwrites the fields of `base` that this layer sets.
    #[must_use]
    pub fn apply(&self, mut base: CompactSettings) -> CompactSettings {
        set(&mut base.enabled, &self.enabled);
        set(&mut base.thresholds.thousand, &self.thresholds.thousand);
        set(&mut base.thresholds.million, &self.thresholds.million);
        set(&mut base.thresholds.billion, &self.thresholds.billion);
        set(&mut base.symbols.thousand, &self.symbols.thousand);
        set(&mut base.symbols.million, &self.symbols.million);
        set(&mut base.symbols.billion, &self.symbols.billion);
        set(&mut base.precision, &self.precision);
        base
    }

    fn overlay(mut self, higher: &CompactLayer) -> Self {
        overlay(&mut self.enabled, &higher.enabled);
        overlay(&mut self.precision, &higher.precision);
        self.thresholds = self.thresholds.overlay(&higher.thresholds);
        self.symbols = self.symbols.overlay(&higher.symbols);
        self
    }
}

// =============================================================================
// CALL OPTIONS
// =============================================================================

/// Per-call overrides: the highest-priority layer plus call-only flags.
///
/// # Example
///
/// ```rust
/// use pricefmt_config::FormatOptions;
///
/// let options = FormatOptions::new().with_symbol("USD").with_decimals(0).strict();
/// assert!(options.throw_if_not_found);
/// assert_eq!(options.layer.decimals, Some(0));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Field overrides.
    #[serde(flatten)]
    pub layer: FormatLayer,
    /// Fail with `CurrencyNotFound` instead of falling back to the default.
    pub throw_if_not_found: bool,
}

impl From<FormatLayer> for FormatOptions {
    fn from(layer: FormatLayer) -> Self {
        Self {
            layer,
            throw_if_not_found: false,
        }
    }
}

impl FormatOptions {
    /// Options that override nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail instead of falling back when the country does not resolve.
    #[must_use]
    pub fn strict(mut self) -> Self {
        self.throw_if_not_found = true;
        self
    }

    /// Applies a builder step to the override layer.
    #[must_use]
    pub fn map_layer(mut self, f: impl FnOnce(FormatLayer) -> FormatLayer) -> Self {
        self.layer = f(self.layer);
        self
    }

    /// Overrides the symbol.
    #[must_use]
    pub fn with_symbol(self, symbol: impl Into<String>) -> Self {
        self.map_layer(|l| l.with_symbol(symbol))
    }

    /// Overrides the symbol position.
    #[must_use]
    pub fn with_position(self, position: Position) -> Self {
        self.map_layer(|l| l.with_position(position))
    }

    /// Overrides the symbol separator.
    #[must_use]
    pub fn with_separator(self, separator: impl Into<String>) -> Self {
        self.map_layer(|l| l.with_separator(separator))
    }

    /// Overrides the decimal places.
    #[must_use]
    pub fn with_decimals(self, decimals: u32) -> Self {
        self.map_layer(|l| l.with_decimals(decimals))
    }

    /// Overrides the rounding mode.
    #[must_use]
    pub fn with_rounding_mode(self, mode: RoundingMode) -> Self {
        self.map_layer(|l| l.with_rounding_mode(mode))
    }

    /// Overrides the numeral script.
    #[must_use]
    pub fn with_eastern_arabic_numerals(self, eastern: bool) -> Self {
        self.map_layer(|l| l.with_eastern_arabic_numerals(eastern))
    }

    /// Forces accounting format.
    #[must_use]
    pub fn with_accounting(self, accounting: bool) -> Self {
        self.map_layer(|l| l.with_accounting(accounting))
    }

    /// Forces compact notation.
    #[must_use]
    pub fn with_compact(self, enabled: bool) -> Self {
        self.map_layer(|l| l.with_compact(enabled))
    }
}
