//! Rendering of a rounded amount into its display string.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{FormatError, FormatResult};
use crate::numerals::{to_eastern_arabic, NumeralPolicy};
use crate::rounding::round;
use crate::types::{FormatSettings, Position};

/// Renders amounts against fully resolved [`FormatSettings`].
///
/// # Example
///
/// ```rust
/// use pricefmt_core::numerals::NumeralPolicy;
/// use pricefmt_core::render::Renderer;
/// use pricefmt_core::types::FormatSettings;
/// use rust_decimal_macros::dec;
///
/// let policy = NumeralPolicy::default();
/// let renderer = Renderer::new(&policy);
/// let out = renderer.render(dec!(1234.5), &FormatSettings::default(), "en").unwrap();
/// assert_eq!(out, "$1,234.50");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Renderer<'a> {
    numerals: &'a NumeralPolicy,
}

impl<'a> Renderer<'a> {
    /// Creates a renderer bound to a numeral policy.
    #[must_use]
    pub fn new(numerals: &'a NumeralPolicy) -> Self {
        Self { numerals }
    }

    /// Renders `amount` for `language`.
    ///
    /// Fails only if `settings` break an invariant (decimal limit, compact
    /// thresholds); the resolver guarantees they do not.
    pub fn render(
        &self,
        amount: Decimal,
        settings: &FormatSettings,
        language: &str,
    ) -> FormatResult<String> {
        settings.validate()?;

        let rounded = round(amount, settings.rounding_mode, settings.decimals);
        let negative = rounded.is_sign_negative() && !rounded.is_zero();
        let magnitude = rounded.abs();

        let (mut number, suffix) = if settings.compact.enabled {
            let compact = &settings.compact;
            let (divisor, suffix) = compact.divisor_and_suffix(compact.tier_for(magnitude));
            let scaled = magnitude.checked_div(divisor).ok_or_else(|| {
                FormatError::overflow(format!("{magnitude} divided by compact threshold {divisor}"))
            })?;
            let number = format_number(
                scaled,
                compact.precision,
                &settings.decimal_separator,
                &settings.thousand_separator,
            );
            (number, suffix)
        } else {
            let decimals = if settings.trim_zero_decimals && magnitude.fract().is_zero() {
                0
            } else {
                settings.decimals
            };
            let number = format_number(
                magnitude,
                decimals,
                &settings.decimal_separator,
                &settings.thousand_separator,
            );
            (number, "")
        };

        if self
            .numerals
            .use_eastern(settings.use_eastern_arabic_numerals, language)
        {
            number = to_eastern_arabic(
                &number,
                &settings.decimal_separator,
                &settings.thousand_separator,
            );
        }

        let composed = match settings.position {
            Position::Before => format!("{}{}{number}{suffix}", settings.symbol, settings.separator),
            Position::After => format!("{number}{suffix}{}{}", settings.separator, settings.symbol),
        };

        Ok(match (negative, settings.accounting_format) {
            (false, _) => composed,
            (true, true) => format!("({composed})"),
            (true, false) => format!("-{composed}"),
        })
    }
}

/// Formats a non-negative value with fixed decimals and digit grouping.
///
/// Rounds half away from zero to `decimals` places first. Always emits
/// exactly `decimals` fractional digits.
#[must_use]
pub fn format_number(
    value: Decimal,
    decimals: u32,
    decimal_separator: &str,
    thousand_separator: &str,
) -> String {
    let mut fixed = value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    fixed.rescale(decimals);
    let text = fixed.abs().to_string();

    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, f),
        None => (text.as_str(), ""),
    };

    let grouped = group_digits(int_part, thousand_separator);
    if decimals == 0 {
        return grouped;
    }
    // rescale stops short when the mantissa is full; the value is already
    // rounded, so the missing digits are zeros.
    let width = decimals as usize;
    format!("{grouped}{decimal_separator}{frac_part:0<width$}")
}

fn group_digits(int_part: &str, separator: &str) -> String {
    let len = int_part.len();
    let mut out = String::with_capacity(len + (len / 3) * separator.len());
    for (i, ch) in int_part.chars().enumerate() {
        out.push(ch);
        let remaining = len - i - 1;
        if remaining > 0 && remaining % 3 == 0 {
            out.push_str(separator);
        }
    }
    out
}
