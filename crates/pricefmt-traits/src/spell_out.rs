//! Natural-language spell-out of amounts.

use rust_decimal::Decimal;

use crate::error::TraitError;

/// Renders an amount as words, e.g. `"one hundred dollars"`.
///
/// Linguistic rules are entirely the implementor's concern.
pub trait SpellOut: Send + Sync {
    /// Spells out `amount` in `language`, naming `currency_code` when given.
    fn spell_out(
        &self,
        amount: Decimal,
        language: &str,
        currency_code: Option<&str>,
    ) -> Result<String, TraitError>;
}
