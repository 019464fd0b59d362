//! The public formatting surface.

use std::fmt;
use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::debug;

use pricefmt_catalog::CurrencyCatalog;
use pricefmt_config::{FormatConfig, FormatOptions, Resolution, SettingsResolver};
use pricefmt_core::render::Renderer;
use pricefmt_core::{FormatError, FormatResult, FormatSettings};
use pricefmt_traits::{ExchangeRateProvider, SpellOut};

use crate::builder::PriceFormatterBuilder;

/// Formats monetary amounts for a country and language.
///
/// Holds an immutable configuration and catalog; every operation except
/// [`convert`](Self::convert) is synchronous and side-effect free, so one
/// instance can be shared across threads.
///
/// # Example
///
/// ```rust
/// use pricefmt::{FormatOptions, PriceFormatter};
/// use rust_decimal_macros::dec;
///
/// let formatter = PriceFormatter::default();
/// let none = FormatOptions::new();
///
/// assert_eq!(formatter.format(dec!(10.50), Some("US"), Some("en"), &none).unwrap(), "$10.50");
/// assert_eq!(formatter.format(dec!(5), Some("EG"), Some("ar"), &none).unwrap(), "٥ ج م");
/// assert_eq!(formatter.format_accounting(dec!(-10.50), Some("US"), Some("en"), &none).unwrap(), "($10.50)");
/// assert_eq!(formatter.format_compact(dec!(1500000), Some("US"), Some("en"), &none).unwrap(), "$1.5M");
/// ```
#[derive(Clone)]
pub struct PriceFormatter {
    resolver: SettingsResolver,
    rates: Option<Arc<dyn ExchangeRateProvider>>,
    spell_out: Option<Arc<dyn SpellOut>>,
}

impl fmt::Debug for PriceFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriceFormatter")
            .field("resolver", &self.resolver)
            .field("has_rate_provider", &self.rates.is_some())
            .field("has_spell_out", &self.spell_out.is_some())
            .finish()
    }
}

impl Default for PriceFormatter {
    /// Built-in configuration and catalog, no capabilities.
    fn default() -> Self {
        let config = FormatConfig::default();
        let catalog = Arc::new(config.load_catalog());
        Self::from_parts(SettingsResolver::new(Arc::new(config), catalog), None, None)
    }
}

impl PriceFormatter {
    /// Starts a builder.
    pub fn builder() -> PriceFormatterBuilder {
        PriceFormatterBuilder::new()
    }

    pub(crate) fn from_parts(
        resolver: SettingsResolver,
        rates: Option<Arc<dyn ExchangeRateProvider>>,
        spell_out: Option<Arc<dyn SpellOut>>,
    ) -> Self {
        Self {
            resolver,
            rates,
            spell_out,
        }
    }

    /// The configuration.
    pub fn config(&self) -> &FormatConfig {
        self.resolver.config()
    }

    /// The currency catalog.
    pub fn catalog(&self) -> &CurrencyCatalog {
        self.resolver.catalog()
    }

    /// The settings resolver.
    pub fn resolver(&self) -> &SettingsResolver {
        &self.resolver
    }

    // =========================================================================
    // FORMATTING
    // =========================================================================

    /// Resolves settings without rendering.
    pub fn resolve(
        &self,
        country: Option<&str>,
        language: Option<&str>,
        options: &FormatOptions,
    ) -> FormatResult<Resolution> {
        self.resolver.resolve(country, language, options)
    }

    /// Renders `amount` with already resolved settings.
    pub fn render(&self, amount: Decimal, resolution: &Resolution) -> FormatResult<String> {
        self.render_settings(amount, &resolution.settings, &resolution.language)
    }

    fn render_settings(
        &self,
        amount: Decimal,
        settings: &FormatSettings,
        language: &str,
    ) -> FormatResult<String> {
        Renderer::new(&self.config().numerals).render(amount, settings, language)
    }

    /// Formats `amount` for a country and language.
    ///
    /// Never fails for an unknown country unless `options` is strict.
    pub fn format(
        &self,
        amount: Decimal,
        country: Option<&str>,
        language: Option<&str>,
        options: &FormatOptions,
    ) -> FormatResult<String> {
        let resolution = self.resolve(country, language, options)?;
        self.render(amount, &resolution)
    }

    /// Like [`format`](Self::format), negatives in parentheses.
    pub fn format_accounting(
        &self,
        amount: Decimal,
        country: Option<&str>,
        language: Option<&str>,
        options: &FormatOptions,
    ) -> FormatResult<String> {
        let options = options.clone().with_accounting(true);
        self.format(amount, country, language, &options)
    }

    /// Like [`format`](Self::format), in compact notation (1.5K, 1.5M, 1.5B).
    pub fn format_compact(
        &self,
        amount: Decimal,
        country: Option<&str>,
        language: Option<&str>,
        options: &FormatOptions,
    ) -> FormatResult<String> {
        let options = options.clone().with_compact(true);
        self.format(amount, country, language, &options)
    }

    /// Formats a ratio as a percentage: `0.255` at 1 decimal is `25.5%`.
    ///
    /// Independent of any country; separators come from the global default.
    pub fn format_percentage(
        &self,
        value: Decimal,
        decimals: u32,
        language: Option<&str>,
        options: &FormatOptions,
    ) -> FormatResult<String> {
        let language = self.resolver.effective_language(language);
        let base = FormatSettings::percentage(decimals, &self.config().default);
        let settings = options.layer.apply(base);
        settings.validate()?;

        let percentage = value
            .checked_mul(Decimal::ONE_HUNDRED)
            .ok_or_else(|| FormatError::overflow(format!("{value} as a percentage")))?;
        self.render_settings(percentage, &settings, &language)
    }

    /// Formats in the ambient application language.
    ///
    /// Without a country the language's mapped country is used, as in
    /// [`format`](Self::format).
    pub fn format_localized(
        &self,
        amount: Decimal,
        country: Option<&str>,
        options: &FormatOptions,
    ) -> FormatResult<String> {
        let language = self.resolver.ambient_language();
        debug!(language = ?language, "formatting in ambient language");
        self.format(amount, country, language.as_deref(), options)
    }

    // =========================================================================
    // CAPABILITIES
    // =========================================================================

    /// Converts between currencies, then formats in the target currency.
    ///
    /// Same-currency conversion needs no provider. The target is formatted
    /// with the configured country using that currency when there is one,
    /// otherwise with the currency code as a catalog key.
    pub async fn convert(
        &self,
        amount: Decimal,
        from: &str,
        to: &str,
        language: Option<&str>,
        options: &FormatOptions,
    ) -> FormatResult<String> {
        let rate = if from == to {
            Decimal::ONE
        } else {
            let provider = self.rates.as_ref().ok_or_else(|| {
                FormatError::rate_unavailable(from, to, "no exchange rate provider configured")
            })?;
            provider
                .rate(from, to)
                .await
                .map_err(|e| FormatError::rate_unavailable(from, to, e.to_string()))?
        };

        let converted = amount
            .checked_mul(rate)
            .ok_or_else(|| FormatError::rate_unavailable(from, to, "converted amount overflows"))?;
        let country = self.resolver.country_for_currency(to);
        debug!(from, to, %rate, country = %country, "converted amount");

        self.format(converted, Some(&country), language, options)
    }

    /// Spells `amount` out in words through the injected capability.
    pub fn spell_out(
        &self,
        amount: Decimal,
        language: &str,
        currency_code: Option<&str>,
    ) -> FormatResult<String> {
        let speller = self.spell_out.as_ref().ok_or_else(|| FormatError::SpellOutUnavailable {
            reason: "no spell-out capability configured".to_string(),
        })?;
        speller
            .spell_out(amount, language, currency_code)
            .map_err(|e| FormatError::SpellOutUnavailable {
                reason: e.to_string(),
            })
    }

    // =========================================================================
    // LOOKUPS
    // =========================================================================

    /// Currency code for a country key.
    pub fn currency_code(&self, country: &str) -> Option<String> {
        self.resolver.currency_code(country)
    }

    /// Currency symbol for a country key and language.
    pub fn currency_symbol(&self, country: &str, language: &str) -> Option<String> {
        self.resolver.currency_symbol(country, language)
    }
}
