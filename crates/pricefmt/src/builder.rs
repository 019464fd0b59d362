//! Builder pattern for the formatter.

use std::sync::Arc;

use pricefmt_catalog::CurrencyCatalog;
use pricefmt_config::{ConfigResult, FormatConfig, SettingsResolver, Validate};
use pricefmt_traits::{CurrentLocaleProvider, ExchangeRateProvider, SpellOut};

use crate::formatter::PriceFormatter;

/// Builder for constructing a [`PriceFormatter`].
///
/// Only the configuration is needed; every capability is optional. Without a
/// catalog, one is loaded from the built-in dataset plus the configured
/// custom dataset.
#[derive(Default)]
pub struct PriceFormatterBuilder {
    config: Option<FormatConfig>,
    catalog: Option<Arc<CurrencyCatalog>>,
    rates: Option<Arc<dyn ExchangeRateProvider>>,
    locale: Option<Arc<dyn CurrentLocaleProvider>>,
    spell_out: Option<Arc<dyn SpellOut>>,
}

impl PriceFormatterBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the formatter configuration.
    #[must_use]
    pub fn with_config(mut self, config: FormatConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the currency catalog.
    #[must_use]
    pub fn with_catalog(mut self, catalog: Arc<CurrencyCatalog>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Set the exchange rate provider used by `convert`.
    #[must_use]
    pub fn with_rate_provider(mut self, provider: Arc<dyn ExchangeRateProvider>) -> Self {
        self.rates = Some(provider);
        self
    }

    /// Set the ambient locale provider.
    #[must_use]
    pub fn with_locale_provider(mut self, provider: Arc<dyn CurrentLocaleProvider>) -> Self {
        self.locale = Some(provider);
        self
    }

    /// Set the spell-out capability.
    #[must_use]
    pub fn with_spell_out(mut self, speller: Arc<dyn SpellOut>) -> Self {
        self.spell_out = Some(speller);
        self
    }

    /// Build the formatter, validating the configuration.
    pub fn build(self) -> ConfigResult<PriceFormatter> {
        let config = self.config.unwrap_or_default();
        config.validate_or_error()?;

        let catalog = self
            .catalog
            .unwrap_or_else(|| Arc::new(config.load_catalog()));

        let mut resolver = SettingsResolver::new(Arc::new(config), catalog);
        if let Some(locale) = self.locale {
            resolver = resolver.with_locale_provider(locale);
        }

        Ok(PriceFormatter::from_parts(resolver, self.rates, self.spell_out))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricefmt_config::ConfigError;

    #[test]
    fn test_build_with_defaults() {
        let formatter = PriceFormatterBuilder::new().build().unwrap();
        assert_eq!(formatter.config().fallback_country(), Some("EG"));
        assert!(!formatter.catalog().is_empty());
    }

    #[test]
    fn test_build_rejects_invalid_config() {
        let mut config = FormatConfig::default();
        config.default.decimals = 30;
        let result = PriceFormatterBuilder::new().with_config(config).build();
        assert!(matches!(result, Err(ConfigError::Validation { .. })));
    }

    #[test]
    fn test_injected_catalog_is_used() {
        let formatter = PriceFormatterBuilder::new()
            .with_catalog(Arc::new(CurrencyCatalog::empty()))
            .build()
            .unwrap();
        assert!(formatter.catalog().is_empty());
        assert_eq!(formatter.currency_code("JP"), None);
    }
}
