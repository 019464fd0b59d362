//! Settings resolution: walks the fallback chain for one call.
//!
//! Priority, highest first: call overrides, country + language format,
//! country + `en` format, catalog-synthesized format, global default.

use std::fmt;
use std::sync::Arc;

use pricefmt_catalog::{CurrencyCatalog, CurrencyEntry};
use pricefmt_core::types::MAX_DECIMALS;
use pricefmt_core::{FormatError, FormatResult, FormatSettings, Position};
use pricefmt_traits::CurrentLocaleProvider;
use tracing::{debug, warn};

use crate::config::FormatConfig;
use crate::layer::{FormatLayer, FormatOptions};

/// Language used when neither the call nor the ambient locale names one.
pub const FALLBACK_LANGUAGE: &str = "en";

/// Currencies whose synthesized format puts the symbol first with no gap.
pub const SYMBOL_FIRST_CURRENCIES: [&str; 9] =
    ["USD", "GBP", "EUR", "JPY", "CAD", "AUD", "NZD", "HKD", "SGD"];

/// Where the resolved settings came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsSource {
    /// A configured country format.
    Config {
        /// Country key.
        country: String,
        /// Language of the format used (the requested one or `en`).
        language: String,
    },
    /// A format synthesized from the currency catalog.
    Catalog {
        /// Currency code of the catalog entry.
        currency_code: String,
    },
    /// The global default.
    Default,
}

impl fmt::Display for SettingsSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config { country, language } => write!(f, "config:{country}.{language}"),
            Self::Catalog { currency_code } => write!(f, "catalog:{currency_code}"),
            Self::Default => f.write_str("default"),
        }
    }
}

/// Outcome of resolving one call.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// Complete settings for the renderer.
    pub settings: FormatSettings,
    /// Country key after locale mapping and defaulting.
    pub country: Option<String>,
    /// Language after ambient lookup and defaulting.
    pub language: String,
    /// Which layer supplied the country-level format.
    pub source: SettingsSource,
}

/// Resolves [`FormatSettings`] from configuration, catalog and overrides.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use pricefmt_catalog::CurrencyCatalog;
/// use pricefmt_config::{FormatConfig, FormatOptions, SettingsResolver};
///
/// let resolver = SettingsResolver::new(
///     Arc::new(FormatConfig::default()),
///     Arc::new(CurrencyCatalog::builtin()),
/// );
/// let resolved = resolver.resolve(Some("US"), Some("en"), &FormatOptions::new()).unwrap();
/// assert_eq!(resolved.settings.symbol, "$");
/// ```
#[derive(Clone)]
pub struct SettingsResolver {
    config: Arc<FormatConfig>,
    catalog: Arc<CurrencyCatalog>,
    locale: Option<Arc<dyn CurrentLocaleProvider>>,
}

impl fmt::Debug for SettingsResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SettingsResolver")
            .field("countries", &self.config.currencies.len())
            .field("catalog_entries", &self.catalog.len())
            .field("has_locale_provider", &self.locale.is_some())
            .finish()
    }
}

impl SettingsResolver {
    /// Creates a resolver without an ambient locale.
    pub fn new(config: Arc<FormatConfig>, catalog: Arc<CurrencyCatalog>) -> Self {
        Self {
            config,
            catalog,
            locale: None,
        }
    }

    /// Builder method to attach the ambient locale source.
    #[must_use]
    pub fn with_locale_provider(mut self, provider: Arc<dyn CurrentLocaleProvider>) -> Self {
        self.locale = Some(provider);
        self
    }

    /// The configuration.
    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    /// The currency catalog.
    pub fn catalog(&self) -> &CurrencyCatalog {
        &self.catalog
    }

    /// The ambient language, if a provider is attached and answers.
    pub fn ambient_language(&self) -> Option<String> {
        self.locale.as_ref().and_then(|p| p.current_language())
    }

    /// Call language, else the ambient one when enabled, else `en`.
    pub fn effective_language(&self, language: Option<&str>) -> String {
        match language {
            Some(lang) => lang.to_string(),
            None => self
                .config
                .locale
                .use_app_locale
                .then(|| self.ambient_language())
                .flatten()
                .unwrap_or_else(|| FALLBACK_LANGUAGE.to_string()),
        }
    }

    /// Resolves the settings for one call.
    pub fn resolve(
        &self,
        country: Option<&str>,
        language: Option<&str>,
        options: &FormatOptions,
    ) -> FormatResult<Resolution> {
        let config = &self.config;

        let mut language = language.map(str::to_string);
        if language.is_none() && config.locale.use_app_locale {
            language = self.ambient_language();
            debug!(language = ?language, "using ambient language");
        }

        let mut country = country.map(str::to_string);
        if country.is_none() {
            if let Some(lang) = language.as_deref() {
                country = config.locale.locale_to_country_map.get(lang).cloned();
                if let Some(mapped) = country.as_deref() {
                    debug!(language = lang, country = mapped, "mapped language to country");
                }
            }
        }
        if country.is_none() {
            country = config.fallback_country().map(str::to_string);
            debug!(country = ?country, "using default country");
        }

        let language = language.unwrap_or_else(|| FALLBACK_LANGUAGE.to_string());

        let (format, source) = match country.as_deref() {
            Some(key) => self.country_format(key, &language),
            None => (None, SettingsSource::Default),
        };

        if options.throw_if_not_found && source == SettingsSource::Default {
            return Err(FormatError::currency_not_found(
                country.as_deref().unwrap_or_default(),
            ));
        }

        let layer = match format {
            Some(format) => format.overlay(&options.layer),
            None => options.layer.clone(),
        };
        let settings = layer.apply(config.default.clone());
        settings.validate()?;

        Ok(Resolution {
            settings,
            country,
            language,
            source,
        })
    }

    /// Country-level format for `key` in `language`, with its source.
    ///
    /// A configured country with neither a `language` nor an `en` format
    /// yields no layer but still counts as found.
    fn country_format(&self, key: &str, language: &str) -> (Option<FormatLayer>, SettingsSource) {
        if let Some(country) = self.config.country(key) {
            return match country.format_for(language) {
                Some((found, layer)) => {
                    if found != language {
                        debug!(country = key, language, "no format for language, using en");
                    }
                    (
                        Some(layer.clone()),
                        SettingsSource::Config {
                            country: key.to_string(),
                            language: found.to_string(),
                        },
                    )
                }
                None => {
                    debug!(country = key, language, "country has no usable format, using default");
                    (
                        None,
                        SettingsSource::Config {
                            country: key.to_string(),
                            language: language.to_string(),
                        },
                    )
                }
            };
        }

        match self.catalog.lookup_by_country_code(key) {
            Some(entry) => {
                debug!(
                    country = key,
                    currency = %entry.currency_code,
                    "synthesizing format from catalog"
                );
                (
                    Some(self.synthesize(entry, language)),
                    SettingsSource::Catalog {
                        currency_code: entry.currency_code.clone(),
                    },
                )
            }
            None => {
                debug!(country = key, "country not found, using global default");
                (None, SettingsSource::Default)
            }
        }
    }

    /// Format derived from a catalog entry.
    pub fn synthesize(&self, entry: &CurrencyEntry, language: &str) -> FormatLayer {
        let symbol = entry
            .symbol_for(language)
            .unwrap_or(entry.currency_code.as_str());
        let (position, separator) = if SYMBOL_FIRST_CURRENCIES.contains(&entry.currency_code.as_str())
        {
            (Position::Before, "")
        } else {
            (Position::After, " ")
        };
        let mut layer = FormatLayer::new()
            .with_symbol(symbol)
            .with_position(position)
            .with_separator(separator)
            .with_eastern_arabic_numerals(self.config.numerals.is_eastern_language(language));
        layer.decimals = entry.decimals.filter(|&decimals| {
            let usable = decimals <= MAX_DECIMALS;
            if !usable {
                warn!(
                    currency = %entry.currency_code,
                    decimals,
                    "catalog decimals out of range, using default"
                );
            }
            usable
        });
        layer
    }

    /// Currency code for a country key: configured code first, then catalog.
    pub fn currency_code(&self, country: &str) -> Option<String> {
        if let Some(configured) = self.config.country(country) {
            if !configured.code.is_empty() {
                return Some(configured.code.clone());
            }
        }
        self.catalog
            .lookup_by_country_code(country)
            .map(|e| e.currency_code.clone())
    }

    /// Symbol for a country key and language without rendering anything.
    ///
    /// A configured format for exactly `language` wins; otherwise the catalog
    /// answers, falling back to `en` and then the native symbol.
    pub fn currency_symbol(&self, country: &str, language: &str) -> Option<String> {
        let configured = self
            .config
            .country(country)
            .and_then(|c| c.formats.get(language))
            .and_then(|f| f.symbol.clone());
        if configured.is_some() {
            return configured;
        }

        let code = self.currency_code(country)?;
        self.catalog
            .get(&code)
            .or_else(|| self.catalog.lookup_by_country_code(country))
            .and_then(|e| e.symbol_for(language))
            .map(str::to_string)
    }

    /// Country key to format a converted amount with.
    ///
    /// The configured country using `currency_code` when there is one,
    /// otherwise the currency code itself as a catalog key.
    pub fn country_for_currency(&self, currency_code: &str) -> String {
        self.config
            .country_for_currency(currency_code)
            .unwrap_or(currency_code)
            .to_string()
    }
}
