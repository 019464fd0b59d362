//! The configuration root.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use pricefmt_catalog::CurrencyCatalog;
use pricefmt_core::numerals::NumeralPolicy;
use pricefmt_core::types::MAX_DECIMALS;
use pricefmt_core::{FormatSettings, Position};

use crate::error::{ConfigError, ConfigResult, Validate, ValidationError};
use crate::layer::FormatLayer;
use crate::resolver::FALLBACK_LANGUAGE;

// =============================================================================
// COUNTRY CONFIG
// =============================================================================

/// Formatting rules for one country key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountryConfig {
    /// Currency code used in this country.
    pub code: String,
    /// Per-language partial formats.
    pub formats: BTreeMap<String, FormatLayer>,
}

impl CountryConfig {
    /// Creates a country with no formats.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            formats: BTreeMap::new(),
        }
    }

    /// Builder method to add a language format.
    #[must_use]
    pub fn with_format(mut self, language: impl Into<String>, format: FormatLayer) -> Self {
        self.formats.insert(language.into(), format);
        self
    }

    /// Format for `language`, or the `en` format when absent, with the
    /// language key it was found under.
    pub fn format_for(&self, language: &str) -> Option<(&str, &FormatLayer)> {
        self.formats
            .get_key_value(language)
            .or_else(|| self.formats.get_key_value(FALLBACK_LANGUAGE))
            .map(|(key, layer)| (key.as_str(), layer))
    }
}

// =============================================================================
// LOCALE CONFIG
// =============================================================================

/// How the ambient application locale feeds resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleConfig {
    /// Use the ambient language when a call names none.
    pub use_app_locale: bool,
    /// Country key to use for a language when a call names no country.
    pub locale_to_country_map: BTreeMap<String, String>,
}

// =============================================================================
// FORMAT CONFIG
// =============================================================================

/// Process-wide formatter configuration.
///
/// Loaded once and handed to the formatter; never mutated afterwards.
///
/// # Example
///
/// ```rust
/// use pricefmt_config::FormatConfig;
///
/// let config = FormatConfig::from_json_str(
///     r#"{"default": {"symbol": "€", "position": "after", "separator": " "}}"#,
/// )
/// .unwrap();
/// assert_eq!(config.default.symbol, "€");
/// // Unspecified sections keep their defaults.
/// assert!(config.currencies.contains_key("EG"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Country key to settings.
    pub currencies: BTreeMap<String, CountryConfig>,
    /// Terminal fallback; always complete.
    pub default: FormatSettings,
    /// Numeral script policy.
    pub numerals: NumeralPolicy,
    /// Ambient locale handling.
    pub locale: LocaleConfig,
    /// Custom currency dataset merged over the built-in one.
    pub custom_currencies_path: Option<PathBuf>,
    /// Country key used when a call names neither country nor a mapped
    /// language. `None` selects the first key of `currencies`.
    pub default_country: Option<String>,
}

impl Default for FormatConfig {
    fn default() -> Self {
        let currencies = [
            ("EG", "EGP", "LE", Position::After, " ", "ج م"),
            ("US", "USD", "$", Position::Before, "", "دولار"),
            ("GB", "GBP", "£", Position::Before, "", "جنيه استرليني"),
            ("EU", "EUR", "€", Position::After, " ", "يورو"),
            ("SA", "SAR", "SAR", Position::After, " ", "ر.س"),
            ("AE", "AED", "AED", Position::After, " ", "د.إ"),
        ]
        .into_iter()
        .map(|(country, code, en_symbol, en_position, en_separator, ar_symbol)| {
            let mut en = FormatLayer::new()
                .with_symbol(en_symbol)
                .with_position(en_position)
                .with_separator(en_separator);
            let mut ar = FormatLayer::new()
                .with_symbol(ar_symbol)
                .with_position(Position::After)
                .with_separator(" ")
                .with_eastern_arabic_numerals(true);
            if country == "EG" {
                en = en.with_trim_zero_decimals(true);
                ar = ar.with_trim_zero_decimals(true);
            }
            let config = CountryConfig::new(code)
                .with_format("en", en)
                .with_format("ar", ar);
            (country.to_string(), config)
        })
        .collect();

        Self {
            currencies,
            default: FormatSettings::default(),
            numerals: NumeralPolicy::default(),
            locale: LocaleConfig::default(),
            custom_currencies_path: None,
            default_country: Some("EG".to_string()),
        }
    }
}

impl FormatConfig {
    /// Parses and validates a JSON configuration.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate_or_error()?;
        Ok(config)
    }

    /// Parses and validates a TOML configuration.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate_or_error()?;
        Ok(config)
    }

    /// Loads a `.json` or `.toml` configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&text),
            Some("toml") => Self::from_toml_str(&text),
            other => Err(ConfigError::Deserialization(format!(
                "unsupported configuration format {:?} for {}",
                other.unwrap_or(""),
                path.display()
            ))),
        }
    }

    /// Serializes to pretty JSON.
    pub fn to_json_string(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Serializes to TOML.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Settings for a configured country key.
    pub fn country(&self, key: &str) -> Option<&CountryConfig> {
        self.currencies.get(key)
    }

    /// First configured country key whose currency code is `currency_code`.
    pub fn country_for_currency(&self, currency_code: &str) -> Option<&str> {
        self.currencies
            .iter()
            .find(|(_, c)| c.code == currency_code)
            .map(|(key, _)| key.as_str())
    }

    /// Country key used when nothing else names one.
    pub fn fallback_country(&self) -> Option<&str> {
        self.default_country
            .as_deref()
            .or_else(|| self.currencies.keys().next().map(String::as_str))
    }

    /// Builds the currency catalog this configuration asks for.
    pub fn load_catalog(&self) -> CurrencyCatalog {
        CurrencyCatalog::load(self.custom_currencies_path.as_deref())
    }
}

impl Validate for FormatConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if let Err(e) = self.default.validate() {
            errors.push(ValidationError::with_rule(
                "default",
                e.to_string(),
                "complete_default",
            ));
        }

        for (key, country) in &self.currencies {
            if country.code.trim().is_empty() {
                errors.push(ValidationError::new(
                    format!("currencies.{key}.code"),
                    "Currency code cannot be empty",
                ));
            }
            for (language, format) in &country.formats {
                if let Some(decimals) = format.decimals {
                    if decimals > MAX_DECIMALS {
                        errors.push(ValidationError::with_rule(
                            format!("currencies.{key}.formats.{language}.decimals"),
                            format!("Decimals {decimals} exceeds maximum of {MAX_DECIMALS}"),
                            "max_decimals",
                        ));
                        continue;
                    }
                }
                if let Err(e) = format.apply(self.default.clone()).validate() {
                    errors.push(ValidationError::new(
                        format!("currencies.{key}.formats.{language}"),
                        e.to_string(),
                    ));
                }
            }
        }

        for (language, country) in &self.locale.locale_to_country_map {
            if country.trim().is_empty() {
                errors.push(ValidationError::new(
                    format!("locale.locale_to_country_map.{language}"),
                    "Mapped country cannot be empty",
                ));
            }
        }

        if matches!(self.default_country.as_deref(), Some(c) if c.trim().is_empty()) {
            errors.push(ValidationError::new(
                "default_country",
                "Default country cannot be empty",
            ));
        }

        errors
    }
}
