//! The currency catalog.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::OnceLock;

use crate::entry::CurrencyEntry;
use crate::error::{CatalogError, CatalogResult};

const BUILTIN_DATASET: &str = include_str!("../data/currencies.json");

static BUILTIN_ENTRIES: OnceLock<BTreeMap<String, CurrencyEntry>> = OnceLock::new();

/// On-disk dataset shape: `{"currencies": {"USD": {...}, ...}}`.
#[derive(Debug, Deserialize)]
struct DatasetFile {
    #[serde(default)]
    currencies: BTreeMap<String, CurrencyEntry>,
}

fn parse_dataset(json: &str) -> CatalogResult<BTreeMap<String, CurrencyEntry>> {
    let file: DatasetFile = serde_json::from_str(json)?;
    Ok(file
        .currencies
        .into_iter()
        .map(|(code, mut entry)| {
            entry.currency_code.clone_from(&code);
            (code, entry)
        })
        .collect())
}

/// Built-in entries, parsed once per process.
fn builtin_entries() -> &'static BTreeMap<String, CurrencyEntry> {
    BUILTIN_ENTRIES.get_or_init(|| {
        parse_dataset(BUILTIN_DATASET).unwrap_or_else(|e| {
            tracing::error!(error = %e, "built-in currency dataset failed to parse");
            BTreeMap::new()
        })
    })
}

/// Immutable lookup table of world currencies.
///
/// Built once at startup from the embedded dataset, optionally overlaid with a
/// custom dataset (custom entries replace built-in ones with the same code).
/// Lookups iterate in currency-code order, so "first match" is deterministic.
///
/// # Example
///
/// ```rust
/// use pricefmt_catalog::CurrencyCatalog;
///
/// let catalog = CurrencyCatalog::builtin();
/// let yen = catalog.lookup_by_country_code("JP").unwrap();
/// assert_eq!(yen.currency_code, "JPY");
/// assert_eq!(catalog.symbol_for("JPY", "en"), Some("¥"));
/// ```
#[derive(Debug, Clone)]
pub struct CurrencyCatalog {
    entries: BTreeMap<String, CurrencyEntry>,
}

impl Default for CurrencyCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CurrencyCatalog {
    /// Catalog holding only the built-in dataset.
    pub fn builtin() -> Self {
        Self {
            entries: builtin_entries().clone(),
        }
    }

    /// Catalog with no entries.
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Built-in dataset overlaid with the custom dataset at `custom_path`.
    ///
    /// An unreadable or malformed custom dataset is logged and ignored.
    pub fn load(custom_path: Option<&Path>) -> Self {
        let catalog = Self::builtin();
        match custom_path {
            Some(path) => catalog.with_custom_path(path),
            None => catalog,
        }
    }

    /// Overlays a custom dataset file, ignoring it if it cannot be used.
    #[must_use]
    pub fn with_custom_path(self, path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => self.with_custom_json(&json),
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "custom currency dataset unreadable, using built-in data"
                );
                self
            }
        }
    }

    /// Overlays a custom dataset given as JSON, ignoring it if malformed.
    #[must_use]
    pub fn with_custom_json(self, json: &str) -> Self {
        match self.try_with_custom_json(json) {
            Ok(merged) => merged,
            Err((unchanged, e)) => {
                tracing::warn!(error = %e, "custom currency dataset malformed, using built-in data");
                unchanged
            }
        }
    }

    fn try_with_custom_json(mut self, json: &str) -> Result<Self, (Self, CatalogError)> {
        match parse_dataset(json) {
            Ok(custom) => {
                tracing::debug!(entries = custom.len(), "merging custom currency dataset");
                self.entries.extend(custom);
                Ok(self)
            }
            Err(e) => Err((self, e)),
        }
    }

    /// Strict variant of [`with_custom_path`](Self::with_custom_path).
    pub fn try_with_custom_path(self, path: &Path) -> CatalogResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        self.try_with_custom_json(&json).map_err(|(_, e)| e)
    }

    /// Entry for a currency code.
    pub fn get(&self, currency_code: &str) -> Option<&CurrencyEntry> {
        self.entries.get(currency_code)
    }

    /// Entry for a country key: a currency code, an alpha-2 country code, or
    /// an exact country name, tried in that order.
    pub fn lookup_by_country_code(&self, code: &str) -> Option<&CurrencyEntry> {
        self.entries
            .get(code)
            .or_else(|| {
                self.entries
                    .values()
                    .find(|e| e.countries.iter().any(|c| c == code))
            })
            .or_else(|| self.entries.values().find(|e| e.country_name == code))
    }

    /// Currency code of the first entry whose country name equals `name`.
    pub fn lookup_currency_code_by_country_name(&self, name: &str) -> Option<&str> {
        self.entries
            .values()
            .find(|e| e.country_name == name)
            .map(|e| e.currency_code.as_str())
    }

    /// Symbol for a currency in `language`, falling back to `en`, then `native`.
    pub fn symbol_for(&self, currency_code: &str, language: &str) -> Option<&str> {
        self.get(currency_code)?.symbol_for(language)
    }

    /// Iterates entries in currency-code order.
    pub fn iter(&self) -> impl Iterator<Item = &CurrencyEntry> {
        self.entries.values()
    }

    /// Number of currencies.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
