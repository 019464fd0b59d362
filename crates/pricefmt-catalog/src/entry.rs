//! Catalog records.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Symbol key used as the last-resort fallback.
pub const NATIVE_SYMBOL_KEY: &str = "native";

/// One currency as described by a dataset file.
///
/// The dataset is keyed by currency code, so the code itself is filled in
/// after deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyEntry {
    /// ISO 4217 code, uppercase.
    #[serde(skip)]
    pub currency_code: String,

    /// Display name of the currency.
    #[serde(default)]
    pub name: Option<String>,

    /// Country name, matched case-sensitively.
    #[serde(rename = "country", default)]
    pub country_name: String,

    /// ISO alpha-2 codes of the countries using this currency.
    #[serde(default)]
    pub countries: Vec<String>,

    /// Minor unit digits, when the dataset states them.
    #[serde(default)]
    pub decimals: Option<u32>,

    /// Symbol per language, with a `native` entry.
    #[serde(rename = "symbol", default)]
    pub symbol_by_language: BTreeMap<String, String>,
}

impl CurrencyEntry {
    /// Symbol for `language`, falling back to `en`, then `native`.
    pub fn symbol_for(&self, language: &str) -> Option<&str> {
        self.symbol_by_language
            .get(language)
            .or_else(|| self.symbol_by_language.get("en"))
            .or_else(|| self.symbol_by_language.get(NATIVE_SYMBOL_KEY))
            .map(String::as_str)
    }

    /// The `native` symbol.
    pub fn native_symbol(&self) -> Option<&str> {
        self.symbol_by_language
            .get(NATIVE_SYMBOL_KEY)
            .map(String::as_str)
    }
}
