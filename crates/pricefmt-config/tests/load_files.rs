//! Loading configuration files from disk.

use std::io::Write;
use std::sync::Arc;

use pricefmt_config::{ConfigError, FormatConfig, FormatOptions, SettingsResolver};
use tempfile::Builder;

fn write_file(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn loads_json_file() {
    let file = write_file(
        ".json",
        r#"{"currencies": {"BTC": {"code": "BTC", "formats": {"en":
            {"symbol": "₿", "position": "before", "separator": "", "decimals": 8}}}}}"#,
    );
    let config = FormatConfig::from_path(file.path()).unwrap();
    assert_eq!(config.currencies.len(), 1);
    assert_eq!(config.default.symbol, "$");
}

#[test]
fn loads_toml_file() {
    let file = write_file(
        ".toml",
        r#"
[locale]
use_app_locale = true
locale_to_country_map = { ar = "EG" }
"#,
    );
    let config = FormatConfig::from_path(file.path()).unwrap();
    assert!(config.locale.use_app_locale);
    assert_eq!(config.locale.locale_to_country_map["ar"], "EG");
    assert_eq!(config.currencies.len(), 6);
}

#[test]
fn rejects_unknown_extension() {
    let file = write_file(".yaml", "default: {}");
    assert!(matches!(
        FormatConfig::from_path(file.path()),
        Err(ConfigError::Deserialization(_))
    ));
}

#[test]
fn missing_file_is_io_error() {
    assert!(matches!(
        FormatConfig::from_path("/nonexistent/pricefmt.toml"),
        Err(ConfigError::Io { .. })
    ));
}

#[test]
fn custom_dataset_path_feeds_the_catalog() {
    let dataset = write_file(
        ".json",
        r#"{"currencies": {"XYZ": {"name": "Test Currency", "country": "TEST",
            "symbol": {"en": "T$", "native": "T$"}}}}"#,
    );
    let config = FormatConfig {
        custom_currencies_path: Some(dataset.path().to_path_buf()),
        ..FormatConfig::default()
    };
    let catalog = Arc::new(config.load_catalog());
    let resolver = SettingsResolver::new(Arc::new(config), catalog);

    assert_eq!(resolver.currency_symbol("TEST", "en").as_deref(), Some("T$"));
    let resolved = resolver
        .resolve(Some("TEST"), Some("en"), &FormatOptions::new())
        .unwrap();
    assert_eq!(resolved.settings.symbol, "T$");
    assert_eq!(resolved.settings.separator, " ");
}
