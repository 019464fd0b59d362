//! End-to-end formatting behavior through the public surface.

use std::sync::Arc;

use pricefmt::prelude::*;
use pricefmt::{CountryConfig, CurrencyCatalog, FixedLocale};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn formatter() -> PriceFormatter {
    PriceFormatter::default()
}

fn with_config(config: FormatConfig) -> PriceFormatter {
    PriceFormatter::builder().with_config(config).build().unwrap()
}

fn fmt(f: &PriceFormatter, amount: Decimal, country: &str, language: &str) -> String {
    f.format(amount, Some(country), Some(language), &FormatOptions::new())
        .unwrap()
}

// =============================================================================
// CONFIGURED COUNTRIES
// =============================================================================

#[test]
fn egypt_in_english_trims_whole_amounts() {
    let f = formatter();
    assert_eq!(fmt(&f, dec!(5), "EG", "en"), "5 LE");
    assert_eq!(fmt(&f, dec!(1234.56), "EG", "en"), "1,234.56 LE");
}

#[test]
fn egypt_in_arabic_uses_eastern_digits() {
    let f = formatter();
    assert_eq!(fmt(&f, dec!(5), "EG", "ar"), "٥ ج م");
    assert_eq!(fmt(&f, dec!(1234.56), "EG", "ar"), "١٬٢٣٤٫٥٦ ج م");
    assert_eq!(fmt(&f, dec!(1234567.89), "EG", "ar"), "١٬٢٣٤٬٥٦٧٫٨٩ ج م");
}

#[test]
fn united_states() {
    let f = formatter();
    assert_eq!(fmt(&f, dec!(10.50), "US", "en"), "$10.50");
    assert_eq!(fmt(&f, dec!(10.50), "US", "ar"), "١٠٫٥٠ دولار");
}

#[test]
fn unknown_language_uses_english_format() {
    assert_eq!(fmt(&formatter(), dec!(20), "EG", "fr"), "20 LE");
}

#[test]
fn unknown_country_uses_global_default() {
    assert_eq!(fmt(&formatter(), dec!(15), "XX", "en"), "$15.00");
}

#[test]
fn strict_unknown_country_fails() {
    let err = formatter()
        .format(dec!(15), Some("XX"), Some("en"), &FormatOptions::new().strict())
        .unwrap_err();
    assert_eq!(err, FormatError::currency_not_found("XX"));
}

#[test]
fn no_country_and_no_language_uses_default_country() {
    let f = formatter();
    assert_eq!(f.format(dec!(5), None, None, &FormatOptions::new()).unwrap(), "5 LE");
}

#[test]
fn configured_cryptocurrency_with_eight_decimals() {
    let mut config = FormatConfig::default();
    config.currencies.insert(
        "BTC".into(),
        CountryConfig::new("BTC").with_format(
            "en",
            FormatLayer::new()
                .with_symbol("₿")
                .with_position(Position::Before)
                .with_separator("")
                .with_decimals(8),
        ),
    );
    assert_eq!(fmt(&with_config(config), dec!(0.00012345), "BTC", "en"), "₿0.00012345");
}

// =============================================================================
// CATALOG FALLBACK
// =============================================================================

#[test]
fn catalog_country_formats_with_its_decimals() {
    let f = formatter();
    assert_eq!(fmt(&f, dec!(1000), "JP", "en"), "¥1,000");
    assert_eq!(f.currency_symbol("JP", "en").as_deref(), Some("¥"));
    assert_eq!(f.currency_code("JP").as_deref(), Some("JPY"));
}

#[test]
fn catalog_currency_outside_allow_list_puts_symbol_after() {
    assert_eq!(fmt(&formatter(), dec!(12.5), "CH", "en"), "12.50 CHF");
}

#[test]
fn lookups_prefer_configuration() {
    let f = formatter();
    assert_eq!(f.currency_code("EG").as_deref(), Some("EGP"));
    assert_eq!(f.currency_symbol("EG", "en").as_deref(), Some("LE"));
    assert_eq!(f.currency_symbol("XX", "en"), None);
}

#[test]
fn custom_dataset_adds_and_overrides_currencies() {
    let catalog = CurrencyCatalog::builtin().with_custom_json(
        r#"{"currencies": {
            "XYZ": {"name": "Test Currency", "country": "TEST", "symbol": {"en": "T$", "native": "T$"}},
            "USD": {"name": "Custom Dollar", "country": "UNITED STATES", "symbol": {"en": "USD$", "native": "USD$"}}
        }}"#,
    );
    let f = PriceFormatter::builder()
        .with_catalog(Arc::new(catalog))
        .build()
        .unwrap();

    assert_eq!(f.currency_symbol("TEST", "en").as_deref(), Some("T$"));
    // Configured formats still win for their exact language.
    assert_eq!(f.currency_symbol("US", "en").as_deref(), Some("$"));
    assert_eq!(f.currency_symbol("US", "fr").as_deref(), Some("USD$"));
}

#[test]
fn builder_loads_custom_dataset_named_by_config() {
    use std::io::Write;

    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(
        file,
        r#"{{"currencies": {{"XYZ": {{"country": "TEST", "decimals": 3, "symbol": {{"en": "T$", "native": "T$"}}}}}}}}"#
    )
    .unwrap();

    let config = FormatConfig {
        custom_currencies_path: Some(file.path().to_path_buf()),
        ..FormatConfig::default()
    };
    let f = with_config(config);
    assert_eq!(fmt(&f, dec!(1.5), "TEST", "en"), "1.500 T$");
    assert_eq!(f.currency_code("TEST").as_deref(), Some("XYZ"));
}

#[test]
fn custom_dataset_with_unusable_decimals_still_formats() {
    let catalog = CurrencyCatalog::builtin().with_custom_json(
        r#"{"currencies": {"XYZ": {"country": "TEST", "countries": ["TT"], "decimals": 40,
            "symbol": {"en": "T$", "native": "T$"}}}}"#,
    );
    let f = PriceFormatter::builder()
        .with_catalog(Arc::new(catalog))
        .build()
        .unwrap();
    assert_eq!(fmt(&f, dec!(1), "TT", "en"), "1.00 T$");
}

#[test]
fn large_amount_keeps_configured_decimals() {
    let options = FormatOptions::new().with_decimals(12);
    let out = formatter()
        .format(dec!(100000000000000000000), Some("US"), Some("en"), &options)
        .unwrap();
    assert_eq!(out, "$100,000,000,000,000,000,000.000000000000");
}

#[test]
fn compact_with_fractional_thresholds_never_panics() {
    let mut config = FormatConfig::default();
    config.default.compact.thresholds.thousand = dec!(0.001);
    config.default.compact.thresholds.million = dec!(0.002);
    config.default.compact.thresholds.billion = dec!(0.003);
    let err = with_config(config)
        .format_compact(Decimal::MAX, Some("XX"), Some("en"), &FormatOptions::new())
        .unwrap_err();
    assert!(matches!(err, FormatError::Overflow { .. }));
}

// =============================================================================
// NUMERALS
// =============================================================================

#[test]
fn forced_eastern_numerals_apply_to_every_language() {
    let mut config = FormatConfig::default();
    config.numerals.force_eastern = true;
    assert_eq!(fmt(&with_config(config), dec!(1234.56), "US", "en"), "$١٬٢٣٤٫٥٦");
}

#[test]
fn forced_western_numerals_apply_to_arabic() {
    let mut config = FormatConfig::default();
    config.numerals.force_western = true;
    assert_eq!(fmt(&with_config(config), dec!(1234.56), "EG", "ar"), "1,234.56 ج م");
}

#[test]
fn both_force_flags_set_eastern_wins() {
    let mut config = FormatConfig::default();
    config.numerals.force_eastern = true;
    config.numerals.force_western = true;
    assert_eq!(fmt(&with_config(config), dec!(10.5), "US", "en"), "$١٠٫٥٠");
}

#[test]
fn language_format_can_opt_out_of_eastern_digits() {
    let mut config = FormatConfig::default();
    if let Some(ar) = config
        .currencies
        .get_mut("EG")
        .and_then(|eg| eg.formats.get_mut("ar"))
    {
        ar.use_eastern_arabic_numerals = Some(false);
    }
    assert_eq!(fmt(&with_config(config), dec!(1234.56), "EG", "ar"), "1,234.56 ج م");
}

// =============================================================================
// PRESENTATION MODES
// =============================================================================

#[test]
fn accounting_format() {
    let f = formatter();
    let none = FormatOptions::new();
    assert_eq!(f.format_accounting(dec!(-10.50), Some("US"), Some("en"), &none).unwrap(), "($10.50)");
    assert_eq!(f.format_accounting(dec!(10.50), Some("US"), Some("en"), &none).unwrap(), "$10.50");
    assert_eq!(f.format(dec!(-10.50), Some("US"), Some("en"), &none).unwrap(), "-$10.50");
}

#[test]
fn compact_notation() {
    let f = formatter();
    let none = FormatOptions::new();
    let compact = |amount| f.format_compact(amount, Some("US"), Some("en"), &none).unwrap();
    assert_eq!(compact(dec!(1500)), "$1.5K");
    assert_eq!(compact(dec!(1500000)), "$1.5M");
    assert_eq!(compact(dec!(1500000000)), "$1.5B");
}

#[test]
fn compact_accounting_combination() {
    let options = FormatOptions::new().with_accounting(true);
    let out = formatter()
        .format_compact(dec!(-2500000), Some("EU"), Some("en"), &options)
        .unwrap();
    assert_eq!(out, "(2.5M €)");
}

#[test]
fn percentage() {
    let f = formatter();
    let none = FormatOptions::new();
    assert_eq!(f.format_percentage(dec!(0.255), 1, None, &none).unwrap(), "25.5%");
    assert_eq!(f.format_percentage(dec!(0.255), 1, Some("ar"), &none).unwrap(), "٢٥٫٥%");
    let spaced = FormatOptions::new().with_separator(" ");
    assert_eq!(f.format_percentage(dec!(0.1), 0, Some("en"), &spaced).unwrap(), "10 %");
}

// =============================================================================
// ROUNDING
// =============================================================================

#[test]
fn rounding_modes_from_default_settings() {
    let cases = [
        (RoundingMode::Ceil, dec!(10.001), "$10.01"),
        (RoundingMode::Floor, dec!(10.999), "$10.99"),
        (RoundingMode::HalfUp, dec!(10.505), "$10.51"),
        (RoundingMode::HalfDown, dec!(10.505), "$10.50"),
    ];
    for (mode, amount, expected) in cases {
        let mut config = FormatConfig::default();
        config.default.rounding_mode = mode;
        assert_eq!(fmt(&with_config(config), amount, "US", "en"), expected, "{mode}");
    }
}

#[test]
fn invalid_rounding_mode_rejected_before_formatting() {
    let err = FormatConfig::from_json_str(r#"{"default": {"rounding_mode": "invalid_mode"}}"#)
        .unwrap_err();
    assert!(err.to_string().contains("Invalid rounding mode 'invalid_mode'"));
    assert_eq!(
        "invalid_mode".parse::<RoundingMode>().unwrap_err(),
        FormatError::invalid_rounding_mode("invalid_mode")
    );
}

// =============================================================================
// LOCALE
// =============================================================================

#[test]
fn localized_format_uses_ambient_language_and_mapped_country() {
    let mut config = FormatConfig::default();
    config.locale.use_app_locale = true;
    config
        .locale
        .locale_to_country_map
        .insert("ar".into(), "EG".into());
    let f = PriceFormatter::builder()
        .with_config(config)
        .with_locale_provider(Arc::new(FixedLocale::new("ar")))
        .build()
        .unwrap();

    assert_eq!(f.format_localized(dec!(5), None, &FormatOptions::new()).unwrap(), "٥ ج م");
    assert_eq!(
        f.format_localized(dec!(10.5), Some("US"), &FormatOptions::new()).unwrap(),
        "١٠٫٥٠ دولار"
    );
}

#[test]
fn localized_format_without_provider_is_english() {
    let f = formatter();
    assert_eq!(f.format_localized(dec!(10.5), Some("US"), &FormatOptions::new()).unwrap(), "$10.50");
}

// =============================================================================
// INPUT ROUND-TRIP
// =============================================================================

#[test]
fn formatted_output_strips_back_to_amount() {
    let f = formatter();
    for (country, language) in [("US", "en"), ("EG", "ar"), ("EU", "en"), ("JP", "en")] {
        let out = fmt(&f, dec!(1234), country, language);
        assert_eq!(extract_amount(&out), Some(dec!(1234)), "{out}");
    }
    assert!(is_monetary_value("$100.50"));
    assert!(is_monetary_value("100.50 USD"));
    assert!(!is_monetary_value("USD"));
    assert!(!is_monetary_value("not a number"));
}
