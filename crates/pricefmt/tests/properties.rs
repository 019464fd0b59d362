//! Properties of resolution and rendering over generated inputs.

use pricefmt::prelude::*;
use pricefmt::CountryConfig;
use proptest::prelude::*;
use rust_decimal::Decimal;

fn amount() -> impl Strategy<Value = Decimal> {
    (any::<i64>(), 0u32..10).prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

fn symbol() -> impl Strategy<Value = String> {
    "[A-Z]{1,4}"
}

proptest! {
    #[test]
    fn format_never_fails_without_strict(
        amount in amount(),
        country in "[A-Z]{2,3}",
        language in "[a-z]{2}",
    ) {
        let formatter = PriceFormatter::default();
        let out = formatter.format(amount, Some(&country), Some(&language), &FormatOptions::new());
        prop_assert!(out.is_ok());
    }

    #[test]
    fn override_beats_language_beats_english_beats_default(
        over in symbol(),
        lang in symbol(),
        en in symbol(),
        fallback in symbol(),
    ) {
        let mut config = FormatConfig::default();
        config.default.symbol = fallback.clone();
        config.currencies.insert(
            "ZZ".into(),
            CountryConfig::new("ZZZ")
                .with_format("en", FormatLayer::new().with_symbol(en.clone()))
                .with_format("de", FormatLayer::new().with_symbol(lang.clone())),
        );
        let formatter = PriceFormatter::builder().with_config(config).build().unwrap();
        let symbol_of = |language: &str, options: &FormatOptions| {
            formatter.resolve(Some("ZZ"), Some(language), options).unwrap().settings.symbol
        };

        prop_assert_eq!(symbol_of("de", &FormatOptions::new().with_symbol(over.clone())), over);
        prop_assert_eq!(symbol_of("de", &FormatOptions::new()), lang);
        prop_assert_eq!(symbol_of("fr", &FormatOptions::new()), en);
        let unknown = formatter.resolve(Some("QQ"), Some("de"), &FormatOptions::new()).unwrap();
        prop_assert_eq!(unknown.settings.symbol, fallback);
    }

    #[test]
    fn sign_is_rendered_outside_symbol(amount in amount()) {
        let formatter = PriceFormatter::default();
        let none = FormatOptions::new();
        let plain = formatter.format(amount.abs(), Some("US"), Some("en"), &none).unwrap();
        let negative = formatter.format(-amount.abs(), Some("US"), Some("en"), &none).unwrap();
        let accounting = formatter
            .format_accounting(-amount.abs(), Some("US"), Some("en"), &none)
            .unwrap();
        if plain == "$0.00" {
            prop_assert_eq!(&negative, &plain);
        } else {
            prop_assert_eq!(negative, format!("-{plain}"));
            prop_assert_eq!(accounting, format!("({plain})"));
        }
    }
}
