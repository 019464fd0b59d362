//! End-to-end tests of the `pricefmt` binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn pricefmt() -> Command {
    let mut cmd = Command::cargo_bin("pricefmt").unwrap();
    cmd.env_remove("PRICEFMT_CONFIG").env_remove("RUST_LOG");
    cmd
}

#[test]
fn formats_configured_country() {
    pricefmt()
        .args(["format", "10.5", "--country", "US", "--language", "en"])
        .assert()
        .success()
        .stdout("$10.50\n");
}

#[test]
fn formats_arabic_with_eastern_digits() {
    pricefmt()
        .args(["format", "5", "--country", "EG", "--language", "ar"])
        .assert()
        .success()
        .stdout("٥ ج م\n");
}

#[test]
fn accounting_negative_amount() {
    pricefmt()
        .args(["format", "-10.5", "-C", "US", "-l", "en", "--accounting"])
        .assert()
        .success()
        .stdout("($10.50)\n");
}

#[test]
fn strict_unknown_country_fails() {
    pricefmt()
        .args(["format", "15", "--country", "XX", "--strict"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Currency with code 'XX' not found."));
}

#[test]
fn json_output_reports_source() {
    pricefmt()
        .args(["--format", "json", "format", "1000", "--country", "JP", "--language", "en"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"formatted\": \"¥1,000\""))
        .stdout(predicate::str::contains("\"source\": \"catalog:JPY\""));
}

#[test]
fn percentage() {
    pricefmt()
        .args(["percent", "0.255", "--decimals", "1"])
        .assert()
        .success()
        .stdout("25.5%\n");
}

#[test]
fn convert_with_explicit_rate() {
    pricefmt()
        .args(["convert", "10", "--from", "USD", "--to", "EGP", "--rate", "50", "-l", "en"])
        .assert()
        .success()
        .stdout("500 LE\n");
}

#[test]
fn convert_without_rate_fails() {
    pricefmt()
        .args(["convert", "10", "--from", "USD", "--to", "EGP"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--rate or --rates"));
}

#[test]
fn lookup_catalog_country() {
    pricefmt()
        .args(["lookup", "JP"])
        .assert()
        .success()
        .stdout("JPY\n");
}

#[test]
fn parse_formatted_text() {
    pricefmt()
        .args(["parse", "1,234.56 LE"])
        .assert()
        .success()
        .stdout("1234.56\n");
}

#[test]
fn config_file_changes_default_country() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "default_country = \"US\"").unwrap();

    pricefmt()
        .arg("--config")
        .arg(file.path())
        .args(["format", "15"])
        .assert()
        .success()
        .stdout("$15.00\n");
}

#[test]
fn config_validate_rejects_bad_rounding() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, r#"{{"default": {{"rounding_mode": "invalid_mode"}}}}"#).unwrap();

    pricefmt()
        .args(["config", "validate"])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid_mode"));
}
