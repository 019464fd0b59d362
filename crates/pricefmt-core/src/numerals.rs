//! Numeral script transcription.
//!
//! Converts a formatted Western-digit number into Eastern Arabic digits
//! (٠١٢٣٤٥٦٧٨٩) and decides, per call, whether that conversion applies.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Arabic decimal separator (U+066B).
pub const ARABIC_DECIMAL_SEPARATOR: char = '\u{066B}';

/// Arabic thousands separator (U+066C).
pub const ARABIC_THOUSAND_SEPARATOR: char = '\u{066C}';

const EASTERN_ARABIC_DIGITS: [char; 10] = [
    '\u{0660}', '\u{0661}', '\u{0662}', '\u{0663}', '\u{0664}', '\u{0665}', '\u{0666}', '\u{0667}',
    '\u{0668}', '\u{0669}',
];

/// Transcribes a formatted number to Eastern Arabic digits.
///
/// The configured separators are swapped for the Arabic marks before any
/// digit is touched, decimal separator first.
#[must_use]
pub fn to_eastern_arabic(number: &str, decimal_separator: &str, thousand_separator: &str) -> String {
    let mut out = number.to_string();
    if !decimal_separator.is_empty() {
        out = out.replace(decimal_separator, &ARABIC_DECIMAL_SEPARATOR.to_string());
    }
    if !thousand_separator.is_empty() {
        out = out.replace(thousand_separator, &ARABIC_THOUSAND_SEPARATOR.to_string());
    }
    out.chars()
        .map(|c| {
            if c.is_ascii_digit() {
                EASTERN_ARABIC_DIGITS[usize::from(c as u8 - b'0')]
            } else {
                c
            }
        })
        .collect()
}

/// Maps Eastern Arabic digits and marks back to `0-9`, `.` and `,`.
#[must_use]
pub fn to_western(number: &str) -> String {
    number
        .chars()
        .map(|c| {
            if let Some(d) = EASTERN_ARABIC_DIGITS.iter().position(|&e| e == c) {
                char::from(b'0' + d as u8)
            } else if c == ARABIC_DECIMAL_SEPARATOR {
                '.'
            } else if c == ARABIC_THOUSAND_SEPARATOR {
                ','
            } else {
                c
            }
        })
        .collect()
}

// =============================================================================
// NUMERAL POLICY
// =============================================================================

/// Process-wide numeral script rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumeralPolicy {
    /// Languages that get Eastern Arabic digits unless a format opts out.
    pub eastern_arabic_languages: BTreeSet<String>,
    /// Eastern Arabic digits for every language.
    #[serde(alias = "force_eastern_arabic")]
    pub force_eastern: bool,
    /// Western digits for every language.
    #[serde(alias = "force_western_arabic")]
    pub force_western: bool,
}

impl Default for NumeralPolicy {
    fn default() -> Self {
        Self {
            eastern_arabic_languages: ["ar", "fa", "ur"].iter().map(|s| (*s).to_string()).collect(),
            force_eastern: false,
            force_western: false,
        }
    }
}

impl NumeralPolicy {
    /// Returns true if `language` defaults to Eastern Arabic digits.
    #[must_use]
    pub fn is_eastern_language(&self, language: &str) -> bool {
        self.eastern_arabic_languages.contains(language)
    }

    /// Decides whether a number is transcribed.
    ///
    /// The force flags beat everything, `force_eastern` first. Otherwise an
    /// explicit per-format flag wins, and an unset flag defers to the language.
    #[must_use]
    pub fn use_eastern(&self, explicit: Option<bool>, language: &str) -> bool {
        if self.force_eastern {
            return true;
        }
        if self.force_western {
            return false;
        }
        explicit.unwrap_or_else(|| self.is_eastern_language(language))
    }
}
