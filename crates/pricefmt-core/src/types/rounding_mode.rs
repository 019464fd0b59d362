//! Rounding policy names.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FormatError;

/// Rounding policy applied before rendering.
///
/// Parsing is strict: anything other than `ceil`, `floor`, `half_up` or
/// `half_down` is rejected with [`FormatError::InvalidRoundingMode`], so a bad
/// name in a configuration file fails at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "String", into = "String")]
pub enum RoundingMode {
    /// Toward positive infinity.
    Ceil,
    /// Toward negative infinity.
    Floor,
    /// Nearest, ties away from zero.
    #[default]
    HalfUp,
    /// Nearest, ties toward zero.
    HalfDown,
}

impl RoundingMode {
    /// All supported modes.
    pub const ALL: [RoundingMode; 4] = [
        RoundingMode::Ceil,
        RoundingMode::Floor,
        RoundingMode::HalfUp,
        RoundingMode::HalfDown,
    ];

    /// Returns the configuration name of the mode.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            RoundingMode::Ceil => "ceil",
            RoundingMode::Floor => "floor",
            RoundingMode::HalfUp => "half_up",
            RoundingMode::HalfDown => "half_down",
        }
    }
}

impl FromStr for RoundingMode {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ceil" => Ok(RoundingMode::Ceil),
            "floor" => Ok(RoundingMode::Floor),
            "half_up" => Ok(RoundingMode::HalfUp),
            "half_down" => Ok(RoundingMode::HalfDown),
            other => Err(FormatError::invalid_rounding_mode(other)),
        }
    }
}

impl TryFrom<String> for RoundingMode {
    type Error = FormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RoundingMode> for String {
    fn from(mode: RoundingMode) -> Self {
        mode.as_str().to_string()
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_names() {
        for mode in RoundingMode::ALL {
            assert_eq!(mode.as_str().parse::<RoundingMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "invalid_mode".parse::<RoundingMode>().unwrap_err();
        assert_eq!(err, FormatError::invalid_rounding_mode("invalid_mode"));
    }

    #[test]
    fn test_serde_rejects_unknown() {
        let result: Result<RoundingMode, _> = serde_json::from_str("\"nearest\"");
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Invalid rounding mode 'nearest'"));
    }

    #[test]
    fn test_serde_round_trip_name() {
        let json = serde_json::to_string(&RoundingMode::HalfDown).unwrap();
        assert_eq!(json, "\"half_down\"");
    }
}
