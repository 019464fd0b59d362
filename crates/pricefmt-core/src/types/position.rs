//! Symbol placement relative to the number.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FormatError;

/// Where the currency symbol goes relative to the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    /// `symbol + separator + number`
    #[default]
    Before,
    /// `number + separator + symbol`
    After,
}

impl Position {
    /// Returns the configuration name of the position.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Before => "before",
            Position::After => "after",
        }
    }
}

impl FromStr for Position {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "before" => Ok(Position::Before),
            "after" => Ok(Position::After),
            other => Err(FormatError::invalid_config(format!(
                "unknown symbol position '{other}'"
            ))),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("before".parse::<Position>().unwrap(), Position::Before);
        assert_eq!("AFTER".parse::<Position>().unwrap(), Position::After);
        assert!("middle".parse::<Position>().is_err());
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Position::After).unwrap(), "\"after\"");
        let parsed: Position = serde_json::from_str("\"before\"").unwrap();
        assert_eq!(parsed, Position::Before);
    }
}
