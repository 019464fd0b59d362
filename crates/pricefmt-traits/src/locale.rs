//! Ambient application locale.

/// Supplies the caller's current language, e.g. from a request context.
pub trait CurrentLocaleProvider: Send + Sync {
    /// Current language code, if one is set.
    fn current_language(&self) -> Option<String>;
}

/// A locale provider that always answers the same language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedLocale(String);

impl FixedLocale {
    /// Creates a provider answering `language`.
    pub fn new(language: impl Into<String>) -> Self {
        Self(language.into())
    }
}

impl CurrentLocaleProvider for FixedLocale {
    fn current_language(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_locale() {
        assert_eq!(FixedLocale::new("ar").current_language().as_deref(), Some("ar"));
    }
}
