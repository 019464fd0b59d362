//! CLI command implementations.

pub mod config;
pub mod convert;
pub mod format;
pub mod lookup;
pub mod parse;
pub mod percent;

// Re-export submodules for convenience
pub use config::ConfigArgs;
pub use convert::ConvertArgs;
pub use format::FormatArgs;
pub use lookup::LookupArgs;
pub use parse::ParseArgs;
pub use percent::PercentArgs;

use std::path::PathBuf;
use std::sync::Arc;

use pricefmt::{ExchangeRateProvider, FormatConfig, PriceFormatter};
use tracing::debug;

use crate::error::{CliError, CliResult};

/// State shared by every command.
#[derive(Debug, Clone, Default)]
pub struct Context {
    config_path: Option<PathBuf>,
}

impl Context {
    /// Creates a context reading configuration from `config_path`, if any.
    pub fn new(config_path: Option<PathBuf>) -> Self {
        Self { config_path }
    }

    /// Loads the configuration, or the built-in one.
    pub fn config(&self) -> CliResult<FormatConfig> {
        match &self.config_path {
            Some(path) => {
                debug!(path = %path.display(), "loading configuration");
                FormatConfig::from_path(path).map_err(|e| CliError::Config(e.to_string()))
            }
            None => Ok(FormatConfig::default()),
        }
    }

    /// Builds a formatter from the configuration.
    pub fn formatter(&self) -> CliResult<PriceFormatter> {
        self.build(None)
    }

    /// Builds a formatter with an exchange rate provider.
    pub fn formatter_with_rates(
        &self,
        rates: Arc<dyn ExchangeRateProvider>,
    ) -> CliResult<PriceFormatter> {
        self.build(Some(rates))
    }

    fn build(&self, rates: Option<Arc<dyn ExchangeRateProvider>>) -> CliResult<PriceFormatter> {
        let mut builder = PriceFormatter::builder().with_config(self.config()?);
        if let Some(rates) = rates {
            builder = builder.with_rate_provider(rates);
        }
        builder.build().map_err(|e| CliError::Config(e.to_string()))
    }
}
