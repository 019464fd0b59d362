//! Catalog loading errors.

use thiserror::Error;

/// Catalog operation result type.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Failures reading a currency dataset.
///
/// Only the strict loaders surface these; [`crate::CurrencyCatalog::load`]
/// logs them and keeps the built-in data.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The dataset file could not be read.
    #[error("IO error reading currency dataset {path}: {source}")]
    Io {
        /// Dataset path.
        path: String,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The dataset is not valid JSON of the expected shape.
    #[error("Malformed currency dataset: {0}")]
    Malformed(#[from] serde_json::Error),
}
