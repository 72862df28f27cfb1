// crates/countrydb-core/src/error.rs
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CountryError>;

/// All errors produced by this crate.
///
/// Lookup misses are split into two cases so callers can tell malformed
/// input apart from well-formed input that simply has no entry:
/// [`CountryError::NotFound`] vs [`CountryError::InvalidCodeFormat`].
/// Both carry the offending input for diagnostics.
#[derive(Error, Debug)]
pub enum CountryError {
    /// A well-formed key with no matching index entry.
    #[error("could not find country with {what}: {query}")]
    NotFound { what: &'static str, query: String },

    /// A subdivision lookup miss, scoped to one country.
    #[error("could not find subdivision with {what}: {query}")]
    SubdivisionNotFound { what: &'static str, query: String },

    /// An alpha lookup with a length other than 2 or 3.
    #[error("invalid code format: {0}")]
    InvalidCodeFormat(String),

    /// The loader supplied zero country records. A database without data
    /// would look valid while answering nothing, so construction aborts.
    #[error("dataset contains no countries")]
    EmptyDataSet,

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cache error: {0}")]
    Bincode(#[from] bincode::Error),
}
