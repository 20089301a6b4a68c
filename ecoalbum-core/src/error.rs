use thiserror::Error;

/// Error taxonomy for catalog operations.
///
/// Every core operation resolves to one of these or to an `Ok` value; an
/// empty result set is a valid `Ok`, not an error.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Malformed client input, raised before any repository call.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Data-access failure. Operations never return partial aggregates;
    /// one failed repository call fails the whole operation.
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
