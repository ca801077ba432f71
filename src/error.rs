//! Error types for radixr

use thiserror::Error;

/// Result type alias using radixr's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when launching a sort
///
/// The pipeline itself has no runtime failure modes; every variant here
/// is a caller contract violation detected at the API boundary, before
/// any data is touched.
#[derive(Error, Debug)]
pub enum Error {
    /// Key and value buffers must pair up one-to-one
    #[error("Length mismatch: {keys} keys but {values} values")]
    LengthMismatch {
        /// Number of keys
        keys: usize,
        /// Number of values
        values: usize,
    },

    /// Input exceeds 32-bit indexing
    #[error("Input of {len} elements exceeds 32-bit indexing")]
    TooLarge {
        /// Number of keys supplied
        len: usize,
    },
}
