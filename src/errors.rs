//! Error types for the genvector crate

use thiserror::Error;

/// Main error type for coordinate-system operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenVectorError {
    /// A quantity that the coordinate system does not store was set directly
    ///
    /// The setter still applies the change by round-tripping through a
    /// coordinate system that does store the quantity.
    #[error("{operation}() is not supposed to be called")]
    SetNotSupported {
        /// Name of the offending setter, e.g. `Cartesian3D::set_r`
        operation: &'static str,
    },

    /// A bulk coordinate slice had the wrong number of elements
    #[error("Expected {expected} coordinates, got {actual}")]
    InvalidLength {
        /// Number of coordinates the system stores
        expected: usize,
        /// Length of the slice that was passed in
        actual: usize,
    },
}

/// Result type for genvector operations
pub type Result<T> = std::result::Result<T, GenVectorError>;

/// Build a [`GenVectorError::SetNotSupported`] and report it on the log
pub(crate) fn set_not_supported(operation: &'static str) -> GenVectorError {
    let err = GenVectorError::SetNotSupported { operation };
    log::warn!("{err}");
    err
}

/// Check that a bulk coordinate slice holds exactly `expected` elements
pub(crate) fn check_length(expected: usize, actual: usize) -> Result<()> {
    if actual == expected {
        Ok(())
    } else {
        Err(GenVectorError::InvalidLength { expected, actual })
    }
}
