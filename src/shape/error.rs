//! Error type for dimension factoring.

use thiserror::Error;

/// Error type for dimension factoring.
///
/// Returned when a pixel count cannot be factored into grid dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// A count of zero has no grid factorization
    #[error("cannot factor a count of zero into grid dimensions")]
    InvalidCount,
}
