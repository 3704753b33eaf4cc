//! Unified error type for the pixel-remap public API.
//!
//! [`RemapError`] wraps the module-level error types into a single enum for
//! convenient `?` propagation in application code.

use thiserror::Error;

use crate::assign::AssignError;
use crate::cost::CostError;
use crate::shape::ShapeError;

/// Unified error type for the pixel-remap public API.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RemapError {
    /// Dimension factoring failed (zero count)
    #[error("shape error: {0}")]
    Shape(#[from] ShapeError),

    /// Cost matrix construction failed (shape mismatch)
    #[error("cost error: {0}")]
    Cost(#[from] CostError),

    /// Assignment failed (shape mismatch, too few channels, or a
    /// non-finite cost entry)
    #[error("assignment error: {0}")]
    Assign(#[from] AssignError),

    /// The payload sequence is not aligned with the source keys
    #[error("payload count ({payloads}) must match source point count ({points})")]
    PayloadLength {
        /// Number of payload values supplied
        payloads: usize,
        /// Number of source points
        points: usize,
    },
}
