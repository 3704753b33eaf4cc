//! Error type for assignment strategies.

use thiserror::Error;

use crate::cost::CostError;
use crate::shape::ShapeError;

/// Error type for assignment strategies.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssignError {
    /// The two key sets differ in point count or channel arity
    #[error(
        "input shape mismatch: source is {source_len} points x {source_channels} channels, \
         target is {target_len} points x {target_channels} channels"
    )]
    InputShapeMismatch {
        /// Number of source points
        source_len: usize,
        /// Source channel arity
        source_channels: usize,
        /// Number of target points
        target_len: usize,
        /// Target channel arity
        target_channels: usize,
    },

    /// The approximate strategy sorts on three channels and got fewer
    #[error("approximate strategy needs at least 3 key channels, got {channels}")]
    TooFewChannels {
        /// Channel arity of the inputs
        channels: usize,
    },

    /// A cost matrix entry is NaN or infinite. The optimal matcher cannot
    /// order such entries, so this is surfaced instead of silently defaulted.
    #[error("cost matrix entry ({row}, {col}) is not finite: {value}")]
    NonFiniteCost {
        /// Row (source index) of the offending entry
        row: usize,
        /// Column (target index) of the offending entry
        col: usize,
        /// The offending value
        value: f64,
    },

    /// Dimension factoring failed
    #[error("shape error: {0}")]
    Shape(#[from] ShapeError),
}

impl From<CostError> for AssignError {
    fn from(err: CostError) -> Self {
        match err {
            CostError::InputShapeMismatch {
                source_len,
                source_channels,
                target_len,
                target_channels,
            } => AssignError::InputShapeMismatch {
                source_len,
                source_channels,
                target_len,
                target_channels,
            },
        }
    }
}
