//! Pairwise cost matrices between two keyed point sets.
//!
//! The cost matrix is the input to the exact assignment strategy: entry
//! `[i, j]` is the distance between source point `i` and target point `j` in
//! key space. Construction is a per-channel broadcast (source column against
//! target row), squared and summed across channels, with an optional square
//! root to yield a true Euclidean distance.
//!
//! This is the dominant memory cost of the exact path: n² entries bound the
//! practical point count well before the O(n³) solve does.

use ndarray::{Array2, ArrayView2, Axis};
use rayon::prelude::*;
use thiserror::Error;

/// Distance convention for cost matrix entries.
///
/// Pick one convention per call site; mixing metrics across the matrices fed
/// to a single assignment changes the optimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CostMetric {
    /// Per-channel squared differences, summed. Cheaper, order-preserving
    /// for any fixed pair of rows, but not a metric distance.
    SquaredEuclidean,
    /// Square root of the summed squares: true Euclidean distance in key
    /// space. Required when channels are coordinates of a shared metric
    /// space such as a perceptual color space.
    #[default]
    Euclidean,
}

/// Error type for cost matrix construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CostError {
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
}

/// Build the dense n×n cost matrix between two equal-shape key sets.
///
/// `source` and `target` are n×k arrays (row = point, column = channel).
/// Rows of the result index source points, columns index target points.
/// Channels are computed independently (in parallel) and summed; the sum is
/// square-rooted for [`CostMetric::Euclidean`].
///
/// O(n²k) time, O(n²) space.
///
/// # Errors
///
/// [`CostError::InputShapeMismatch`] when the point counts or channel
/// arities differ.
///
/// # Example
///
/// ```
/// use ndarray::arr2;
/// use pixel_remap::cost::{build_cost_matrix, CostMetric};
///
/// let a = arr2(&[[0.0, 0.0], [3.0, 4.0]]);
/// let cost = build_cost_matrix(a.view(), a.view(), CostMetric::Euclidean).unwrap();
///
/// assert_eq!(cost[[0, 0]], 0.0);
/// assert_eq!(cost[[0, 1]], 5.0);
/// ```
pub fn build_cost_matrix(
    source: ArrayView2<'_, f64>,
    target: ArrayView2<'_, f64>,
    metric: CostMetric,
) -> Result<Array2<f64>, CostError> {
    if source.dim() != target.dim() {
        return Err(CostError::InputShapeMismatch {
            source_len: source.nrows(),
            source_channels: source.ncols(),
            target_len: target.nrows(),
            target_channels: target.ncols(),
        });
    }
    let (n, channels) = source.dim();

    let mut cost = (0..channels)
        .into_par_iter()
        .map(|c| {
            // source column c replicated across columns, target column c
            // replicated across rows, subtracted and squared
            let rows = source.column(c).insert_axis(Axis(1));
            let cols = target.column(c).insert_axis(Axis(0));
            let diff = &rows - &cols;
            diff.mapv_into(|d| d * d)
        })
        .reduce(|| Array2::zeros((n, n)), |acc, channel| acc + channel);

    if metric == CostMetric::Euclidean {
        cost.mapv_inplace(f64::sqrt);
    }
    Ok(cost)
}
