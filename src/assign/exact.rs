//! Exact assignment through an optimal bipartite matcher.
//!
//! The matcher itself is an external primitive (`pathfinding`'s
//! Kuhn-Munkres implementation) consumed as a black box: given an n×n cost
//! matrix it returns the permutation minimizing the total cost, optimally
//! and deterministically, in O(n³) worst case. This module only validates
//! the matrix and adapts between `ndarray` and the matcher's matrix type.

use ndarray::ArrayView2;
use ordered_float::OrderedFloat;
use pathfinding::kuhn_munkres::kuhn_munkres_min;
use pathfinding::matrix::Matrix;
use tracing::debug;

use super::error::AssignError;
use super::Permutation;

/// Solve an n×n cost matrix for the permutation minimizing
/// `Σ cost[i, perm(i)]`.
///
/// Rows index source points, columns index target positions. Ties in cost
/// may be broken either way by the matcher, but the result is always a valid
/// bijection.
///
/// # Errors
///
/// [`AssignError::NonFiniteCost`] if any entry is NaN or infinite — a
/// malformed matrix is an invariant violation upstream, not something to
/// paper over with a default pairing.
///
/// # Example
///
/// ```
/// use ndarray::arr2;
/// use pixel_remap::assign::solve_exact;
///
/// let cost = arr2(&[[0.0, 5.0], [5.0, 0.0]]);
/// let perm = solve_exact(cost.view()).unwrap();
/// assert_eq!(perm.as_slice(), &[0, 1]);
/// ```
pub fn solve_exact(cost: ArrayView2<'_, f64>) -> Result<Permutation, AssignError> {
    let n = cost.nrows();
    debug_assert_eq!(n, cost.ncols(), "cost matrix must be square");
    if n == 0 {
        return Ok(Permutation::identity(0));
    }

    for ((row, col), &value) in cost.indexed_iter() {
        if !value.is_finite() {
            return Err(AssignError::NonFiniteCost { row, col, value });
        }
    }

    let entries: Vec<OrderedFloat<f64>> = cost.iter().map(|&v| OrderedFloat(v)).collect();
    let weights =
        Matrix::from_vec(n, n, entries).expect("n*n entries always form a square matrix");
    let (total, destinations) = kuhn_munkres_min(&weights);
    debug!(n, total = total.into_inner(), "exact assignment solved");

    Ok(Permutation::new(destinations))
}
