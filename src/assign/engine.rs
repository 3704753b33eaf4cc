//! Strategy orchestration: exact cost matching or approximate rank pairing.

use ndarray::ArrayView2;
use tracing::debug;

use super::error::AssignError;
use super::exact::solve_exact;
use super::{Permutation, Strategy};
use crate::cost::{build_cost_matrix, CostMetric};
use crate::shape::Shape3d;
use crate::sort::sort_volume;

/// Compute the permutation mapping each source point to a target position.
///
/// `source` and `target` are n×k key arrays (row = point, column = channel);
/// both must have the same shape. The keys are only consulted for matching —
/// apply the returned [`Permutation`] to whatever payload sequence travels
/// with the source keys.
///
/// - [`Strategy::Exact`] builds the pairwise cost matrix under `metric` and
///   solves it optimally. `metric` has no effect on the approximate path.
/// - [`Strategy::Approximate`] sorts both key sets through the same
///   volumetric ordering (primary: channel 0; secondary/tertiary: sum and
///   difference of channels 1 and 2) and pairs them rank by rank, which
///   yields a bijection without ever computing pairwise costs. Requires
///   k >= 3.
///
/// `n == 0` returns the empty permutation.
///
/// # Errors
///
/// - [`AssignError::InputShapeMismatch`] when the key arrays differ in
///   point count or channel arity.
/// - [`AssignError::TooFewChannels`] for the approximate strategy with
///   k < 3.
/// - [`AssignError::NonFiniteCost`] when a NaN or infinite key poisons the
///   cost matrix on the exact path.
pub fn assign(
    source: ArrayView2<'_, f64>,
    target: ArrayView2<'_, f64>,
    strategy: Strategy,
    metric: CostMetric,
) -> Result<Permutation, AssignError> {
    if source.dim() != target.dim() {
        return Err(AssignError::InputShapeMismatch {
            source_len: source.nrows(),
            source_channels: source.ncols(),
            target_len: target.nrows(),
            target_channels: target.ncols(),
        });
    }
    if source.nrows() == 0 {
        return Ok(Permutation::identity(0));
    }

    match strategy {
        Strategy::Exact => {
            let cost = build_cost_matrix(source, target, metric)?;
            solve_exact(cost.view())
        }
        Strategy::Approximate => approximate(source, target),
    }
}

/// Rank pairing: volumetric-sort both key sets and pair position by
/// position. The source rank order and the target rank order are each a
/// permutation of `0..n`, so pairing them is one too.
fn approximate(
    source: ArrayView2<'_, f64>,
    target: ArrayView2<'_, f64>,
) -> Result<Permutation, AssignError> {
    let channels = source.ncols();
    if channels < 3 {
        return Err(AssignError::TooFewChannels { channels });
    }
    let n = source.nrows();
    let shape = Shape3d::balanced(n)?;
    debug!(
        n,
        w = shape.w,
        h = shape.h,
        d = shape.d,
        "approximate rank pairing"
    );

    let source_ranks = rank_order(source, shape);
    let target_ranks = rank_order(target, shape);

    let mut dest = vec![0usize; n];
    for (&s, &t) in source_ranks.iter().zip(&target_ranks) {
        dest[s] = t;
    }
    Ok(Permutation::new(dest))
}

/// Original indices of `keys` in volumetric sort order, using the
/// conventional key functions: channel 0 ranks depth slices, channels 1 and
/// 2 sweep each face's diagonals by sum and difference.
fn rank_order(keys: ArrayView2<'_, f64>, shape: Shape3d) -> Vec<usize> {
    let indices: Vec<usize> = (0..keys.nrows()).collect();
    sort_volume(
        indices,
        shape,
        |&i| keys[[i, 0]],
        |&i| keys[[i, 1]] + keys[[i, 2]],
        |&i| keys[[i, 1]] - keys[[i, 2]],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr2, Array2};

    const STRATEGIES: [Strategy; 2] = [Strategy::Exact, Strategy::Approximate];

    #[test]
    fn collinear_points_pair_by_rank_under_both_strategies() {
        // source and target are the same collinear set in different order,
        // so the optimal matching and the rank pairing coincide
        let source = arr2(&[[0.0, 0.0, 0.0], [1.0, 1.0, 1.0], [2.0, 2.0, 2.0]]);
        let target = arr2(&[[2.0, 2.0, 2.0], [0.0, 0.0, 0.0], [1.0, 1.0, 1.0]]);
        for strategy in STRATEGIES {
            let perm =
                assign(source.view(), target.view(), strategy, CostMetric::Euclidean).unwrap();
            assert_eq!(perm.as_slice(), &[1, 2, 0], "strategy {strategy:?}");
            assert_eq!(
                perm.apply(vec!['A', 'B', 'C']),
                vec!['C', 'A', 'B'],
                "strategy {strategy:?}"
            );
        }
    }

    #[test]
    fn exact_matching_is_zero_cost_for_equal_multisets() {
        let source = arr2(&[[0.0, 0.0, 0.0], [1.0, 1.0, 1.0], [2.0, 2.0, 2.0]]);
        let target = arr2(&[[2.0, 2.0, 2.0], [0.0, 0.0, 0.0], [1.0, 1.0, 1.0]]);
        let perm = assign(
            source.view(),
            target.view(),
            Strategy::Exact,
            CostMetric::Euclidean,
        )
        .unwrap();
        let cost = build_cost_matrix(source.view(), target.view(), CostMetric::Euclidean).unwrap();
        let total: f64 = (0..3).map(|i| cost[[i, perm.destination(i)]]).sum();
        assert_eq!(total, 0.0);
    }

    #[test]
    fn single_point_is_returned_unchanged() {
        let source = arr2(&[[5.0, 5.0, 5.0]]);
        let target = arr2(&[[0.0, 0.0, 0.0]]);
        for strategy in STRATEGIES {
            let perm =
                assign(source.view(), target.view(), strategy, CostMetric::Euclidean).unwrap();
            assert_eq!(perm.as_slice(), &[0], "strategy {strategy:?}");
            assert_eq!(perm.apply(vec!["only"]), vec!["only"]);
        }
    }

    #[test]
    fn empty_input_yields_empty_permutation() {
        let keys = Array2::<f64>::zeros((0, 3));
        for strategy in STRATEGIES {
            let perm = assign(keys.view(), keys.view(), strategy, CostMetric::Euclidean).unwrap();
            assert!(perm.is_empty(), "strategy {strategy:?}");
        }
    }

    #[test]
    fn shape_mismatch_is_rejected() {
        let source = arr2(&[[0.0, 0.0, 0.0], [1.0, 1.0, 1.0]]);
        let shorter = arr2(&[[0.0, 0.0, 0.0]]);
        let narrower = arr2(&[[0.0, 0.0], [1.0, 1.0]]);
        for strategy in STRATEGIES {
            for target in [shorter.view(), narrower.view()] {
                let err = assign(source.view(), target, strategy, CostMetric::Euclidean)
                    .unwrap_err();
                assert!(
                    matches!(err, AssignError::InputShapeMismatch { .. }),
                    "strategy {strategy:?}: {err:?}"
                );
            }
        }
    }

    #[test]
    fn approximate_rejects_two_channel_keys() {
        let keys = arr2(&[[0.0, 0.0], [1.0, 1.0]]);
        let err = assign(
            keys.view(),
            keys.view(),
            Strategy::Approximate,
            CostMetric::Euclidean,
        )
        .unwrap_err();
        assert_eq!(err, AssignError::TooFewChannels { channels: 2 });
    }

    #[test]
    fn exact_accepts_two_channel_keys() {
        // only the approximate path needs three sort channels
        let source = arr2(&[[0.0, 0.0], [3.0, 4.0]]);
        let target = arr2(&[[3.0, 4.0], [0.0, 0.0]]);
        let perm = assign(
            source.view(),
            target.view(),
            Strategy::Exact,
            CostMetric::Euclidean,
        )
        .unwrap();
        assert_eq!(perm.as_slice(), &[1, 0]);
    }

    #[test]
    fn non_finite_key_is_surfaced_on_exact_path() {
        let source = arr2(&[[f64::NAN, 0.0, 0.0]]);
        let target = arr2(&[[0.0, 0.0, 0.0]]);
        let err = assign(
            source.view(),
            target.view(),
            Strategy::Exact,
            CostMetric::Euclidean,
        )
        .unwrap_err();
        assert!(matches!(err, AssignError::NonFiniteCost { .. }));
    }
}
