//! Assignment strategies and the permutations they produce.
//!
//! This module provides the [`assign`] engine entry point, the [`Strategy`]
//! selector, and the [`Permutation`] output type. The exact strategy routes
//! through a cost matrix and an optimal bipartite matcher; the approximate
//! strategy pairs two independent volumetric sorts by rank.

mod engine;
mod error;
mod exact;

pub use engine::assign;
pub use error::AssignError;
pub use exact::solve_exact;

/// How to pair source points with target positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Optimal matching through the full pairwise cost matrix.
    ///
    /// Globally minimizes total key distance. O(n³) time and O(n²) memory;
    /// practical up to a few thousand points.
    Exact,
    /// Rank pairing through independent volumetric sorts.
    ///
    /// Both point sets are sorted along the same deterministic
    /// multi-dimensional ordering and paired position by position. O(n log n)
    /// time and O(n) memory; the only tractable choice for full images.
    #[default]
    Approximate,
}

/// A bijective mapping from source index to destination index.
///
/// The canonical output of both assignment strategies. Every destination slot
/// is hit exactly once, even under ties in cost or sort keys; applying a
/// permutation can therefore never drop or duplicate a payload.
///
/// # Example
///
/// ```
/// use ndarray::arr2;
/// use pixel_remap::assign::{assign, Strategy};
/// use pixel_remap::cost::CostMetric;
///
/// let source = arr2(&[[0.0, 0.0, 0.0], [9.0, 9.0, 9.0]]);
/// let target = arr2(&[[9.0, 9.0, 9.0], [0.0, 0.0, 0.0]]);
/// let perm = assign(source.view(), target.view(), Strategy::Exact, CostMetric::Euclidean)
///     .unwrap();
///
/// assert_eq!(perm.as_slice(), &[1, 0]);
/// assert_eq!(perm.apply(vec!["dark", "light"]), vec!["light", "dark"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutation {
    dest: Vec<usize>,
}

impl Permutation {
    /// Wrap a destination vector. Callers guarantee bijectivity; both
    /// strategies construct one destination per source by design.
    pub(crate) fn new(dest: Vec<usize>) -> Self {
        let perm = Self { dest };
        debug_assert!(perm.is_bijection(), "destinations must form a bijection");
        perm
    }

    /// The identity permutation on `n` elements.
    pub fn identity(n: usize) -> Self {
        Self {
            dest: (0..n).collect(),
        }
    }

    /// Number of mapped elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.dest.len()
    }

    /// Whether the permutation is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dest.is_empty()
    }

    /// Destination index of source element `i`.
    #[inline]
    pub fn destination(&self, i: usize) -> usize {
        self.dest[i]
    }

    /// The destination indices, one per source index.
    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.dest
    }

    /// Whether every destination in `[0, len)` appears exactly once.
    pub fn is_bijection(&self) -> bool {
        let mut seen = vec![false; self.dest.len()];
        for &d in &self.dest {
            if d >= seen.len() || seen[d] {
                return false;
            }
            seen[d] = true;
        }
        true
    }

    /// Move each payload to its destination: payload `i` lands at index
    /// `destination(i)` of the result.
    ///
    /// # Panics
    ///
    /// Panics if `payloads.len() != self.len()`.
    pub fn apply<P>(&self, payloads: Vec<P>) -> Vec<P> {
        assert_eq!(
            payloads.len(),
            self.dest.len(),
            "payload count ({}) must match permutation length ({})",
            payloads.len(),
            self.dest.len(),
        );
        let mut out: Vec<Option<P>> = (0..payloads.len()).map(|_| None).collect();
        for (i, payload) in payloads.into_iter().enumerate() {
            out[self.dest[i]] = Some(payload);
        }
        out.into_iter()
            .map(|slot| slot.expect("a bijection fills every destination"))
            .collect()
    }
}
