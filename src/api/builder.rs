//! PixelRemapper builder -- the primary ergonomic entry point for the crate.
//!
//! [`PixelRemapper`] wraps strategy selection and payload application behind
//! a fluent configuration API.

use ndarray::ArrayView2;

use super::error::RemapError;
use crate::assign::{assign, Permutation, Strategy};
use crate::cost::CostMetric;

/// High-level pixel reassignment builder.
///
/// `PixelRemapper` is the recommended entry point for the crate. It holds a
/// [`Strategy`] and a [`CostMetric`], and runs the assignment engine against
/// two key arrays.
///
/// # Design
///
/// - Configuration methods consume and return `self` (standard builder
///   pattern)
/// - [`permutation()`](Self::permutation) and [`remap()`](Self::remap) take
///   `&self`, so one builder is **reusable** across many frames
/// - Defaults: approximate strategy, Euclidean metric
///
/// # Example
///
/// ```
/// use ndarray::arr2;
/// use pixel_remap::{PixelRemapper, Strategy};
///
/// // keys in some 3-channel space, payloads the original display colors
/// let source = arr2(&[
///     [0.0, 0.0, 0.0],
///     [25.0, 5.0, 5.0],
///     [50.0, 10.0, 10.0],
///     [75.0, 15.0, 15.0],
/// ]);
/// let target = arr2(&[
///     [75.0, 15.0, 15.0],
///     [0.0, 0.0, 0.0],
///     [50.0, 10.0, 10.0],
///     [25.0, 5.0, 5.0],
/// ]);
///
/// let remapper = PixelRemapper::new().strategy(Strategy::Approximate);
/// let out = remapper
///     .remap(source.view(), vec!['a', 'b', 'c', 'd'], target.view())
///     .unwrap();
///
/// // each payload landed where the target holds the matching key
/// assert_eq!(out, vec!['d', 'a', 'c', 'b']);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PixelRemapper {
    strategy: Strategy,
    metric: CostMetric,
}

impl PixelRemapper {
    /// Create a remapper with the default configuration: approximate
    /// strategy, Euclidean metric.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the assignment strategy.
    #[inline]
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the cost metric used by the exact strategy.
    ///
    /// The approximate strategy never builds a cost matrix, so this has no
    /// effect on it.
    #[inline]
    pub fn metric(mut self, metric: CostMetric) -> Self {
        self.metric = metric;
        self
    }

    /// Compute the source-to-destination permutation for two n×k key
    /// arrays.
    ///
    /// # Errors
    ///
    /// Propagates [`crate::assign::AssignError`] from the engine.
    pub fn permutation(
        &self,
        source: ArrayView2<'_, f64>,
        target: ArrayView2<'_, f64>,
    ) -> Result<Permutation, RemapError> {
        Ok(assign(source, target, self.strategy, self.metric)?)
    }

    /// Compute the permutation and apply it to a payload sequence aligned
    /// with the source keys.
    ///
    /// Payload `i` lands at the destination index matched for source point
    /// `i`; the result is a reordering of `payloads` with nothing created,
    /// dropped, or duplicated.
    ///
    /// # Errors
    ///
    /// [`RemapError::PayloadLength`] when `payloads` is not aligned with
    /// `source`, plus everything [`permutation()`](Self::permutation) can
    /// return.
    pub fn remap<P>(
        &self,
        source: ArrayView2<'_, f64>,
        payloads: Vec<P>,
        target: ArrayView2<'_, f64>,
    ) -> Result<Vec<P>, RemapError> {
        if payloads.len() != source.nrows() {
            return Err(RemapError::PayloadLength {
                payloads: payloads.len(),
                points: source.nrows(),
            });
        }
        let permutation = self.permutation(source, target)?;
        Ok(permutation.apply(payloads))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assign::AssignError;
    use ndarray::arr2;

    #[test]
    fn exact_remap_places_payloads_at_matching_targets() {
        let source = arr2(&[[0.0, 0.0, 0.0], [80.0, 10.0, 10.0]]);
        let target = arr2(&[[82.0, 9.0, 11.0], [1.0, 0.0, 0.0]]);
        let remapper = PixelRemapper::new().strategy(Strategy::Exact);
        let out = remapper
            .remap(source.view(), vec!["dark", "light"], target.view())
            .unwrap();
        assert_eq!(out, vec!["light", "dark"]);
    }

    #[test]
    fn builder_is_reusable() {
        let keys = arr2(&[[0.0, 0.0, 0.0], [1.0, 1.0, 1.0]]);
        let remapper = PixelRemapper::new()
            .strategy(Strategy::Exact)
            .metric(CostMetric::SquaredEuclidean);
        let first = remapper.permutation(keys.view(), keys.view()).unwrap();
        let second = remapper.permutation(keys.view(), keys.view()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn payload_misalignment_is_rejected() {
        let keys = arr2(&[[0.0, 0.0, 0.0], [1.0, 1.0, 1.0]]);
        let err = PixelRemapper::new()
            .remap(keys.view(), vec![1u8], keys.view())
            .unwrap_err();
        assert_eq!(
            err,
            RemapError::PayloadLength {
                payloads: 1,
                points: 2,
            }
        );
    }

    #[test]
    fn engine_errors_pass_through() {
        let source = arr2(&[[0.0, 0.0, 0.0]]);
        let target = arr2(&[[0.0, 0.0]]);
        let err = PixelRemapper::new()
            .permutation(source.view(), target.view())
            .unwrap_err();
        assert!(matches!(
            err,
            RemapError::Assign(AssignError::InputShapeMismatch { .. })
        ));
    }

    #[test]
    fn empty_remap_returns_empty() {
        let keys = ndarray::Array2::<f64>::zeros((0, 3));
        let out = PixelRemapper::new()
            .remap(keys.view(), Vec::<u32>::new(), keys.view())
            .unwrap();
        assert!(out.is_empty());
    }
}
