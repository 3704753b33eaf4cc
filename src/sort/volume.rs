//! Volumetric rank sorting of a flat sequence into a 3D cuboid.

use super::diagonal::sort_diagonal;
use crate::shape::Shape3d;

/// Sort `items` into cuboid order for a `w x h x d` volume.
///
/// The whole sequence is stable-sorted ascending by `primary` and split into
/// `d` consecutive slices of `w * h` records. Each slice is then arranged
/// independently by [`sort_diagonal`] with `(secondary, tertiary)` as its key
/// pair, and the slices are concatenated in order. The result is addressable
/// as a `w x h x d` volume, row-major within each depth slice.
///
/// This groups records by coarse primary-key rank and sweeps the remaining
/// two keys along each face's diagonals — an O(n log n) stand-in for true
/// nearest-neighbor matching that reads as a smooth gradient when the keys
/// are perceptual color channels.
///
/// # Panics
///
/// Panics if `items.len() != shape.len()`.
pub fn sort_volume<T>(
    mut items: Vec<T>,
    shape: Shape3d,
    primary: impl Fn(&T) -> f64,
    secondary: impl Fn(&T) -> f64,
    tertiary: impl Fn(&T) -> f64,
) -> Vec<T> {
    assert_eq!(
        items.len(),
        shape.len(),
        "item count ({}) must fill the {}x{}x{} volume exactly",
        items.len(),
        shape.w,
        shape.h,
        shape.d,
    );

    items.sort_by(|a, b| primary(a).total_cmp(&primary(b)));

    let face = shape.face();
    let mut out = Vec::with_capacity(items.len());
    let mut rest = items.into_iter();
    for _ in 0..shape.d {
        let slice: Vec<T> = rest.by_ref().take(face.len()).collect();
        out.extend(sort_diagonal(slice, face, &secondary, &tertiary));
    }
    out
}
