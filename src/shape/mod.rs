//! Grid and cube shapes for rank sorting.
//!
//! This module provides the balanced factorizers ([`balanced_pair`],
//! [`balanced_triplet`]) and the [`Shape2d`] / [`Shape3d`] structs that carry
//! the chosen dimensions through the sorters.

mod error;
mod factor;

pub use error::ShapeError;
pub use factor::{balanced_pair, balanced_triplet};

/// A 2D grid shape with `w * h` slots, row-major.
///
/// Balanced construction keeps `w <= h` (the lower factor becomes the width,
/// matching the diagonal traversal's orientation).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape2d {
    /// Row length.
    pub w: usize,
    /// Number of rows.
    pub h: usize,
}

impl Shape2d {
    /// The most balanced shape for `n` pixels: `w` is the largest divisor of
    /// `n` at most `√n`.
    ///
    /// # Errors
    ///
    /// [`ShapeError::InvalidCount`] if `n == 0`.
    pub fn balanced(n: usize) -> Result<Self, ShapeError> {
        let (w, h) = balanced_pair(n)?;
        Ok(Self { w, h })
    }

    /// Total number of slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.w * self.h
    }

    /// Whether the shape holds no slots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A 3D volume shape with `w * h * d` slots: `d` depth slices of a `w x h`
/// face, row-major within each slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape3d {
    /// Row length per face.
    pub w: usize,
    /// Number of rows per face.
    pub h: usize,
    /// Number of faces.
    pub d: usize,
}

impl Shape3d {
    /// The most balanced cuboid for `n` pixels, via the greedy prime-factor
    /// binning of [`balanced_triplet`].
    ///
    /// # Errors
    ///
    /// [`ShapeError::InvalidCount`] if `n == 0`.
    pub fn balanced(n: usize) -> Result<Self, ShapeError> {
        let (d, h, w) = balanced_triplet(n)?;
        Ok(Self { w, h, d })
    }

    /// Total number of slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.w * self.h * self.d
    }

    /// Whether the shape holds no slots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Slots per depth slice.
    #[inline]
    pub fn face_len(&self) -> usize {
        self.w * self.h
    }

    /// The 2D shape of a single depth slice.
    #[inline]
    pub fn face(&self) -> Shape2d {
        Shape2d {
            w: self.w,
            h: self.h,
        }
    }
}
