//! pixel-remap: permutation-based pixel rearrangement
//!
//! This library reorders one multiset of colored points so that, laid out on
//! a 2D grid, it approximates a second multiset's spatial arrangement. Every
//! original value is preserved exactly — the output is a permutation of the
//! input, never a re-sampling — which is what makes the effect interesting:
//! the same pixels, arranged into a different picture.
//!
//! # Quick Start
//!
//! The [`PixelRemapper`] builder is the primary entry point:
//!
//! ```
//! use ndarray::arr2;
//! use pixel_remap::PixelRemapper;
//!
//! // 3-channel match keys (e.g. a perceptual color space), one row per pixel
//! let source = arr2(&[[0.0, 0.0, 0.0], [50.0, 10.0, 10.0]]);
//! let target = arr2(&[[50.0, 10.0, 10.0], [0.0, 0.0, 0.0]]);
//!
//! // payloads are the values carried through the reordering unchanged
//! let out = PixelRemapper::new()
//!     .remap(source.view(), vec!["dark", "mid"], target.view())
//!     .unwrap();
//!
//! assert_eq!(out, vec!["mid", "dark"]);
//! ```
//!
//! # Strategies
//!
//! Two independent strategies produce the permutation, selected with
//! [`Strategy`]:
//!
//! - **Exact** — builds the full pairwise cost matrix between the two key
//!   sets ([`cost`]) and solves it with an optimal bipartite matcher
//!   ([`assign::solve_exact`]). Globally minimal total key distance, but
//!   O(n²) memory and O(n³) time: fine for thumbnails, hopeless for full
//!   images.
//! - **Approximate** — factors n into a balanced cuboid ([`shape`]), sorts
//!   both key sets through the same deterministic volumetric ordering
//!   ([`sort`]), and pairs them rank by rank. O(n log n), no cost matrix,
//!   and visually close to the exact result when the keys live in a
//!   perceptually smooth space.
//!
//! Both guarantee a true bijection: no payload is created, dropped, or
//! duplicated, even under ties in cost or sort keys.
//!
//! # Scope
//!
//! The crate is a pure in-memory transform. Decoding images, converting
//! color spaces, and writing the reordered payloads back into a raster
//! (index `i` → row-major grid position `i`) belong to the caller.

pub mod api;
pub mod assign;
pub mod cost;
pub mod shape;
pub mod sort;


pub use api::{PixelRemapper, RemapError};
pub use assign::{assign, solve_exact, AssignError, Permutation, Strategy};
pub use cost::{build_cost_matrix, CostError, CostMetric};
pub use shape::{balanced_pair, balanced_triplet, Shape2d, Shape3d, ShapeError};
pub use sort::{slot_index, sort_diagonal, sort_volume};
