//! Rank sorters: diagonal (2D) and volumetric (3D) orderings.
//!
//! Both sorters are generic over the record type and take key functions, so
//! they can order raw tuples, indices into a key array, or full records with
//! payloads. The output is always a permutation of the input; only the order
//! changes.

mod diagonal;
mod volume;

pub use diagonal::{slot_index, sort_diagonal};
pub use volume::sort_volume;
