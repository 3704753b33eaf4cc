//! Public API for the pixel-remap crate.
//!
//! This module provides the high-level API: [`PixelRemapper`] builder and
//! [`RemapError`] unified error type.

mod builder;
mod error;

pub use builder::PixelRemapper;
pub use error::RemapError;
