//! Board layout module.
//!
//! Owns the per-cell content grid and its random generation.

pub mod grid;

pub use grid::*;
