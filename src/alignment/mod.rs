//! Depth-grid alignment utilities
//!
//! Builds the uniform reference grid that multiple wells' curves are
//! aligned onto, and snaps arbitrary query depths to their nearest grid
//! value. General curve reindexing/merging is out of scope — nearest-value
//! lookup on a sorted sequence is the one alignment primitive provided.

mod grid;
mod lookup;

pub use grid::{build_uniform_md, GridSpec};
pub use lookup::{closest, snap_to_grid};

use thiserror::Error;

/// Errors in depth-grid construction
#[derive(Error, Debug)]
pub enum AlignmentError {
    #[error("Invalid grid increment: {0} (must be positive)")]
    InvalidIncrement(f64),

    #[error("Inverted depth range: start {start} exceeds stop {stop}")]
    InvertedRange { start: f64, stop: f64 },
}
