//! Uniform measured-depth reference grid
//!
//! Produces a strictly increasing, evenly spaced depth sequence that survey
//! curves from different wells are aligned onto. Stepping is done in scaled
//! integer arithmetic so a fractional increment cannot drift over thousands
//! of samples the way repeated floating-point addition does.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::AlignmentError;
use crate::types::DepthUnit;

/// Fixed-point scale for grid stepping: four decimal places of depth.
const GRID_SCALE: f64 = 10_000.0;

// ============================================================================
// Grid Specification
// ============================================================================

/// Parameters of a uniform depth grid.
///
/// All fields default to the standard single-well reference grid: surface
/// to 10 000 depth units at the convention-appropriate increment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GridSpec {
    /// First grid depth (m or ft)
    #[serde(default)]
    pub start_depth: f64,

    /// Kelly-bushing elevation offset (m or ft).
    ///
    /// Carried for a future surface-elevation correction; not applied to
    /// the grid math.
    #[serde(default = "default_kb")]
    pub kb: f64,

    /// Last grid depth, inclusive when hit by the stepping (m or ft)
    #[serde(default = "default_stop_depth")]
    pub stop_depth: f64,

    /// Grid spacing (m or ft)
    #[serde(default = "default_increment")]
    pub increment: f64,

    /// Depth unit convention
    #[serde(default)]
    pub unit: DepthUnit,
}

fn default_kb() -> f64 {
    32.0
}

fn default_stop_depth() -> f64 {
    10_000.0
}

fn default_increment() -> f64 {
    0.5
}

impl Default for GridSpec {
    fn default() -> Self {
        Self::for_unit(DepthUnit::Feet)
    }
}

impl GridSpec {
    /// Standard grid for a unit convention: 0.5 ft or 5 m spacing.
    pub fn for_unit(unit: DepthUnit) -> Self {
        let increment = match unit {
            DepthUnit::Feet => 0.5,
            DepthUnit::Meters => 5.0,
        };
        Self {
            start_depth: 0.0,
            kb: default_kb(),
            stop_depth: default_stop_depth(),
            increment,
            unit,
        }
    }

    /// Check the spec before grid construction.
    pub fn validate(&self) -> Result<(), AlignmentError> {
        if !self.increment.is_finite()
            || self.increment <= 0.0
            || (self.increment * GRID_SCALE).round() < 1.0
        {
            return Err(AlignmentError::InvalidIncrement(self.increment));
        }
        if self.stop_depth < self.start_depth {
            return Err(AlignmentError::InvertedRange {
                start: self.start_depth,
                stop: self.stop_depth,
            });
        }
        Ok(())
    }

    /// Expected grid length: floor((stop - start) / increment) + 1.
    pub fn expected_len(&self) -> usize {
        (((self.stop_depth - self.start_depth) / self.increment).floor() as usize) + 1
    }
}

// ============================================================================
// Grid Construction
// ============================================================================

/// Build the uniform measured-depth grid for a [`GridSpec`].
///
/// Values run `start, start+inc, start+2·inc, …` up to and including the
/// largest value ≤ `stop_depth`. The sequence is ascending, unique, and
/// evenly spaced; length is `floor((stop - start) / inc) + 1`.
///
/// # Errors
/// `InvalidIncrement` for a non-positive (or sub-resolution) increment,
/// `InvertedRange` when the stop depth sits above the start depth.
pub fn build_uniform_md(spec: &GridSpec) -> Result<Vec<f64>, AlignmentError> {
    spec.validate()?;

    let start = (spec.start_depth * GRID_SCALE).round() as i64;
    let stop = (spec.stop_depth * GRID_SCALE).round() as i64;
    let step = (spec.increment * GRID_SCALE).round() as i64;

    let mut grid = Vec::with_capacity(spec.expected_len());
    let mut value = start;
    while value <= stop {
        grid.push(value as f64 / GRID_SCALE);
        value += step;
    }

    debug!(
        samples = grid.len(),
        start = spec.start_depth,
        stop = spec.stop_depth,
        increment = spec.increment,
        unit = %spec.unit,
        "Uniform depth grid built"
    );

    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_increment_grid() {
        let spec = GridSpec {
            start_depth: 0.0,
            kb: 32.0,
            stop_depth: 10.0,
            increment: 1.0,
            unit: DepthUnit::Feet,
        };
        let grid = build_uniform_md(&spec).expect("valid spec");

        let expected: Vec<f64> = (0..=10).map(f64::from).collect();
        assert_eq!(grid, expected, "0..10 at step 1 must be exactly 11 samples");
    }

    #[test]
    fn test_fractional_increment_no_drift() {
        let spec = GridSpec {
            start_depth: 0.0,
            stop_depth: 10_000.0,
            increment: 0.5,
            ..GridSpec::default()
        };
        let grid = build_uniform_md(&spec).expect("valid spec");

        assert_eq!(grid.len(), 20_001);
        // Exact endpoints and spacing despite 20k fractional steps
        assert_eq!(grid[0], 0.0);
        assert_eq!(grid[20_000], 10_000.0);
        for pair in grid.windows(2) {
            assert!(
                (pair[1] - pair[0] - 0.5).abs() < 1e-9,
                "grid spacing drifted: {} -> {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_metric_default_spacing() {
        let spec = GridSpec::for_unit(DepthUnit::Meters);
        assert!((spec.increment - 5.0).abs() < f64::EPSILON);

        let grid = build_uniform_md(&spec).expect("valid spec");
        assert_eq!(grid.len(), spec.expected_len());
        assert!((grid[1] - grid[0] - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_stop_not_on_step_is_truncated() {
        let spec = GridSpec {
            start_depth: 0.0,
            stop_depth: 10.4,
            increment: 1.0,
            ..GridSpec::default()
        };
        let grid = build_uniform_md(&spec).expect("valid spec");

        assert_eq!(grid.len(), 11);
        assert_eq!(*grid.last().expect("non-empty"), 10.0);
    }

    #[test]
    fn test_invalid_increment_rejected() {
        let spec = GridSpec {
            increment: 0.0,
            ..GridSpec::default()
        };
        assert!(matches!(
            build_uniform_md(&spec),
            Err(AlignmentError::InvalidIncrement(_))
        ));

        let negative = GridSpec {
            increment: -1.0,
            ..GridSpec::default()
        };
        assert!(build_uniform_md(&negative).is_err());
    }

    #[test]
    fn test_inverted_range_rejected() {
        let spec = GridSpec {
            start_depth: 500.0,
            stop_depth: 100.0,
            ..GridSpec::default()
        };
        assert!(matches!(
            build_uniform_md(&spec),
            Err(AlignmentError::InvertedRange { .. })
        ));
    }

    #[test]
    fn test_degenerate_single_sample_range() {
        let spec = GridSpec {
            start_depth: 100.0,
            stop_depth: 100.0,
            increment: 1.0,
            ..GridSpec::default()
        };
        let grid = build_uniform_md(&spec).expect("valid spec");
        assert_eq!(grid, vec![100.0]);
    }

    #[test]
    fn test_kb_does_not_shift_grid() {
        // kb is carried but not applied; two specs differing only in kb
        // must produce identical grids.
        let a = GridSpec {
            kb: 0.0,
            ..GridSpec::default()
        };
        let b = GridSpec {
            kb: 85.0,
            ..GridSpec::default()
        };
        assert_eq!(
            build_uniform_md(&a).expect("valid"),
            build_uniform_md(&b).expect("valid")
        );
    }
}
