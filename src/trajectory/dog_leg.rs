//! Dog-leg angle and dog-leg severity computation
//!
//! The dog leg is the total spatial curvature angle between two consecutive
//! survey stations; severity normalizes it per standard course length so
//! curvature is comparable across wells and sampling intervals.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::{validate_columns, TrajectoryError};
use crate::types::DepthUnit;

/// Per-station dog-leg columns, parallel to the input survey.
///
/// Index 0 is zero by convention: the first station has no prior station to
/// measure curvature against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DogLegProfile {
    /// Dog-leg angle between station i-1 and i (degrees)
    pub dog_leg: Vec<f64>,
    /// Dog-leg angle per standard course length (degrees per 30 m / 100 ft)
    pub dog_leg_severity: Vec<f64>,
}

/// Calculate the dog-leg angle between two survey stations.
///
/// Formula: DL = arccos( sin(θ1)·sin(θ2)·cos(φ2-φ1) + cos(θ1)·cos(θ2) )
///
/// Where:
/// - θ1, θ2 = inclination at the upper and lower station (degrees)
/// - φ1, φ2 = azimuth at the upper and lower station (degrees)
///
/// The arccos argument is clamped to [-1, 1] so floating-point drift on
/// near-parallel stations can never produce NaN.
///
/// Returns the dog-leg angle in degrees.
pub fn dog_leg_angle(inc1: f64, az1: f64, inc2: f64, az2: f64) -> f64 {
    let theta1 = inc1.to_radians();
    let theta2 = inc2.to_radians();
    let delta_phi = (az2 - az1).to_radians();

    let cos_dl =
        theta1.sin() * theta2.sin() * delta_phi.cos() + theta1.cos() * theta2.cos();

    cos_dl.clamp(-1.0, 1.0).acos().to_degrees()
}

/// Compute the dog-leg profile for a survey.
///
/// # Arguments
/// * `md` - Measured depth column, strictly increasing past index 0
/// * `inclination` - Inclination column (degrees)
/// * `azimuth` - Azimuth column (degrees)
/// * `units` - Depth unit convention, "m" or "ft" (case-insensitive)
///
/// Severity at station i is `dog_leg[i] × course_length / (md[i] - md[i-1])`
/// with course length 30 for meters and 100 for feet.
///
/// # Errors
/// `InvalidUnits` for an unrecognized unit string; `LengthMismatch`,
/// `EmptySurvey`, or `NonMonotonicDepth` for malformed columns.
pub fn compute_dog_leg(
    md: &[f64],
    inclination: &[f64],
    azimuth: &[f64],
    units: &str,
) -> Result<DogLegProfile, TrajectoryError> {
    let unit = DepthUnit::parse(units)
        .ok_or_else(|| TrajectoryError::InvalidUnits(units.to_string()))?;

    compute_dog_leg_with_unit(md, inclination, azimuth, unit)
}

/// [`compute_dog_leg`] for callers that already hold a typed [`DepthUnit`].
pub fn compute_dog_leg_with_unit(
    md: &[f64],
    inclination: &[f64],
    azimuth: &[f64],
    unit: DepthUnit,
) -> Result<DogLegProfile, TrajectoryError> {
    validate_columns(md, &[("inclination", inclination), ("azimuth", azimuth)])?;

    let course_length = unit.course_length();
    let n = md.len();

    let mut dog_leg = vec![0.0; n];
    let mut dog_leg_severity = vec![0.0; n];

    for i in 1..n {
        let dl = dog_leg_angle(
            inclination[i - 1],
            azimuth[i - 1],
            inclination[i],
            azimuth[i],
        );
        // Depth step is positive: validate_columns rejected non-increasing MD
        let step = md[i] - md[i - 1];

        dog_leg[i] = dl;
        dog_leg_severity[i] = dl * course_length / step;

        trace!(station = i, dog_leg = dl, severity = dog_leg_severity[i], "Dog leg");
    }

    Ok(DogLegProfile {
        dog_leg,
        dog_leg_severity,
    })
}
