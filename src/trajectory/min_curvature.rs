//! Minimum-curvature TVD integration
//!
//! Models the wellbore between consecutive stations as a circular arc and
//! integrates per-interval vertical contributions into a cumulative
//! true-vertical-depth profile.

use tracing::trace;

use super::{validate_columns, TrajectoryError};

/// Minimum-curvature ratio factor for a dog-leg angle in degrees.
///
/// Formula: RF = (2 / DL) × tan(DL / 2), DL in radians.
///
/// The ratio factor corrects the average-angle estimate for curvature. As
/// DL → 0 the expression tends to 1, and the zero case is branched
/// explicitly — dividing through would be 0/0. Negative curvature cannot
/// occur (the dog-leg angle is an arccos output in [0, 180]).
pub fn ratio_factor(dog_leg_deg: f64) -> f64 {
    if dog_leg_deg > 0.0 {
        let dl = dog_leg_deg.to_radians();
        (2.0 / dl) * (dl / 2.0).tan()
    } else {
        1.0
    }
}

/// Integrate a TVD profile from measured depth, inclination, and dog leg.
///
/// Per-interval vertical contribution for station i ≥ 1:
///
/// ΔTVD = (cos(inc[i-1]) + cos(inc[i])) × (ΔMD / 2) × RF[i]
///
/// `tvd[0] = tvd0` and every later value is the running cumulative sum of
/// contributions anchored at `tvd0`.
///
/// # Arguments
/// * `md` - Measured depth column, strictly increasing past index 0
/// * `inclination` - Inclination column (degrees)
/// * `dog_leg` - Dog-leg angle column (degrees, index 0 zero by convention)
/// * `tvd0` - Initial true vertical depth at the first station
///
/// # Errors
/// `LengthMismatch`, `EmptySurvey`, or `NonMonotonicDepth` for malformed
/// columns.
pub fn compute_tvd(
    md: &[f64],
    inclination: &[f64],
    dog_leg: &[f64],
    tvd0: f64,
) -> Result<Vec<f64>, TrajectoryError> {
    validate_columns(md, &[("inclination", inclination), ("dog_leg", dog_leg)])?;

    let n = md.len();
    let mut tvd = Vec::with_capacity(n);
    tvd.push(tvd0);

    let mut running = 0.0;
    for i in 1..n {
        let cos_upper = inclination[i - 1].to_radians().cos();
        let cos_lower = inclination[i].to_radians().cos();
        let half_step = (md[i] - md[i - 1]) / 2.0;
        let rf = ratio_factor(dog_leg[i]);

        running += (cos_upper + cos_lower) * half_step * rf;
        tvd.push(tvd0 + running);

        trace!(station = i, rf, tvd = tvd0 + running, "TVD contribution");
    }

    Ok(tvd)
}
