//! Minimum-curvature trajectory correction
//!
//! Converts raw directional survey columns (measured depth, inclination,
//! azimuth) into a corrected trajectory: per-station dog-leg angle, dog-leg
//! severity, and a cumulative true-vertical-depth profile.
//!
//! Pipeline: survey columns → [`compute_dog_leg`] → [`compute_tvd`], or the
//! one-call [`correct_survey`] which runs both and assembles a
//! [`TrajectoryProfile`].

mod dog_leg;
mod min_curvature;

pub use dog_leg::{compute_dog_leg, compute_dog_leg_with_unit, dog_leg_angle, DogLegProfile};
pub use min_curvature::{compute_tvd, ratio_factor};

use chrono::Utc;
use thiserror::Error;
use tracing::debug;

use crate::types::{DepthUnit, Survey, TrajectoryProfile};

/// Errors in trajectory correction
#[derive(Error, Debug)]
pub enum TrajectoryError {
    /// Unit string was not a recognized depth convention.
    ///
    /// This is surfaced to the caller, never silently defaulted — a wrong
    /// unit changes every dog-leg-severity value by a factor of 10/3.
    #[error("Invalid units '{0}': expected 'm' or 'ft'")]
    InvalidUnits(String),

    #[error("Column length mismatch: {series} has {actual} samples, expected {expected}")]
    LengthMismatch {
        series: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Empty survey: at least one station is required")]
    EmptySurvey,

    #[error(
        "Measured depth not strictly increasing at station {index}: {previous} -> {current}"
    )]
    NonMonotonicDepth {
        index: usize,
        previous: f64,
        current: f64,
    },
}

/// Validate parallel survey columns against the measured-depth column.
///
/// Checks that every series matches the measured-depth length, that the
/// survey is non-empty, and that measured depth strictly increases past the
/// first station. Downstream math divides by the depth step, so a zero or
/// negative step must be rejected here rather than produce NaN/Inf.
pub(crate) fn validate_columns(
    md: &[f64],
    series: &[(&'static str, &[f64])],
) -> Result<(), TrajectoryError> {
    if md.is_empty() {
        return Err(TrajectoryError::EmptySurvey);
    }

    for &(name, values) in series {
        if values.len() != md.len() {
            return Err(TrajectoryError::LengthMismatch {
                series: name,
                expected: md.len(),
                actual: values.len(),
            });
        }
    }

    for i in 1..md.len() {
        if md[i] <= md[i - 1] {
            return Err(TrajectoryError::NonMonotonicDepth {
                index: i,
                previous: md[i - 1],
                current: md[i],
            });
        }
    }

    Ok(())
}

/// Run the full minimum-curvature correction over a survey.
///
/// Computes the dog-leg profile, integrates TVD from the caller-supplied
/// initial depth `tvd0`, and assembles the combined [`TrajectoryProfile`].
///
/// # Arguments
/// * `survey` - Stations ascending in measured depth
/// * `units` - Depth unit convention, "m" or "ft" (case-insensitive)
/// * `tvd0` - Initial true vertical depth at the first station (typically 0)
pub fn correct_survey(
    survey: &Survey,
    units: &str,
    tvd0: f64,
) -> Result<TrajectoryProfile, TrajectoryError> {
    let unit = DepthUnit::parse(units)
        .ok_or_else(|| TrajectoryError::InvalidUnits(units.to_string()))?;

    correct_survey_with_unit(survey, unit, tvd0)
}

/// [`correct_survey`] for callers that already hold a typed [`DepthUnit`].
pub fn correct_survey_with_unit(
    survey: &Survey,
    unit: DepthUnit,
    tvd0: f64,
) -> Result<TrajectoryProfile, TrajectoryError> {
    let md = survey.measured_depths();
    let inclination = survey.inclinations();
    let azimuth = survey.azimuths();

    let dog_leg_profile = compute_dog_leg_with_unit(&md, &inclination, &azimuth, unit)?;
    let tvd = compute_tvd(&md, &inclination, &dog_leg_profile.dog_leg, tvd0)?;

    let profile = TrajectoryProfile {
        unit,
        md,
        inclination,
        azimuth,
        dog_leg: dog_leg_profile.dog_leg,
        dog_leg_severity: dog_leg_profile.dog_leg_severity,
        tvd,
        computed_at: Utc::now(),
    };

    debug!(
        stations = profile.len(),
        unit = %profile.unit,
        max_dls = profile.max_dog_leg_severity(),
        final_tvd = profile.final_tvd(),
        "Survey corrected"
    );

    Ok(profile)
}
