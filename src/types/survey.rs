//! Directional survey types
//!
//! A survey is an ordered sequence of stations measured along the wellbore.
//! Station order is depth order; every difference and cumulative computation
//! in the trajectory engine depends on it.

use serde::{Deserialize, Serialize};

use crate::trajectory::{self, TrajectoryError};

// ============================================================================
// Depth Unit Convention
// ============================================================================

/// Measurement-unit convention for measured depth.
///
/// The convention also fixes the standard course length used to normalize
/// dog-leg severity: 30 m for metric surveys, 100 ft for imperial surveys.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, Hash)]
pub enum DepthUnit {
    Meters,
    #[default]
    Feet,
}

impl DepthUnit {
    /// Parse a unit string as found in survey headers ("m" or "ft",
    /// case-insensitive). Returns `None` for anything else.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "m" => Some(DepthUnit::Meters),
            "ft" => Some(DepthUnit::Feet),
            _ => None,
        }
    }

    /// Standard course length for dog-leg-severity normalization.
    ///
    /// 30 m and 100 ft are the industry's equivalent reporting intervals.
    pub fn course_length(self) -> f64 {
        match self {
            DepthUnit::Meters => 30.0,
            DepthUnit::Feet => 100.0,
        }
    }

    /// Unit label for depth values ("m" / "ft").
    pub fn depth_label(self) -> &'static str {
        match self {
            DepthUnit::Meters => "m",
            DepthUnit::Feet => "ft",
        }
    }

    /// Unit label for dog-leg severity ("deg/30m" / "deg/100ft").
    pub fn severity_label(self) -> &'static str {
        match self {
            DepthUnit::Meters => "deg/30m",
            DepthUnit::Feet => "deg/100ft",
        }
    }
}

impl std::fmt::Display for DepthUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.depth_label())
    }
}

// ============================================================================
// Survey Stations
// ============================================================================

/// A single directional survey station.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SurveyStation {
    /// Measured depth along the wellbore path (m or ft)
    pub md: f64,
    /// Inclination from true vertical (degrees, 0-180)
    pub inclination: f64,
    /// Compass heading of the wellbore direction (degrees, 0-360)
    pub azimuth: f64,
}

/// An ordered sequence of survey stations, ascending in measured depth.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Survey {
    stations: Vec<SurveyStation>,
}

impl Survey {
    /// Build a survey from parallel depth / inclination / azimuth columns,
    /// as extracted from a parsed survey file.
    ///
    /// Fails fast on mismatched column lengths, empty columns, or measured
    /// depth that is not strictly increasing past the first station — the
    /// most common real-world defects in survey files.
    pub fn from_columns(
        md: &[f64],
        inclination: &[f64],
        azimuth: &[f64],
    ) -> Result<Self, TrajectoryError> {
        trajectory::validate_columns(md, &[("inclination", inclination), ("azimuth", azimuth)])?;

        let stations = md
            .iter()
            .zip(inclination.iter())
            .zip(azimuth.iter())
            .map(|((&md, &inclination), &azimuth)| SurveyStation {
                md,
                inclination,
                azimuth,
            })
            .collect();

        Ok(Self { stations })
    }

    /// Stations in depth order.
    pub fn stations(&self) -> &[SurveyStation] {
        &self.stations
    }

    /// Number of stations.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// True when the survey holds no stations.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Measured depth column.
    pub fn measured_depths(&self) -> Vec<f64> {
        self.stations.iter().map(|s| s.md).collect()
    }

    /// Inclination column (degrees).
    pub fn inclinations(&self) -> Vec<f64> {
        self.stations.iter().map(|s| s.inclination).collect()
    }

    /// Azimuth column (degrees).
    pub fn azimuths(&self) -> Vec<f64> {
        self.stations.iter().map(|s| s.azimuth).collect()
    }

    /// Total measured depth (last station), or 0 for an empty survey.
    pub fn total_depth(&self) -> f64 {
        self.stations.last().map(|s| s.md).unwrap_or(0.0)
    }
}
