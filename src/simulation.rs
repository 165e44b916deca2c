//! Synthetic directional-survey generation
//!
//! Generates realistic survey inputs for testing the trajectory engine
//! without a parsed survey file on hand:
//! - Perfectly vertical wells (round-trip reference case)
//! - Build-and-hold profiles (vertical section, constant build rate,
//!   tangent hold)
//! - Optional Gaussian sensor noise on inclination and azimuth
//!
//! Generation is deterministic for a given seed.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

use crate::types::{DepthUnit, Survey, SurveyStation};

// ============================================================================
// Profile Constants
// ============================================================================

/// Default station spacing (ft)
const DEFAULT_SPACING: f64 = 100.0;
/// Default kickoff depth (ft)
const DEFAULT_KICKOFF: f64 = 2_000.0;
/// Default build rate (deg per course length)
const DEFAULT_BUILD_RATE: f64 = 2.0;
/// Default tangent-section inclination (deg)
const DEFAULT_TARGET_INCLINATION: f64 = 45.0;
/// Default tangent-section azimuth (deg)
const DEFAULT_TARGET_AZIMUTH: f64 = 135.0;
/// Default total measured depth (ft)
const DEFAULT_TOTAL_DEPTH: f64 = 10_000.0;

// ============================================================================
// Build-and-Hold Specification
// ============================================================================

/// Parameters of a synthetic build-and-hold well profile.
#[derive(Debug, Clone, Copy)]
pub struct BuildAndHoldSpec {
    /// Distance between survey stations (m or ft)
    pub station_spacing: f64,
    /// Measured depth where the build section starts (m or ft)
    pub kickoff_depth: f64,
    /// Build rate in degrees per standard course length
    pub build_rate: f64,
    /// Inclination held through the tangent section (deg)
    pub target_inclination: f64,
    /// Azimuth held through build and tangent sections (deg)
    pub target_azimuth: f64,
    /// Total measured depth of the well (m or ft)
    pub total_depth: f64,
    /// Standard deviation of Gaussian noise on inclination/azimuth (deg);
    /// 0 disables noise
    pub noise_std_deg: f64,
    /// RNG seed for reproducible noise
    pub seed: u64,
    /// Depth unit convention (fixes the course length for the build rate)
    pub unit: DepthUnit,
}

impl Default for BuildAndHoldSpec {
    fn default() -> Self {
        Self {
            station_spacing: DEFAULT_SPACING,
            kickoff_depth: DEFAULT_KICKOFF,
            build_rate: DEFAULT_BUILD_RATE,
            target_inclination: DEFAULT_TARGET_INCLINATION,
            target_azimuth: DEFAULT_TARGET_AZIMUTH,
            total_depth: DEFAULT_TOTAL_DEPTH,
            noise_std_deg: 0.0,
            seed: 42,
            unit: DepthUnit::Feet,
        }
    }
}

// ============================================================================
// Generators
// ============================================================================

/// Generate a perfectly vertical well: `n` stations at fixed spacing,
/// inclination and azimuth zero throughout.
pub fn vertical(n: usize, spacing: f64) -> Survey {
    let stations: Vec<SurveyStation> = (0..n)
        .map(|i| SurveyStation {
            md: i as f64 * spacing,
            inclination: 0.0,
            azimuth: 0.0,
        })
        .collect();

    survey_from_stations(stations)
}

/// Generate a build-and-hold well profile.
///
/// Inclination is 0 down to the kickoff depth, then builds at
/// `build_rate` degrees per course length until `target_inclination`, then
/// holds. Azimuth is constant at `target_azimuth`. With a non-zero
/// `noise_std_deg`, seeded Gaussian noise perturbs inclination (clamped to
/// ≥ 0) and azimuth (wrapped to [0, 360)).
pub fn build_and_hold(spec: &BuildAndHoldSpec) -> Survey {
    let mut rng = StdRng::seed_from_u64(spec.seed);
    let noise = if spec.noise_std_deg > 0.0 {
        Normal::new(0.0, spec.noise_std_deg).ok()
    } else {
        None
    };

    let course_length = spec.unit.course_length();
    let n = (spec.total_depth / spec.station_spacing).floor() as usize + 1;

    let stations: Vec<SurveyStation> = (0..n)
        .map(|i| {
            let md = i as f64 * spec.station_spacing;

            let mut inclination = if md <= spec.kickoff_depth {
                0.0
            } else {
                let built = (md - spec.kickoff_depth) / course_length * spec.build_rate;
                built.min(spec.target_inclination)
            };
            let mut azimuth = spec.target_azimuth;

            if let Some(ref dist) = noise {
                inclination = (inclination + dist.sample(&mut rng)).max(0.0);
                azimuth = (azimuth + dist.sample(&mut rng)).rem_euclid(360.0);
            }

            SurveyStation {
                md,
                inclination,
                azimuth,
            }
        })
        .collect();

    survey_from_stations(stations)
}

fn survey_from_stations(stations: Vec<SurveyStation>) -> Survey {
    let md: Vec<f64> = stations.iter().map(|s| s.md).collect();
    let inclination: Vec<f64> = stations.iter().map(|s| s.inclination).collect();
    let azimuth: Vec<f64> = stations.iter().map(|s| s.azimuth).collect();

    // Generated depths are strictly increasing by construction
    Survey::from_columns(&md, &inclination, &azimuth)
        .unwrap_or_else(|e| unreachable!("generated survey is well-formed: {e}"))
}
