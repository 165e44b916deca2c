//! Corrected trajectory profile produced by the minimum-curvature pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::DepthUnit;

/// Full trajectory correction output for one survey.
///
/// All columns are parallel, one entry per survey station. Index 0 carries
/// the by-convention zero dog leg (no prior station) and the caller-supplied
/// initial TVD.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrajectoryProfile {
    /// Depth unit convention the profile was computed under
    pub unit: DepthUnit,
    /// Measured depth (m or ft)
    pub md: Vec<f64>,
    /// Inclination (degrees)
    pub inclination: Vec<f64>,
    /// Azimuth (degrees)
    pub azimuth: Vec<f64>,
    /// Dog-leg angle between consecutive stations (degrees)
    pub dog_leg: Vec<f64>,
    /// Dog-leg severity (degrees per standard course length)
    pub dog_leg_severity: Vec<f64>,
    /// True vertical depth (m or ft)
    pub tvd: Vec<f64>,
    /// Timestamp of computation
    pub computed_at: DateTime<Utc>,
}

impl TrajectoryProfile {
    /// Number of stations in the profile.
    pub fn len(&self) -> usize {
        self.md.len()
    }

    /// True when the profile holds no stations.
    pub fn is_empty(&self) -> bool {
        self.md.is_empty()
    }

    /// Largest dog-leg severity along the profile, or 0 when empty.
    pub fn max_dog_leg_severity(&self) -> f64 {
        self.dog_leg_severity.iter().copied().fold(0.0_f64, f64::max)
    }

    /// TVD at the deepest station, or 0 for an empty profile.
    pub fn final_tvd(&self) -> f64 {
        self.tvd.last().copied().unwrap_or(0.0)
    }

    /// Serialize the profile to JSON for downstream consumers.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Format a human-readable summary of the corrected trajectory.
    ///
    /// # Example Output
    /// ```text
    /// Trajectory Correction Summary
    /// =============================
    /// Stations: 101
    /// Depth unit: ft
    /// MD range: 0.0 - 10000.0 ft
    /// Final TVD: 9132.4 ft
    /// Max DLS: 2.31 deg/100ft
    /// ```
    pub fn format_summary(&self) -> String {
        let first_md = self.md.first().copied().unwrap_or(0.0);
        let last_md = self.md.last().copied().unwrap_or(0.0);

        let mut output = String::new();
        output.push_str("Trajectory Correction Summary\n");
        output.push_str("=============================\n");
        output.push_str(&format!("Stations: {}\n", self.len()));
        output.push_str(&format!("Depth unit: {}\n", self.unit));
        output.push_str(&format!(
            "MD range: {:.1} - {:.1} {}\n",
            first_md,
            last_md,
            self.unit.depth_label()
        ));
        output.push_str(&format!(
            "Final TVD: {:.1} {}\n",
            self.final_tvd(),
            self.unit.depth_label()
        ));
        output.push_str(&format!(
            "Max DLS: {:.2} {}\n",
            self.max_dog_leg_severity(),
            self.unit.severity_label()
        ));

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> TrajectoryProfile {
        TrajectoryProfile {
            unit: DepthUnit::Feet,
            md: vec![0.0, 100.0, 200.0],
            inclination: vec![0.0, 5.0, 10.0],
            azimuth: vec![0.0, 45.0, 45.0],
            dog_leg: vec![0.0, 5.0, 5.0],
            dog_leg_severity: vec![0.0, 5.0, 5.0],
            tvd: vec![0.0, 99.9, 198.8],
            computed_at: Utc::now(),
        }
    }

    #[test]
    fn test_summary_contains_key_sections() {
        let text = sample_profile().format_summary();

        assert!(text.contains("Trajectory Correction Summary"));
        assert!(text.contains("Stations: 3"));
        assert!(text.contains("Max DLS"));
        assert!(text.contains("deg/100ft"));
    }

    #[test]
    fn test_max_dls_and_final_tvd() {
        let profile = sample_profile();
        assert!((profile.max_dog_leg_severity() - 5.0).abs() < 1e-12);
        assert!((profile.final_tvd() - 198.8).abs() < 1e-12);
    }

    #[test]
    fn test_json_round_trip() {
        let profile = sample_profile();
        let json = profile.to_json().expect("profile serializes");
        let back: TrajectoryProfile =
            serde_json::from_str(&json).expect("profile deserializes");

        assert_eq!(back.len(), profile.len());
        assert_eq!(back.unit, profile.unit);
        assert_eq!(back.tvd, profile.tvd);
    }
}
