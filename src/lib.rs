//! Wellpath: Minimum-Curvature Trajectory Engine
//!
//! Converts directional wellbore survey data (measured depth, inclination,
//! azimuth stations) into true-vertical-depth profiles using the
//! minimum-curvature method, and builds the uniform depth grids used to
//! align survey curves across wells.
//!
//! ## Architecture
//!
//! - **Trajectory**: dog-leg / dog-leg-severity computation and
//!   minimum-curvature TVD integration
//! - **Alignment**: uniform depth-grid construction and nearest-value
//!   snapping
//! - **Simulation**: deterministic synthetic survey generation for testing
//!
//! The engine is pure and synchronous: survey parsing, file pairing, and
//! curve merging live with the callers that feed it.

pub mod alignment;
pub mod config;
pub mod simulation;
pub mod trajectory;
pub mod types;

// Re-export engine configuration
pub use config::{ConfigError, EngineConfig};

// Re-export commonly used types
pub use types::{DepthUnit, Survey, SurveyStation, TrajectoryProfile};

// Re-export the trajectory pipeline
pub use trajectory::{
    compute_dog_leg, compute_tvd, correct_survey, correct_survey_with_unit, ratio_factor,
    DogLegProfile, TrajectoryError,
};

// Re-export alignment utilities
pub use alignment::{build_uniform_md, closest, snap_to_grid, AlignmentError, GridSpec};
