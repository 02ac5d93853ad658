//! Dubins Path Planner Module
//!
//! Shortest forward-only path between two oriented poses for a vehicle with
//! a minimum turning radius. The path is one of six words built from left
//! turns (L), right turns (R) and straight segments (S); the planner returns
//! the family and its three segment parameters, not a sampled trajectory.
//!
//! # Components
//!
//! - `normalize`: reduces a query to `(alpha, beta, d)`
//! - `families`: closed-form solvers for LSL, LSR, RSL, RSR, RLR and LRL
//! - `selector`: picks the shortest feasible family
//! - `descriptor`: the resulting `DubinsPath` and queries on it
//!
//! # Example
//!
//! ```
//! use rust_dubins::common::Pose2D;
//! use rust_dubins::path_planning::dubins_path::{shortest_path, PathType};
//!
//! let start = Pose2D::new(0.0, 0.0, 0.0);
//! let goal = Pose2D::new(10.0, 0.0, 0.0);
//! let path = shortest_path(&start, &goal, 2.0).unwrap();
//!
//! assert_eq!(path.path_type(), PathType::LSL);
//! assert!((path.length() - 10.0).abs() < 1e-9);
//! ```
//!
//! # References
//!
//! - L. E. Dubins, "On Curves of Minimal Length with a Constraint on Average
//!   Curvature, and with Prescribed Initial and Terminal Positions and Tangents"
//! - A. M. Shkel, V. Lumelsky, "Classification of the Dubins set"

pub mod normalize;
pub mod families;
pub mod selector;
pub mod descriptor;

// Re-exports
pub use normalize::{normalize, normalize_angle, NormalizedProblem};
pub use families::{
    lrl, lsl, lsr, rlr, rsl, rsr, solve, PathParams, PathType, SegmentType, FEASIBILITY_EPSILON,
};
pub use selector::{select_best, select_best_in};
pub use descriptor::DubinsPath;

use log::debug;

use crate::common::{DubinsError, DubinsResult, Pose2D, PosePlanner};

/// Shortest Dubins path from `start` to `goal`
pub fn shortest_path(start: &Pose2D, goal: &Pose2D, radius: f64) -> DubinsResult<DubinsPath> {
    shortest_path_in(start, goal, radius, &PathType::ALL)
}

/// Shortest Dubins path using only the given families
pub fn shortest_path_in(
    start: &Pose2D,
    goal: &Pose2D,
    radius: f64,
    path_types: &[PathType],
) -> DubinsResult<DubinsPath> {
    let problem = normalize(start, goal, radius)?;
    let (path_type, params) = select_best_in(&problem, path_types)?;
    Ok(DubinsPath::from_normalized(*start, radius, path_type, params))
}

/// The path of one specific family, if that family can connect the poses
pub fn path_of_type(
    start: &Pose2D,
    goal: &Pose2D,
    radius: f64,
    path_type: PathType,
) -> DubinsResult<DubinsPath> {
    shortest_path_in(start, goal, radius, &[path_type])
}

/// Configuration for the Dubins planner
#[derive(Debug, Clone, PartialEq)]
pub struct DubinsConfig {
    /// Minimum turning radius [m]
    pub turning_radius: f64,
    /// Families the planner may choose from
    pub path_types: Vec<PathType>,
}

impl Default for DubinsConfig {
    fn default() -> Self {
        Self {
            turning_radius: 1.0,
            path_types: PathType::ALL.to_vec(),
        }
    }
}

/// Dubins path planner for a fixed vehicle
#[derive(Debug, Clone)]
pub struct DubinsPlanner {
    config: DubinsConfig,
}

impl DubinsPlanner {
    /// Create a new planner, rejecting an unusable configuration
    pub fn new(config: DubinsConfig) -> DubinsResult<Self> {
        if !(config.turning_radius > 0.0) {
            return Err(DubinsError::InvalidRadius(config.turning_radius));
        }
        if config.path_types.is_empty() {
            return Err(DubinsError::InvalidParameter(
                "at least one path type is required".to_string(),
            ));
        }
        debug!(
            "Dubins planner: radius {} over {:?}",
            config.turning_radius, config.path_types
        );
        Ok(Self { config })
    }

    /// Planner with unit turning radius over all six families
    pub fn with_defaults() -> Self {
        Self { config: DubinsConfig::default() }
    }

    pub fn config(&self) -> &DubinsConfig {
        &self.config
    }

    pub fn turning_radius(&self) -> f64 {
        self.config.turning_radius
    }
}

impl PosePlanner for DubinsPlanner {
    type Path = DubinsPath;

    fn plan(&self, start: Pose2D, goal: Pose2D) -> DubinsResult<DubinsPath> {
        shortest_path_in(&start, &goal, self.config.turning_radius, &self.config.path_types)
    }
}
