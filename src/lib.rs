//! RustDubins - shortest paths for forward-only vehicles
//!
//! This crate computes the shortest Dubins path between two oriented
//! planar poses for a vehicle with a minimum turning radius.

// Core modules
pub mod common;

// Algorithm modules
pub mod path_planning;

// Re-export common types for convenience
pub use common::{Point2D, Pose2D, PosePlanner};
pub use common::{DubinsError, DubinsResult, Infeasible};
pub use path_planning::dubins_path::{
    normalize, shortest_path, solve, DubinsConfig, DubinsPath, DubinsPlanner, PathParams, PathType,
};
