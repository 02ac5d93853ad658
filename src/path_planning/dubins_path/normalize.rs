//! Geometry normalizer
//!
//! Reduces an arbitrary (start, goal, radius) query to the canonical problem
//! solved by the path families: the start sits at the origin, the goal on the
//! positive x axis at distance `d` (in turning radii), and the headings are
//! expressed relative to the line joining them.

use std::f64::consts::TAU;

use crate::common::{DubinsError, DubinsResult, Pose2D};

/// Canonical form of a Dubins query
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedProblem {
    alpha: f64,
    beta: f64,
    d: f64,
}

impl NormalizedProblem {
    /// Start heading relative to the start-goal line, in [0, 2pi)
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Goal heading relative to the start-goal line, in [0, 2pi)
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Start-goal separation divided by the turning radius
    pub fn d(&self) -> f64 {
        self.d
    }
}

/// Wrap an angle into [0, 2pi)
pub fn normalize_angle(theta: f64) -> f64 {
    let wrapped = theta.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Normalize a start/goal pose pair for the given turning radius
pub fn normalize(start: &Pose2D, goal: &Pose2D, radius: f64) -> DubinsResult<NormalizedProblem> {
    if !(radius > 0.0) {
        return Err(DubinsError::InvalidRadius(radius));
    }

    let delta = goal.position().to_vector() - start.position().to_vector();
    let theta = normalize_angle(delta.y.atan2(delta.x));

    Ok(NormalizedProblem {
        alpha: normalize_angle(start.yaw - theta),
        beta: normalize_angle(goal.yaw - theta),
        d: delta.norm() / radius,
    })
}
