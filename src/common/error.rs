//! Error types for rust_dubins

use std::fmt;

/// Main error type for Dubins path queries
#[derive(Debug, Clone, PartialEq)]
pub enum DubinsError {
    /// Turning radius is not strictly positive
    InvalidRadius(f64),
    /// None of the candidate path families can realize the transition
    NoFeasiblePath { alpha: f64, beta: f64, d: f64 },
    /// Invalid parameter
    InvalidParameter(String),
}

impl fmt::Display for DubinsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DubinsError::InvalidRadius(radius) => {
                write!(f, "Invalid radius: {} (must be > 0)", radius)
            }
            DubinsError::NoFeasiblePath { alpha, beta, d } => write!(
                f,
                "No feasible path: alpha={}, beta={}, d={}",
                alpha, beta, d
            ),
            DubinsError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
        }
    }
}

impl std::error::Error for DubinsError {}

/// Signal from a single path family that it cannot realize a transition.
///
/// Consumed by the selector; never returned from `shortest_path`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Infeasible;

impl fmt::Display for Infeasible {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Path family cannot realize this transition")
    }
}

impl std::error::Error for Infeasible {}

/// Result type alias for Dubins operations
pub type DubinsResult<T> = Result<T, DubinsError>;
