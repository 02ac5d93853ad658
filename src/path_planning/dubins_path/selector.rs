//! Shortest-family selection
//!
//! Evaluates the candidate families on one normalized problem and keeps the
//! shortest feasible one. Exact ties go to the family that comes first in
//! `PathType` order.

use log::{debug, trace, warn};
use ordered_float::OrderedFloat;

use crate::common::{DubinsError, DubinsResult};

use super::families::{solve, PathParams, PathType};
use super::normalize::NormalizedProblem;

/// Shortest feasible family over all six words
pub fn select_best(problem: &NormalizedProblem) -> DubinsResult<(PathType, PathParams)> {
    select_best_in(problem, &PathType::ALL)
}

/// Shortest feasible family among `path_types`
pub fn select_best_in(
    problem: &NormalizedProblem,
    path_types: &[PathType],
) -> DubinsResult<(PathType, PathParams)> {
    let (alpha, beta, d) = (problem.alpha(), problem.beta(), problem.d());

    let best = path_types
        .iter()
        .filter_map(|&path_type| match solve(path_type, alpha, beta, d) {
            Ok(params) => Some((path_type, params)),
            Err(_) => {
                trace!("{:?} infeasible for alpha={} beta={} d={}", path_type, alpha, beta, d);
                None
            }
        })
        .min_by_key(|(path_type, params)| (OrderedFloat(params.total()), *path_type));

    match best {
        Some((path_type, params)) => {
            debug!("selected {:?} with normalized length {}", path_type, params.total());
            Ok((path_type, params))
        }
        None => {
            warn!(
                "no feasible family among {:?} for alpha={} beta={} d={}",
                path_types, alpha, beta, d
            );
            Err(DubinsError::NoFeasiblePath { alpha, beta, d })
        }
    }
}
