//! Dubins path families
//!
//! Closed-form solvers for the six candidate words. Every solver works on the
//! normalized problem: unit turning radius, start at the origin, goal at
//! `(d, 0)`, headings `alpha` and `beta` relative to the x axis.

use std::f64::consts::TAU;

use crate::common::Infeasible;

use super::normalize::normalize_angle;

/// Slack for floating-point overshoot on the feasibility boundaries
pub const FEASIBILITY_EPSILON: f64 = 1e-10;

/// The three motion primitives a path is made of
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentType {
    /// Left turn
    L,
    /// Straight segment
    S,
    /// Right turn
    R,
}

/// The six Dubins path families.
///
/// The declaration order is the tie-break priority used when several
/// families have exactly the same length: LSL < LSR < RSL < RSR < RLR < LRL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PathType {
    LSL,
    LSR,
    RSL,
    RSR,
    RLR,
    LRL,
}

impl PathType {
    /// Turn-straight-turn families
    pub const CSC: [PathType; 4] = [PathType::LSL, PathType::LSR, PathType::RSL, PathType::RSR];
    /// Turn-turn-turn families
    pub const CCC: [PathType; 2] = [PathType::RLR, PathType::LRL];
    /// All families, in tie-break order
    pub const ALL: [PathType; 6] = [
        PathType::LSL,
        PathType::LSR,
        PathType::RSL,
        PathType::RSR,
        PathType::RLR,
        PathType::LRL,
    ];

    pub fn segment_types(&self) -> [SegmentType; 3] {
        use SegmentType::*;
        match self {
            PathType::LSL => [L, S, L],
            PathType::LSR => [L, S, R],
            PathType::RSL => [R, S, L],
            PathType::RSR => [R, S, R],
            PathType::RLR => [R, L, R],
            PathType::LRL => [L, R, L],
        }
    }

    /// True when the middle segment is a straight line
    pub fn has_straight(&self) -> bool {
        self.segment_types()[1] == SegmentType::S
    }
}

/// Segment parameters `(t, p, q)` of a path.
///
/// Turns are angles in radians; the straight segment of a CSC family is a
/// length (in turning radii for normalized parameters).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathParams {
    pub t: f64,
    pub p: f64,
    pub q: f64,
}

impl PathParams {
    pub fn new(t: f64, p: f64, q: f64) -> Self {
        Self { t, p, q }
    }

    pub fn total(&self) -> f64 {
        self.t + self.p + self.q
    }

    pub fn to_array(&self) -> [f64; 3] {
        [self.t, self.p, self.q]
    }
}

impl From<[f64; 3]> for PathParams {
    fn from(params: [f64; 3]) -> Self {
        Self::new(params[0], params[1], params[2])
    }
}

/// Shared trigonometric terms of a normalized problem
struct Terms {
    sa: f64,
    sb: f64,
    ca: f64,
    cb: f64,
    c_ab: f64,
}

impl Terms {
    fn new(alpha: f64, beta: f64) -> Self {
        Terms {
            sa: alpha.sin(),
            sb: beta.sin(),
            ca: alpha.cos(),
            cb: beta.cos(),
            c_ab: (alpha - beta).cos(),
        }
    }
}

/// Wrap a turn into [0, 2pi), folding rounding noise just below 2pi to zero
fn wrap_turn(angle: f64) -> f64 {
    let wrapped = normalize_angle(angle);
    if TAU - wrapped < FEASIBILITY_EPSILON {
        0.0
    } else {
        wrapped
    }
}

/// Square root of a straight-segment length, or `Infeasible` below the tangency limit
/// or when the square is not finite
fn straight_length(p_squared: f64) -> Result<f64, Infeasible> {
    if !(p_squared >= -FEASIBILITY_EPSILON) || !p_squared.is_finite() {
        return Err(Infeasible);
    }
    Ok(p_squared.max(0.0).sqrt())
}

/// Middle arc of a CCC family, or `Infeasible` outside the acos domain
fn middle_arc(cos_p: f64) -> Result<f64, Infeasible> {
    if !(cos_p.abs() <= 1.0 + FEASIBILITY_EPSILON) {
        return Err(Infeasible);
    }
    Ok(wrap_turn(TAU - cos_p.clamp(-1.0, 1.0).acos()))
}

/// Left-straight-left; infeasible only for non-finite input
pub fn lsl(alpha: f64, beta: f64, d: f64) -> Result<PathParams, Infeasible> {
    let Terms { sa, sb, ca, cb, c_ab } = Terms::new(alpha, beta);
    // a sum of squares, negative only through rounding
    let p = straight_length(2.0 + d * d - 2.0 * c_ab + 2.0 * d * (sa - sb))?;
    let heading = (cb - ca).atan2(d + sa - sb);
    Ok(PathParams::new(wrap_turn(heading - alpha), p, wrap_turn(beta - heading)))
}

/// Right-straight-right; infeasible only for non-finite input
pub fn rsr(alpha: f64, beta: f64, d: f64) -> Result<PathParams, Infeasible> {
    let Terms { sa, sb, ca, cb, c_ab } = Terms::new(alpha, beta);
    let p = straight_length(2.0 + d * d - 2.0 * c_ab + 2.0 * d * (sb - sa))?;
    let heading = (ca - cb).atan2(d - sa + sb);
    Ok(PathParams::new(wrap_turn(alpha - heading), p, wrap_turn(heading - beta)))
}

/// Left-straight-right; infeasible when the turning circles overlap (`p² < 0`)
pub fn lsr(alpha: f64, beta: f64, d: f64) -> Result<PathParams, Infeasible> {
    let Terms { sa, sb, ca, cb, c_ab } = Terms::new(alpha, beta);
    let p = straight_length(-2.0 + d * d + 2.0 * c_ab + 2.0 * d * (sa + sb))?;
    let heading = (-ca - cb).atan2(d + sa + sb) - (-2.0_f64).atan2(p);
    Ok(PathParams::new(wrap_turn(heading - alpha), p, wrap_turn(heading - beta)))
}

/// Right-straight-left; infeasible when the turning circles overlap (`p² < 0`)
pub fn rsl(alpha: f64, beta: f64, d: f64) -> Result<PathParams, Infeasible> {
    let Terms { sa, sb, ca, cb, c_ab } = Terms::new(alpha, beta);
    let p = straight_length(-2.0 + d * d + 2.0 * c_ab - 2.0 * d * (sa + sb))?;
    let heading = (ca + cb).atan2(d - sa - sb) - (2.0_f64).atan2(p);
    Ok(PathParams::new(wrap_turn(alpha - heading), p, wrap_turn(beta - heading)))
}

/// Right-left-right; infeasible when the goal circle is out of reach (`|cos p| > 1`)
pub fn rlr(alpha: f64, beta: f64, d: f64) -> Result<PathParams, Infeasible> {
    let Terms { sa, sb, ca, cb, c_ab } = Terms::new(alpha, beta);
    let p = middle_arc((6.0 - d * d + 2.0 * c_ab + 2.0 * d * (sa - sb)) / 8.0)?;
    let t = wrap_turn(alpha - (ca - cb).atan2(d - sa + sb) + p / 2.0);
    let q = wrap_turn(alpha - beta - t + p);
    Ok(PathParams::new(t, p, q))
}

/// Left-right-left; infeasible when the goal circle is out of reach (`|cos p| > 1`)
pub fn lrl(alpha: f64, beta: f64, d: f64) -> Result<PathParams, Infeasible> {
    let Terms { sa, sb, ca, cb, c_ab } = Terms::new(alpha, beta);
    let p = middle_arc((6.0 - d * d + 2.0 * c_ab + 2.0 * d * (sb - sa)) / 8.0)?;
    let t = wrap_turn(-alpha - (ca - cb).atan2(d + sa - sb) + p / 2.0);
    let q = wrap_turn(beta - alpha - t + p);
    Ok(PathParams::new(t, p, q))
}

/// Solve the normalized problem for one family
pub fn solve(path_type: PathType, alpha: f64, beta: f64, d: f64) -> Result<PathParams, Infeasible> {
    match path_type {
        PathType::LSL => lsl(alpha, beta, d),
        PathType::LSR => lsr(alpha, beta, d),
        PathType::RSL => rsl(alpha, beta, d),
        PathType::RSR => rsr(alpha, beta, d),
        PathType::RLR => rlr(alpha, beta, d),
        PathType::LRL => lrl(alpha, beta, d),
    }
}
