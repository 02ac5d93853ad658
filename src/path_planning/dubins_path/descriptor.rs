//! Dubins path descriptor
//!
//! The result of a query: start pose, turning radius, family and the three
//! segment parameters. Turns are stored as angles [rad]; the straight segment
//! of a CSC path is stored as a length in world units.

use crate::common::{DubinsError, DubinsResult, Pose2D};

use super::families::{PathParams, PathType, SegmentType};
use super::normalize::normalize_angle;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DubinsPath {
    start: Pose2D,
    radius: f64,
    path_type: PathType,
    params: PathParams,
}

impl DubinsPath {
    /// Build a path from normalized (unit radius) parameters
    pub fn from_normalized(start: Pose2D, radius: f64, path_type: PathType, normalized: PathParams) -> Self {
        let mut params = normalized;
        if path_type.has_straight() {
            params.p *= radius;
        }
        DubinsPath { start, radius, path_type, params }
    }

    pub fn start(&self) -> Pose2D {
        self.start
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn path_type(&self) -> PathType {
        self.path_type
    }

    /// Segment parameters with the straight segment in world units
    pub fn params(&self) -> PathParams {
        self.params
    }

    /// Segment parameters in turning radii
    pub fn normalized_params(&self) -> PathParams {
        let mut params = self.params;
        if self.path_type.has_straight() {
            params.p /= self.radius;
        }
        params
    }

    /// Length of each segment in world units
    pub fn segment_lengths(&self) -> [f64; 3] {
        let mut lengths = self.params.to_array();
        for (length, segment) in lengths.iter_mut().zip(self.path_type.segment_types().iter()) {
            if *segment != SegmentType::S {
                *length *= self.radius;
            }
        }
        lengths
    }

    /// Total length in world units
    pub fn length(&self) -> f64 {
        self.segment_lengths().iter().sum()
    }

    /// Total length in turning radii
    pub fn normalized_length(&self) -> f64 {
        self.normalized_params().total()
    }

    /// Pose reached after executing all three segments from the start
    ///
    /// The returned yaw is wrapped into [0, 2pi).
    pub fn endpoint(&self) -> Pose2D {
        let segments = self.path_type.segment_types();
        let params = self.params.to_array();
        let end = segments
            .iter()
            .zip(params.iter())
            .fold(self.start, |pose, (&segment, &param)| advance(pose, segment, param, self.radius));
        Pose2D::new(end.x, end.y, normalize_angle(end.yaw))
    }

    /// Truncate the path after `length` world units.
    ///
    /// Lengths beyond the end of the path return the whole path.
    pub fn extract_subpath(&self, length: f64) -> DubinsResult<DubinsPath> {
        if !length.is_finite() || length < 0.0 {
            return Err(DubinsError::InvalidParameter(format!(
                "subpath length must be finite and non-negative, got {}",
                length
            )));
        }

        let budget = length / self.radius;
        let full = self.normalized_params();
        let t = full.t.min(budget);
        let p = full.p.min(budget - t);
        let q = full.q.min(budget - t - p);

        Ok(DubinsPath::from_normalized(
            self.start,
            self.radius,
            self.path_type,
            PathParams::new(t, p, q),
        ))
    }
}

/// Execute one primitive in closed form
fn advance(pose: Pose2D, segment: SegmentType, param: f64, radius: f64) -> Pose2D {
    let Pose2D { x, y, yaw } = pose;
    match segment {
        SegmentType::L => Pose2D::new(
            x + radius * ((yaw + param).sin() - yaw.sin()),
            y + radius * (yaw.cos() - (yaw + param).cos()),
            yaw + param,
        ),
        SegmentType::R => Pose2D::new(
            x + radius * (yaw.sin() - (yaw - param).sin()),
            y + radius * ((yaw - param).cos() - yaw.cos()),
            yaw - param,
        ),
        SegmentType::S => Pose2D::new(x + param * yaw.cos(), y + param * yaw.sin(), yaw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn quarter_left(radius: f64) -> DubinsPath {
        DubinsPath::from_normalized(
            Pose2D::origin(),
            radius,
            PathType::LSL,
            PathParams::new(PI / 2.0, 3.0, 0.0),
        )
    }

    #[test]
    fn test_denormalization() {
        let path = quarter_left(2.0);
        assert_eq!(path.params(), PathParams::new(PI / 2.0, 6.0, 0.0));
        assert_eq!(path.normalized_params(), PathParams::new(PI / 2.0, 3.0, 0.0));
        assert!((path.length() - (PI + 6.0)).abs() < 1e-12);
        assert!((path.normalized_length() - (PI / 2.0 + 3.0)).abs() < 1e-12);

        let ccc = DubinsPath::from_normalized(
            Pose2D::origin(),
            2.0,
            PathType::RLR,
            PathParams::new(0.5, 4.0, 0.5),
        );
        assert_eq!(ccc.params(), PathParams::new(0.5, 4.0, 0.5));
        assert!((ccc.length() - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_endpoint() {
        // quarter turn left then 6 m north
        let end = quarter_left(2.0).endpoint();
        assert!((end.x - 2.0).abs() < 1e-12);
        assert!((end.y - 8.0).abs() < 1e-12);
        assert!((end.yaw - PI / 2.0).abs() < 1e-12);

        let right = DubinsPath::from_normalized(
            Pose2D::new(1.0, 1.0, 0.0),
            1.0,
            PathType::RSR,
            PathParams::new(PI / 2.0, 0.0, 0.0),
        );
        let end = right.endpoint();
        assert!((end.x - 2.0).abs() < 1e-12);
        assert!(end.y.abs() < 1e-12);
        assert!((end.yaw - 1.5 * PI).abs() < 1e-12);
    }

    #[test]
    fn test_extract_subpath() {
        let path = quarter_left(2.0);

        let first_arc = path.extract_subpath(PI).unwrap();
        assert!((first_arc.length() - PI).abs() < 1e-12);
        assert_eq!(first_arc.params().p, 0.0);

        let partway = path.extract_subpath(PI + 1.0).unwrap();
        assert!((partway.params().p - 1.0).abs() < 1e-12);
        let end = partway.endpoint();
        assert!((end.x - 2.0).abs() < 1e-12);
        assert!((end.y - 3.0).abs() < 1e-12);

        let whole = path.extract_subpath(100.0).unwrap();
        assert_eq!(whole.params(), path.params());

        let empty = path.extract_subpath(0.0).unwrap();
        assert_eq!(empty.length(), 0.0);
        assert_eq!(empty.endpoint(), Pose2D::origin());
    }

    #[test]
    fn test_extract_subpath_invalid_length() {
        let path = quarter_left(1.0);
        assert!(matches!(path.extract_subpath(-1.0), Err(DubinsError::InvalidParameter(_))));
        assert!(path.extract_subpath(f64::NAN).is_err());
        assert!(path.extract_subpath(f64::INFINITY).is_err());
    }
}
