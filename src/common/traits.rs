//! Common traits defining interfaces for planning algorithms

use crate::common::error::DubinsResult;
use crate::common::types::Pose2D;

/// Trait for planners connecting two oriented poses
pub trait PosePlanner {
    /// Path representation produced by this planner
    type Path;

    /// Plan a path from the start pose to the goal pose
    fn plan(&self, start: Pose2D, goal: Pose2D) -> DubinsResult<Self::Path>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test that traits compile correctly
    struct DummyPlanner;

    impl PosePlanner for DummyPlanner {
        type Path = Vec<Pose2D>;

        fn plan(&self, start: Pose2D, goal: Pose2D) -> DubinsResult<Self::Path> {
            Ok(vec![start, goal])
        }
    }

    #[test]
    fn test_pose_planner_trait() {
        let planner = DummyPlanner;
        let result = planner.plan(Pose2D::origin(), Pose2D::new(1.0, 1.0, 0.0));
        assert_eq!(result.map(|p| p.len()), Ok(2));
    }
}
