// Dubins path planning sample
//
// Runs the classic sanity check (alpha = 1, beta = 1, d = 5): every family is
// solved on its own, then the shortest one is selected and executed.
use std::f64::consts::PI;

use log::LevelFilter;

use rust_dubins::common::{Pose2D, PosePlanner};
use rust_dubins::path_planning::dubins_path::{
    normalize, solve, DubinsConfig, DubinsPlanner, PathType,
};

fn init_logger(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{:5}] {}: {}",
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .apply()
}

fn main() {
    if let Err(e) = init_logger(LevelFilter::Debug) {
        eprintln!("Logger initialisation failed: {}", e);
    }

    println!("Dubins path planner start!!");

    let start = Pose2D::new(0.0, 0.0, 1.0);
    let goal = Pose2D::new(5.0, 0.0, 1.0);
    let turning_radius = 1.0;

    let problem = match normalize(&start, &goal, turning_radius) {
        Ok(problem) => problem,
        Err(e) => {
            eprintln!("{}", e);
            return;
        }
    };
    println!(
        "alpha: {:.4}, beta: {:.4}, d: {:.4}",
        problem.alpha(),
        problem.beta(),
        problem.d()
    );

    for &path_type in PathType::ALL.iter() {
        match solve(path_type, problem.alpha(), problem.beta(), problem.d()) {
            Ok(params) => println!(
                "{:?}: t={:.4} p={:.4} q={:.4} length={:.4}",
                path_type,
                params.t,
                params.p,
                params.q,
                params.total()
            ),
            Err(e) => println!("{:?}: {}", path_type, e),
        }
    }

    let config = DubinsConfig {
        turning_radius,
        ..Default::default()
    };
    let planner = match DubinsPlanner::new(config) {
        Ok(planner) => planner,
        Err(e) => {
            eprintln!("{}", e);
            return;
        }
    };

    match planner.plan(start, goal) {
        Ok(path) => {
            let end = path.endpoint();
            println!("Best path: {:?} {:?}", path.path_type(), path.params());
            println!("Length: {:.4}", path.length());
            println!(
                "Endpoint: x={:.4} y={:.4} yaw={:.4} [deg]",
                end.x,
                end.y,
                end.yaw * 180.0 / PI
            );
        }
        Err(e) => println!("Failed to generate path: {}", e),
    }

    println!("Dubins path planner finish!!");
}
