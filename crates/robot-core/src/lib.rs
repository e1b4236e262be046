//! Village Mail Robot
//!
//! A robot walks a small village road graph picking up parcels and dropping
//! them at their addresses. The world is an immutable [`VillageState`];
//! robots are pluggable decision functions behind the [`Robot`] trait.

pub mod config;
pub mod graph;
pub mod journal;
pub mod rng;
pub mod robots;
pub mod run;
pub mod setup;
pub mod state;
pub mod stats;

pub use config::{default_config_toml, ConfigError, RobotConfig};
pub use graph::{GraphError, RoadGraph};
pub use journal::{JournalError, JournalFormat, TurnJournal};
pub use rng::random_robot_seed;
pub use robots::{Action, RandomRobot, Robot, RobotKind, RouteMemory, RouteRobot};
pub use run::{run_robot, RunOptions};
pub use setup::{village_graph, DEFAULT_PARCEL_COUNT, MAIL_ROUTE, START_PLACE, VILLAGE_ROADS};
pub use state::VillageState;
pub use stats::{compare_robots, CompareOptions};

pub use village_events::{JournalEntry, Parcel, RobotStats, RunOutcome, RunReport};

use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Errors from a configured run
#[derive(Debug, thiserror::Error)]
pub enum RobotError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Journal(#[from] JournalError),
}

/// Build the world described by `config` and run its robot once.
///
/// The random world and the random robot draw from separate streams of the
/// same seed, so a seed always produces the same parcels whichever robot
/// drives.
pub fn run_configured(
    config: &RobotConfig,
    journal: &mut TurnJournal,
) -> Result<RunReport, RobotError> {
    let graph = config.road_graph()?;
    let sim = &config.simulation;

    let mut world_rng = SmallRng::seed_from_u64(sim.seed);
    let state = VillageState::random_with_start(
        &graph,
        sim.start_place.as_str(),
        sim.parcel_count,
        &mut world_rng,
    );
    tracing::info!(
        robot = %sim.robot,
        seed = sim.seed,
        parcels = state.parcels().len(),
        start = state.place(),
        "Generated village"
    );

    let options = config.run_options();
    let report = match sim.robot {
        RobotKind::Random => {
            let mut robot = RandomRobot::seeded(random_robot_seed(sim.seed, 0));
            run_robot(&graph, state, &mut robot, (), &options, journal)?
        }
        RobotKind::Route => {
            let mut robot = config.route_robot();
            let memory = robot.initial_memory();
            run_robot(&graph, state, &mut robot, memory, &options, journal)?
        }
    };
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_configured_route() {
        let config = RobotConfig::default();
        let mut journal = TurnJournal::in_memory(JournalFormat::Text);

        let report = run_configured(&config, &mut journal).unwrap();

        assert!(report.is_complete());
        assert_eq!(report.robot, "route");
        assert_eq!(report.delivered, 5);
        assert_eq!(journal.entry_count(), report.turns + 1);
        assert_eq!(
            journal.lines().last().cloned(),
            Some(format!("Done in {} turns", report.turns))
        );
    }

    #[test]
    fn test_run_configured_random_with_limit() {
        let mut config = RobotConfig::default();
        config.simulation.robot = RobotKind::Random;
        config.simulation.max_turns = Some(5);
        config.simulation.parcel_count = 50;
        let mut journal = TurnJournal::null();

        let report = run_configured(&config, &mut journal).unwrap();

        assert!(report.turns <= 5);
        assert_eq!(report.robot, "random");
    }

    #[test]
    fn test_run_configured_rejects_bad_roads() {
        let mut config = RobotConfig::default();
        config.village.roads = vec!["Nowhere".into()];

        let result = run_configured(&config, &mut TurnJournal::null());
        assert!(matches!(result, Err(RobotError::Config(ConfigError::Roads(_)))));
    }

    #[test]
    fn test_run_configured_rejects_unknown_start() {
        for robot in RobotKind::ALL {
            let mut config = RobotConfig::default();
            config.simulation.robot = robot;
            config.simulation.start_place = "Castle".into();
            let mut journal = TurnJournal::in_memory(JournalFormat::Text);

            let result = run_configured(&config, &mut journal);
            assert!(matches!(
                result,
                Err(RobotError::Config(ConfigError::UnknownPlace { .. }))
            ));
            assert_eq!(journal.entry_count(), 0);
        }
    }
}
