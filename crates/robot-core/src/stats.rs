//! Robot Comparison
//!
//! Runs every built-in robot over the same batch of random worlds and
//! summarizes how many turns each needed.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use village_events::{RobotStats, RunReport};

use crate::graph::RoadGraph;
use crate::journal::{JournalError, TurnJournal};
use crate::rng::random_robot_seed;
use crate::robots::{RandomRobot, Robot, RobotKind, RouteRobot};
use crate::run::{run_robot, RunOptions};
use crate::setup::{DEFAULT_PARCEL_COUNT, START_PLACE};
use crate::state::VillageState;

/// Turn limit applied to comparison runs when none is given
pub const DEFAULT_COMPARE_TURN_LIMIT: u64 = 10_000;

/// Settings for a comparison batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareOptions {
    /// Worlds per robot
    pub runs: usize,
    pub parcel_count: usize,
    pub seed: u64,
    pub start_place: String,
    pub max_turns: u64,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            runs: 100,
            parcel_count: DEFAULT_PARCEL_COUNT,
            seed: 42,
            start_place: START_PLACE.to_string(),
            max_turns: DEFAULT_COMPARE_TURN_LIMIT,
        }
    }
}

/// Generate the shared batch of starting worlds.
pub fn random_worlds(graph: &RoadGraph, options: &CompareOptions) -> Vec<VillageState> {
    let mut rng = SmallRng::seed_from_u64(options.seed);
    (0..options.runs)
        .map(|_| {
            VillageState::random_with_start(
                graph,
                options.start_place.as_str(),
                options.parcel_count,
                &mut rng,
            )
        })
        .collect()
}

/// Run each built-in robot over the same worlds.
pub fn compare_robots(
    graph: &RoadGraph,
    route: &RouteRobot,
    options: &CompareOptions,
) -> Result<Vec<RobotStats>, JournalError> {
    let worlds = random_worlds(graph, options);
    let run_options = RunOptions::with_max_turns(options.max_turns);

    let mut stats = Vec::with_capacity(RobotKind::ALL.len());
    for kind in RobotKind::ALL {
        let mut reports = Vec::with_capacity(worlds.len());
        for (i, world) in worlds.iter().enumerate() {
            let report = match kind {
                RobotKind::Random => {
                    let mut robot = RandomRobot::seeded(random_robot_seed(options.seed, i as u64));
                    run_quietly(graph, world.clone(), &mut robot, &run_options)?
                }
                RobotKind::Route => {
                    let mut robot = route.clone();
                    run_quietly(graph, world.clone(), &mut robot, &run_options)?
                }
            };
            reports.push(report);
        }

        let summary = RobotStats::from_reports(kind.as_str(), &reports);
        tracing::info!(
            robot = %kind,
            runs = summary.runs,
            average_turns = summary.average_turns,
            unfinished = summary.unfinished,
            "Comparison finished"
        );
        stats.push(summary);
    }
    Ok(stats)
}

fn run_quietly<R: Robot>(
    graph: &RoadGraph,
    world: VillageState,
    robot: &mut R,
    options: &RunOptions,
) -> Result<RunReport, JournalError> {
    let memory = robot.initial_memory();
    run_robot(graph, world, robot, memory, options, &mut TurnJournal::null())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::village_graph;

    fn small_batch() -> CompareOptions {
        CompareOptions {
            runs: 20,
            ..CompareOptions::default()
        }
    }

    #[test]
    fn test_worlds_are_shared_and_seeded() {
        let graph = village_graph();
        let options = small_batch();

        let first = random_worlds(&graph, &options);
        let second = random_worlds(&graph, &options);
        assert_eq!(first.len(), 20);
        assert_eq!(first, second);
    }

    #[test]
    fn test_compare_covers_every_robot() {
        let graph = village_graph();
        let stats = compare_robots(&graph, &RouteRobot::mail(), &small_batch()).unwrap();

        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].robot, "random");
        assert_eq!(stats[1].robot, "route");
        assert!(stats.iter().all(|s| s.runs == 20));
    }

    #[test]
    fn test_random_robot_stream_is_separate_from_worlds() {
        let graph = village_graph();
        let options = CompareOptions {
            runs: 5,
            ..CompareOptions::default()
        };
        let stats = compare_robots(&graph, &RouteRobot::mail(), &options).unwrap();

        let run_options = RunOptions::with_max_turns(options.max_turns);
        let reports: Vec<RunReport> = random_worlds(&graph, &options)
            .into_iter()
            .enumerate()
            .map(|(i, world)| {
                let mut robot = RandomRobot::seeded(options.seed + 1 + i as u64);
                run_quietly(&graph, world, &mut robot, &run_options).unwrap()
            })
            .collect();

        assert_eq!(stats[0], RobotStats::from_reports("random", &reports));
    }

    #[test]
    fn test_route_robot_finishes_within_two_laps() {
        let graph = village_graph();
        let stats = compare_robots(&graph, &RouteRobot::mail(), &small_batch()).unwrap();

        let route = &stats[1];
        assert_eq!(route.unfinished, 0);
        assert!(route.max_turns <= 26, "route took {} turns", route.max_turns);
    }
}
