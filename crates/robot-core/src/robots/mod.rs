//! Robot Strategies
//!
//! A robot looks at the current state plus its own memory and picks the
//! next place to go.

pub mod random;
pub mod route;

pub use random::RandomRobot;
pub use route::{RouteMemory, RouteRobot};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::graph::RoadGraph;
use crate::state::VillageState;

/// A requested move plus whatever the robot wants to remember next turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action<M> {
    /// Where the robot wants to go
    pub direction: String,
    /// Memory handed back on the next turn
    pub memory: M,
}

impl<M> Action<M> {
    pub fn new(direction: impl Into<String>, memory: M) -> Self {
        Self {
            direction: direction.into(),
            memory,
        }
    }
}

/// Decision function driving the robot.
pub trait Robot {
    /// Private state threaded from one turn to the next
    type Memory;

    /// Short name used in logs and reports
    fn name(&self) -> &str;

    /// Memory for the first turn of a run
    fn initial_memory(&self) -> Self::Memory;

    /// Pick the next move.
    fn decide(
        &mut self,
        graph: &RoadGraph,
        state: &VillageState,
        memory: Self::Memory,
    ) -> Action<Self::Memory>;
}

/// The built-in robots, selectable from config and the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RobotKind {
    /// Wander to a random neighbour every turn
    Random,
    /// Follow the mail route
    #[default]
    Route,
}

impl RobotKind {
    pub const ALL: [RobotKind; 2] = [RobotKind::Random, RobotKind::Route];

    pub fn as_str(self) -> &'static str {
        match self {
            RobotKind::Random => "random",
            RobotKind::Route => "route",
        }
    }
}

impl fmt::Display for RobotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized robot name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown robot {0:?} (expected \"random\" or \"route\")")]
pub struct UnknownRobot(pub String);

impl FromStr for RobotKind {
    type Err = UnknownRobot;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "random" => Ok(RobotKind::Random),
            "route" => Ok(RobotKind::Route),
            _ => Err(UnknownRobot(s.to_string())),
        }
    }
}
