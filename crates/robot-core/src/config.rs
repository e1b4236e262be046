//! Configuration
//!
//! Run settings loaded from a TOML file. Every section and field is optional
//! and falls back to the built-in village and mail route.

use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::graph::{GraphError, RoadGraph};
use crate::journal::JournalFormat;
use crate::robots::{RobotKind, RouteRobot};
use crate::run::RunOptions;
use crate::setup::{DEFAULT_PARCEL_COUNT, MAIL_ROUTE, START_PLACE, VILLAGE_ROADS};

/// Default config file path
pub const DEFAULT_CONFIG_PATH: &str = "robot.toml";

/// Complete run configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RobotConfig {
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub village: VillageConfig,
    #[serde(default)]
    pub journal: JournalConfig,
}

impl RobotConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_str(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Loads `path`, falling back to defaults when the file does not exist.
    ///
    /// Any other read or parse failure is returned.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        match Self::from_file(path.as_ref()) {
            Err(ConfigError::Io(e)) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!(
                    "Could not load {}: {}. Using defaults.",
                    path.as_ref().display(),
                    e
                );
                Ok(Self::default())
            }
            result => result,
        }
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Build the configured road graph.
    ///
    /// Rejects malformed roads, and a start place or route stop that no road
    /// reaches.
    pub fn road_graph(&self) -> Result<RoadGraph, ConfigError> {
        let graph = RoadGraph::try_build(&self.village.roads)?;

        let start = &self.simulation.start_place;
        if !graph.contains(start) {
            return Err(ConfigError::UnknownPlace {
                role: "start place",
                place: start.clone(),
            });
        }
        if let Some(stop) = self.village.route.iter().find(|stop| !graph.contains(stop)) {
            return Err(ConfigError::UnknownPlace {
                role: "route stop",
                place: stop.clone(),
            });
        }
        Ok(graph)
    }

    /// Route robot following the configured route.
    pub fn route_robot(&self) -> RouteRobot {
        RouteRobot::new(self.village.route.clone())
    }

    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            max_turns: self.simulation.max_turns,
        }
    }
}

/// Simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Seed for the random world and the random robot
    pub seed: u64,
    /// Parcels in the random starting world
    pub parcel_count: usize,
    /// Turn limit; absent means run until delivered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_turns: Option<u64>,
    /// Which robot drives
    pub robot: RobotKind,
    /// Where the robot starts
    pub start_place: String,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            parcel_count: DEFAULT_PARCEL_COUNT,
            max_turns: None,
            robot: RobotKind::Route,
            start_place: START_PLACE.to_string(),
        }
    }
}

/// The village map and mail route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VillageConfig {
    /// `"From-To"` road descriptors
    pub roads: Vec<String>,
    /// Stops for the route robot
    pub route: Vec<String>,
}

impl Default for VillageConfig {
    fn default() -> Self {
        Self {
            roads: VILLAGE_ROADS.iter().map(|r| r.to_string()).collect(),
            route: MAIL_ROUTE.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Journal output settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JournalConfig {
    pub format: JournalFormat,
    /// Write to this file instead of standard output
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Errors that can occur during configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid village roads: {0}")]
    Roads(#[from] GraphError),
    #[error("{role} {place:?} is not on any village road")]
    UnknownPlace { role: &'static str, place: String },
}

/// Generates a default configuration file content.
pub fn default_config_toml() -> String {
    r#"# Mail robot configuration

[simulation]
seed = 42
parcel_count = 5
# max_turns = 1000
robot = "route"
start_place = "Post Office"

[journal]
format = "text"
# path = "journal.log"

# [village]
# roads = ["Alice's House-Bob's House", "Alice's House-Cabin"]
# route = ["Alice's House", "Cabin"]
"#
    .to_string()
}
