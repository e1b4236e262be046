//! Route Robot
//!
//! Replays a fixed route, keeping the unvisited stops in its memory and
//! dropping one per turn. When the route runs out it starts over.

use std::collections::VecDeque;

use super::{Action, Robot};
use crate::graph::RoadGraph;
use crate::setup::village::mail_route;
use crate::state::VillageState;

/// Route progress carried between turns
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RouteMemory {
    /// No stops taken yet
    #[default]
    Start,
    /// Stops still ahead
    Enroute(VecDeque<String>),
}

/// Robot that follows a hardcoded route regardless of where the parcels are
#[derive(Debug, Clone)]
pub struct RouteRobot {
    route: Vec<String>,
}

impl RouteRobot {
    /// Follow `route`. An empty route leaves the robot standing still.
    pub fn new(route: Vec<String>) -> Self {
        Self { route }
    }

    /// The village mail route from the post office.
    pub fn mail() -> Self {
        Self::new(mail_route())
    }

    pub fn route(&self) -> &[String] {
        &self.route
    }
}

impl Robot for RouteRobot {
    type Memory = RouteMemory;

    fn name(&self) -> &str {
        "route"
    }

    fn initial_memory(&self) -> RouteMemory {
        RouteMemory::Start
    }

    fn decide(
        &mut self,
        _graph: &RoadGraph,
        state: &VillageState,
        memory: RouteMemory,
    ) -> Action<RouteMemory> {
        let mut remaining = match memory {
            RouteMemory::Enroute(stops) if !stops.is_empty() => stops,
            _ => self.route.iter().cloned().collect(),
        };

        match remaining.pop_front() {
            Some(direction) => Action::new(direction, RouteMemory::Enroute(remaining)),
            None => Action::new(state.place(), RouteMemory::Start),
        }
    }
}
