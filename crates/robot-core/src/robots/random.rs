//! Random Robot
//!
//! Picks a uniformly random road out of its current place every turn.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use super::{Action, Robot};
use crate::graph::RoadGraph;
use crate::rng::random_pick;
use crate::state::VillageState;

/// Robot that wanders without memory
#[derive(Debug, Clone)]
pub struct RandomRobot {
    rng: SmallRng,
}

impl RandomRobot {
    pub fn new(rng: SmallRng) -> Self {
        Self { rng }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl Robot for RandomRobot {
    type Memory = ();

    fn name(&self) -> &str {
        "random"
    }

    fn initial_memory(&self) -> Self::Memory {}

    fn decide(&mut self, graph: &RoadGraph, state: &VillageState, _memory: ()) -> Action<()> {
        let neighbors = graph.neighbors(state.place());
        if neighbors.is_empty() {
            // Nowhere to go; asking for the current place is a no-op move
            return Action::new(state.place(), ());
        }
        Action::new(random_pick(neighbors, &mut self.rng), ())
    }
}
