//! Parcel Setup
//!
//! Random starting worlds: the robot at the post office and a handful of
//! parcels scattered around the village.

use rand::Rng;
use village_events::Parcel;

use crate::graph::RoadGraph;
use crate::rng::random_pick;
use crate::setup::village::START_PLACE;
use crate::state::VillageState;

/// Parcels in a random world unless asked otherwise
pub const DEFAULT_PARCEL_COUNT: usize = 5;

impl VillageState {
    /// A random world with the robot at the post office.
    pub fn random<R: Rng>(graph: &RoadGraph, parcel_count: usize, rng: &mut R) -> Self {
        Self::random_with_start(graph, START_PLACE, parcel_count, rng)
    }

    /// A random world with the robot at `start`.
    ///
    /// Each parcel gets a random address, then a random place drawn again
    /// until it differs from the address. A graph with fewer than two
    /// places cannot hold an undelivered parcel, so it gets none.
    pub fn random_with_start<R: Rng>(
        graph: &RoadGraph,
        start: impl Into<String>,
        parcel_count: usize,
        rng: &mut R,
    ) -> Self {
        let places = graph.places();
        if places.len() < 2 {
            tracing::warn!(
                places = places.len(),
                "Road graph too small for parcels, starting with none"
            );
            return VillageState::new(start, Vec::new());
        }

        let parcels = (0..parcel_count)
            .map(|_| {
                let address = random_pick(places, rng);
                let mut place = random_pick(places, rng);
                while place == address {
                    place = random_pick(places, rng);
                }
                Parcel::new(place, address)
            })
            .collect();

        VillageState::new(start, parcels)
    }
}
