//! Village State
//!
//! Immutable snapshot of where the robot is and which parcels are still
//! waiting. Every move produces a fresh state.

use village_events::{Parcel, StateSnapshot};

use crate::graph::RoadGraph;

/// The robot's position plus the parcels still in play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VillageState {
    place: String,
    parcels: Vec<Parcel>,
}

impl VillageState {
    pub fn new(place: impl Into<String>, parcels: Vec<Parcel>) -> Self {
        Self {
            place: place.into(),
            parcels,
        }
    }

    pub fn place(&self) -> &str {
        &self.place
    }

    pub fn parcels(&self) -> &[Parcel] {
        &self.parcels
    }

    /// True once every parcel has been delivered.
    pub fn is_done(&self) -> bool {
        self.parcels.is_empty()
    }

    /// Move the robot to `destination`, carrying the parcels at its place.
    ///
    /// When there is no road from the current place to `destination` the
    /// move is ignored and an identical state comes back.
    pub fn move_to(&self, graph: &RoadGraph, destination: &str) -> VillageState {
        if !graph.is_adjacent(&self.place, destination) {
            return self.clone();
        }

        let parcels = self
            .parcels
            .iter()
            .map(|p| {
                if p.place == self.place {
                    p.carried_to(destination)
                } else {
                    p.clone()
                }
            })
            .filter(|p| !p.is_delivered())
            .collect();

        VillageState::new(destination, parcels)
    }

    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot::new(self.place.clone(), self.parcels.clone())
    }
}

impl From<StateSnapshot> for VillageState {
    fn from(snapshot: StateSnapshot) -> Self {
        Self::new(snapshot.place, snapshot.parcels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::village_graph;

    fn first_state() -> VillageState {
        VillageState::new(
            "Post Office",
            vec![Parcel::new("Post Office", "Alice's House")],
        )
    }

    #[test]
    fn test_single_hop_delivery() {
        let graph = village_graph();
        let next = first_state().move_to(&graph, "Alice's House");

        assert_eq!(next.place(), "Alice's House");
        assert!(next.parcels().is_empty());
        assert!(next.is_done());
    }

    #[test]
    fn test_move_without_road_is_ignored() {
        let graph = village_graph();
        let first = first_state();

        let next = first.move_to(&graph, "Farm");
        assert_eq!(next, first);
        assert_eq!(next.place(), "Post Office");
        assert_eq!(next.parcels().len(), 1);
    }

    #[test]
    fn test_move_to_unknown_place_is_ignored() {
        let graph = village_graph();
        let first = first_state();
        assert_eq!(first.move_to(&graph, "Castle"), first);

        let lost = VillageState::new("Castle", vec![Parcel::new("Farm", "Shop")]);
        assert_eq!(lost.move_to(&graph, "Farm"), lost);
    }

    #[test]
    fn test_original_state_is_untouched() {
        let graph = village_graph();
        let first = first_state();
        let _ = first.move_to(&graph, "Alice's House");

        assert_eq!(first.place(), "Post Office");
        assert_eq!(first.parcels().len(), 1);
    }

    #[test]
    fn test_only_parcels_at_robot_are_carried() {
        let graph = village_graph();
        let state = VillageState::new(
            "Post Office",
            vec![
                Parcel::new("Post Office", "Farm"),
                Parcel::new("Shop", "Cabin"),
                Parcel::new("Post Office", "Marketplace"),
                Parcel::new("Town Hall", "Post Office"),
            ],
        );

        let next = state.move_to(&graph, "Marketplace");
        assert_eq!(next.place(), "Marketplace");
        assert_eq!(
            next.parcels(),
            [
                Parcel::new("Marketplace", "Farm"),
                Parcel::new("Shop", "Cabin"),
                Parcel::new("Town Hall", "Post Office"),
            ]
        );
    }

    #[test]
    fn test_parcels_are_conserved_across_moves() {
        let graph = village_graph();
        let mut state = VillageState::new(
            "Post Office",
            vec![
                Parcel::new("Post Office", "Alice's House"),
                Parcel::new("Post Office", "Cabin"),
                Parcel::new("Cabin", "Bob's House"),
                Parcel::new("Farm", "Shop"),
            ],
        );

        for stop in ["Alice's House", "Cabin", "Alice's House", "Bob's House", "Farm"] {
            let next = state.move_to(&graph, stop);
            assert!(next.parcels().len() <= state.parcels().len());
            assert!(next.parcels().iter().all(|p| !p.is_delivered()));
            if graph.is_adjacent(state.place(), stop) {
                assert_eq!(next.place(), stop);
            } else {
                assert_eq!(next, state);
            }
            state = next;
        }

        // Farm is not adjacent to Bob's House, so the last parcel never moved
        assert_eq!(state.place(), "Bob's House");
        assert_eq!(state.parcels(), [Parcel::new("Farm", "Shop")]);
    }

    #[test]
    fn test_snapshot_round_trip() {
        let state = first_state();
        let restored = VillageState::from(state.snapshot());
        assert_eq!(restored, state);
    }
}
