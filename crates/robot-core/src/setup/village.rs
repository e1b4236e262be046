//! Village Setup
//!
//! The village road map and the known-good mail route through it.

use crate::graph::RoadGraph;

/// Where the robot starts each day
pub const START_PLACE: &str = "Post Office";

/// Every road in the village, one `"From-To"` descriptor each
pub const VILLAGE_ROADS: &[&str] = &[
    "Alice's House-Bob's House",
    "Alice's House-Cabin",
    "Alice's House-Post Office",
    "Bob's House-Town Hall",
    "Daria's House-Ernie's House",
    "Daria's House-Town Hall",
    "Ernie's House-Grete's House",
    "Grete's House-Farm",
    "Grete's House-Shop",
    "Marketplace-Farm",
    "Marketplace-Post Office",
    "Marketplace-Shop",
    "Marketplace-Town Hall",
    "Shop-Town Hall",
];

/// A round trip from the post office that passes every location
pub const MAIL_ROUTE: &[&str] = &[
    "Alice's House",
    "Cabin",
    "Alice's House",
    "Bob's House",
    "Town Hall",
    "Daria's House",
    "Ernie's House",
    "Grete's House",
    "Shop",
    "Grete's House",
    "Farm",
    "Marketplace",
    "Post Office",
];

/// Build the road graph for the built-in village.
pub fn village_graph() -> RoadGraph {
    RoadGraph::build(VILLAGE_ROADS)
}

/// The mail route as owned location names.
pub fn mail_route() -> Vec<String> {
    MAIL_ROUTE.iter().map(|stop| stop.to_string()).collect()
}
