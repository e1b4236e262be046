//! Road Graph
//!
//! Undirected adjacency between named village locations, built from
//! `"From-To"` edge descriptors.

use std::collections::HashMap;

/// Separator between the two location names of an edge descriptor
pub const EDGE_SEPARATOR: char = '-';

/// Errors from strict edge parsing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("road list is empty")]
    NoRoads,
    #[error("road {0:?} has no '-' separator")]
    MissingSeparator(String),
    #[error("road {0:?} names more than two places")]
    TooManyPlaces(String),
    #[error("road {0:?} has an empty place name")]
    EmptyPlace(String),
}

/// Symmetric adjacency mapping between locations.
///
/// Adjacency lists keep insertion order and keep duplicates when the same
/// road is listed twice. `places()` follows the order in which each location
/// first appeared in the edge list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoadGraph {
    adjacency: HashMap<String, Vec<String>>,
    places: Vec<String>,
}

impl RoadGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from edge descriptors without validating them.
    ///
    /// A descriptor with no separator yields an empty second name, and any
    /// text after a second separator is ignored.
    pub fn build<I, S>(edges: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut graph = Self::new();
        for edge in edges {
            let mut names = edge.as_ref().split(EDGE_SEPARATOR);
            let from = names.next().unwrap_or_default();
            let to = names.next().unwrap_or_default();
            graph.add_road(from, to);
        }
        graph
    }

    /// Build a graph, rejecting malformed descriptors.
    pub fn try_build<I, S>(edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut graph = Self::new();
        for edge in edges {
            let (from, to) = parse_edge(edge.as_ref())?;
            graph.add_road(from, to);
        }
        if graph.is_empty() {
            return Err(GraphError::NoRoads);
        }
        Ok(graph)
    }

    /// Record a road in both directions.
    pub fn add_road(&mut self, from: &str, to: &str) {
        self.add_edge(from, to);
        self.add_edge(to, from);
    }

    fn add_edge(&mut self, from: &str, to: &str) {
        match self.adjacency.get_mut(from) {
            Some(neighbors) => neighbors.push(to.to_string()),
            None => {
                self.places.push(from.to_string());
                self.adjacency.insert(from.to_string(), vec![to.to_string()]);
            }
        }
    }

    /// Locations reachable in one move from `place`. Unknown places have none.
    pub fn neighbors(&self, place: &str) -> &[String] {
        self.adjacency.get(place).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_adjacent(&self, from: &str, to: &str) -> bool {
        self.neighbors(from).iter().any(|n| n == to)
    }

    pub fn contains(&self, place: &str) -> bool {
        self.adjacency.contains_key(place)
    }

    /// All known locations in first-appearance order.
    pub fn places(&self) -> &[String] {
        &self.places
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}

fn parse_edge(edge: &str) -> Result<(&str, &str), GraphError> {
    let mut names = edge.split(EDGE_SEPARATOR);
    let from = names.next().unwrap_or_default();
    let to = names
        .next()
        .ok_or_else(|| GraphError::MissingSeparator(edge.to_string()))?;
    if names.next().is_some() {
        return Err(GraphError::TooManyPlaces(edge.to_string()));
    }
    if from.trim().is_empty() || to.trim().is_empty() {
        return Err(GraphError::EmptyPlace(edge.to_string()));
    }
    Ok((from, to))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::VILLAGE_ROADS;

    #[test]
    fn test_village_graph() {
        let graph = RoadGraph::build(VILLAGE_ROADS);

        assert_eq!(graph.len(), 11);
        assert_eq!(graph.places()[0], "Alice's House");
        assert_eq!(
            graph.neighbors("Alice's House"),
            ["Bob's House", "Cabin", "Post Office"]
        );
        assert_eq!(graph.neighbors("Post Office"), ["Alice's House", "Marketplace"]);
    }

    #[test]
    fn test_every_road_is_symmetric() {
        let graph = RoadGraph::build(VILLAGE_ROADS);

        for road in VILLAGE_ROADS {
            let (from, to) = road.split_once(EDGE_SEPARATOR).unwrap();
            assert!(graph.is_adjacent(from, to), "{} should reach {}", from, to);
            assert!(graph.is_adjacent(to, from), "{} should reach {}", to, from);
        }
    }

    #[test]
    fn test_duplicate_roads_are_kept() {
        let graph = RoadGraph::build(["Farm-Shop", "Farm-Shop"]);
        assert_eq!(graph.neighbors("Farm"), ["Shop", "Shop"]);
        assert_eq!(graph.neighbors("Shop"), ["Farm", "Farm"]);
        assert_eq!(graph.len(), 2);
    }

    #[test]
    fn test_unknown_place_has_no_neighbors() {
        let graph = RoadGraph::build(VILLAGE_ROADS);
        assert!(graph.neighbors("Castle").is_empty());
        assert!(!graph.contains("Castle"));
        assert!(!graph.is_adjacent("Post Office", "Farm"));
    }

    #[test]
    fn test_malformed_road_is_not_validated() {
        let graph = RoadGraph::build(["Farm", "Shop-Cabin-Mill"]);

        assert_eq!(graph.neighbors("Farm"), [""]);
        assert_eq!(graph.neighbors(""), ["Farm"]);
        assert_eq!(graph.neighbors("Shop"), ["Cabin"]);
        assert!(!graph.contains("Mill"));
    }

    #[test]
    fn test_strict_build_rejects_malformed_roads() {
        assert_eq!(
            RoadGraph::try_build(["Farm"]),
            Err(GraphError::MissingSeparator("Farm".into()))
        );
        assert_eq!(
            RoadGraph::try_build(["Farm-"]),
            Err(GraphError::EmptyPlace("Farm-".into()))
        );
        assert_eq!(
            RoadGraph::try_build(["A-B-C"]),
            Err(GraphError::TooManyPlaces("A-B-C".into()))
        );
        assert_eq!(
            RoadGraph::try_build(Vec::<String>::new()),
            Err(GraphError::NoRoads)
        );
    }

    #[test]
    fn test_strict_build_matches_lenient_on_good_input() {
        let strict = RoadGraph::try_build(VILLAGE_ROADS).unwrap();
        assert_eq!(strict, RoadGraph::build(VILLAGE_ROADS));
    }
}
