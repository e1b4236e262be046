//! Parcel Types
//!
//! Parcels and serializable snapshots of the robot's world.

use serde::{Deserialize, Serialize};

/// An item waiting to be carried from `place` to `address`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Parcel {
    /// Where the parcel currently is
    pub place: String,
    /// Where the parcel has to go
    pub address: String,
}

impl Parcel {
    pub fn new(place: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            place: place.into(),
            address: address.into(),
        }
    }

    /// A parcel sitting at its own address counts as delivered.
    pub fn is_delivered(&self) -> bool {
        self.place == self.address
    }

    /// The same parcel moved to another place.
    pub fn carried_to(&self, place: impl Into<String>) -> Self {
        Self {
            place: place.into(),
            address: self.address.clone(),
        }
    }
}

/// Point-in-time view of the robot and the parcels still in play
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub place: String,
    #[serde(default)]
    pub parcels: Vec<Parcel>,
}

impl StateSnapshot {
    pub fn new(place: impl Into<String>, parcels: Vec<Parcel>) -> Self {
        Self {
            place: place.into(),
            parcels,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parcel_delivery_check() {
        let pending = Parcel::new("Post Office", "Alice's House");
        assert!(!pending.is_delivered());

        let arrived = pending.carried_to("Alice's House");
        assert!(arrived.is_delivered());
        assert_eq!(arrived.address, "Alice's House");
    }

    #[test]
    fn test_snapshot_serialization() {
        let snapshot = StateSnapshot::new("Farm", vec![Parcel::new("Shop", "Cabin")]);

        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"place\":\"Farm\""));

        let parsed: StateSnapshot = serde_json::from_str(r#"{"place":"Cabin"}"#).unwrap();
        assert!(parsed.parcels.is_empty());
    }
}
