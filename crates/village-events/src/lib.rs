//! Shared data types for the village mail robot.
//!
//! This crate contains pure data structures with no simulation logic:
//! parcels, state snapshots, journal entries and run reports. It is a
//! dependency for the simulation core and anything that reads its output.

pub mod journal;
pub mod parcel;
pub mod report;

// Re-export parcel types
pub use parcel::{Parcel, StateSnapshot};

// Re-export journal types
pub use journal::{JournalEntry, TurnRecord};

// Re-export report types
pub use report::{RobotStats, RunOutcome, RunReport};
