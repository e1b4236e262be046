//! Journal Entry Types
//!
//! One entry per turn plus one entry when a run ends. The text rendering of
//! each entry is the line the robot prints while it works.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What happened during a single turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Zero-based turn index
    pub turn: u64,
    /// Where the robot stood before the move
    pub from: String,
    /// Where the robot asked to go
    pub direction: String,
    /// False when the move was not along a road and the state stayed put
    pub moved: bool,
    /// Parcels delivered by this move
    pub delivered: usize,
    /// Parcels still in play after the move
    pub remaining: usize,
}

/// A line in the run journal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum JournalEntry {
    /// The robot took a turn
    Moved(TurnRecord),
    /// Every parcel was delivered
    Done { turns: u64 },
    /// The turn limit ran out first
    Stopped { turns: u64, remaining: usize },
}

impl fmt::Display for JournalEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JournalEntry::Moved(record) => write!(f, "Moved to {}", record.direction),
            JournalEntry::Done { turns } => write!(f, "Done in {} turns", turns),
            JournalEntry::Stopped { turns, remaining } => write!(
                f,
                "Stopped after {} turns with {} parcels undelivered",
                turns, remaining
            ),
        }
    }
}
