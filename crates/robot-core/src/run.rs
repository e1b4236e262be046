//! Simulation Loop
//!
//! Drives a robot turn by turn until every parcel is delivered, or until an
//! optional turn limit runs out.

use village_events::{JournalEntry, RunOutcome, RunReport, TurnRecord};

use crate::graph::RoadGraph;
use crate::journal::{JournalError, TurnJournal};
use crate::robots::Robot;
use crate::state::VillageState;

/// Knobs for a single run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Stop after this many turns. `None` runs until the parcels are gone,
    /// which never happens for a robot that cannot deliver them.
    pub max_turns: Option<u64>,
}

impl RunOptions {
    pub fn unlimited() -> Self {
        Self::default()
    }

    pub fn with_max_turns(max_turns: u64) -> Self {
        Self {
            max_turns: Some(max_turns),
        }
    }
}

/// Run `robot` from `state`, writing one journal entry per turn.
pub fn run_robot<R: Robot>(
    graph: &RoadGraph,
    state: VillageState,
    robot: &mut R,
    memory: R::Memory,
    options: &RunOptions,
    journal: &mut TurnJournal,
) -> Result<RunReport, JournalError> {
    let starting_parcels = state.parcels().len();
    let mut state = state;
    let mut memory = memory;

    tracing::debug!(
        robot = robot.name(),
        place = state.place(),
        parcels = starting_parcels,
        max_turns = ?options.max_turns,
        "Starting run"
    );

    let mut turn: u64 = 0;
    let outcome = loop {
        if state.is_done() {
            journal.record(&JournalEntry::Done { turns: turn })?;
            break RunOutcome::Completed;
        }
        if options.max_turns.is_some_and(|limit| turn >= limit) {
            journal.record(&JournalEntry::Stopped {
                turns: turn,
                remaining: state.parcels().len(),
            })?;
            break RunOutcome::TurnLimitReached;
        }

        let action = robot.decide(graph, &state, memory);
        let next = state.move_to(graph, &action.direction);
        let record = TurnRecord {
            turn,
            from: state.place().to_string(),
            moved: graph.is_adjacent(state.place(), &action.direction),
            delivered: state.parcels().len() - next.parcels().len(),
            remaining: next.parcels().len(),
            direction: action.direction,
        };

        state = next;
        memory = action.memory;
        journal.record(&JournalEntry::Moved(record))?;
        turn += 1;
    };
    journal.flush()?;

    Ok(RunReport {
        robot: robot.name().to_string(),
        turns: turn,
        outcome,
        delivered: starting_parcels - state.parcels().len(),
        final_state: state.snapshot(),
    })
}
