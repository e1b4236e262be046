//! Run Reports
//!
//! Summaries produced at the end of a run and when comparing robots.

use serde::{Deserialize, Serialize};

use crate::StateSnapshot;

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunOutcome {
    /// Every parcel reached its address
    Completed,
    /// The configured turn limit was hit first
    TurnLimitReached,
}

/// Result of a single robot run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    /// Name of the robot that ran
    pub robot: String,
    /// Turns taken
    pub turns: u64,
    pub outcome: RunOutcome,
    /// Parcels delivered over the whole run
    pub delivered: usize,
    /// State the robot was left in
    pub final_state: StateSnapshot,
}

impl RunReport {
    pub fn is_complete(&self) -> bool {
        self.outcome == RunOutcome::Completed
    }

    pub fn remaining(&self) -> usize {
        self.final_state.parcels.len()
    }
}

/// Aggregate over many runs of one robot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RobotStats {
    pub robot: String,
    pub runs: usize,
    pub average_turns: f64,
    pub min_turns: u64,
    pub max_turns: u64,
    /// Runs that stopped at the turn limit
    #[serde(default)]
    pub unfinished: usize,
}

impl RobotStats {
    /// Summarize the turn counts of a set of runs.
    pub fn from_reports(robot: impl Into<String>, reports: &[RunReport]) -> Self {
        let turns: Vec<u64> = reports.iter().map(|r| r.turns).collect();
        let total: u64 = turns.iter().sum();
        let average_turns = if turns.is_empty() {
            0.0
        } else {
            total as f64 / turns.len() as f64
        };

        Self {
            robot: robot.into(),
            runs: reports.len(),
            average_turns,
            min_turns: turns.iter().copied().min().unwrap_or(0),
            max_turns: turns.iter().copied().max().unwrap_or(0),
            unfinished: reports.iter().filter(|r| !r.is_complete()).count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Parcel;

    fn report(turns: u64, outcome: RunOutcome, left: usize) -> RunReport {
        RunReport {
            robot: "route".into(),
            turns,
            outcome,
            delivered: 5 - left,
            final_state: StateSnapshot::new(
                "Post Office",
                (0..left).map(|_| Parcel::new("Farm", "Shop")).collect(),
            ),
        }
    }

    #[test]
    fn test_stats_from_reports() {
        let reports = vec![
            report(10, RunOutcome::Completed, 0),
            report(20, RunOutcome::Completed, 0),
            report(30, RunOutcome::TurnLimitReached, 2),
        ];

        let stats = RobotStats::from_reports("route", &reports);
        assert_eq!(stats.runs, 3);
        assert_eq!(stats.average_turns, 20.0);
        assert_eq!(stats.min_turns, 10);
        assert_eq!(stats.max_turns, 30);
        assert_eq!(stats.unfinished, 1);
        assert_eq!(reports[2].remaining(), 2);
    }

    #[test]
    fn test_stats_from_no_reports() {
        let stats = RobotStats::from_reports("random", &[]);
        assert_eq!(stats.runs, 0);
        assert_eq!(stats.average_turns, 0.0);
        assert_eq!(stats.min_turns, 0);
    }

    #[test]
    fn test_outcome_serialization() {
        assert_eq!(
            serde_json::to_string(&RunOutcome::TurnLimitReached).unwrap(),
            r#""turn_limit_reached""#
        );
    }
}
