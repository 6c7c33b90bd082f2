//! Cross-round score keeping.

use crate::session::GameEnd;
use crate::types::Mark;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::{info, instrument};

/// Win counts per mark, accumulated over many rounds.
///
/// Counts only ever grow. The ledger never sees a board; it is fed the
/// [`GameEnd`] of each finished round.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ScoreLedger {
    /// Rounds won by X.
    x_wins: u32,
    /// Rounds won by O.
    o_wins: u32,
    /// Rounds without a winner.
    draws: u32,
}

impl ScoreLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the result of a finished round.
    #[instrument(skip(self))]
    pub fn record(&mut self, end: GameEnd) {
        match end {
            GameEnd::Winner(Mark::X) => self.x_wins += 1,
            GameEnd::Winner(Mark::O) => self.o_wins += 1,
            GameEnd::NoWinner => self.draws += 1,
        }
        info!(x = self.x_wins, o = self.o_wins, draws = self.draws, "Score updated");
    }

    /// Returns the number of rounds won by `mark`.
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
        }
    }

    /// Returns the number of rounds recorded.
    pub fn rounds(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }

    /// Returns the mark with more wins, or `None` when level.
    pub fn leader(&self) -> Option<Mark> {
        match self.x_wins.cmp(&self.o_wins) {
            Ordering::Greater => Some(Mark::X),
            Ordering::Less => Some(Mark::O),
            Ordering::Equal => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ledger_is_zero() {
        let ledger = ScoreLedger::new();
        assert_eq!(ledger.wins(Mark::X), 0);
        assert_eq!(ledger.wins(Mark::O), 0);
        assert_eq!(ledger.rounds(), 0);
        assert_eq!(ledger.leader(), None);
    }

    #[test]
    fn test_record_results() {
        let mut ledger = ScoreLedger::new();
        ledger.record(GameEnd::Winner(Mark::O));
        ledger.record(GameEnd::Winner(Mark::O));
        ledger.record(GameEnd::Winner(Mark::X));
        ledger.record(GameEnd::NoWinner);

        assert_eq!(ledger.wins(Mark::O), 2);
        assert_eq!(ledger.wins(Mark::X), 1);
        assert_eq!(*ledger.draws(), 1);
        assert_eq!(ledger.rounds(), 4);
        assert_eq!(ledger.leader(), Some(Mark::O));
    }

    #[test]
    fn test_draw_does_not_change_wins() {
        let mut ledger = ScoreLedger::new();
        ledger.record(GameEnd::NoWinner);
        assert_eq!(ledger.wins(Mark::X), 0);
        assert_eq!(ledger.wins(Mark::O), 0);
    }

    #[test]
    fn test_serializes_counts() {
        let mut ledger = ScoreLedger::new();
        ledger.record(GameEnd::Winner(Mark::X));
        let json = serde_json::to_value(&ledger).unwrap();
        assert_eq!(json, serde_json::json!({ "x_wins": 1, "o_wins": 0, "draws": 0 }));
    }
}
