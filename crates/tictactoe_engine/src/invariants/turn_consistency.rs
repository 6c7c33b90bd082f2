//! Turn consistency invariant: the active mark matches the cell counts.

use super::Invariant;
use crate::session::GameSession;

/// Invariant: with equal counts the starting mark moves next, otherwise the
/// other mark does.
pub struct TurnConsistencyInvariant;

impl Invariant<GameSession> for TurnConsistencyInvariant {
    fn holds(session: &GameSession) -> bool {
        let start = session.starting_mark();
        let ours = session.board().count(start);
        let theirs = session.board().count(start.opponent());
        let expected = if ours == theirs { start } else { start.opponent() };
        session.current_turn() == expected
    }

    fn description() -> &'static str {
        "Active mark matches the marks on the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mark;

    #[test]
    fn test_holds_while_alternating() {
        let mut session = GameSession::new(Mark::X);
        assert!(TurnConsistencyInvariant::holds(&session));
        session.submit_move(2, 0).unwrap();
        assert!(TurnConsistencyInvariant::holds(&session));
        assert_eq!(session.current_turn(), Mark::O);
    }

    #[test]
    fn test_holds_after_reset() {
        let mut session = GameSession::new(Mark::O);
        session.submit_move(2, 0).unwrap();
        session.reset();
        assert!(TurnConsistencyInvariant::holds(&session));
    }
}
