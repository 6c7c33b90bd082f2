//! Mark balance invariant: the starting mark leads by at most one.

use super::Invariant;
use crate::session::GameSession;

/// Invariant: the starting mark has as many cells as the other mark, or
/// exactly one more.
pub struct MarkBalanceInvariant;

impl Invariant<GameSession> for MarkBalanceInvariant {
    fn holds(session: &GameSession) -> bool {
        let start = session.starting_mark();
        let ours = session.board().count(start);
        let theirs = session.board().count(start.opponent());
        ours == theirs || ours == theirs + 1
    }

    fn description() -> &'static str {
        "Starting mark count equals or leads the other by one"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mark;

    #[test]
    fn test_empty_session_holds() {
        let session = GameSession::default();
        assert!(MarkBalanceInvariant::holds(&session));
    }

    #[test]
    fn test_holds_after_moves() {
        let mut session = GameSession::new(Mark::O);
        session.submit_move(0, 0).unwrap();
        assert!(MarkBalanceInvariant::holds(&session));
        session.submit_move(1, 1).unwrap();
        assert!(MarkBalanceInvariant::holds(&session));
    }
}
