//! Turn tracking with change notification.

use crate::types::Mark;
use tracing::{debug, instrument};

/// Callback invoked with the newly active mark.
pub type TurnListener = Box<dyn FnMut(Mark)>;

/// Tracks whose mark moves next.
///
/// Every change (toggle or reset) is reported to the installed observer, if
/// any, with the mark that is now active.
pub struct TurnTracker {
    starting: Mark,
    current: Mark,
    observer: Option<TurnListener>,
}

impl TurnTracker {
    /// Creates a tracker whose first and reset mark is `starting`.
    pub fn new(starting: Mark) -> Self {
        Self {
            starting,
            current: starting,
            observer: None,
        }
    }

    /// Installs the change observer, replacing any previous one.
    pub fn set_observer(&mut self, observer: impl FnMut(Mark) + 'static) {
        self.observer = Some(Box::new(observer));
    }

    /// Returns the active mark.
    pub fn current(&self) -> Mark {
        self.current
    }

    /// Returns the configured starting mark.
    pub fn starting_mark(&self) -> Mark {
        self.starting
    }

    /// Hands the turn to the other mark.
    #[instrument(skip(self), fields(from = %self.current))]
    pub fn toggle(&mut self) {
        self.update(self.current.opponent());
    }

    /// Returns to the configured starting mark.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.update(self.starting);
    }

    /// Returns to `mark` for this round only; the configured starting mark
    /// is unchanged.
    #[instrument(skip(self))]
    pub fn reset_to(&mut self, mark: Mark) {
        self.update(mark);
    }

    fn update(&mut self, next: Mark) {
        if let Some(observer) = self.observer.as_mut() {
            observer(next);
        }
        self.current = next;
        debug!(turn = %next, "Turn changed");
    }
}

impl Default for TurnTracker {
    fn default() -> Self {
        Self::new(Mark::X)
    }
}

impl std::fmt::Debug for TurnTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TurnTracker")
            .field("starting", &self.starting)
            .field("current", &self.current)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_toggle_twice_is_identity() {
        let mut turn = TurnTracker::new(Mark::O);
        turn.toggle();
        assert_eq!(turn.current(), Mark::X);
        turn.toggle();
        assert_eq!(turn.current(), Mark::O);
    }

    #[test]
    fn test_reset_returns_to_starting_mark() {
        let mut turn = TurnTracker::new(Mark::O);
        turn.toggle();
        turn.reset();
        assert_eq!(turn.current(), Mark::O);
    }

    #[test]
    fn test_reset_to_keeps_configured_start() {
        let mut turn = TurnTracker::new(Mark::X);
        turn.reset_to(Mark::O);
        assert_eq!(turn.current(), Mark::O);
        assert_eq!(turn.starting_mark(), Mark::X);
        turn.reset();
        assert_eq!(turn.current(), Mark::X);
    }

    #[test]
    fn test_observer_sees_every_change() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut turn = TurnTracker::default();
        turn.set_observer(move |mark| sink.borrow_mut().push(mark));
        turn.toggle();
        turn.toggle();
        turn.reset();

        assert_eq!(*seen.borrow(), vec![Mark::O, Mark::X, Mark::X]);
    }
}
