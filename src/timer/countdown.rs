//! Countdown transition model shared by both timer variants
//!
//! A countdown is a plain state machine: it receives an [`Event`], mutates its
//! [`TimerState`] and reports what the owning controller has to do with its
//! ticking mechanism. It never touches the mechanism itself.

use crate::state::TimerState;

/// Inputs accepted by a countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Start,
    Tick,
    AdvanceQuestion,
    Skip,
    Stop,
}

/// What the controller must do with its ticking mechanism after a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mechanism {
    /// Leave the current mechanism (or its absence) untouched
    Keep,
    /// Create a mechanism; any existing one is released first
    Spawn,
    /// Release the current mechanism
    Release,
    /// Release the current mechanism and create a fresh one
    Recreate,
}

/// Result of applying one event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub state: TimerState,
    pub mechanism: Mechanism,
    /// A decrement was applied
    pub ticked: bool,
    /// Number of expiry transitions fired by this event
    pub expiries: u32,
    /// Number of question advances performed by this event
    pub advances: u32,
    /// The last question was passed and the quiz is over
    pub completed: bool,
}

impl Transition {
    pub(crate) fn new(state: TimerState, mechanism: Mechanism) -> Self {
        Self {
            state,
            mechanism,
            ticked: false,
            expiries: 0,
            advances: 0,
            completed: false,
        }
    }
}

/// A countdown state machine driven by a [`super::TimerController`]
pub trait Countdown: Send + 'static {
    /// Short name used in logs and API responses
    const VARIANT: &'static str;

    /// Whether a manual [`Event::Skip`] is accepted
    const SUPPORTS_SKIP: bool;

    /// Apply an event. Returns `None` if the event is not supported.
    fn apply(&mut self, event: Event) -> Option<Transition>;

    /// Current observable state
    fn state(&self) -> TimerState;

    /// Return to the initial state
    fn reset(&mut self);
}

/// Mechanism action implied by the `active` flag changing, and nothing else
pub(crate) fn mechanism_for_active(before: bool, after: bool) -> Mechanism {
    match (before, after) {
        (false, true) => Mechanism::Spawn,
        (true, false) => Mechanism::Release,
        _ => Mechanism::Keep,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_active_edges_touch_the_mechanism() {
        assert_eq!(mechanism_for_active(false, true), Mechanism::Spawn);
        assert_eq!(mechanism_for_active(true, false), Mechanism::Release);
        assert_eq!(mechanism_for_active(true, true), Mechanism::Keep);
        assert_eq!(mechanism_for_active(false, false), Mechanism::Keep);
    }
}
