//! Countdown that only (re)creates its ticking mechanism on `active` edges
//!
//! Each event is resolved in three steps:
//!
//! 1. the event itself mutates the state;
//! 2. a change of `question_index` while active resets the countdown;
//! 3. the expiry observer fires at most once per question for a countdown
//!    that reached 0 while active, and its effect is a question advance. It
//!    runs again after each advance until the state settles, so a zero-length
//!    countdown still expires every question exactly once.
//!
//! The mechanism action is derived from the `active` flag alone, so a
//! decrement or a reset never recreates the mechanism.

use crate::state::TimerState;

use super::countdown::{mechanism_for_active, Countdown, Event, Mechanism, Transition};

#[derive(Debug, Clone)]
pub struct FixedCountdown {
    max_duration: u32,
    question_count: usize,
    state: TimerState,
    /// Cleared when an expiry fires, set again by a start, a question change
    /// or a countdown above 0
    expiry_armed: bool,
}

impl FixedCountdown {
    pub fn new(max_duration: u32, question_count: usize) -> Self {
        Self {
            max_duration,
            question_count,
            state: TimerState::new(max_duration),
            expiry_armed: true,
        }
    }

    fn advance(&mut self, transition: &mut Transition) {
        if self.state.question_index + 1 < self.question_count {
            self.state.question_index += 1;
            transition.advances += 1;
        } else {
            self.state.active = false;
            transition.completed = true;
        }
    }

    fn reset_on_question_change(&mut self, previous_index: usize) {
        if self.state.question_index != previous_index && self.state.active {
            self.state.seconds_remaining = self.max_duration;
            self.expiry_armed = true;
        }
    }

    fn observe_expiry(&mut self) -> bool {
        if self.state.seconds_remaining > 0 {
            self.expiry_armed = true;
            return false;
        }

        if self.state.is_expired() && self.expiry_armed {
            self.expiry_armed = false;
            return true;
        }

        false
    }
}

impl Countdown for FixedCountdown {
    const VARIANT: &'static str = "fixed";
    const SUPPORTS_SKIP: bool = false;

    fn apply(&mut self, event: Event) -> Option<Transition> {
        let before = self.state;
        let mut transition = Transition::new(before, Mechanism::Keep);

        match event {
            Event::Start => {
                self.state.active = true;
                self.state.seconds_remaining = self.max_duration;
                self.state.question_index = 0;
                self.expiry_armed = true;
            }
            Event::Tick => {
                if self.state.active && self.state.seconds_remaining > 0 {
                    self.state.seconds_remaining -= 1;
                    transition.ticked = true;
                }
            }
            Event::AdvanceQuestion => self.advance(&mut transition),
            Event::Skip => return None,
            Event::Stop => self.state.active = false,
        }

        self.reset_on_question_change(before.question_index);

        // Each pass advances or deactivates, so this ends within question_count passes
        while self.observe_expiry() {
            transition.expiries += 1;
            let expired_index = self.state.question_index;
            self.advance(&mut transition);
            self.reset_on_question_change(expired_index);
        }

        transition.state = self.state;
        transition.mechanism = mechanism_for_active(before.active, self.state.active);
        Some(transition)
    }

    fn state(&self) -> TimerState {
        self.state
    }

    fn reset(&mut self) {
        self.state = TimerState::new(self.max_duration);
        self.expiry_armed = true;
    }
}
