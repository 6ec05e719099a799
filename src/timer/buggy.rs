//! Countdown that ties mechanism creation to the countdown value
//!
//! Kept for comparison with [`super::FixedCountdown`]. Every event that changes
//! `seconds_remaining` or `active` asks for the mechanism to be recreated, so a
//! running quiz creates one mechanism per tick. Expiry is handled inline: a
//! tick at 1 second advances the question and jumps straight back to the full
//! duration, so 0 is never observed.

use crate::state::TimerState;

use super::countdown::{Countdown, Event, Mechanism, Transition};

#[derive(Debug, Clone)]
pub struct BuggyCountdown {
    max_duration: u32,
    question_count: usize,
    state: TimerState,
}

impl BuggyCountdown {
    pub fn new(max_duration: u32, question_count: usize) -> Self {
        Self {
            max_duration,
            question_count,
            state: TimerState::new(max_duration),
        }
    }

    fn next_question(&mut self, transition: &mut Transition) {
        if self.state.question_index + 1 < self.question_count {
            self.state.question_index += 1;
            self.state.seconds_remaining = self.max_duration;
            transition.advances += 1;
        } else {
            self.state.active = false;
            transition.completed = true;
        }
    }
}

impl Countdown for BuggyCountdown {
    const VARIANT: &'static str = "buggy";
    const SUPPORTS_SKIP: bool = true;

    fn apply(&mut self, event: Event) -> Option<Transition> {
        let before = self.state;
        let mut transition = Transition::new(before, Mechanism::Keep);

        match event {
            Event::Start => {
                self.state.active = true;
                self.state.seconds_remaining = self.max_duration;
                self.state.question_index = 0;
            }
            Event::Tick if self.state.active => {
                transition.ticked = true;
                if self.state.seconds_remaining <= 1 {
                    transition.expiries += 1;
                    self.next_question(&mut transition);
                    self.state.seconds_remaining = self.max_duration;
                } else {
                    self.state.seconds_remaining -= 1;
                }
            }
            Event::Tick => {}
            Event::AdvanceQuestion | Event::Skip => self.next_question(&mut transition),
            Event::Stop => self.state.active = false,
        }

        let value_changed = before.seconds_remaining != self.state.seconds_remaining
            || before.active != self.state.active;

        transition.mechanism = match (value_changed, self.state.active && self.state.seconds_remaining > 0) {
            (false, _) => Mechanism::Keep,
            (true, true) => Mechanism::Recreate,
            (true, false) => Mechanism::Release,
        };
        transition.state = self.state;
        Some(transition)
    }

    fn state(&self) -> TimerState {
        self.state
    }

    fn reset(&mut self) {
        self.state = TimerState::new(self.max_duration);
    }
}
