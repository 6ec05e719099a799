//! Quiz timer module
//!
//! Countdown state machines and the controller that ties them to a ticking
//! mechanism.

pub mod buggy;
pub mod controller;
pub mod countdown;
pub mod fixed;

use tokio::sync::watch;

use crate::state::{TimerState, TimerStats};

// Re-export main types
pub use buggy::BuggyCountdown;
pub use controller::{BuggyTimer, FixedTimer, TimerController};
pub use countdown::{Countdown, Event, Mechanism, Transition};
pub use fixed::FixedCountdown;

/// Object-safe view of a timer controller, used by the demo shell to switch
/// between variants at runtime
pub trait QuizTimer: Send + Sync {
    fn variant(&self) -> &'static str;
    fn supports_skip(&self) -> bool;
    fn start(&self) -> Result<TimerState, String>;
    fn stop(&self) -> Result<TimerState, String>;
    fn answer(&self, option: &str) -> Result<TimerState, String>;
    fn skip(&self) -> Result<TimerState, String>;
    fn teardown(&self) -> Result<TimerState, String>;
    fn snapshot(&self) -> Result<(TimerState, TimerStats), String>;
    fn subscribe(&self) -> watch::Receiver<TimerState>;
}

impl<C: Countdown> QuizTimer for TimerController<C> {
    fn variant(&self) -> &'static str {
        TimerController::variant(self)
    }

    fn supports_skip(&self) -> bool {
        C::SUPPORTS_SKIP
    }

    fn start(&self) -> Result<TimerState, String> {
        TimerController::start(self)
    }

    fn stop(&self) -> Result<TimerState, String> {
        TimerController::stop(self)
    }

    fn answer(&self, option: &str) -> Result<TimerState, String> {
        TimerController::answer(self, option)
    }

    fn skip(&self) -> Result<TimerState, String> {
        TimerController::skip(self)
    }

    fn teardown(&self) -> Result<TimerState, String> {
        TimerController::teardown(self)
    }

    fn snapshot(&self) -> Result<(TimerState, TimerStats), String> {
        TimerController::snapshot(self)
    }

    fn subscribe(&self) -> watch::Receiver<TimerState> {
        TimerController::subscribe(self)
    }
}
