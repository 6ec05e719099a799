//! Main application state management

use std::{
    sync::Mutex,
    time::{Duration, Instant},
};
use chrono::{DateTime, Utc};
use tracing::info;

use super::{Question, TimerState};
use crate::timer::{BuggyTimer, FixedTimer, QuizTimer};

/// Demo shell hosting both timer variants and the toggle between them
pub struct AppState {
    /// Question set shared by both variants
    pub questions: Vec<Question>,
    pub fixed: FixedTimer,
    pub buggy: BuggyTimer,
    /// Which variant is shown; held for the whole of a toggle
    show_buggy: Mutex<bool>,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    pub last_action: Mutex<Option<String>>,
    pub last_action_time: Mutex<Option<DateTime<Utc>>>,
}

impl AppState {
    /// Create a new AppState. Must be called inside a tokio runtime.
    pub fn new(
        port: u16,
        host: String,
        questions: Vec<Question>,
        max_duration: u32,
        tick_period: Duration,
        show_buggy: bool,
    ) -> Self {
        let count = questions.len();

        Self {
            fixed: FixedTimer::fixed(max_duration, count, tick_period),
            buggy: BuggyTimer::buggy(max_duration, count, tick_period),
            questions,
            show_buggy: Mutex::new(show_buggy),
            start_time: Instant::now(),
            port,
            host,
            last_action: Mutex::new(None),
            last_action_time: Mutex::new(None),
        }
    }

    /// The timer variant currently shown
    pub fn current(&self) -> &dyn QuizTimer {
        let show_buggy = match self.show_buggy.lock() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        };
        self.timer_for(show_buggy)
    }

    fn timer_for(&self, show_buggy: bool) -> &dyn QuizTimer {
        if show_buggy {
            &self.buggy
        } else {
            &self.fixed
        }
    }

    /// Both variants, fixed first
    pub fn timers(&self) -> [&dyn QuizTimer; 2] {
        [&self.fixed, &self.buggy]
    }

    /// Tear down the shown variant and switch to the other one.
    /// Returns the name of the variant now shown.
    pub fn toggle(&self) -> Result<&'static str, String> {
        let mut show_buggy = self.show_buggy.lock()
            .map_err(|e| format!("Failed to lock shown variant: {}", e))?;

        let previous = self.timer_for(*show_buggy);
        previous.teardown()?;
        *show_buggy = !*show_buggy;

        let shown = self.timer_for(*show_buggy).variant();
        drop(show_buggy);

        info!("Switched from {} to {} timer", previous.variant(), shown);
        self.record_action("toggle");
        Ok(shown)
    }

    /// Question shown for a given timer state
    pub fn question_for(&self, timer: &TimerState) -> Option<&Question> {
        self.questions.get(timer.question_index)
    }

    /// Remember the last accepted action and when it happened
    pub fn record_action(&self, action: &str) {
        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }
}
