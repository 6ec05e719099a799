//! Timer state structure and instrumentation counters

use serde::{Deserialize, Serialize};

/// Observable countdown state of a quiz timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    pub seconds_remaining: u32,
    pub active: bool,
    pub question_index: usize,
}

impl TimerState {
    /// Create the initial (inactive) state for a countdown of `max_duration` seconds
    pub fn new(max_duration: u32) -> Self {
        Self {
            seconds_remaining: max_duration,
            active: false,
            question_index: 0,
        }
    }

    /// Check if the countdown is running
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether the countdown has run out while still active
    pub fn is_expired(&self) -> bool {
        self.active && self.seconds_remaining == 0
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new(20)
    }
}

/// Counters describing how a controller has managed its ticking mechanism
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerStats {
    pub mechanisms_created: u64,
    pub mechanisms_released: u64,
    pub ticks: u64,
    pub expiries: u64,
    pub questions_advanced: u64,
}

impl TimerStats {
    /// Number of ticking mechanisms currently alive
    pub fn live_mechanisms(&self) -> u64 {
        self.mechanisms_created - self.mechanisms_released
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_inactive_and_full() {
        let state = TimerState::new(20);
        assert!(!state.is_active());
        assert_eq!(state.seconds_remaining, 20);
        assert_eq!(state.question_index, 0);
        assert!(!state.is_expired());
    }

    #[test]
    fn live_mechanisms_is_created_minus_released() {
        let stats = TimerStats {
            mechanisms_created: 3,
            mechanisms_released: 2,
            ..Default::default()
        };
        assert_eq!(stats.live_mechanisms(), 1);
    }
}
