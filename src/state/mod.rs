//! State management module
//!
//! This module contains the timer state, the question set and the demo shell
//! state hosting both timer variants.

pub mod app_state;
pub mod quiz;
pub mod timer_state;

// Re-export main types
pub use app_state::AppState;
pub use quiz::{default_questions, load_questions_from_json, Question};
pub use timer_state::{TimerState, TimerStats};
