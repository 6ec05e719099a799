//! Background tasks module
//!
//! This module contains the ticking mechanism behind the quiz timers and the
//! tasks that run alongside the HTTP server.

pub mod quiz_progress;
pub mod ticker;

// Re-export main functions
pub use quiz_progress::quiz_progress_task;
pub use ticker::{spawn_ticker, TickerHandle};
