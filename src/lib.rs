//! Quiz Timer - a quiz countdown server comparing two timer implementations
//!
//! The fixed timer creates its ticking mechanism only when the quiz becomes
//! active and keeps it for the whole quiz. The buggy timer recreates it on
//! every countdown change. Both are served side by side behind a toggle.

pub mod config;
pub mod state;
pub mod timer;
pub mod api;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use state::{AppState, TimerState, TimerStats};
pub use timer::{BuggyTimer, FixedTimer, QuizTimer, TimerController};
pub use api::create_router;
pub use utils::signals::shutdown_signal;
