//! Quiz progress background task

use tokio::sync::watch;
use tracing::{debug, info};

use crate::state::TimerState;

/// Background task that logs question transitions of one timer until the
/// timer is dropped
pub async fn quiz_progress_task(
    variant: &'static str,
    question_count: usize,
    mut updates: watch::Receiver<TimerState>,
) {
    info!("Starting quiz progress task for {} timer", variant);

    let mut previous = *updates.borrow_and_update();

    while updates.changed().await.is_ok() {
        let current = *updates.borrow_and_update();

        if current.active && !previous.active {
            info!("[{}] Quiz started", variant);
        }

        if current.active && (current.question_index != previous.question_index || !previous.active) {
            info!(
                "[{}] Question {} of {}",
                variant,
                current.question_index + 1,
                question_count
            );
        } else if current.seconds_remaining != previous.seconds_remaining {
            debug!("[{}] Time left: {}s", variant, current.seconds_remaining);
        }

        if previous.active && !current.active {
            info!("[{}] Quiz no longer active", variant);
        }

        previous = current;
    }

    debug!("Quiz progress task for {} timer finished", variant);
}
