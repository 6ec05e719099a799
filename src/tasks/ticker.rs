//! Periodic ticking mechanism backing a quiz timer

use std::time::Duration;
use tokio::{
    task::JoinHandle,
    time::{interval_at, Instant, MissedTickBehavior},
};
use tracing::debug;

/// Owned handle to a running ticker. Dropping it aborts the ticker task.
#[derive(Debug)]
pub struct TickerHandle {
    task: JoinHandle<()>,
}

#[cfg(test)]
impl TickerHandle {
    fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Spawn a task calling `on_tick` once per `period`, first one period from now.
///
/// The task ends as soon as `on_tick` returns `false`.
pub fn spawn_ticker<F>(period: Duration, mut on_tick: F) -> TickerHandle
where
    F: FnMut() -> bool + Send + 'static,
{
    let task = tokio::spawn(async move {
        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            interval.tick().await;
            if !on_tick() {
                break;
            }
        }

        debug!("Ticker finished");
    });

    TickerHandle { task }
}
