//! Timer controller owning the single ticking mechanism of a countdown

use std::{
    sync::{Arc, Mutex, MutexGuard, Weak},
    time::Duration,
};
use tokio::sync::watch;
use tracing::{debug, error, info};

use crate::{
    state::{TimerState, TimerStats},
    tasks::ticker::{spawn_ticker, TickerHandle},
};

use super::{
    buggy::BuggyCountdown,
    countdown::{Countdown, Event, Mechanism, Transition},
    fixed::FixedCountdown,
};

/// Timer whose mechanism follows the `active` flag only
pub type FixedTimer = TimerController<FixedCountdown>;
/// Timer whose mechanism is recreated on every value change
pub type BuggyTimer = TimerController<BuggyCountdown>;

struct Core<C> {
    countdown: C,
    /// The only ticking mechanism; always taken and dropped before reassignment
    ticker: Option<TickerHandle>,
    /// Identifies the current mechanism. Ticks from older generations are ignored.
    generation: u64,
    stats: TimerStats,
}

impl<C> Core<C> {
    fn release(&mut self) {
        self.generation += 1;
        if let Some(ticker) = self.ticker.take() {
            drop(ticker);
            self.stats.mechanisms_released += 1;
        }
    }
}

struct Shared<C> {
    core: Mutex<Core<C>>,
    updates: watch::Sender<TimerState>,
    period: Duration,
}

impl<C> Shared<C> {
    fn lock(&self) -> Result<MutexGuard<'_, Core<C>>, String> {
        self.core
            .lock()
            .map_err(|e| format!("Failed to lock timer state: {}", e))
    }
}

/// Drives a [`Countdown`] from a periodic ticker.
///
/// Must be created and used inside a tokio runtime. Dropping the controller
/// releases the ticker.
pub struct TimerController<C: Countdown> {
    shared: Arc<Shared<C>>,
}

impl TimerController<FixedCountdown> {
    pub fn fixed(max_duration: u32, question_count: usize, period: Duration) -> Self {
        Self::new(FixedCountdown::new(max_duration, question_count), period)
    }
}

impl TimerController<BuggyCountdown> {
    pub fn buggy(max_duration: u32, question_count: usize, period: Duration) -> Self {
        Self::new(BuggyCountdown::new(max_duration, question_count), period)
    }
}

impl<C: Countdown> TimerController<C> {
    pub fn new(countdown: C, period: Duration) -> Self {
        let (updates, _) = watch::channel(countdown.state());

        Self {
            shared: Arc::new(Shared {
                core: Mutex::new(Core {
                    countdown,
                    ticker: None,
                    generation: 0,
                    stats: TimerStats::default(),
                }),
                updates,
                period,
            }),
        }
    }

    pub fn variant(&self) -> &'static str {
        C::VARIANT
    }

    pub fn start(&self) -> Result<TimerState, String> {
        info!("Starting {} quiz timer", C::VARIANT);
        self.dispatch(Event::Start)
    }

    pub fn stop(&self) -> Result<TimerState, String> {
        info!("Stopping {} quiz timer", C::VARIANT);
        self.dispatch(Event::Stop)
    }

    pub fn advance_question(&self) -> Result<TimerState, String> {
        self.dispatch(Event::AdvanceQuestion)
    }

    /// Record a selected answer and move on to the next question
    pub fn answer(&self, option: &str) -> Result<TimerState, String> {
        info!("Answered: {}", option);
        self.advance_question()
    }

    /// Manually advance the question; rejected by countdowns that do not allow it
    pub fn skip(&self) -> Result<TimerState, String> {
        self.dispatch(Event::Skip)
    }

    /// Release the mechanism and return to the initial state
    pub fn teardown(&self) -> Result<TimerState, String> {
        let mut core = self.shared.lock()?;
        core.release();
        core.countdown.reset();
        let state = core.countdown.state();
        self.shared.updates.send_replace(state);
        debug!("{} quiz timer torn down", C::VARIANT);
        Ok(state)
    }

    pub fn state(&self) -> Result<TimerState, String> {
        Ok(self.shared.lock()?.countdown.state())
    }

    pub fn snapshot(&self) -> Result<(TimerState, TimerStats), String> {
        let core = self.shared.lock()?;
        Ok((core.countdown.state(), core.stats))
    }

    /// Watch the state published after every accepted event
    pub fn subscribe(&self) -> watch::Receiver<TimerState> {
        self.shared.updates.subscribe()
    }

    fn dispatch(&self, event: Event) -> Result<TimerState, String> {
        let mut core = self.shared.lock()?;
        let transition = core
            .countdown
            .apply(event)
            .ok_or_else(|| format!("The {} timer does not support {:?}", C::VARIANT, event))?;

        settle(&self.shared, &mut core, transition);
        Ok(transition.state)
    }
}

impl<C: Countdown> Drop for TimerController<C> {
    fn drop(&mut self) {
        match self.shared.core.lock() {
            Ok(mut core) => core.release(),
            Err(poisoned) => poisoned.into_inner().release(),
        }
    }
}

/// Apply the side effects of a transition while the core is still locked
fn settle<C: Countdown>(shared: &Arc<Shared<C>>, core: &mut Core<C>, transition: Transition) {
    if transition.ticked {
        core.stats.ticks += 1;
    }
    core.stats.expiries += u64::from(transition.expiries);
    core.stats.questions_advanced += u64::from(transition.advances);

    if transition.expiries > 0 {
        info!("[{}] Time ran out!", C::VARIANT);
    }
    if transition.completed {
        info!("[{}] Quiz completed!", C::VARIANT);
    }

    match transition.mechanism {
        Mechanism::Keep => {}
        Mechanism::Release => core.release(),
        Mechanism::Spawn | Mechanism::Recreate => {
            core.release();
            spawn_mechanism(shared, core);
        }
    }

    shared.updates.send_replace(transition.state);
}

fn spawn_mechanism<C: Countdown>(shared: &Arc<Shared<C>>, core: &mut Core<C>) {
    core.generation += 1;
    let generation = core.generation;
    let weak = Arc::downgrade(shared);

    core.ticker = Some(spawn_ticker(shared.period, move || deliver_tick(&weak, generation)));
    core.stats.mechanisms_created += 1;

    debug!("[{}] Ticking mechanism #{} created", C::VARIANT, core.stats.mechanisms_created);
}

/// Apply one tick if `generation` is still the current mechanism.
/// Returns whether the ticker should keep running.
fn deliver_tick<C: Countdown>(weak: &Weak<Shared<C>>, generation: u64) -> bool {
    let Some(shared) = weak.upgrade() else {
        return false;
    };

    let mut core = match shared.lock() {
        Ok(core) => core,
        Err(e) => {
            error!("Dropping tick: {}", e);
            return false;
        }
    };

    if core.generation != generation {
        return false;
    }

    if let Some(transition) = core.countdown.apply(Event::Tick) {
        debug!("[{}] Tick: {}s left", C::VARIANT, transition.state.seconds_remaining);
        settle(&shared, &mut core, transition);
    }

    core.generation == generation
}
