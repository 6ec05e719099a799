use std::time::Duration;

use quiz_timer::{BuggyTimer, FixedTimer, TimerState};
use tokio::time::sleep;

const PERIOD: Duration = Duration::from_secs(1);

fn fixed() -> FixedTimer {
    FixedTimer::fixed(20, 3, PERIOD)
}

/// Sleep past `ticks` tick deadlines, landing half a period after the last one
async fn after_ticks(ticks: u32) {
    sleep(PERIOD * ticks + PERIOD / 2).await;
}

#[tokio::test(start_paused = true)]
async fn double_start_creates_a_single_mechanism() {
    let timer = fixed();

    timer.start().unwrap();
    let state = timer.start().unwrap();
    assert_eq!(state, TimerState { seconds_remaining: 20, active: true, question_index: 0 });

    let (_, stats) = timer.snapshot().unwrap();
    assert_eq!(stats.mechanisms_created, 1);
    assert_eq!(stats.live_mechanisms(), 1);

    after_ticks(5).await;
    let (state, stats) = timer.snapshot().unwrap();
    assert_eq!(state.seconds_remaining, 15);
    assert_eq!(stats.ticks, 5);
}

#[tokio::test(start_paused = true)]
async fn counts_down_one_second_per_tick_without_resets() {
    let timer = fixed();
    timer.start().unwrap();

    sleep(PERIOD / 2).await;
    for elapsed in 1..20 {
        sleep(PERIOD).await;
        let state = timer.state().unwrap();
        assert_eq!(state.seconds_remaining, 20 - elapsed);
        assert_eq!(state.question_index, 0);
    }

    let (_, stats) = timer.snapshot().unwrap();
    assert_eq!(stats.mechanisms_created, 1);
}

#[tokio::test(start_paused = true)]
async fn full_quiz_expires_each_question_exactly_once() {
    let timer = fixed();
    timer.start().unwrap();

    after_ticks(20).await;
    let state = timer.state().unwrap();
    assert_eq!(state, TimerState { seconds_remaining: 20, active: true, question_index: 1 });

    after_ticks(40).await;
    let (state, stats) = timer.snapshot().unwrap();
    assert!(!state.active);
    assert_eq!(state.question_index, 2);
    assert_eq!(stats.expiries, 3);
    assert_eq!(stats.questions_advanced, 2);
    assert_eq!(stats.ticks, 60);
    assert_eq!(stats.mechanisms_created, 1);
    assert_eq!(stats.live_mechanisms(), 0);

    // Nothing fires again once the quiz is over
    after_ticks(30).await;
    let (_, later) = timer.snapshot().unwrap();
    assert_eq!(later, stats);
}

#[tokio::test(start_paused = true)]
async fn answering_resets_countdown_and_keeps_ticking() {
    let timer = fixed();
    timer.start().unwrap();
    after_ticks(5).await;

    let state = timer.answer("Graph DB").unwrap();
    assert_eq!(state, TimerState { seconds_remaining: 20, active: true, question_index: 1 });

    sleep(PERIOD).await;
    let (state, stats) = timer.snapshot().unwrap();
    assert_eq!(state.seconds_remaining, 19);
    assert_eq!(stats.mechanisms_created, 1);
}

#[tokio::test(start_paused = true)]
async fn answering_the_last_question_ends_the_quiz() {
    let timer = fixed();
    timer.start().unwrap();
    timer.answer("Graph DB").unwrap();
    timer.answer("Cypher").unwrap();

    let state = timer.answer("Entity").unwrap();
    assert!(!state.active);

    let (_, stats) = timer.snapshot().unwrap();
    assert_eq!(stats.live_mechanisms(), 0);
}

#[tokio::test(start_paused = true)]
async fn no_tick_is_observed_after_stop() {
    let timer = fixed();
    timer.start().unwrap();
    after_ticks(3).await;

    let stopped = timer.stop().unwrap();
    assert_eq!(stopped.seconds_remaining, 17);

    after_ticks(10).await;
    let (state, stats) = timer.snapshot().unwrap();
    assert_eq!(state.seconds_remaining, 17);
    assert_eq!(stats.ticks, 3);
    assert_eq!(stats.live_mechanisms(), 0);
}

#[tokio::test(start_paused = true)]
async fn restart_after_stop_spawns_a_fresh_mechanism() {
    let timer = fixed();
    timer.start().unwrap();
    timer.stop().unwrap();
    timer.start().unwrap();

    after_ticks(2).await;
    let (state, stats) = timer.snapshot().unwrap();
    assert_eq!(state.seconds_remaining, 18);
    assert_eq!(stats.mechanisms_created, 2);
    assert_eq!(stats.mechanisms_released, 1);
}

#[tokio::test(start_paused = true)]
async fn teardown_returns_to_initial_state() {
    let timer = fixed();
    timer.start().unwrap();
    after_ticks(4).await;

    assert_eq!(timer.teardown().unwrap(), TimerState::new(20));

    after_ticks(5).await;
    let (state, stats) = timer.snapshot().unwrap();
    assert_eq!(state, TimerState::new(20));
    assert_eq!(stats.ticks, 4);
}

#[tokio::test(start_paused = true)]
async fn dropping_the_controller_closes_updates() {
    let timer = fixed();
    let mut updates = timer.subscribe();
    timer.start().unwrap();
    after_ticks(2).await;
    assert_eq!(updates.borrow_and_update().seconds_remaining, 18);

    drop(timer);
    after_ticks(3).await;
    assert_eq!(updates.borrow().seconds_remaining, 18);
    assert!(updates.changed().await.is_err());
}

#[tokio::test(start_paused = true)]
async fn subscribers_see_every_tick() {
    let timer = fixed();
    let mut updates = timer.subscribe();
    timer.start().unwrap();
    assert!(updates.borrow_and_update().active);

    let mut seen = Vec::new();
    for _ in 0..3 {
        updates.changed().await.unwrap();
        seen.push(updates.borrow_and_update().seconds_remaining);
    }
    assert_eq!(seen, vec![19, 18, 17]);
}

#[tokio::test(start_paused = true)]
async fn fixed_timer_rejects_skip() {
    let timer = fixed();
    timer.start().unwrap();
    assert!(timer.skip().is_err());
    assert_eq!(timer.state().unwrap().question_index, 0);
}

#[tokio::test(start_paused = true)]
async fn buggy_timer_recreates_its_mechanism_every_tick() {
    let timer = BuggyTimer::buggy(20, 3, PERIOD);
    timer.start().unwrap();

    after_ticks(5).await;
    let (state, stats) = timer.snapshot().unwrap();
    assert_eq!(state.seconds_remaining, 15);
    assert_eq!(stats.mechanisms_created, 6);
    assert_eq!(stats.live_mechanisms(), 1);
}

#[tokio::test(start_paused = true)]
async fn buggy_timer_skips_and_never_shows_zero() {
    let timer = BuggyTimer::buggy(3, 3, PERIOD);
    let mut updates = timer.subscribe();
    timer.start().unwrap();

    let skipped = timer.skip().unwrap();
    assert_eq!(skipped, TimerState { seconds_remaining: 3, active: true, question_index: 1 });

    let mut seen = Vec::new();
    while timer.state().unwrap().active {
        updates.changed().await.unwrap();
        seen.push(updates.borrow_and_update().seconds_remaining);
    }
    assert!(seen.iter().all(|&seconds| seconds > 0));

    let (_, stats) = timer.snapshot().unwrap();
    assert_eq!(stats.expiries, 2);
    assert_eq!(stats.live_mechanisms(), 0);
}

#[tokio::test(start_paused = true)]
async fn zero_length_countdown_runs_through_without_getting_stuck() {
    let timer = FixedTimer::fixed(0, 3, PERIOD);

    let state = timer.start().unwrap();
    assert_eq!(state, TimerState { seconds_remaining: 0, active: false, question_index: 2 });

    after_ticks(30).await;
    let (state, stats) = timer.snapshot().unwrap();
    assert!(!state.active);
    assert_eq!(stats.expiries, 3);
    assert_eq!(stats.questions_advanced, 2);
    assert_eq!(stats.mechanisms_created, 0);
    assert_eq!(stats.live_mechanisms(), 0);
}
