//! Integration tests for EventConsumer

mod common;
use common::*;

use exti_button_display::config::DEBOUNCE_INTERVAL_MS;
use exti_button_display::{ButtonState, EdgeDetector, EventConsumer, SharedState};

#[test]
fn poll_without_flags_is_idle() {
    let shared = SharedState::new();
    let mut consumer = EventConsumer::new(&shared, RecordingView::new());

    for _ in 0..5 {
        assert_eq!(consumer.poll(), Ok(false));
    }
    assert!(!consumer.is_dirty());
    assert_eq!(shared.button_state(), ButtonState::Released);
    assert!(consumer.view().shown.is_empty());
}

#[test]
fn mark_dirty_renders_once() {
    let shared = SharedState::new();
    shared.init(ButtonState::Pressed);
    let mut consumer = EventConsumer::new(&shared, RecordingView::new());

    consumer.mark_dirty();
    assert_eq!(consumer.poll(), Ok(true));
    assert_eq!(consumer.poll(), Ok(false));
    assert_eq!(consumer.view().shown, vec![ButtonState::Pressed]);
}

#[test]
fn each_edge_is_rendered_once() {
    let shared = SharedState::new();
    let clock = ManualClock::new();
    let line = FakeLine::high();
    let mut detector = EdgeDetector::new(&shared, &clock, DEBOUNCE_INTERVAL_MS);
    let mut consumer = EventConsumer::new(&shared, RecordingView::new());

    line.set_low();
    detector.on_edge(&line);
    assert_eq!(consumer.poll(), Ok(true));
    assert_eq!(consumer.poll(), Ok(false));
    assert_eq!(shared.pending_edge(), None);

    clock.set(40);
    line.set_high();
    detector.on_edge(&line);
    assert_eq!(consumer.poll(), Ok(true));
    assert_eq!(consumer.poll(), Ok(false));

    assert_eq!(
        consumer.view().shown,
        vec![ButtonState::Pressed, ButtonState::Released]
    );
}

#[test]
fn only_latest_state_rendered_after_missed_polls() {
    let shared = SharedState::new();
    let clock = ManualClock::new();
    let line = FakeLine::high();
    let mut detector = EdgeDetector::new(&shared, &clock, DEBOUNCE_INTERVAL_MS);
    let mut consumer = EventConsumer::new(&shared, RecordingView::new());

    // Press then release before the main loop gets to run
    line.set_low();
    detector.on_edge(&line);
    clock.set(50);
    line.set_high();
    detector.on_edge(&line);

    assert_eq!(consumer.poll(), Ok(true));
    assert_eq!(consumer.poll(), Ok(false));
    assert_eq!(consumer.view().shown, vec![ButtonState::Released]);
}

#[test]
fn failed_render_is_retried() {
    let shared = SharedState::new();
    let mut consumer = EventConsumer::new(&shared, FlakyView::failing(2));
    consumer.mark_dirty();

    assert_eq!(consumer.poll(), Err(ViewDown(1)));
    assert!(consumer.is_dirty());
    assert_eq!(consumer.poll(), Err(ViewDown(0)));
    assert_eq!(consumer.poll(), Ok(true));
    assert!(!consumer.is_dirty());

    assert_eq!(consumer.into_view().shown, vec![ButtonState::Released]);
}

#[test]
fn view_error_reaches_caller_with_its_cause() {
    let shared = SharedState::new();
    let clock = ManualClock::new();
    let line = FakeLine::low();
    let mut detector = EdgeDetector::new(&shared, &clock, DEBOUNCE_INTERVAL_MS);
    let mut consumer = EventConsumer::new(&shared, FlakyView::failing(3));

    detector.on_edge(&line);

    // The edge flag is consumed on the first poll even though the render fails
    assert_eq!(consumer.poll(), Err(ViewDown(2)));
    assert!(!shared.take_pressed_edge());
    assert_eq!(consumer.poll(), Err(ViewDown(1)));
    assert_eq!(consumer.poll(), Err(ViewDown(0)));
    assert_eq!(consumer.poll(), Ok(true));
    assert_eq!(consumer.poll(), Ok(false));

    assert_eq!(consumer.into_view().shown, vec![ButtonState::Pressed]);
}
