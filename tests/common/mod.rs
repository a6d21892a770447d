//! Shared test infrastructure for the integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use std::cell::Cell;

use exti_button_display::ButtonState;
use exti_button_display::hardware::traits::{InputLine, MonotonicClock, StatusView};

// ============================================================================
// Mock Clock
// ============================================================================

/// Clock that only moves when the test says so
#[derive(Default)]
pub struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, ms: u64) {
        self.now.set(ms);
    }
}

impl MonotonicClock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

// ============================================================================
// Mock Input Line
// ============================================================================

/// Electrical level of the button pin. Starts high (released, pulled up).
pub struct FakeLine {
    high: Cell<bool>,
}

impl FakeLine {
    pub fn high() -> Self {
        Self {
            high: Cell::new(true),
        }
    }

    pub fn low() -> Self {
        Self {
            high: Cell::new(false),
        }
    }

    pub fn set_high(&self) {
        self.high.set(true);
    }

    pub fn set_low(&self) {
        self.high.set(false);
    }
}

impl InputLine for FakeLine {
    fn is_high(&self) -> bool {
        self.high.get()
    }
}

// ============================================================================
// Mock Views
// ============================================================================

/// View that records every state it was asked to show
#[derive(Default)]
pub struct RecordingView {
    pub shown: Vec<ButtonState>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<ButtonState> {
        self.shown.last().copied()
    }
}

impl StatusView for RecordingView {
    type Error = core::convert::Infallible;

    fn show(&mut self, state: ButtonState) -> Result<(), Self::Error> {
        self.shown.push(state);
        Ok(())
    }
}

/// Failure carrying how many more attempts will fail after this one
#[derive(Debug, PartialEq, Eq)]
pub struct ViewDown(pub u32);

/// View that fails a fixed number of times before it starts working
pub struct FlakyView {
    failures_left: u32,
    pub shown: Vec<ButtonState>,
}

impl FlakyView {
    pub fn failing(times: u32) -> Self {
        Self {
            failures_left: times,
            shown: Vec::new(),
        }
    }
}

impl StatusView for FlakyView {
    type Error = ViewDown;

    fn show(&mut self, state: ButtonState) -> Result<(), Self::Error> {
        if self.failures_left > 0 {
            self.failures_left -= 1;
            return Err(ViewDown(self.failures_left));
        }
        self.shown.push(state);
        Ok(())
    }
}
