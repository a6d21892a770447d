//! Button state and the flags handed from interrupt context to the main loop.

use core::sync::atomic::{AtomicBool, Ordering};

/// Debounced logical state of the button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonState {
    Pressed,
    Released,
}

impl ButtonState {
    /// Decode an active-low line: ground means pressed.
    pub const fn from_active_low(line_high: bool) -> Self {
        if line_high {
            ButtonState::Released
        } else {
            ButtonState::Pressed
        }
    }

    pub const fn is_pressed(self) -> bool {
        matches!(self, ButtonState::Pressed)
    }

    /// Text shown in the display value field.
    pub const fn label(self) -> &'static str {
        match self {
            ButtonState::Pressed => "PRESSED",
            ButtonState::Released => "RELEASED",
        }
    }

    const fn from_pressed(pressed: bool) -> Self {
        if pressed {
            ButtonState::Pressed
        } else {
            ButtonState::Released
        }
    }
}

/// Which edge flag is pending, as reported by [`SharedState::pending_edge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    Pressed,
    Released,
}

/// The only state shared between interrupt and main context.
///
/// Every field is a single atomic word, so no reader can observe a torn value and no lock is
/// needed. There is exactly one writer of the button state (the edge detector) and one
/// consumer of each flag (the event consumer); a flag is the hand-off token.
///
/// Raising a flag first clears the opposite one, so at most one flag is ever set. If two
/// transitions land between two polls, only the latest survives.
pub struct SharedState {
    pressed: AtomicBool,
    pressed_edge: AtomicBool,
    released_edge: AtomicBool,
}

impl SharedState {
    pub const fn new() -> Self {
        Self {
            pressed: AtomicBool::new(false),
            pressed_edge: AtomicBool::new(false),
            released_edge: AtomicBool::new(false),
        }
    }

    /// Seed the state from a direct line sample at boot. Raises no flag.
    pub fn init(&self, state: ButtonState) {
        self.pressed.store(state.is_pressed(), Ordering::Release);
    }

    pub fn button_state(&self) -> ButtonState {
        ButtonState::from_pressed(self.pressed.load(Ordering::Acquire))
    }

    /// Store `state` and raise its edge flag. Returns `false` (and touches nothing) if the
    /// state is unchanged.
    ///
    /// Must only be called from the single writer context.
    pub(crate) fn commit(&self, state: ButtonState) -> bool {
        if self.button_state() == state {
            return false;
        }

        self.pressed.store(state.is_pressed(), Ordering::Release);
        let (raise, clear) = match state {
            ButtonState::Pressed => (&self.pressed_edge, &self.released_edge),
            ButtonState::Released => (&self.released_edge, &self.pressed_edge),
        };
        clear.store(false, Ordering::Release);
        raise.store(true, Ordering::Release);
        true
    }

    /// Clear the pressed flag, returning whether it was set.
    pub fn take_pressed_edge(&self) -> bool {
        self.pressed_edge.swap(false, Ordering::AcqRel)
    }

    /// Clear the released flag, returning whether it was set.
    pub fn take_released_edge(&self) -> bool {
        self.released_edge.swap(false, Ordering::AcqRel)
    }

    /// Peek at the pending edge without consuming it.
    ///
    /// For tests and diagnostics only; the event consumer always goes through the `take_*`
    /// methods so an edge is handled exactly once.
    pub fn pending_edge(&self) -> Option<Edge> {
        if self.pressed_edge.load(Ordering::Acquire) {
            Some(Edge::Pressed)
        } else if self.released_edge.load(Ordering::Acquire) {
            Some(Edge::Released)
        } else {
            None
        }
    }
}

impl Default for SharedState {
    fn default() -> Self {
        Self::new()
    }
}
