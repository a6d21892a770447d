use crate::state::ButtonState;

/// Digital input line the button is wired to.
pub trait InputLine {
    /// Instantaneous electrical level. Reading never fails once the pin is configured.
    fn is_high(&self) -> bool;
}

/// Monotonic millisecond clock, counted from boot.
pub trait MonotonicClock {
    fn now_ms(&self) -> u64;
}

/// Output surface showing the button state.
///
/// Never called from interrupt context.
pub trait StatusView {
    type Error;

    fn show(&mut self, state: ButtonState) -> Result<(), Self::Error>;
}

impl<T: InputLine + ?Sized> InputLine for &T {
    fn is_high(&self) -> bool {
        (**self).is_high()
    }
}

impl<T: MonotonicClock + ?Sized> MonotonicClock for &T {
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }
}
