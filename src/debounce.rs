//! Time-gated edge filter, run in interrupt context.
//!
//! Every edge of the line invokes [`EdgeDetector::on_edge`]. An edge that arrives within the
//! debounce interval of the previous *raw* edge is discarded as contact bounce; any other edge
//! samples the line and commits the new state if it differs. Nothing here blocks, sleeps or
//! draws, so the handler stays a handful of comparisons plus one pin read.
//!
//! # Known limitation
//!
//! The interval is measured between raw firings, not from the last accepted transition, and
//! the line is sampled immediately rather than after a quiet period. A burst of bounces spaced
//! further apart than the interval is therefore accepted as a series of real transitions. For
//! a mechanical switch whose bounce settles well inside the interval this does not occur; a
//! switch that violates that needs a settle-and-resample debouncer instead.

use crate::hardware::traits::{InputLine, MonotonicClock};
use crate::state::{ButtonState, SharedState};

/// Outcome of one edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Verdict {
    /// Inside the debounce window of the previous edge; nothing changed.
    Bounce,
    /// Outside the window but the line already matches the stored state.
    Unchanged,
    /// New state committed and its edge flag raised.
    Accepted(ButtonState),
}

/// Interrupt-side writer of [`SharedState`].
///
/// Owns the timestamp of the last raw edge; nothing else reads it.
pub struct EdgeDetector<'a, C> {
    shared: &'a SharedState,
    clock: C,
    interval_ms: u64,
    last_edge_ms: Option<u64>,
}

impl<'a, C> EdgeDetector<'a, C>
where
    C: MonotonicClock,
{
    pub fn new(shared: &'a SharedState, clock: C, interval_ms: u64) -> Self {
        Self {
            shared,
            clock,
            interval_ms,
            last_edge_ms: None,
        }
    }

    /// Handle one electrical transition of `line`.
    pub fn on_edge<L>(&mut self, line: &L) -> Verdict
    where
        L: InputLine + ?Sized,
    {
        let now = self.clock.now_ms();
        let verdict = if self.is_bounce(now) {
            Verdict::Bounce
        } else {
            let sampled = ButtonState::from_active_low(line.is_high());
            if self.shared.commit(sampled) {
                Verdict::Accepted(sampled)
            } else {
                Verdict::Unchanged
            }
        };
        self.last_edge_ms = Some(now);

        #[cfg(feature = "defmt")]
        defmt::trace!("edge at {} ms: {}", now, verdict);

        verdict
    }

    fn is_bounce(&self, now: u64) -> bool {
        match self.last_edge_ms {
            // First edge since boot: no previous edge to bounce off.
            None => false,
            Some(last) => now.saturating_sub(last) <= self.interval_ms,
        }
    }
}
