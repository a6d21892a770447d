//! Main-context poll loop: turns edge flags into redraws.

use crate::hardware::traits::StatusView;
use crate::state::SharedState;

/// Errors a view may return to [`EventConsumer::run`]. With the `defmt` feature they must be
/// printable so the cause reaches the log.
#[cfg(feature = "defmt")]
pub trait ViewError: defmt::Format {}
#[cfg(feature = "defmt")]
impl<T: defmt::Format> ViewError for T {}

#[cfg(not(feature = "defmt"))]
pub trait ViewError {}
#[cfg(not(feature = "defmt"))]
impl<T> ViewError for T {}

/// Busy-polls the edge flags and redraws the view only after a change.
///
/// Owns the dirty marker. Each [`poll`](Self::poll) does a bounded amount of work and never
/// blocks; only the latest button state is rendered, not every transition in between.
pub struct EventConsumer<'a, V> {
    shared: &'a SharedState,
    view: V,
    dirty: bool,
}

impl<'a, V> EventConsumer<'a, V>
where
    V: StatusView,
{
    pub fn new(shared: &'a SharedState, view: V) -> Self {
        Self {
            shared,
            view,
            dirty: false,
        }
    }

    /// Force a render on the next poll, e.g. to show the state sampled at boot.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Whether a render is pending. Inspection only; the loop itself never needs it.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// One loop iteration. Returns whether the view was redrawn.
    ///
    /// If the view fails the marker stays set and the render is retried on the next poll.
    pub fn poll(&mut self) -> Result<bool, V::Error> {
        if self.shared.take_pressed_edge() {
            #[cfg(feature = "defmt")]
            defmt::debug!("pressed edge");
            self.dirty = true;
        }

        if self.shared.take_released_edge() {
            #[cfg(feature = "defmt")]
            defmt::debug!("released edge");
            self.dirty = true;
        }

        if !self.dirty {
            return Ok(false);
        }

        let state = self.shared.button_state();
        self.view.show(state)?;
        self.dirty = false;

        #[cfg(feature = "defmt")]
        defmt::info!("display: {}", state.label());

        Ok(true)
    }

    /// Borrow the view, e.g. to inspect what was drawn in tests.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Give the view back. Only useful off-target; on the board the loop never ends.
    pub fn into_view(self) -> V {
        self.view
    }
}

impl<V> EventConsumer<'_, V>
where
    V: StatusView,
    V::Error: ViewError,
{
    /// Poll forever. Never sleeps or yields.
    pub fn run(mut self) -> ! {
        loop {
            if let Err(_e) = self.poll() {
                #[cfg(feature = "defmt")]
                defmt::error!("display update failed: {}", _e);
            }
        }
    }
}
