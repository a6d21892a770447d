#![cfg_attr(not(test), no_std)]

//! Interrupt-debounced push button mirrored on a small display.
//!
//! Two execution contexts share one piece of state:
//!
//! - the [`EdgeDetector`](debounce::EdgeDetector) runs in interrupt context on every edge of
//!   the input line, rate-limits the edges and commits accepted transitions to
//!   [`SharedState`](state::SharedState);
//! - the [`EventConsumer`](consumer::EventConsumer) busy-polls the edge flags from the main
//!   context and redraws the [`StatusView`](hardware::traits::StatusView) only when something
//!   changed.
//!
//! Data only ever flows from the interrupt side to the main side.

pub mod config;
pub mod consumer;
pub mod debounce;
pub mod display;
#[cfg(feature = "board")]
pub mod error;
pub mod hardware;
pub mod state;

pub use consumer::EventConsumer;
pub use debounce::{EdgeDetector, Verdict};
pub use state::{ButtonState, Edge, SharedState};
