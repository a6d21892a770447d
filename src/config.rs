//! Compile-time tunables and screen layout.

use embedded_graphics::prelude::Point;

/// Edges closer together than this (inclusive) are treated as contact bounce.
///
/// Too large drops real presses, too small lets bounce through as transitions.
pub const DEBOUNCE_INTERVAL_MS: u64 = 10;

/// Width of the value field in characters. Every label is padded to this width.
pub const VALUE_FIELD_CHARS: usize = 12;

/// Dashed rule above and below the header title.
pub const HEADER_RULE: &str = "---------------------";
pub const HEADER_TITLE: &str = "KY004 Push Button";
pub const STATE_CAPTION: &str = "Button State:";

/// Top-left positions of the text drawn on a 128x64 panel with a 6x10 font.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayLayout {
    pub header: Point,
    pub line_height: i32,
    pub caption: Point,
    pub value: Point,
}

impl Default for DisplayLayout {
    fn default() -> Self {
        Self {
            header: Point::new(0, 0),
            line_height: 10,
            caption: Point::new(0, 36),
            value: Point::new(0, 48),
        }
    }
}
