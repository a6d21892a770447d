//! Rendering of the button state onto any `embedded-graphics` target.

use embedded_graphics::{
    mono_font::{MonoTextStyle, MonoTextStyleBuilder, ascii::FONT_6X10},
    pixelcolor::BinaryColor,
    prelude::*,
    text::{Baseline, Text},
};
use heapless::String;

use crate::config::{DisplayLayout, HEADER_RULE, HEADER_TITLE, STATE_CAPTION, VALUE_FIELD_CHARS};
use crate::hardware::traits::StatusView;
use crate::state::ButtonState;

/// Status screen: a static frame drawn once, plus a fixed-width value field that is
/// redrawn in full on every update.
///
/// Text is drawn with an explicit background colour, so a shorter label fully covers a
/// longer one.
pub struct StatusScreen<D> {
    target: D,
    layout: DisplayLayout,
    style: MonoTextStyle<'static, BinaryColor>,
}

impl<D> StatusScreen<D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    pub fn new(target: D, layout: DisplayLayout) -> Self {
        let style = MonoTextStyleBuilder::new()
            .font(&FONT_6X10)
            .text_color(BinaryColor::On)
            .background_color(BinaryColor::Off)
            .build();

        Self {
            target,
            layout,
            style,
        }
    }

    /// Clear the screen and draw the header banner and the state caption.
    pub fn draw_static(&mut self) -> Result<(), D::Error> {
        self.target.clear(BinaryColor::Off)?;

        let mut origin = self.layout.header;
        for line in [HEADER_RULE, HEADER_TITLE, HEADER_RULE] {
            Text::with_baseline(line, origin, self.style, Baseline::Top).draw(&mut self.target)?;
            origin.y += self.layout.line_height;
        }

        Text::with_baseline(STATE_CAPTION, self.layout.caption, self.style, Baseline::Top)
            .draw(&mut self.target)?;
        Ok(())
    }

    /// Overwrite the value field with the label for `state`.
    pub fn draw_state(&mut self, state: ButtonState) -> Result<(), D::Error> {
        let field = padded_label(state);
        Text::with_baseline(&field, self.layout.value, self.style, Baseline::Top)
            .draw(&mut self.target)?;
        Ok(())
    }

    /// Borrow the draw target, e.g. to inspect what was drawn in tests.
    pub fn target(&self) -> &D {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut D {
        &mut self.target
    }

    /// Give the draw target back. Only useful off-target, to inspect a finished frame.
    pub fn into_inner(self) -> D {
        self.target
    }
}

impl<D> StatusView for StatusScreen<D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    type Error = D::Error;

    fn show(&mut self, state: ButtonState) -> Result<(), Self::Error> {
        self.draw_state(state)
    }
}

// Every label must fit the value field.
const _: () = assert!(
    ButtonState::Pressed.label().len() <= VALUE_FIELD_CHARS
        && ButtonState::Released.label().len() <= VALUE_FIELD_CHARS
);

/// Label for `state`, right-padded with spaces to [`VALUE_FIELD_CHARS`].
pub fn padded_label(state: ButtonState) -> String<VALUE_FIELD_CHARS> {
    state
        .label()
        .chars()
        .chain(core::iter::repeat(' '))
        .take(VALUE_FIELD_CHARS)
        .collect()
}
