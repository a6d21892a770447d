//! SSD1306 128x64 OLED in buffered graphics mode as a [`StatusView`].

use display_interface_i2c::I2CInterface;
use embedded_hal::i2c::I2c;
use ssd1306::{I2CDisplayInterface, Ssd1306, mode::BufferedGraphicsMode, prelude::*};

use super::traits::StatusView;
use crate::config::DisplayLayout;
use crate::display::StatusScreen;
use crate::error::BoardError;
use crate::state::ButtonState;

type Oled<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Owns every write to the panel. Each `show` redraws the value field into the frame
/// buffer and flushes it over I2C.
pub struct OledView<I2C> {
    screen: StatusScreen<Oled<I2C>>,
}

impl<I2C> OledView<I2C>
where
    I2C: I2c,
{
    /// Initialise the controller and draw the static frame.
    pub fn new(i2c: I2C, layout: DisplayLayout) -> Result<Self, BoardError> {
        let interface = I2CDisplayInterface::new(i2c);
        let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();

        display.init().map_err(BoardError::DisplayInit)?;

        let mut screen = StatusScreen::new(display, layout);
        screen.draw_static().map_err(BoardError::DisplayWrite)?;
        screen
            .target_mut()
            .flush()
            .map_err(BoardError::DisplayWrite)?;

        Ok(Self { screen })
    }
}

impl<I2C> StatusView for OledView<I2C>
where
    I2C: I2c,
{
    type Error = BoardError;

    fn show(&mut self, state: ButtonState) -> Result<(), Self::Error> {
        self.screen
            .draw_state(state)
            .map_err(BoardError::DisplayWrite)?;
        self.screen
            .target_mut()
            .flush()
            .map_err(BoardError::DisplayWrite)
    }
}
