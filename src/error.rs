//! Failure modes at the hardware boundary.
//!
//! The debounce and hand-off logic cannot fail; only talking to the peripherals can.

use display_interface::DisplayError;

/// Errors raised by the board peripherals.
///
/// The `ssd1306` crate wraps every I2C bus failure into [`DisplayError`], which is kept as
/// the cause.
#[derive(Debug)]
pub enum BoardError {
    /// The display controller did not accept its init sequence.
    DisplayInit(DisplayError),
    /// Drawing into the frame buffer or flushing it over the bus failed.
    DisplayWrite(DisplayError),
}

#[cfg(feature = "defmt")]
impl defmt::Format for BoardError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            BoardError::DisplayInit(e) => {
                defmt::write!(f, "Display init failed: {}", defmt::Debug2Format(e))
            }
            BoardError::DisplayWrite(e) => {
                defmt::write!(f, "Display write failed: {}", defmt::Debug2Format(e))
            }
        }
    }
}
