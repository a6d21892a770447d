pub mod traits;

#[cfg(feature = "board")]
pub mod clock;
#[cfg(feature = "board")]
pub mod gpio_button;
#[cfg(feature = "board")]
pub mod oled;
