//! STM32F103 Blue Pill Push Button State on OLED
//! =============================================================================================
//!
//! This firmware mirrors a momentary push button on an OLED:
//! - Button edges are debounced in interrupt context (EXTI1)
//! - The main loop busy-polls the edge flags and redraws only after a change
//! - SSD1306 OLED display (128x64) via I2C1 shows "PRESSED" / "RELEASED"
//!
//! Hardware Connections:
//!   OLED Display -> Blue Pill
//!      GND  -> GND
//!      VCC  -> 5V
//!      SDA  -> PB7
//!      SCL  -> PB6
//!
//!   Push button module (KY-004):
//!      S    -> PB1 (active low, internal pull-up)
//!      GND  -> GND
//!
//! Execution contexts:
//! 1. Edge detector task on an interrupt executor (USART3 vector, unused on this board)
//! 2. Event consumer loop in thread mode, never sleeps

#![no_std]
#![no_main]

use cortex_m_rt::entry;
use defmt::{info, unwrap};
use defmt_rtt as _; // Global logger
use embassy_executor::InterruptExecutor;
use embassy_stm32::{
    exti::ExtiInput,
    gpio::Pull,
    interrupt,
    interrupt::{InterruptExt, Priority},
    time::Hertz,
};
use panic_probe as _; // Panic handler

use exti_button_display::{
    ButtonState, EdgeDetector, EventConsumer, SharedState,
    config::{DEBOUNCE_INTERVAL_MS, DisplayLayout},
    hardware::{clock::EmbassyClock, gpio_button::GpioButton, oled::OledView, traits::InputLine},
};

// Written by the edge detector, read by the main loop
static SHARED: SharedState = SharedState::new();

// Runs the edge detector above thread mode
static EXECUTOR_EDGE: InterruptExecutor = InterruptExecutor::new();

#[interrupt]
unsafe fn USART3() {
    unsafe { EXECUTOR_EDGE.on_interrupt() }
}

/// Main application entry point
#[entry]
fn main() -> ! {
    // Initialize peripherals with default configuration
    let p = embassy_stm32::init(Default::default());
    info!("Push button display starting");

    // Configure button with external interrupt (pull-up, pressed = low)
    let button = GpioButton::new(ExtiInput::new(p.PB1, p.EXTI1, Pull::Up));

    // Seed the state from the line directly; there is no previous state to debounce against
    let initial = ButtonState::from_active_low(button.is_high());
    SHARED.init(initial);
    info!("Initial state: {}", initial);

    // Configure blocking I2C at 400kHz and draw the static frame
    let i2c = embassy_stm32::i2c::I2c::new_blocking(
        p.I2C1,
        p.PB6,
        p.PB7,
        Hertz::khz(400),
        Default::default(),
    );
    let view = unwrap!(OledView::new(i2c, DisplayLayout::default()));

    // Start the edge detector at interrupt priority
    interrupt::USART3.set_priority(Priority::P6);
    let spawner = EXECUTOR_EDGE.start(interrupt::USART3);
    unwrap!(spawner.spawn(edge_detector(button)));

    // Show the sampled state before any edge arrives
    let mut consumer = EventConsumer::new(&SHARED, view);
    consumer.mark_dirty();
    consumer.run()
}

/// Edge Detector Task
///
/// Wakes on every rising and falling edge and runs the debounce filter synchronously.
/// No drawing or logging beyond trace level happens here.
#[embassy_executor::task]
async fn edge_detector(mut button: GpioButton<'static>) {
    let mut detector = EdgeDetector::new(&SHARED, EmbassyClock, DEBOUNCE_INTERVAL_MS);

    loop {
        button.wait_for_edge().await;
        detector.on_edge(&button);
    }
}
