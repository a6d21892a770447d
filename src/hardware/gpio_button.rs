use super::traits::InputLine;
use embassy_stm32::exti::ExtiInput;

/// Button on an EXTI-capable pin. The pin must be configured with its pull resistor so the
/// released level is well defined.
pub struct GpioButton<'d> {
    pin: ExtiInput<'d>,
}

impl<'d> GpioButton<'d> {
    pub fn new(pin: ExtiInput<'d>) -> Self {
        Self { pin }
    }

    /// Resolve on the next rising or falling edge.
    pub async fn wait_for_edge(&mut self) {
        self.pin.wait_for_any_edge().await;
    }
}

impl<'d> InputLine for GpioButton<'d> {
    fn is_high(&self) -> bool {
        self.pin.is_high()
    }
}
