use stm32f4xx_hal::{
    gpio::{Input, PA0},
    prelude::*,
};

pub struct UserButton {
    pin: PA0<Input>,
}

impl UserButton {
    pub(crate) fn new(pin: PA0<Input>) -> Self {
        Self { pin }
    }

    /// Has to run in the EXTI0 handler or the line fires again straight away
    pub fn clear_interrupt(&mut self) {
        self.pin.clear_interrupt_pending_bit();
    }
}
