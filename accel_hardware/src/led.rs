use stm32f4xx_hal::gpio::{Output, PushPull, PD12, PD15};

pub type GreenLed = PD12<Output<PushPull>>;
pub type BlueLed = PD15<Output<PushPull>>;
