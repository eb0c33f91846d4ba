#![no_std]
#![no_main]

mod config;
mod logging;

#[cfg(all(feature = "serial_logger", not(feature = "defmt_logger")))]
use panic_halt as _;
#[cfg(feature = "defmt_logger")]
use panic_probe as _;

use accel_core::{RateSelector, SampleRate};

const NAME: &str = env!("CARGO_PKG_NAME");
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Written by the button handler, committed by the sampling loop
static RATE: RateSelector = RateSelector::new(SampleRate::Hz1);

#[rtic::app(device = stm32f4xx_hal::pac)]
mod app {
    use super::*;

    use accel_core::{Lis3dh, RateStore, Sampler};
    use accel_hardware::{
        button::UserButton, flash::FlashStorage, led::BlueLed, serial::FrameLink, AccelHardware,
        SensorI2c,
    };

    type SensorSampler = Sampler<'static, SensorI2c, FlashStorage, FrameLink>;

    #[shared]
    struct Shared {}

    #[local]
    struct Local {
        sampler: SensorSampler,
        button: UserButton,
        blue_led: BlueLed,
    }

    #[init]
    fn init(ctx: init::Context) -> (Shared, Local) {
        let AccelHardware {
            mut delay,
            mut green_led,
            blue_led,
            dbg_serial,
            frame_link,
            i2c,
            button,
            storage,
        } = AccelHardware::init(ctx.device, ctx.core, &config::BOARD);

        #[cfg(feature = "serial_logger")]
        logging::serial_logger::init(dbg_serial);
        #[cfg(not(feature = "serial_logger"))]
        drop(dbg_serial);

        logging::init(config::LOG_LEVEL);
        log::info!("{} v{}", NAME, VERSION);

        // Interrupts are still masked here, so restoring the rate can't race
        // the button
        let sampler = Sampler::init(
            Lis3dh::new(i2c),
            RateStore::new(storage),
            frame_link,
            &RATE,
            &mut delay,
        );
        green_led.set_high();

        (
            Shared {},
            Local {
                sampler,
                button,
                blue_led,
            },
        )
    }

    #[idle(local = [sampler])]
    fn idle(ctx: idle::Context) -> ! {
        let sampler = ctx.local.sampler;
        loop {
            sampler.step();
        }
    }

    #[task(binds = EXTI0, priority = 2, local = [button, blue_led])]
    fn button_press(ctx: button_press::Context) {
        ctx.local.button.clear_interrupt();
        ctx.local.blue_led.toggle();

        RATE.trigger();
    }
}
