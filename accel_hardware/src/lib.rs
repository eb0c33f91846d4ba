#![no_std]

use fugit::HertzU32;
use stm32f4xx_hal::{
    flash::LockedFlash,
    gpio::Edge,
    i2c::I2c,
    pac::{CorePeripherals, Peripherals, I2C1},
    prelude::*,
    time::Bps,
    timer::SysDelay,
};

pub mod button;
pub mod flash;
pub mod led;
pub mod serial;

use button::UserButton;
use flash::FlashStorage;
use led::{BlueLed, GreenLed};
use serial::{DebugSerialPort, FrameLink};

pub type SensorI2c = I2c<I2C1>;

pub struct BoardConfig {
    pub hse: HertzU32,
    pub sysclk: HertzU32,
    pub i2c_freq: HertzU32,
    pub debug_baud: Bps,
    pub link_baud: Bps,
}

pub struct AccelHardware {
    pub delay: SysDelay,
    pub green_led: GreenLed,
    pub blue_led: BlueLed,

    pub dbg_serial: DebugSerialPort,
    pub frame_link: FrameLink,

    pub i2c: SensorI2c,
    pub button: UserButton,
    pub storage: FlashStorage,
}

impl AccelHardware {
    pub fn init(mut pac: Peripherals, core: CorePeripherals, config: &BoardConfig) -> Self {
        let mut syscfg = pac.SYSCFG.constrain();

        let rcc = pac.RCC.constrain();
        let clocks = rcc
            .cfgr
            .use_hse(config.hse)
            .sysclk(config.sysclk)
            .freeze();
        let delay = core.SYST.delay(&clocks);

        let gpioa = pac.GPIOA.split();
        let gpiob = pac.GPIOB.split();
        let gpiod = pac.GPIOD.split();

        // Status LED's
        let green_led = gpiod.pd12.into_push_pull_output();
        let blue_led = gpiod.pd15.into_push_pull_output();

        let debug_tx_pin = gpioa.pa9.into_alternate();
        let dbg_serial = pac
            .USART1
            .tx(debug_tx_pin, config.debug_baud, &clocks)
            .unwrap();

        let link_tx_pin = gpioa.pa2.into_alternate();
        let link_tx = pac
            .USART2
            .tx(link_tx_pin, config.link_baud, &clocks)
            .unwrap();

        let scl = gpiob.pb8;
        let sda = gpiob.pb9;
        let i2c = I2c::new(pac.I2C1, (scl, sda), config.i2c_freq, &clocks);

        // User button, pulled low, goes high when pressed
        let mut button_pin = gpioa.pa0.into_pull_down_input();
        button_pin.make_interrupt_source(&mut syscfg);
        button_pin.enable_interrupt(&mut pac.EXTI);
        button_pin.trigger_on_edge(&mut pac.EXTI, Edge::Rising);

        Self {
            delay,
            green_led,
            blue_led,
            dbg_serial,
            frame_link: FrameLink::new(link_tx),
            i2c,
            button: UserButton::new(button_pin),
            storage: FlashStorage::new(LockedFlash::new(pac.FLASH)),
        }
    }
}
