use accel_hardware::BoardConfig;
use fugit::HertzU32;
use log::Level;
use stm32f4xx_hal::time::Bps;

pub const LOG_LEVEL: Level = Level::Info;

pub const BOARD: BoardConfig = BoardConfig {
    hse: HertzU32::MHz(8),
    sysclk: HertzU32::MHz(168),
    i2c_freq: HertzU32::kHz(400),
    debug_baud: Bps(115_200),
    link_baud: Bps(115_200),
};
