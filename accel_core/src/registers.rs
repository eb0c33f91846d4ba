use embedded_hal::i2c::SevenBitAddress;

/// SDO tied to ground
pub const DEVICE_ADDR: SevenBitAddress = 0x18;

pub const WHO_AM_I_VALUE: u8 = 0x33;

/// Set on the sub-address to make the sensor walk consecutive registers
pub const AUTO_INCREMENT: u8 = 0x80;

/// High resolution, X/Y/Z enabled, rate nibble left at power-down
pub const CTRL_REG1_BOOT: u8 = 0x07;
/// +-8g full scale, high resolution
pub const CTRL_REG4_HIGH_RES_8G: u8 = 0x28;

/// The sensor needs ~5ms after power-up before it answers
pub const BOOT_DELAY_MS: u32 = 5;

#[repr(u8)]
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Registers {
    /// Identity
    WhoAmI = 0x0F,

    /// Configuration
    Ctrl1 = 0x20,
    Ctrl4 = 0x23,

    /// Status
    Status = 0x27,

    /// Accel
    OutXLo = 0x28,
    OutXHi = 0x29,
    OutYLo = 0x2A,
    OutYHi = 0x2B,
    OutZLo = 0x2C,
    OutZHi = 0x2D,
}

impl From<Registers> for u8 {
    fn from(reg: Registers) -> u8 {
        reg as u8
    }
}

/// Status register bit for "new X, Y and Z data"
pub const STATUS_ZYXDA: u8 = 1 << 3;
/// Status register bit for "X, Y and Z data overwritten"
pub const STATUS_ZYXOR: u8 = 1 << 7;
