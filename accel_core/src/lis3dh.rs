use embedded_hal::{
    delay::DelayNs,
    i2c::{I2c, SevenBitAddress},
};

use crate::bus::RegisterBus;
use crate::registers::{
    Registers, BOOT_DELAY_MS, CTRL_REG1_BOOT, CTRL_REG4_HIGH_RES_8G, DEVICE_ADDR, STATUS_ZYXDA,
    STATUS_ZYXOR, WHO_AM_I_VALUE,
};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    fn low_register(self) -> Registers {
        match self {
            Axis::X => Registers::OutXLo,
            Axis::Y => Registers::OutYLo,
            Axis::Z => Registers::OutZLo,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error<E> {
    UnknownDevice(u8),
    SetupInvalidRead { register: u8, written: u8, read: u8 },
    Inner(E),
}

impl<E> From<E> for Error<E> {
    fn from(e: E) -> Self {
        Error::Inner(e)
    }
}

/// Snapshot of the registers worth printing at startup
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct RegisterDump {
    pub who_am_i: u8,
    pub ctrl1: u8,
    pub ctrl4: u8,
    pub status: u8,
}

impl RegisterDump {
    pub fn data_ready(&self) -> bool {
        self.status & STATUS_ZYXDA != 0
    }

    pub fn overrun(&self) -> bool {
        self.status & STATUS_ZYXOR != 0
    }
}

pub struct Lis3dh<T> {
    bus: RegisterBus<T>,
    address: SevenBitAddress,
}

impl<T, E> Lis3dh<T>
where
    T: I2c<SevenBitAddress, Error = E>,
{
    pub fn new(i2c: T) -> Self {
        Self {
            bus: RegisterBus::new(i2c),
            address: DEVICE_ADDR,
        }
    }

    pub fn release(self) -> T {
        self.bus.release()
    }

    /// Waits out the sensor boot, checks its identity and puts it in high
    /// resolution +-8g mode with the output rate still powered down.
    pub fn configure<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error<E>> {
        delay.delay_ms(BOOT_DELAY_MS);

        let id = self.read_u8(Registers::WhoAmI)?;
        if id != WHO_AM_I_VALUE {
            return Err(Error::UnknownDevice(id));
        }

        let init_values = [
            (Registers::Ctrl1, CTRL_REG1_BOOT),
            (Registers::Ctrl4, CTRL_REG4_HIGH_RES_8G),
        ];

        for (register, write_val) in init_values {
            self.write_u8(register, write_val)?;
            let read_back = self.read_u8(register)?;

            if write_val != read_back {
                return Err(Error::SetupInvalidRead {
                    register: register.into(),
                    written: write_val,
                    read: read_back,
                });
            }
            log::info!("register 0x{:02X} set to 0x{:02X}", u8::from(register), write_val);
        }

        Ok(())
    }

    /// Programs CTRL_REG1, which carries the output data rate.
    pub fn set_rate_code(&mut self, code: u8) -> Result<(), E> {
        self.write_u8(Registers::Ctrl1, code)
    }

    /// Low then high byte of one axis.
    pub fn read_axis(&mut self, axis: Axis) -> Result<[u8; 2], E> {
        self.bus
            .read_register_burst::<2>(self.address, axis.low_register().into())
    }

    pub fn status(&mut self) -> Result<u8, E> {
        self.read_u8(Registers::Status)
    }

    pub fn register_dump(&mut self) -> Result<RegisterDump, E> {
        Ok(RegisterDump {
            who_am_i: self.read_u8(Registers::WhoAmI)?,
            ctrl1: self.read_u8(Registers::Ctrl1)?,
            ctrl4: self.read_u8(Registers::Ctrl4)?,
            status: self.status()?,
        })
    }

    fn read_u8(&mut self, reg: Registers) -> Result<u8, E> {
        self.bus.read_register(self.address, reg.into())
    }

    fn write_u8(&mut self, reg: Registers, val: u8) -> Result<(), E> {
        self.bus.write_register(self.address, reg.into(), val)
    }
}
