//! Register-addressed access to a device on an I2C bus.
//!
//! No retries happen here, a failed transaction hands the bus error back
//! untouched.

use embedded_hal::i2c::{I2c, SevenBitAddress};

use crate::registers::AUTO_INCREMENT;

pub struct RegisterBus<T> {
    i2c: T,
}

impl<T, E> RegisterBus<T>
where
    T: I2c<SevenBitAddress, Error = E>,
{
    pub fn new(i2c: T) -> Self {
        Self { i2c }
    }

    pub fn release(self) -> T {
        self.i2c
    }

    pub fn write_register(&mut self, device: SevenBitAddress, reg: u8, val: u8) -> Result<(), E> {
        self.i2c.write(device, &[reg, val])
    }

    pub fn read_register(&mut self, device: SevenBitAddress, reg: u8) -> Result<u8, E> {
        let mut buf = [0_u8; 1];
        self.i2c.write_read(device, &[reg], &mut buf)?;

        Ok(buf[0])
    }

    /// Reads `N` consecutive registers, `buf[0]` holds `start`.
    pub fn read_register_burst<const N: usize>(
        &mut self,
        device: SevenBitAddress,
        start: u8,
    ) -> Result<[u8; N], E> {
        let mut buf = [0_u8; N];
        let sub_address = if N > 1 { start | AUTO_INCREMENT } else { start };

        self.i2c.write_read(device, &[sub_address], &mut buf)?;

        Ok(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::i2c::ErrorKind;
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction};

    #[test]
    fn write_sends_register_then_value() {
        let expectations = [Transaction::write(0x18, vec![0x20, 0x27])];
        let mut i2c = I2cMock::new(&expectations);

        let mut bus = RegisterBus::new(i2c.clone());
        assert!(bus.write_register(0x18, 0x20, 0x27).is_ok());

        i2c.done();
    }

    #[test]
    fn single_read_returns_register_value() {
        let expectations = [Transaction::write_read(0x18, vec![0x0F], vec![0x33])];
        let mut i2c = I2cMock::new(&expectations);

        let mut bus = RegisterBus::new(i2c.clone());
        assert_eq!(bus.read_register(0x18, 0x0F), Ok(0x33));

        i2c.done();
    }

    #[test]
    fn burst_read_sets_auto_increment_and_keeps_order() {
        let expectations = [Transaction::write_read(0x18, vec![0xA8], vec![0x10, 0x20])];
        let mut i2c = I2cMock::new(&expectations);

        let mut bus = RegisterBus::new(i2c.clone());
        assert_eq!(bus.read_register_burst::<2>(0x18, 0x28), Ok([0x10, 0x20]));

        i2c.done();
    }

    #[test]
    fn bus_error_is_passed_through() {
        let expectations =
            [Transaction::write_read(0x18, vec![0xAA], vec![0x00, 0x00]).with_error(ErrorKind::Other)];
        let mut i2c = I2cMock::new(&expectations);

        let mut bus = RegisterBus::new(i2c.clone());
        assert_eq!(bus.read_register_burst::<2>(0x18, 0x2A), Err(ErrorKind::Other));

        i2c.done();
    }
}
