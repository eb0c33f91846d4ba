//! Rate slot backed by on-chip flash.
//!
//! The slot lives in sector 11, the last 128K of a 1M STM32F407. memory.x
//! keeps the firmware out of it. Flash can only be erased a sector at a
//! time, so every changed byte costs a full sector erase; that's acceptable
//! for a value that only moves on a button press.

use accel_core::store::ByteStorage;
use stm32f4xx_hal::flash::{self, FlashExt, LockedFlash};

const STORE_SECTOR: u8 = 11;
const STORE_OFFSET: usize = 0xE_0000;
const STORE_LEN: usize = 0x2_0000;

#[derive(Debug)]
pub enum StorageError {
    OutOfRange(u16),
    Flash(flash::Error),
}

pub struct FlashStorage {
    flash: LockedFlash,
}

impl FlashStorage {
    pub fn new(flash: LockedFlash) -> Self {
        Self { flash }
    }

    fn offset(&self, address: u16) -> Result<usize, StorageError> {
        let offset = STORE_OFFSET + address as usize;
        if (address as usize) < STORE_LEN && offset < self.flash.len() {
            Ok(offset)
        } else {
            Err(StorageError::OutOfRange(address))
        }
    }
}

impl ByteStorage for FlashStorage {
    type Error = StorageError;

    fn read_byte(&mut self, address: u16) -> Result<u8, Self::Error> {
        let offset = self.offset(address)?;
        Ok(self.flash.read()[offset])
    }

    fn write_byte(&mut self, address: u16, value: u8) -> Result<(), Self::Error> {
        let offset = self.offset(address)?;
        if self.flash.read()[offset] == value {
            return Ok(());
        }

        log::debug!("erasing flash sector {}", STORE_SECTOR);
        let mut unlocked = self.flash.unlocked();
        unlocked.erase(STORE_SECTOR).map_err(StorageError::Flash)?;
        unlocked
            .program(offset, [value].iter())
            .map_err(StorageError::Flash)
    }
}
