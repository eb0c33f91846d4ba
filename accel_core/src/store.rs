//! Keeps the last committed CTRL_REG1 code in one byte of non-volatile
//! storage so the rate survives a power cycle.

use core::fmt::Debug;

use crate::rate::SampleRate;

/// Logical address of the rate slot
pub const RATE_SLOT: u16 = 0x0000;

/// Byte-addressed non-volatile storage
pub trait ByteStorage {
    type Error: Debug;

    fn read_byte(&mut self, address: u16) -> Result<u8, Self::Error>;
    fn write_byte(&mut self, address: u16, value: u8) -> Result<(), Self::Error>;
}

pub struct RateStore<S> {
    storage: S,
}

impl<S: ByteStorage> RateStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn release(self) -> S {
        self.storage
    }

    pub fn save(&mut self, code: u8) -> Result<(), S::Error> {
        self.storage.write_byte(RATE_SLOT, code)
    }

    pub fn load(&mut self) -> Result<u8, S::Error> {
        self.storage.read_byte(RATE_SLOT)
    }

    /// `None` when the slot holds something that isn't a rate code, such as
    /// freshly erased storage.
    pub fn load_rate(&mut self) -> Result<Option<SampleRate>, S::Error> {
        Ok(SampleRate::from_code(self.load()?))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Erased-flash lookalike
    pub(crate) struct MemoryStorage {
        pub bytes: [u8; 4],
        pub writes: usize,
        pub fail_writes: bool,
        pub corrupt_with: Option<u8>,
    }

    impl MemoryStorage {
        pub fn new() -> Self {
            Self {
                bytes: [0xFF; 4],
                writes: 0,
                fail_writes: false,
                corrupt_with: None,
            }
        }

        pub fn holding(code: u8) -> Self {
            let mut s = Self::new();
            s.bytes[RATE_SLOT as usize] = code;
            s
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub(crate) struct WriteFailed;

    impl ByteStorage for MemoryStorage {
        type Error = WriteFailed;

        fn read_byte(&mut self, address: u16) -> Result<u8, Self::Error> {
            Ok(self.bytes[address as usize])
        }

        fn write_byte(&mut self, address: u16, value: u8) -> Result<(), Self::Error> {
            if self.fail_writes {
                return Err(WriteFailed);
            }
            self.writes += 1;
            self.bytes[address as usize] = self.corrupt_with.unwrap_or(value);
            Ok(())
        }
    }

    #[test]
    fn save_then_load_returns_every_rate_code() {
        let mut store = RateStore::new(MemoryStorage::new());
        for rate in SampleRate::ALL {
            store.save(rate.code()).unwrap();
            assert_eq!(store.load(), Ok(rate.code()));
        }
    }

    #[test]
    fn reload_reports_what_storage_kept() {
        let mut storage = MemoryStorage::new();
        storage.corrupt_with = Some(0x00);
        let mut store = RateStore::new(storage);

        assert_eq!(store.save(0x47), Ok(()));
        assert_eq!(store.load(), Ok(0x00));
    }

    #[test]
    fn write_failure_is_surfaced() {
        let mut storage = MemoryStorage::holding(0x17);
        storage.fail_writes = true;
        let mut store = RateStore::new(storage);

        assert_eq!(store.save(0x27), Err(WriteFailed));
        assert_eq!(store.load(), Ok(0x17));
    }

    #[test]
    fn erased_slot_has_no_rate() {
        let mut store = RateStore::new(MemoryStorage::new());
        assert_eq!(store.load_rate(), Ok(None));
    }

    #[test]
    fn stored_code_maps_back_to_rate() {
        let mut store = RateStore::new(MemoryStorage::holding(0x57));
        assert_eq!(store.load_rate(), Ok(Some(SampleRate::Hz100)));
    }
}
