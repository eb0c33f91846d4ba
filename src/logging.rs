#[cfg(feature = "defmt_logger")]
pub mod defmt_logger;

#[cfg(feature = "serial_logger")]
pub mod serial_logger;

pub use log::Level;
use log::{Metadata, Record};

struct LoggerType;

static LOGGER: LoggerType = LoggerType;

/// Installs the fan-out logger. Backends that need a port get it through
/// their own `init` first.
pub fn init(level: Level) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level.to_level_filter());
    }
}

impl log::Log for LoggerType {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            #[cfg(feature = "defmt_logger")]
            defmt_logger::log(record);

            #[cfg(feature = "serial_logger")]
            serial_logger::log(record);
        }
    }

    fn flush(&self) {}
}
