use core::cell::RefCell;
use core::fmt::Write;

use accel_hardware::serial::DebugSerialPort;
use critical_section::Mutex;
use log::{Level, Record};

// Logged from idle and from interrupt handlers alike
static SERIAL_LOGGER: Mutex<RefCell<Option<DebugSerialPort>>> = Mutex::new(RefCell::new(None));

pub fn init(port: DebugSerialPort) {
    critical_section::with(|cs| {
        *SERIAL_LOGGER.borrow_ref_mut(cs) = Some(port);
    });
}

pub(super) fn log(record: &Record) {
    let level = match record.metadata().level() {
        Level::Trace => "trace",
        Level::Debug => "debug",
        Level::Info => "info",
        Level::Warn => "warn",
        Level::Error => "error",
    };

    critical_section::with(|cs| {
        if let Some(tx) = SERIAL_LOGGER.borrow_ref_mut(cs).as_mut() {
            // nowhere to report a failed log write
            let _ = write!(tx, "{}: {}\r\n", level, record.args());
        }
    });
}
