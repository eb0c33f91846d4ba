//! The main loop body: commit a requested rate change, read the three axes,
//! emit one frame. Runs every iteration whether or not the sensor has new
//! data.

use embedded_hal::{
    delay::DelayNs,
    i2c::{I2c, SevenBitAddress},
};

use crate::decode::decode_axis;
use crate::frame::{Acceleration, Frame, FrameSink};
use crate::lis3dh::{Axis, Lis3dh};
use crate::rate::SampleRate;
use crate::selector::RateSelector;
use crate::store::{ByteStorage, RateStore};

/// A failure streak is logged on its first hit and every this many after
const LOG_EVERY: u32 = 100;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error<B, S> {
    Bus(B),
    Storage(S),
    StoredCodeMismatch { expected: u8, found: u8 },
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Streak {
    total: u32,
    consecutive: u32,
}

impl Streak {
    /// Records a failure, true when it should be logged.
    fn fail(&mut self) -> bool {
        self.total = self.total.saturating_add(1);
        self.consecutive = self.consecutive.saturating_add(1);
        self.consecutive % LOG_EVERY == 1
    }

    /// Records a success, returns the length of the streak it ended.
    fn succeed(&mut self) -> Option<u32> {
        let ended = core::mem::take(&mut self.consecutive);
        (ended > 0).then_some(ended)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LinkStats {
    pub frames_sent: u32,
    pub read_errors: u32,
    pub send_errors: u32,
}

pub struct Sampler<'a, T, S, L> {
    sensor: Lis3dh<T>,
    store: RateStore<S>,
    link: L,
    selector: &'a RateSelector,
    last: Acceleration,
    read_failures: [Streak; 3],
    send_failures: Streak,
    frames_sent: u32,
}

impl<'a, T, S, L> Sampler<'a, T, S, L>
where
    T: I2c<SevenBitAddress>,
    S: ByteStorage,
    L: FrameSink,
{
    /// Boot sequence, run once. Sets the sensor up, brings back the rate
    /// that was committed before power was lost and programs it. Failures
    /// are logged and never stop the boot.
    pub fn init<D: DelayNs>(
        mut sensor: Lis3dh<T>,
        mut store: RateStore<S>,
        link: L,
        selector: &'a RateSelector,
        delay: &mut D,
    ) -> Self {
        match sensor.configure(delay) {
            Ok(()) => log::info!("LIS3DH configured"),
            Err(e) => log::error!("LIS3DH setup failed: {:?}", e),
        }

        let rate = match store.load_rate() {
            Ok(Some(rate)) => rate,
            Ok(None) => {
                log::warn!("no stored rate, falling back to {} Hz", SampleRate::default().hz());
                SampleRate::default()
            }
            Err(e) => {
                log::error!("reading stored rate failed: {:?}", e);
                SampleRate::default()
            }
        };
        selector.restore(rate);

        if let Err(e) = sensor.set_rate_code(rate.code()) {
            log::error!("programming {} Hz failed: {:?}", rate.hz(), e);
        }

        match sensor.register_dump() {
            Ok(dump) => log::info!(
                "WHO_AM_I 0x{:02X} CTRL_REG1 0x{:02X} CTRL_REG4 0x{:02X} STATUS 0x{:02X} (ready: {}, overrun: {})",
                dump.who_am_i,
                dump.ctrl1,
                dump.ctrl4,
                dump.status,
                dump.data_ready(),
                dump.overrun()
            ),
            Err(e) => log::warn!("register dump failed: {:?}", e),
        }

        log::info!("sampling at {} Hz", rate.hz());

        Self::new(sensor, store, link, selector)
    }

    fn new(sensor: Lis3dh<T>, store: RateStore<S>, link: L, selector: &'a RateSelector) -> Self {
        Self {
            sensor,
            store,
            link,
            selector,
            last: Acceleration::default(),
            read_failures: [Streak::default(); 3],
            send_failures: Streak::default(),
            frames_sent: 0,
        }
    }

    pub fn release(self) -> (Lis3dh<T>, RateStore<S>, L) {
        (self.sensor, self.store, self.link)
    }

    /// One loop iteration. Returns the frame that was handed to the link.
    pub fn step(&mut self) -> Frame {
        if let Some(rate) = self.selector.pending_change() {
            match self.commit(rate) {
                Ok(()) => log::info!("sampling at {} Hz", rate.hz()),
                Err(e) => log::error!(
                    "switch to {} Hz: {:?}, sampling at {} Hz",
                    rate.hz(),
                    e,
                    self.selector.active().hz()
                ),
            }
        }

        self.sample();

        let frame = Frame::encode(&self.last);
        match self.link.send(&frame) {
            Ok(()) => {
                self.frames_sent = self.frames_sent.wrapping_add(1);
                if let Some(n) = self.send_failures.succeed() {
                    log::info!("frame link recovered after {} failed sends", n);
                }
            }
            Err(e) => {
                if self.send_failures.fail() {
                    log::warn!(
                        "frame send failed ({} in a row): {:?}",
                        self.send_failures.consecutive,
                        e
                    );
                }
            }
        }

        frame
    }

    /// Persists `rate`, reads the slot back and programs the sensor with the
    /// byte storage actually kept, so the running rate is always the one a
    /// reboot restores. A byte that isn't a rate code is reported and the
    /// sensor is left alone. Nothing is retried: `active` follows hardware
    /// and a request that didn't take is withdrawn unless a newer press has
    /// replaced it.
    pub fn commit(&mut self, rate: SampleRate) -> Result<(), Error<T::Error, S::Error>> {
        let requested = rate.code();
        let saved = self.store.save(requested);

        let stored = match self.store.load() {
            Ok(code) => code,
            Err(e) => {
                self.selector.settle(rate, self.selector.active());
                return Err(Error::Storage(saved.err().unwrap_or(e)));
            }
        };
        let mismatch = Error::StoredCodeMismatch {
            expected: requested,
            found: stored,
        };

        let Some(applied) = SampleRate::from_code(stored) else {
            self.selector.settle(rate, self.selector.active());
            return Err(mismatch);
        };

        let programmed = self.sensor.set_rate_code(stored);
        self.selector.settle(rate, applied);

        programmed.map_err(Error::Bus)?;
        saved.map_err(Error::Storage)?;
        if stored != requested {
            return Err(mismatch);
        }
        Ok(())
    }

    fn sample(&mut self) {
        for (i, axis) in Axis::ALL.into_iter().enumerate() {
            match self.sensor.read_axis(axis) {
                Ok([lo, hi]) => {
                    let value = decode_axis(lo, hi);
                    match axis {
                        Axis::X => self.last.x = value,
                        Axis::Y => self.last.y = value,
                        Axis::Z => self.last.z = value,
                    }
                    if let Some(n) = self.read_failures[i].succeed() {
                        log::info!("{:?} axis recovered after {} failed reads", axis, n);
                    }
                }
                // Keep the previous value, the frame still goes out
                Err(e) => {
                    if self.read_failures[i].fail() {
                        log::warn!(
                            "{:?} axis read failed ({} in a row): {:?}",
                            axis,
                            self.read_failures[i].consecutive,
                            e
                        );
                    }
                }
            }
        }
    }

    pub fn last(&self) -> Acceleration {
        self.last
    }

    pub fn active_rate(&self) -> SampleRate {
        self.selector.active()
    }

    pub fn stats(&self) -> LinkStats {
        LinkStats {
            frames_sent: self.frames_sent,
            read_errors: self.read_failures.iter().map(|s| s.total).sum(),
            send_errors: self.send_failures.total,
        }
    }
}
