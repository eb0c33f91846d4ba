//! Sampling and rate control for a LIS3DH accelerometer.
//!
//! Nothing in here knows about a particular MCU: the sensor sits behind an
//! `embedded-hal` I2C bus, the rate slot behind [`store::ByteStorage`] and
//! the output behind [`frame::FrameSink`].

#![cfg_attr(not(test), no_std)]

pub mod bus;
pub mod decode;
pub mod frame;
pub mod lis3dh;
pub mod rate;
pub mod registers;
pub mod sampler;
pub mod selector;
pub mod store;

pub use frame::{Acceleration, Frame, FrameSink};
pub use lis3dh::Lis3dh;
pub use rate::SampleRate;
pub use sampler::Sampler;
pub use selector::RateSelector;
pub use store::{ByteStorage, RateStore};
