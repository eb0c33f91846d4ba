//! Raw LIS3DH output to transmitted acceleration.
//!
//! In high resolution mode each axis is 12 significant bits, left-justified
//! in a little-endian 16 bit register pair.

/// g per digit at +-8g in high resolution mode
pub const SENSITIVITY_G: f32 = 0.004;

/// Scales g to milli-g so the value fits an integer on the wire
pub const RESCALE: f32 = 1000.0;

const PADDING_BITS: u32 = 4;

/// Combines the register pair and drops the padding bits. The shift is on a
/// signed value so the sign is carried down.
pub fn raw_axis(lo: u8, hi: u8) -> i16 {
    i16::from_le_bytes([lo, hi]) >> PADDING_BITS
}

pub fn to_g(raw: i16) -> f32 {
    (raw as f32) * SENSITIVITY_G
}

/// Decoded value in milli-g, truncated toward zero.
pub fn decode_axis(lo: u8, hi: u8) -> i16 {
    (to_g(raw_axis(lo, hi)) * RESCALE) as i16
}
