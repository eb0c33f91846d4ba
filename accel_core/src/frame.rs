use core::fmt::Debug;

pub const HEADER: u8 = 0xA0;
pub const FOOTER: u8 = 0xC0;
pub const FRAME_LEN: usize = 8;

/// Decoded acceleration in milli-g
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Acceleration {
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

/// `[header][x lo][x hi][y lo][y hi][z lo][z hi][footer]`
///
/// No length or checksum, a receiver syncs on the sentinels and the fixed
/// length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame([u8; FRAME_LEN]);

impl Frame {
    pub fn encode(accel: &Acceleration) -> Self {
        let mut buf = [0_u8; FRAME_LEN];
        buf[0] = HEADER;
        buf[1..3].copy_from_slice(&accel.x.to_le_bytes());
        buf[3..5].copy_from_slice(&accel.y.to_le_bytes());
        buf[5..7].copy_from_slice(&accel.z.to_le_bytes());
        buf[FRAME_LEN - 1] = FOOTER;
        Self(buf)
    }

    pub fn as_bytes(&self) -> &[u8; FRAME_LEN] {
        &self.0
    }
}

/// Wherever frames leave the board
pub trait FrameSink {
    type Error: Debug;

    fn send(&mut self, frame: &Frame) -> Result<(), Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_is_delimited_for_any_values() {
        let samples = [
            Acceleration::default(),
            Acceleration { x: i16::MIN, y: i16::MAX, z: -1 },
            Acceleration { x: 0xA0, y: 0xC0, z: 0x00C0 },
        ];
        for accel in samples {
            let bytes = *Frame::encode(&accel).as_bytes();
            assert_eq!(bytes.len(), 8);
            assert_eq!(bytes[0], HEADER);
            assert_eq!(bytes[7], FOOTER);
        }
    }

    #[test]
    fn axes_are_little_endian_in_order() {
        let frame = Frame::encode(&Acceleration { x: 1000, y: -1000, z: 0x1234 });
        assert_eq!(
            frame.as_bytes(),
            &[0xA0, 0xE8, 0x03, 0x18, 0xFC, 0x34, 0x12, 0xC0]
        );
    }
}
