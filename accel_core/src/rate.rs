/// Output data rates the button cycles through, slowest first.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SampleRate {
    #[default]
    Hz1 = 0,
    Hz10 = 1,
    Hz25 = 2,
    Hz50 = 3,
    Hz100 = 4,
    Hz200 = 5,
}

/// CTRL_REG1 value for each rate, indexed by `SampleRate as usize`.
/// Upper nibble is the rate selector, lower nibble keeps high resolution
/// mode with all three axes enabled.
const RATE_CODES: [u8; 6] = [0x17, 0x27, 0x37, 0x47, 0x57, 0x67];

impl SampleRate {
    pub const ALL: [SampleRate; 6] = [
        SampleRate::Hz1,
        SampleRate::Hz10,
        SampleRate::Hz25,
        SampleRate::Hz50,
        SampleRate::Hz100,
        SampleRate::Hz200,
    ];

    /// Cyclic successor, 200Hz wraps back around to 1Hz
    pub fn next(self) -> Self {
        Self::ALL[(self as usize + 1) % Self::ALL.len()]
    }

    pub fn hz(self) -> u16 {
        match self {
            SampleRate::Hz1 => 1,
            SampleRate::Hz10 => 10,
            SampleRate::Hz25 => 25,
            SampleRate::Hz50 => 50,
            SampleRate::Hz100 => 100,
            SampleRate::Hz200 => 200,
        }
    }

    pub fn code(self) -> u8 {
        RATE_CODES[self as usize]
    }

    pub fn from_code(code: u8) -> Option<Self> {
        RATE_CODES
            .iter()
            .position(|&c| c == code)
            .map(|i| Self::ALL[i])
    }

    pub(crate) fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_steps_is_a_full_cycle() {
        for rate in SampleRate::ALL {
            let mut r = rate;
            for _ in 0..6 {
                r = r.next();
            }
            assert_eq!(r, rate);
        }
    }

    #[test]
    fn next_follows_ascending_order() {
        let hz: [u16; 7] = [1, 10, 25, 50, 100, 200, 1];
        let mut r = SampleRate::Hz1;
        for pair in hz.windows(2) {
            assert_eq!(r.hz(), pair[0]);
            r = r.next();
            assert_eq!(r.hz(), pair[1]);
        }
    }

    #[test]
    fn codes_map_back_to_their_rate() {
        for rate in SampleRate::ALL {
            assert_eq!(SampleRate::from_code(rate.code()), Some(rate));
            assert_eq!(rate.code() & 0x0F, 0x07);
        }
    }

    #[test]
    fn unknown_codes_are_rejected() {
        assert_eq!(SampleRate::from_code(0xFF), None);
        assert_eq!(SampleRate::from_code(0x07), None);
        assert_eq!(SampleRate::from_code(0x77), None);
    }

    #[test]
    fn default_is_slowest() {
        assert_eq!(SampleRate::default(), SampleRate::Hz1);
    }
}
