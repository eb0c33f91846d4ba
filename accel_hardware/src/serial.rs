use embedded_hal_02::blocking::serial::Write;
use stm32f4xx_hal::{
    pac::{USART1, USART2},
    serial::Tx,
};

use accel_core::frame::{Frame, FrameSink};

pub type DebugSerialPort = Tx<USART1>;
pub type LinkSerialPort = Tx<USART2>;

/// Sample frames go out on USART2, logging stays on USART1
pub struct FrameLink {
    tx: LinkSerialPort,
}

impl FrameLink {
    pub(crate) fn new(tx: LinkSerialPort) -> Self {
        Self { tx }
    }
}

impl FrameSink for FrameLink {
    type Error = <LinkSerialPort as Write<u8>>::Error;

    fn send(&mut self, frame: &Frame) -> Result<(), Self::Error> {
        self.tx.bwrite_all(frame.as_bytes())
    }
}
