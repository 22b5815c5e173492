//! FE310 UART (8N1 only, 8-entry FIFOs).

use crate::hw::{read_reg, wait_until, write_reg};

const TXDATA: usize = 0x00;
const RXDATA: usize = 0x04;
const TXCTRL: usize = 0x08;
const RXCTRL: usize = 0x0C;
const IP: usize = 0x14;
const DIV: usize = 0x18;

const TXDATA_FULL: u32 = 1 << 31;
const RXDATA_EMPTY: u32 = 1 << 31;
const TXCTRL_TXEN: u32 = 1 << 0;
const RXCTRL_RXEN: u32 = 1 << 0;
/// Transmit watermark: `txwm` pends while the FIFO holds fewer entries.
const TXCTRL_TXCNT_1: u32 = 1 << 16;
const IP_TXWM: u32 = 1 << 0;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UartError {
    /// The baud divisor does not fit in 16 bits or is zero.
    InvalidDivisor,
    /// The TX FIFO stayed full.
    TxFull,
    /// The TX FIFO never drained.
    TxTimeout,
}

pub struct Uart {
    base: usize,
}

impl Uart {
    /// # Safety
    ///
    /// `base` must be the address of a UART register block and only one
    /// instance may exist per UART.
    pub const unsafe fn new(base: usize) -> Self {
        Self { base }
    }

    /// `div` for `baud` given the bus clock: `f_in / (div + 1)`.
    pub fn divisor_for(f_in: u32, baud: u32) -> Result<u32, UartError> {
        if baud == 0 {
            return Err(UartError::InvalidDivisor);
        }
        let div = (f_in / baud).saturating_sub(1);
        if div == 0 || div > 0xFFFF {
            return Err(UartError::InvalidDivisor);
        }
        Ok(div)
    }

    /// Set the baud divisor and enable transmitter and receiver.
    pub fn configure(&mut self, divisor: u32) -> Result<(), UartError> {
        if divisor == 0 || divisor > 0xFFFF {
            return Err(UartError::InvalidDivisor);
        }
        write_reg(self.base, DIV, divisor);
        write_reg(self.base, TXCTRL, TXCTRL_TXEN | TXCTRL_TXCNT_1);
        write_reg(self.base, RXCTRL, RXCTRL_RXEN);
        Ok(())
    }

    pub fn write(&mut self, byte: u8) -> Result<(), UartError> {
        if !wait_until(|| read_reg(self.base, TXDATA) & TXDATA_FULL == 0) {
            return Err(UartError::TxFull);
        }
        write_reg(self.base, TXDATA, byte as u32);
        Ok(())
    }

    /// Pop a received byte, if any.
    pub fn read(&mut self) -> Option<u8> {
        let data = read_reg(self.base, RXDATA);
        if data & RXDATA_EMPTY != 0 {
            None
        } else {
            Some(data as u8)
        }
    }

    /// Wait until the TX FIFO is empty.
    pub fn flush(&mut self) -> Result<(), UartError> {
        if wait_until(|| read_reg(self.base, IP) & IP_TXWM != 0) {
            Ok(())
        } else {
            Err(UartError::TxTimeout)
        }
    }
}
