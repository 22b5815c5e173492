//! nRF52840 legacy UART (8N1, no flow control).

use super::TRIGGER;
use crate::hw::{read_reg, wait_until, write_reg};

const TASKS_STARTRX: usize = 0x000;
const TASKS_STARTTX: usize = 0x008;
const EVENTS_RXDRDY: usize = 0x108;
const EVENTS_TXDRDY: usize = 0x11C;
const EVENTS_ERROR: usize = 0x124;
const ERRORSRC: usize = 0x480;
const ENABLE: usize = 0x500;
const PSEL_TXD: usize = 0x50C;
const PSEL_RXD: usize = 0x514;
const RXD: usize = 0x518;
const TXD: usize = 0x51C;
const BAUDRATE: usize = 0x524;
const CONFIG: usize = 0x56C;

const ENABLE_UART: u32 = 4;
const ERRORSRC_OVERRUN: u32 = 1 << 0;

/// Supported baud rates and their `BAUDRATE` register values.
const BAUD_RATES: [(u32, u32); 16] = [
    (1_200, 0x0004_F000),
    (2_400, 0x0009_D000),
    (4_800, 0x0013_B000),
    (9_600, 0x0027_5000),
    (14_400, 0x003B_0000),
    (19_200, 0x004E_A000),
    (28_800, 0x0075_F000),
    (38_400, 0x009D_5000),
    (57_600, 0x00EB_F000),
    (76_800, 0x013A_9000),
    (115_200, 0x01D7_E000),
    (230_400, 0x03AF_B000),
    (250_000, 0x0400_0000),
    (460_800, 0x075F_7000),
    (921_600, 0x0EBE_D000),
    (1_000_000, 0x1000_0000),
];

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UartError {
    /// Not one of the baud rates in the reference manual.
    UnsupportedBaudRate,
    /// The previous byte never left the transmitter.
    TxBusy,
    /// `EVENTS_TXDRDY` never fired for the last byte.
    TxTimeout,
    /// A byte arrived before the previous one was read.
    Overrun,
    /// Framing, parity or break error.
    LineError,
}

pub struct Uart {
    base: usize,
    tx_in_flight: bool,
}

impl Uart {
    /// # Safety
    ///
    /// `base` must be the address of the UART register block and only one
    /// instance may exist.
    pub const unsafe fn new(base: usize) -> Self {
        Self {
            base,
            tx_in_flight: false,
        }
    }

    pub fn baudrate_for(baud: u32) -> Result<u32, UartError> {
        BAUD_RATES
            .iter()
            .find(|(rate, _)| *rate == baud)
            .map(|&(_, value)| value)
            .ok_or(UartError::UnsupportedBaudRate)
    }

    /// Route pins, set the baud rate and start both directions.
    pub fn configure(&mut self, tx_pin: u8, rx_pin: u8, baudrate: u32) {
        write_reg(self.base, ENABLE, 0);
        write_reg(self.base, PSEL_TXD, super::psel(tx_pin));
        write_reg(self.base, PSEL_RXD, super::psel(rx_pin));
        write_reg(self.base, BAUDRATE, baudrate);
        write_reg(self.base, CONFIG, 0);
        write_reg(self.base, EVENTS_TXDRDY, 0);
        write_reg(self.base, EVENTS_RXDRDY, 0);
        write_reg(self.base, ENABLE, ENABLE_UART);
        write_reg(self.base, TASKS_STARTTX, TRIGGER);
        write_reg(self.base, TASKS_STARTRX, TRIGGER);
        self.tx_in_flight = false;
    }

    fn wait_tx_done(&mut self) -> bool {
        if !self.tx_in_flight {
            return true;
        }
        if !wait_until(|| read_reg(self.base, EVENTS_TXDRDY) == TRIGGER) {
            return false;
        }
        write_reg(self.base, EVENTS_TXDRDY, 0);
        self.tx_in_flight = false;
        true
    }

    pub fn write(&mut self, byte: u8) -> Result<(), UartError> {
        if !self.wait_tx_done() {
            return Err(UartError::TxBusy);
        }
        write_reg(self.base, TXD, byte as u32);
        self.tx_in_flight = true;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), UartError> {
        if self.wait_tx_done() {
            Ok(())
        } else {
            Err(UartError::TxTimeout)
        }
    }

    /// Pop a received byte, if any.
    pub fn read(&mut self) -> Result<Option<u8>, UartError> {
        if read_reg(self.base, EVENTS_ERROR) == TRIGGER {
            let source = read_reg(self.base, ERRORSRC);
            // ERRORSRC is write-1-to-clear
            write_reg(self.base, ERRORSRC, source);
            write_reg(self.base, EVENTS_ERROR, 0);
            return Err(if source & ERRORSRC_OVERRUN != 0 {
                UartError::Overrun
            } else {
                UartError::LineError
            });
        }
        if read_reg(self.base, EVENTS_RXDRDY) != TRIGGER {
            return Ok(None);
        }
        write_reg(self.base, EVENTS_RXDRDY, 0);
        Ok(Some(read_reg(self.base, RXD) as u8))
    }
}
