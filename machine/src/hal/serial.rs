//! Serial Port (UART) Hardware Abstraction Layer.
//!
//! This module defines platform-independent traits for serial communication.

use super::{Error, Result};
use core::fmt;

/// Serial port configuration.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SerialConfig {
    /// Baud rate in bits per second.
    pub baud_rate: u32,
    /// Number of data bits per frame.
    pub data_bits: DataBits,
    /// Parity checking mode.
    pub parity: Parity,
    /// Number of stop bits.
    pub stop_bits: StopBits,
}

impl SerialConfig {
    /// Create a standard 8N1 configuration at the specified baud rate.
    ///
    /// 8N1 means: 8 data bits, no parity, 1 stop bit.
    pub const fn new_8n1(baud_rate: u32) -> Self {
        Self {
            baud_rate,
            data_bits: DataBits::Eight,
            parity: Parity::None,
            stop_bits: StopBits::One,
        }
    }

    /// Reject anything but 8N1 at a non-zero baud rate.
    ///
    /// Both supported chips only implement 8N1 framing.
    pub fn require_8n1(&self) -> Result<()> {
        let framing_ok = self.data_bits == DataBits::Eight
            && self.parity == Parity::None
            && self.stop_bits == StopBits::One;

        if self.baud_rate == 0 || !framing_ok {
            return Err(Error::InvalidConfig);
        }
        Ok(())
    }
}

impl Default for SerialConfig {
    /// Default configuration: 115200 baud, 8N1.
    fn default() -> Self {
        Self::new_8n1(115200)
    }
}

/// Number of data bits per frame.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DataBits {
    Five,
    Six,
    Seven,
    Eight,
}

/// Parity mode.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Parity {
    /// No parity bit.
    None,
    /// Odd parity.
    Odd,
    /// Even parity.
    Even,
}

/// Number of stop bits.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StopBits {
    /// One stop bit.
    One,
    /// Two stop bits.
    Two,
}

/// Serial port trait.
///
/// Writes wait for transmitter space within the driver's poll budget; reads
/// never wait.
pub trait SerialPort {
    /// Configure the serial port.
    ///
    /// This must be called before using the serial port.
    fn configure(&mut self, config: SerialConfig) -> Result<()>;

    /// Write a single byte.
    ///
    /// # Errors
    ///
    /// `Busy` if the transmitter stays full for the whole poll budget.
    fn write_byte(&mut self, byte: u8) -> Result<()>;

    /// Write multiple bytes.
    fn write(&mut self, bytes: &[u8]) -> Result<usize> {
        for &byte in bytes {
            self.write_byte(byte)?;
        }
        Ok(bytes.len())
    }

    /// Read a received byte if one is waiting.
    ///
    /// # Errors
    ///
    /// `WouldBlock` when nothing has been received, `Overrun` when the
    /// receiver dropped data.
    fn read_byte(&mut self) -> Result<u8>;

    /// Read into `buffer` until it is full or no more data is waiting.
    ///
    /// Returns the number of bytes read; `0` when nothing was waiting.
    fn read(&mut self, buffer: &mut [u8]) -> Result<usize> {
        for (count, slot) in buffer.iter_mut().enumerate() {
            match self.read_byte() {
                Ok(byte) => *slot = byte,
                Err(Error::WouldBlock) => return Ok(count),
                Err(err) => return Err(err),
            }
        }
        Ok(buffer.len())
    }

    /// Wait until everything written has left the transmitter.
    fn flush(&mut self) -> Result<()>;
}

/// Wrapper type to implement core::fmt::Write for SerialPort types.
/// This allows using write!/writeln! macros.
pub struct SerialWriter<T: SerialPort>(pub T);

impl<T: SerialPort> fmt::Write for SerialWriter<T> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for byte in s.bytes() {
            // Convert line endings
            if byte == b'\n' {
                self.0.write_byte(b'\r').map_err(|_| fmt::Error)?;
            }
            self.0.write_byte(byte).map_err(|_| fmt::Error)?;
        }
        Ok(())
    }
}
