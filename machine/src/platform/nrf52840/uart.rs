use super::route;
use crate::hal::serial::{SerialConfig, SerialPort};
use crate::hal::{Error, Result};
use crate::hw::nrf52840::gpio::PinCnf;
use crate::hw::nrf52840::uart::{Uart, UartError};

impl From<UartError> for Error {
    fn from(err: UartError) -> Self {
        match err {
            UartError::UnsupportedBaudRate => Error::InvalidConfig,
            UartError::TxBusy => Error::Busy,
            UartError::TxTimeout => Error::Timeout,
            UartError::Overrun => Error::Overrun,
            // framing errors come from a baud or format mismatch
            UartError::LineError => Error::InvalidConfig,
        }
    }
}

/// Legacy UART, one byte in flight at a time.
pub struct Nrf52Serial {
    uart: Uart,
    p0_base: usize,
    tx_pin: u8,
    rx_pin: u8,
}

impl Nrf52Serial {
    /// # Safety
    ///
    /// `uart_base` must address the UART, owned by nobody else, the caller
    /// must own both pins, and `p0_base` must be the address of P0.
    pub const unsafe fn new(
        uart_base: usize,
        p0_base: usize,
        tx_pin: u8,
        rx_pin: u8,
    ) -> Self {
        Self {
            uart: unsafe { Uart::new(uart_base) },
            p0_base,
            tx_pin,
            rx_pin,
        }
    }
}

impl SerialPort for Nrf52Serial {
    fn configure(&mut self, config: SerialConfig) -> Result<()> {
        config.require_8n1()?;
        let baudrate = Uart::baudrate_for(config.baud_rate)?;
        // SAFETY: the pins belong to this port per the constructor contract.
        unsafe {
            route(self.p0_base, self.tx_pin, PinCnf::DIR_OUTPUT)?;
            route(self.p0_base, self.rx_pin, PinCnf::empty())?;
        }
        self.uart.configure(self.tx_pin, self.rx_pin, baudrate);
        log::debug!("nrf52840 uart: {} baud", config.baud_rate);
        Ok(())
    }

    fn write_byte(&mut self, byte: u8) -> Result<()> {
        self.uart.write(byte).map_err(warn)
    }

    fn read_byte(&mut self) -> Result<u8> {
        self.uart.read()?.ok_or(Error::WouldBlock)
    }

    fn flush(&mut self) -> Result<()> {
        self.uart.flush().map_err(warn)
    }
}

fn warn(err: UartError) -> Error {
    log::warn!("nrf52840 uart: {:?}", err);
    err.into()
}
