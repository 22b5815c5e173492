use crate::hal::serial::{SerialConfig, SerialPort};
use crate::hal::{Error, Result};
use crate::hw::sifive::gpio::{Gpio, Iof};
use crate::hw::sifive::uart::{Uart, UartError};

impl From<UartError> for Error {
    fn from(err: UartError) -> Self {
        match err {
            UartError::InvalidDivisor => Error::InvalidConfig,
            UartError::TxFull => Error::Busy,
            UartError::TxTimeout => Error::Timeout,
        }
    }
}

/// FE310 UART behind the `SerialPort` trait.
///
/// The receiver has no error flags, so `read_byte` never reports
/// `Overrun`; bytes beyond the 8-entry FIFO are silently dropped.
pub struct Fe310Serial {
    uart: Uart,
    gpio: Gpio,
    iof_pins: u32,
    clock_hz: u32,
}

impl Fe310Serial {
    /// # Safety
    ///
    /// `uart_base` must address a UART owned by nobody else, and
    /// `gpio_base` the GPIO block whose `iof_pins` carry its signals.
    pub const unsafe fn new(
        uart_base: usize,
        gpio_base: usize,
        iof_pins: u32,
        clock_hz: u32,
    ) -> Self {
        Self {
            uart: unsafe { Uart::new(uart_base) },
            gpio: unsafe { Gpio::new(gpio_base) },
            iof_pins,
            clock_hz,
        }
    }
}

impl SerialPort for Fe310Serial {
    fn configure(&mut self, config: SerialConfig) -> Result<()> {
        config.require_8n1()?;
        let divisor = Uart::divisor_for(self.clock_hz, config.baud_rate)?;
        self.uart.configure(divisor)?;
        self.gpio.enable_iof(self.iof_pins, Iof::Iof0);
        log::debug!("fe310 uart: {} baud (div {})", config.baud_rate, divisor);
        Ok(())
    }

    fn write_byte(&mut self, byte: u8) -> Result<()> {
        self.uart.write(byte).map_err(warn)
    }

    fn read_byte(&mut self) -> Result<u8> {
        self.uart.read().ok_or(Error::WouldBlock)
    }

    fn flush(&mut self) -> Result<()> {
        self.uart.flush().map_err(warn)
    }
}

fn warn(err: UartError) -> Error {
    log::warn!("fe310 uart: {:?}", err);
    err.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hal::serial::{DataBits, StopBits};
    use crate::hw::fake::{RegisterBlock, log_capture};

    const TXDATA: usize = 0x00;
    const RXDATA: usize = 0x04;
    const DIV: usize = 0x18;
    const IOF_EN: usize = 0x38;

    fn port(uart: &RegisterBlock, gpio: &RegisterBlock) -> Fe310Serial {
        let pins = (1 << 16) | (1 << 17);
        unsafe { Fe310Serial::new(uart.base(), gpio.base(), pins, 16_000_000) }
    }

    #[test]
    fn configure_sets_divisor_and_routes_pins() {
        let uart = RegisterBlock::new(0x20);
        let gpio = RegisterBlock::new(0x44);
        let mut serial = port(&uart, &gpio);
        serial.configure(SerialConfig::new_8n1(115_200)).unwrap();
        assert_eq!(uart.get(DIV), 137);
        assert_eq!(gpio.get(IOF_EN), 0b11 << 16);
    }

    #[test]
    fn rejects_other_framing_before_touching_hardware() {
        let uart = RegisterBlock::new(0x20);
        let gpio = RegisterBlock::new(0x44);
        let mut serial = port(&uart, &gpio);
        let config = SerialConfig {
            data_bits: DataBits::Seven,
            stop_bits: StopBits::Two,
            ..SerialConfig::default()
        };
        assert_eq!(serial.configure(config), Err(Error::InvalidConfig));
        assert_eq!(
            serial.configure(SerialConfig::new_8n1(0)),
            Err(Error::InvalidConfig)
        );
        assert_eq!(uart.get(DIV), 0);
    }

    #[test]
    fn empty_receiver_would_block() {
        let uart = RegisterBlock::new(0x20);
        let gpio = RegisterBlock::new(0x44);
        uart.set(RXDATA, 1 << 31);
        let mut serial = port(&uart, &gpio);
        assert_eq!(serial.read_byte(), Err(Error::WouldBlock));
        let mut buf = [0u8; 4];
        assert_eq!(serial.read(&mut buf), Ok(0));
    }

    #[test]
    fn stuck_fifo_is_busy() {
        let uart = RegisterBlock::new(0x20);
        let gpio = RegisterBlock::new(0x44);
        uart.set(TXDATA, 1 << 31);
        let mut serial = port(&uart, &gpio);
        assert_eq!(serial.write(b"hi"), Err(Error::Busy));
        assert_eq!(serial.flush(), Err(Error::Timeout));
    }

    #[test]
    fn stuck_transmitter_is_logged() {
        log_capture::install();
        let uart = RegisterBlock::new(0x20);
        let gpio = RegisterBlock::new(0x44);
        uart.set(TXDATA, 1 << 31);
        let mut serial = port(&uart, &gpio);
        assert_eq!(serial.write_byte(b'!'), Err(Error::Busy));
        assert_eq!(serial.flush(), Err(Error::Timeout));
        assert!(log_capture::warned("fe310 uart: TxFull"));
        assert!(log_capture::warned("fe310 uart: TxTimeout"));
    }
}
