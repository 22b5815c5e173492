use crate::hal::spi::{BitOrder, SpiBus, SpiConfig};
use crate::hal::{Error, Result};
use crate::hw::sifive::gpio::{Gpio, Iof};
use crate::hw::sifive::qspi::{CsMode, Format, Qspi, QspiError, SckMode};

impl From<QspiError> for Error {
    fn from(err: QspiError) -> Self {
        match err {
            QspiError::TxFull => Error::Busy,
            QspiError::RxTimeout => Error::Timeout,
            QspiError::InvalidDivisor => Error::InvalidConfig,
        }
    }
}

/// QSPI controller driven as a plain single-lane SPI master.
///
/// The controller's chip-select outputs are left off, as on every other
/// bus; callers drive chip select themselves.
pub struct Fe310Spi {
    qspi: Qspi,
    gpio: Gpio,
    iof_pins: u32,
    clock_hz: u32,
}

impl Fe310Spi {
    /// # Safety
    ///
    /// `qspi_base` must address a QSPI controller owned by nobody else, and
    /// `gpio_base` the GPIO block whose `iof_pins` carry its signals.
    pub const unsafe fn new(
        qspi_base: usize,
        gpio_base: usize,
        iof_pins: u32,
        clock_hz: u32,
    ) -> Self {
        Self {
            qspi: unsafe { Qspi::new(qspi_base) },
            gpio: unsafe { Gpio::new(gpio_base) },
            iof_pins,
            clock_hz,
        }
    }
}

impl SpiBus for Fe310Spi {
    fn configure(&mut self, config: SpiConfig) -> Result<()> {
        let frequency = config.effective_frequency();
        let divisor = Qspi::divisor_for(self.clock_hz, frequency)?;

        let mut mode = SckMode::empty();
        mode.set(SckMode::POL, config.mode.polarity());
        mode.set(SckMode::PHA, config.mode.phase());

        let mut format = Format::LEN_8;
        format.set(Format::ENDIAN_LSB, config.bit_order == BitOrder::LsbFirst);

        self.qspi.configure(divisor, mode, format, CsMode::Off)?;
        self.gpio.enable_iof(self.iof_pins, Iof::Iof0);
        log::debug!(
            "fe310 spi: {} Hz (div {}), {:?}, {:?}",
            frequency,
            divisor,
            config.mode,
            config.bit_order
        );
        Ok(())
    }

    fn transfer_byte(&mut self, byte: u8) -> Result<u8> {
        self.qspi.transfer(byte).map_err(|err| {
            log::warn!("fe310 spi: {:?}", err);
            err.into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hal::spi::SpiMode;
    use crate::hw::fake::RegisterBlock;

    const SCKDIV: usize = 0x00;
    const SCKMODE: usize = 0x04;
    const CSMODE: usize = 0x18;
    const FMT: usize = 0x40;
    const TXDATA: usize = 0x48;
    const RXDATA: usize = 0x4C;
    const IOF_EN: usize = 0x38;

    fn bus(qspi: &RegisterBlock, gpio: &RegisterBlock) -> Fe310Spi {
        unsafe { Fe310Spi::new(qspi.base(), gpio.base(), 0b11_1000, 16_000_000) }
    }

    #[test]
    fn configure_programs_divisor_mode_and_pins() {
        let qspi = RegisterBlock::new(0x80);
        let gpio = RegisterBlock::new(0x44);
        let mut spi = bus(&qspi, &gpio);
        let config = SpiConfig::new(1_000_000)
            .with_mode(SpiMode::Mode3)
            .with_bit_order(BitOrder::LsbFirst);
        spi.configure(config).unwrap();
        assert_eq!(qspi.get(SCKDIV), 7);
        assert_eq!(qspi.get(SCKMODE), 0b11);
        assert_eq!(qspi.get(FMT), (8 << 16) | (1 << 2));
        assert_eq!(gpio.get(IOF_EN), 0b11_1000);
    }

    #[test]
    fn chip_select_is_left_to_the_caller() {
        let qspi = RegisterBlock::new(0x80);
        let gpio = RegisterBlock::new(0x44);
        let mut spi = bus(&qspi, &gpio);
        spi.configure(SpiConfig::new(0)).unwrap();
        assert_eq!(qspi.get(CSMODE), 3);
        // SS0 is not handed to the controller
        assert_eq!(gpio.get(IOF_EN) & (1 << 2), 0);
    }

    #[test]
    fn zero_frequency_uses_default_clock() {
        let qspi = RegisterBlock::new(0x80);
        let gpio = RegisterBlock::new(0x44);
        let mut spi = bus(&qspi, &gpio);
        spi.configure(SpiConfig::new(0)).unwrap();
        // 16 MHz / (2 * (1 + 1)) = 4 MHz
        assert_eq!(qspi.get(SCKDIV), 1);
    }

    #[test]
    fn unreachable_frequency_is_invalid() {
        let qspi = RegisterBlock::new(0x80);
        let gpio = RegisterBlock::new(0x44);
        let mut spi = bus(&qspi, &gpio);
        assert_eq!(
            spi.configure(SpiConfig::new(1_000)),
            Err(Error::InvalidConfig)
        );
        assert_eq!(gpio.get(IOF_EN), 0);
    }

    #[test]
    fn empty_transfer_leaves_registers_alone() {
        let qspi = RegisterBlock::new(0x80);
        let gpio = RegisterBlock::new(0x44);
        let mut spi = bus(&qspi, &gpio);
        let before = qspi.snapshot();
        assert_eq!(spi.transfer(&mut []), Ok(()));
        assert_eq!(spi.write(&[]), Ok(()));
        assert_eq!(qspi.snapshot(), before);
    }

    #[test]
    fn full_fifo_is_busy() {
        let qspi = RegisterBlock::new(0x80);
        let gpio = RegisterBlock::new(0x44);
        qspi.set(TXDATA, 1 << 31);
        let mut spi = bus(&qspi, &gpio);
        assert_eq!(spi.transfer_byte(0xAA), Err(Error::Busy));
    }

    #[test]
    fn missing_reply_is_timeout() {
        let qspi = RegisterBlock::new(0x80);
        let gpio = RegisterBlock::new(0x44);
        qspi.set(RXDATA, 1 << 31);
        let mut spi = bus(&qspi, &gpio);
        let mut buf = [1, 2];
        assert_eq!(spi.transfer(&mut buf), Err(Error::Timeout));
    }

    #[test]
    fn reply_byte_is_returned() {
        let qspi = RegisterBlock::new(0x80);
        let gpio = RegisterBlock::new(0x44);
        qspi.set(RXDATA, 0x5A);
        let mut spi = bus(&qspi, &gpio);
        let mut read = [0u8; 2];
        spi.tx(&[0x9F], &mut read).unwrap();
        assert_eq!(read, [0x5A, 0x5A]);
        // the padding byte went out last
        assert_eq!(qspi.get(TXDATA), 0);
    }
}
