use super::route;
use crate::hal::spi::{BitOrder, SpiBus, SpiConfig};
use crate::hal::{Error, Result};
use crate::hw::nrf52840::gpio::PinCnf;
use crate::hw::nrf52840::spi::{Config, Spi, SpiError, SpiPins};

impl From<SpiError> for Error {
    fn from(err: SpiError) -> Self {
        match err {
            SpiError::UnsupportedFrequency => Error::InvalidConfig,
            SpiError::Timeout => Error::Timeout,
        }
    }
}

/// Legacy SPI master. The SCK rate rounds down to the nearest supported
/// step (125 kHz to 8 MHz).
pub struct Nrf52Spi {
    spi: Spi,
    p0_base: usize,
    pins: SpiPins,
}

impl Nrf52Spi {
    /// # Safety
    ///
    /// `spi_base` must address an SPI controller owned by nobody else, the
    /// caller must own `pins`, and `p0_base` must be the address of P0.
    pub const unsafe fn new(spi_base: usize, p0_base: usize, pins: SpiPins) -> Self {
        Self {
            spi: unsafe { Spi::new(spi_base) },
            p0_base,
            pins,
        }
    }
}

impl SpiBus for Nrf52Spi {
    fn configure(&mut self, config: SpiConfig) -> Result<()> {
        let frequency = Spi::frequency_for(config.effective_frequency())?;

        let mut bits = Config::empty();
        bits.set(Config::CPOL_ACTIVE_LOW, config.mode.polarity());
        bits.set(Config::CPHA_TRAILING, config.mode.phase());
        bits.set(Config::ORDER_LSB_FIRST, config.bit_order == BitOrder::LsbFirst);

        // SAFETY: the pins belong to this bus per the constructor contract.
        unsafe {
            route(self.p0_base, self.pins.sck, PinCnf::DIR_OUTPUT)?;
            route(self.p0_base, self.pins.mosi, PinCnf::DIR_OUTPUT)?;
            route(self.p0_base, self.pins.miso, PinCnf::empty())?;
        }
        self.spi.configure(self.pins, frequency, bits);
        log::debug!(
            "nrf52840 spi: {} Hz requested, FREQUENCY={:#010x}, {:?}",
            config.effective_frequency(),
            frequency,
            bits
        );
        Ok(())
    }

    fn transfer_byte(&mut self, byte: u8) -> Result<u8> {
        self.spi.transfer(byte).map_err(|err| {
            log::warn!("nrf52840 spi: {:?}", err);
            err.into()
        })
    }
}
