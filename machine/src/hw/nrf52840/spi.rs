//! nRF52840 legacy SPI master (SPI0..SPI2).

use super::TRIGGER;
use crate::hw::{read_reg, wait_until, write_reg};
use bitflags::bitflags;

const EVENTS_READY: usize = 0x108;
const ENABLE: usize = 0x500;
const PSEL_SCK: usize = 0x508;
const PSEL_MOSI: usize = 0x50C;
const PSEL_MISO: usize = 0x510;
const RXD: usize = 0x518;
const TXD: usize = 0x51C;
const FREQUENCY: usize = 0x524;
const CONFIG: usize = 0x554;

const ENABLE_SPI: u32 = 1;

bitflags! {
    /// `CONFIG` register.
    #[derive(Debug, Copy, Clone, PartialEq, Eq)]
    pub struct Config: u32 {
        /// Shift the least significant bit first.
        const ORDER_LSB_FIRST = 1 << 0;
        /// Sample on the trailing edge.
        const CPHA_TRAILING = 1 << 1;
        /// Clock idles high.
        const CPOL_ACTIVE_LOW = 1 << 2;
    }
}

/// Supported SCK rates and their `FREQUENCY` register values.
const FREQUENCIES: [(u32, u32); 7] = [
    (8_000_000, 0x8000_0000),
    (4_000_000, 0x4000_0000),
    (2_000_000, 0x2000_0000),
    (1_000_000, 0x1000_0000),
    (500_000, 0x0800_0000),
    (250_000, 0x0400_0000),
    (125_000, 0x0200_0000),
];

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SpiError {
    /// Requested rate is below the slowest supported clock.
    UnsupportedFrequency,
    /// `EVENTS_READY` never fired.
    Timeout,
}

/// Pins routed to the controller.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SpiPins {
    pub sck: u8,
    pub mosi: u8,
    pub miso: u8,
}

pub struct Spi {
    base: usize,
}

impl Spi {
    /// # Safety
    ///
    /// `base` must be the address of a legacy SPI register block and only
    /// one instance may exist per controller.
    pub const unsafe fn new(base: usize) -> Self {
        Self { base }
    }

    /// `FREQUENCY` value of the fastest supported clock not above `hz`.
    pub fn frequency_for(hz: u32) -> Result<u32, SpiError> {
        FREQUENCIES
            .iter()
            .find(|(rate, _)| *rate <= hz)
            .map(|&(_, value)| value)
            .ok_or(SpiError::UnsupportedFrequency)
    }

    /// Route pins, set clock and mode, and enable the controller.
    pub fn configure(&mut self, pins: SpiPins, frequency: u32, config: Config) {
        write_reg(self.base, ENABLE, 0);
        write_reg(self.base, PSEL_SCK, super::psel(pins.sck));
        write_reg(self.base, PSEL_MOSI, super::psel(pins.mosi));
        write_reg(self.base, PSEL_MISO, super::psel(pins.miso));
        write_reg(self.base, FREQUENCY, frequency);
        write_reg(self.base, CONFIG, config.bits());
        write_reg(self.base, EVENTS_READY, 0);
        write_reg(self.base, ENABLE, ENABLE_SPI);
    }

    /// Shift one byte out and return the byte shifted in.
    pub fn transfer(&mut self, byte: u8) -> Result<u8, SpiError> {
        write_reg(self.base, TXD, byte as u32);
        if !wait_until(|| read_reg(self.base, EVENTS_READY) == TRIGGER) {
            return Err(SpiError::Timeout);
        }
        write_reg(self.base, EVENTS_READY, 0);
        Ok(read_reg(self.base, RXD) as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hw::fake::RegisterBlock;

    #[test]
    fn frequency_rounds_down() {
        assert_eq!(Spi::frequency_for(8_000_000), Ok(0x8000_0000));
        assert_eq!(Spi::frequency_for(32_000_000), Ok(0x8000_0000));
        assert_eq!(Spi::frequency_for(3_000_000), Ok(0x2000_0000));
        assert_eq!(Spi::frequency_for(125_000), Ok(0x0200_0000));
        assert_eq!(
            Spi::frequency_for(100_000),
            Err(SpiError::UnsupportedFrequency)
        );
    }

    #[test]
    fn configure_routes_pins_and_enables() {
        let regs = RegisterBlock::new(0x600);
        let mut spi = unsafe { Spi::new(regs.base()) };
        let pins = SpiPins {
            sck: 47,
            mosi: 45,
            miso: 46,
        };
        spi.configure(pins, 0x4000_0000, Config::CPOL_ACTIVE_LOW);
        assert_eq!(regs.get(PSEL_SCK), 47);
        assert_eq!(regs.get(PSEL_MOSI), 45);
        assert_eq!(regs.get(PSEL_MISO), 46);
        assert_eq!(regs.get(FREQUENCY), 0x4000_0000);
        assert_eq!(regs.get(CONFIG), 0b100);
        assert_eq!(regs.get(ENABLE), ENABLE_SPI);
    }

    #[test]
    fn ready_event_completes_transfer() {
        let regs = RegisterBlock::new(0x600);
        regs.set(EVENTS_READY, TRIGGER);
        regs.set(RXD, 0x42);
        let mut spi = unsafe { Spi::new(regs.base()) };
        assert_eq!(spi.transfer(0x99), Ok(0x42));
        assert_eq!(regs.get(TXD), 0x99);
        assert_eq!(regs.get(EVENTS_READY), 0);
    }

    #[test]
    fn silent_controller_times_out() {
        let regs = RegisterBlock::new(0x600);
        let mut spi = unsafe { Spi::new(regs.base()) };
        assert_eq!(spi.transfer(0x01), Err(SpiError::Timeout));
    }
}
