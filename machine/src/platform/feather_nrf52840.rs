//! Adafruit Feather nRF52840 Express. Same chip as the DK, different pins.

use super::Board;
use super::nrf52840::{Nrf52Pin, Nrf52Serial, Nrf52Spi, Nrf52Timer};
use super::target::{ArchFamily, TargetDescriptor};
use crate::hw::nrf52840::spi::SpiPins;
use crate::hw::nrf52840::{P0_BASE, SPI1_BASE, TIMER0_BASE, UART0_BASE};

const SPI1_PINS: SpiPins = SpiPins {
    sck: 14,
    mosi: 13,
    miso: 15,
};
const UART0_TX: u8 = 25;
const UART0_RX: u8 = 24;
/// Red LED next to the USB connector (P1.15), active high.
const LED_RED: u8 = 47;

pub struct FeatherNrf52840;

impl Board for FeatherNrf52840 {
    const TARGET: TargetDescriptor = TargetDescriptor {
        arch: ArchFamily::CortexM,
        board: "feather-nrf52840",
    };

    type Spi = Nrf52Spi;
    type Serial = Nrf52Serial;
    type Led = Nrf52Pin;
    type Timer = Nrf52Timer;

    unsafe fn spi1() -> Nrf52Spi {
        unsafe { Nrf52Spi::new(SPI1_BASE, P0_BASE, SPI1_PINS) }
    }

    unsafe fn uart0() -> Nrf52Serial {
        unsafe { Nrf52Serial::new(UART0_BASE, P0_BASE, UART0_TX, UART0_RX) }
    }

    unsafe fn led() -> Nrf52Pin {
        unsafe { Nrf52Pin::new(P0_BASE, LED_RED) }
    }

    unsafe fn timer() -> Nrf52Timer {
        unsafe { Nrf52Timer::new(TIMER0_BASE) }
    }
}
