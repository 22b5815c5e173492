//! Nordic nRF52840 DK (PCA10056).

use super::Board;
use super::nrf52840::{Nrf52Pin, Nrf52Serial, Nrf52Spi, Nrf52Timer};
use super::target::{ArchFamily, TargetDescriptor};
use crate::hw::nrf52840::spi::SpiPins;
use crate::hw::nrf52840::{P0_BASE, SPI1_BASE, TIMER0_BASE, UART0_BASE};

/// Arduino header D13/D11/D12.
const SPI1_PINS: SpiPins = SpiPins {
    sck: 47,
    mosi: 45,
    miso: 46,
};
/// Routed to the interface MCU's virtual COM port.
const UART0_TX: u8 = 6;
const UART0_RX: u8 = 8;
/// LED1, active low.
const LED1: u8 = 13;

pub struct Pca10056;

impl Board for Pca10056 {
    const TARGET: TargetDescriptor = TargetDescriptor {
        arch: ArchFamily::CortexM,
        board: "pca10056",
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
        unsafe { Nrf52Pin::new(P0_BASE, LED1) }
    }

    unsafe fn timer() -> Nrf52Timer {
        unsafe { Nrf52Timer::new(TIMER0_BASE) }
    }
}
