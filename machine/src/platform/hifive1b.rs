//! SiFive HiFive1 Rev B (FE310-G002).

use super::Board;
use super::fe310::{Fe310Pin, Fe310Serial, Fe310Spi, MachineTimer, pin_mask};
use super::target::{ArchFamily, TargetDescriptor};
use crate::hw::sifive::{CLINT_BASE, GPIO0_BASE, QSPI1_BASE, UART0_BASE};

/// `tlclk`: the 16 MHz crystal with the PLL bypassed.
pub const BUS_CLOCK_HZ: u32 = 16_000_000;

/// QSPI1 on IOF0: MOSI, MISO, SCK. SS0 (pin 2) stays a plain GPIO for
/// the caller's chip select.
const SPI1_PINS: [u8; 3] = [3, 4, 5];
/// UART0 on IOF0: RX, TX (wired to the debug adapter's virtual COM port).
const UART0_PINS: [u8; 2] = [16, 17];
/// Green channel of the RGB LED, active low.
const LED_GREEN: u8 = 19;

pub struct HiFive1b;

impl Board for HiFive1b {
    const TARGET: TargetDescriptor = TargetDescriptor {
        arch: ArchFamily::RiscV,
        board: "hifive1b",
    };

    type Spi = Fe310Spi;
    type Serial = Fe310Serial;
    type Led = Fe310Pin;
    type Timer = MachineTimer;

    unsafe fn spi1() -> Fe310Spi {
        let pins = pin_mask(&SPI1_PINS);
        unsafe { Fe310Spi::new(QSPI1_BASE, GPIO0_BASE, pins, BUS_CLOCK_HZ) }
    }

    unsafe fn uart0() -> Fe310Serial {
        let pins = pin_mask(&UART0_PINS);
        unsafe { Fe310Serial::new(UART0_BASE, GPIO0_BASE, pins, BUS_CLOCK_HZ) }
    }

    unsafe fn led() -> Fe310Pin {
        unsafe { Fe310Pin::new(GPIO0_BASE, LED_GREEN) }
    }

    unsafe fn timer() -> MachineTimer {
        unsafe { MachineTimer::new(CLINT_BASE) }
    }
}
