//! Nordic nRF52840 register package.
//!
//! Only the legacy (non-EasyDMA) SPI and UART peripherals are used, so no
//! RAM buffer ownership crosses into the hardware.

pub mod gpio;
pub mod spi;
pub mod timer;
pub mod uart;

pub const UART0_BASE: usize = 0x4000_2000;
pub const SPI0_BASE: usize = 0x4000_3000;
pub const SPI1_BASE: usize = 0x4000_4000;
pub const TIMER0_BASE: usize = 0x4000_8000;
pub const SPI2_BASE: usize = 0x4002_3000;
pub const P0_BASE: usize = 0x5000_0000;
pub const P1_BASE: usize = 0x5000_0300;

/// Task/event registers are written with 1 to trigger and 0 to clear.
pub(crate) const TRIGGER: u32 = 1;

/// `PSEL` value for a global pin number (`port * 32 + pin`).
pub const fn psel(pin: u8) -> u32 {
    pin as u32
}
