//! FE310 chip adapters.
//!
//! Each adapter wraps one register-package driver, implements the matching
//! `hal` trait and folds the vendor error into [`hal::Error`]. Boards built
//! on the FE310 only supply base addresses, pins and the bus clock.
//!
//! [`hal::Error`]: crate::hal::Error

mod gpio;
mod spi;
mod timer;
mod uart;

pub use gpio::Fe310Pin;
pub use spi::Fe310Spi;
pub use timer::MachineTimer;
pub use uart::Fe310Serial;

use crate::hal::Error;
use crate::hw::sifive::gpio::GpioError;

impl From<GpioError> for Error {
    fn from(err: GpioError) -> Self {
        match err {
            GpioError::InvalidPin => Error::InvalidConfig,
        }
    }
}

/// Bit mask covering `pins`.
pub(crate) const fn pin_mask(pins: &[u8]) -> u32 {
    let mut mask = 0;
    let mut i = 0;
    while i < pins.len() {
        mask |= 1 << pins[i];
        i += 1;
    }
    mask
}
