//! nRF52840 chip adapters, shared by every board built on the chip.
//!
//! Pins are global numbers (`port * 32 + index`); P1 only has 16 lines.

mod gpio;
mod spi;
mod timer;
mod uart;

pub use gpio::Nrf52Pin;
pub use spi::Nrf52Spi;
pub use timer::Nrf52Timer;
pub use uart::Nrf52Serial;

use crate::hal::{Error, Result};
use crate::hw::nrf52840::gpio::{GpioError, PinCnf, Port};
use crate::hw::nrf52840::{P0_BASE, P1_BASE};

const P1_OFFSET: usize = P1_BASE - P0_BASE;

impl From<GpioError> for Error {
    fn from(err: GpioError) -> Self {
        match err {
            GpioError::InvalidPin => Error::InvalidConfig,
        }
    }
}

/// The port holding global pin `pin`, and the pin's index within it.
///
/// # Safety
///
/// `p0_base` must be the address of port P0 and the caller must own `pin`.
pub(crate) unsafe fn port_for(p0_base: usize, pin: u8) -> Result<(Port, u8)> {
    match pin / 32 {
        0 => Ok((unsafe { Port::new(p0_base, 32) }, pin)),
        1 => Ok((unsafe { Port::new(p0_base + P1_OFFSET, 16) }, pin - 32)),
        _ => Err(Error::InvalidConfig),
    }
}

/// Set the pin configuration of a peripheral signal before handing the pin
/// to the peripheral.
///
/// # Safety
///
/// Same contract as [`port_for`].
pub(crate) unsafe fn route(p0_base: usize, pin: u8, cnf: PinCnf) -> Result<()> {
    let (mut port, index) = unsafe { port_for(p0_base, pin) }?;
    port.configure(index, cnf)?;
    Ok(())
}
