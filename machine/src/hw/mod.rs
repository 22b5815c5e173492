//! Vendor Register Packages
//!
//! Register-level drivers for each supported chip family. Every package
//! exposes the same narrow contract: a `const unsafe fn new(base)`
//! constructor and a handful of typed operations returning the package's
//! own error enum. Only `platform` and `arch` use these directly.
//!
//! - [`sifive`]: SiFive FE310 (QSPI, GPIO, UART, AON watchdog, CLINT)
//! - [`nrf52840`]: Nordic nRF52840 (SPI, GPIO, UART, TIMER)
//! - [`arm`]: ARMv7-M system control block

#[cfg(any(feature = "cortexm", test))]
pub mod arm;
#[cfg(any(feature = "nrf52840", test))]
pub mod nrf52840;
#[cfg(any(feature = "fe310", test))]
pub mod sifive;

use core::ptr::{read_volatile, write_volatile};

/// Number of status-register polls a driver performs before giving up.
///
/// Every wait on a hardware flag in this crate is bounded by this budget.
/// At the core clocks of the supported chips it amounts to a few
/// milliseconds, far more than any single byte takes on the wire.
pub const POLL_LIMIT: u32 = 100_000;

#[inline]
pub(crate) fn read_reg(base: usize, offset: usize) -> u32 {
    unsafe { read_volatile((base + offset) as *const u32) }
}

#[inline]
pub(crate) fn write_reg(base: usize, offset: usize, value: u32) {
    unsafe { write_volatile((base + offset) as *mut u32, value) }
}

/// Poll `ready` up to [`POLL_LIMIT`] times.
///
/// Returns `false` if the condition never became true.
#[inline]
pub(crate) fn wait_until(mut ready: impl FnMut() -> bool) -> bool {
    for _ in 0..POLL_LIMIT {
        if ready() {
            return true;
        }
        core::hint::spin_loop();
    }
    false
}
