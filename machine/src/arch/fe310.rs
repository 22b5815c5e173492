use super::{cpu, interrupt};
use crate::hw::sifive::{AON_BASE, aon};

/// Reset the chip through the always-on watchdog.
///
/// The watchdog fires on its next 32 kHz tick; the core sleeps until then.
pub fn cpu_reset() -> ! {
    let _ = interrupt::disable();
    // SAFETY: this module only exists for FE310 boards.
    unsafe { aon::system_reset(AON_BASE) };
    loop {
        cpu::wait_for_interrupt();
    }
}
