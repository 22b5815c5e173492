use super::{cpu, interrupt};
use crate::hw::arm::scb;

/// Reset the whole system through the SCB.
pub fn cpu_reset() -> ! {
    let _ = interrupt::disable();
    cpu::barrier();
    // SAFETY: this module only exists for Cortex-M boards.
    unsafe { scb::system_reset() };
    cpu::barrier();
    loop {
        core::hint::spin_loop();
    }
}
