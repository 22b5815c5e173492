//! ARMv7-M (Thumb-2) instruction sequences.

use core::arch::asm;

const PRIMASK_PM: u32 = 1 << 0;

/// Returns `true` if interrupts were enabled.
#[inline(always)]
pub fn disable_interrupts() -> bool {
    let primask: u32;
    // No `nomem`: the asm doubles as a compiler barrier for the
    // critical section that follows.
    unsafe {
        asm!(
            "mrs {0}, primask",
            "cpsid i",
            out(reg) primask,
            options(nostack, preserves_flags)
        );
    }
    primask & PRIMASK_PM == 0
}

#[inline(always)]
pub unsafe fn enable_interrupts() {
    unsafe { asm!("cpsie i", options(nostack, preserves_flags)) }
}

#[inline(always)]
pub fn wait_for_interrupt() {
    unsafe { asm!("wfi", options(nomem, nostack, preserves_flags)) }
}

/// Data synchronization barrier.
#[inline(always)]
pub fn barrier() {
    unsafe { asm!("dsb sy", options(nostack, preserves_flags)) }
}
