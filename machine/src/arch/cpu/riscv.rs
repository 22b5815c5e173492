//! RV32 machine-mode instruction sequences.

use core::arch::asm;

const MSTATUS_MIE: usize = 1 << 3;

/// Returns `true` if interrupts were enabled.
#[inline(always)]
pub fn disable_interrupts() -> bool {
    let mstatus: usize;
    unsafe {
        asm!(
            "csrrci {0}, mstatus, {mie}",
            out(reg) mstatus,
            mie = const MSTATUS_MIE,
            options(nostack)
        );
    }
    mstatus & MSTATUS_MIE != 0
}

#[inline(always)]
pub unsafe fn enable_interrupts() {
    unsafe {
        asm!(
            "csrsi mstatus, {mie}",
            mie = const MSTATUS_MIE,
            options(nostack)
        )
    }
}

#[inline(always)]
pub fn wait_for_interrupt() {
    unsafe { asm!("wfi", options(nomem, nostack)) }
}

#[inline(always)]
#[cfg_attr(not(feature = "cortexm"), allow(dead_code))]
pub fn barrier() {
    unsafe { asm!("fence iorw, iorw", options(nostack)) }
}
