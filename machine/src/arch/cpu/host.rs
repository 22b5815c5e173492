//! Off-target model: one atomic flag stands in for the interrupt-enable bit.

use core::sync::atomic::{AtomicBool, Ordering};

static ENABLED: AtomicBool = AtomicBool::new(false);

#[inline]
pub fn disable_interrupts() -> bool {
    ENABLED.swap(false, Ordering::SeqCst)
}

#[inline]
pub unsafe fn enable_interrupts() {
    ENABLED.store(true, Ordering::SeqCst);
}

#[inline]
pub fn wait_for_interrupt() {
    core::hint::spin_loop();
}

#[inline]
#[cfg_attr(not(feature = "cortexm"), allow(dead_code))]
pub fn barrier() {
    core::sync::atomic::fence(Ordering::SeqCst);
}

#[cfg_attr(not(test), allow(dead_code))]
pub fn interrupts_enabled() -> bool {
    ENABLED.load(Ordering::SeqCst)
}
