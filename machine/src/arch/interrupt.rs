//! Global interrupt masking.

use super::cpu;
use common::sync::irq::IrqControl;

/// Interrupt-enable state captured by [`disable`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[must_use = "pass the state to `restore`"]
pub struct IrqState {
    was_enabled: bool,
}

impl IrqState {
    pub const fn was_enabled(&self) -> bool {
        self.was_enabled
    }
}

/// Mask interrupts and report whether they were enabled before.
#[inline(always)]
pub fn disable() -> IrqState {
    IrqState {
        was_enabled: cpu::disable_interrupts(),
    }
}

/// Unmask interrupts if they were enabled when `state` was captured.
#[inline(always)]
pub fn restore(state: IrqState) {
    if state.was_enabled {
        // SAFETY: interrupts were enabled before the matching `disable`.
        unsafe { cpu::enable_interrupts() }
    }
}

/// Unmask interrupts.
///
/// # Safety
///
/// Must not be called inside a critical section, and every handler that
/// can fire must be ready to run.
#[inline(always)]
pub unsafe fn enable() {
    unsafe { cpu::enable_interrupts() }
}

/// Run `f` with interrupts masked.
#[inline]
pub fn free<R>(f: impl FnOnce() -> R) -> R {
    let state = disable();
    let result = f();
    restore(state);
    result
}

/// Interrupt control for `common::sync::IrqSpinLock`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Irq;

impl IrqControl for Irq {
    type State = IrqState;

    #[inline(always)]
    fn disable() -> IrqState {
        disable()
    }

    #[inline(always)]
    fn restore(state: IrqState) {
        restore(state)
    }
}
