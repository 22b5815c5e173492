//! Control Operations
//!
//! Processor-level operations that have no register-block home: reset,
//! global interrupt masking and low-power wait. None of them take locks or
//! log, so they are safe to call from fault and interrupt handlers.
//!
//! The instruction sequences are picked by `target_arch`; off-target (unit
//! tests, host type-checking) an atomic flag stands in for the interrupt
//! enable bit. [`cpu_reset`] is picked by the board's chip family instead,
//! with one independent definition per family.

pub mod interrupt;

cfg_if::cfg_if! {
    if #[cfg(target_arch = "arm")] {
        #[path = "cpu/arm.rs"]
        mod cpu;
    } else if #[cfg(target_arch = "riscv32")] {
        #[path = "cpu/riscv.rs"]
        mod cpu;
    } else {
        #[path = "cpu/host.rs"]
        mod cpu;
    }
}

#[cfg(feature = "cortexm")]
mod cortexm;
#[cfg(feature = "cortexm")]
pub use cortexm::cpu_reset;

#[cfg(feature = "fe310")]
mod fe310;
#[cfg(feature = "fe310")]
pub use fe310::cpu_reset;

pub use interrupt::{Irq, IrqState};

/// Sleep until an interrupt is pending.
///
/// Returns immediately if one already is, including while interrupts are
/// masked, so it can sit inside a polling loop.
#[inline(always)]
pub fn wait_for_interrupt() {
    cpu::wait_for_interrupt();
}
