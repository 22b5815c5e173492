//! Interrupt-safe locking for `no_std` firmware.
//!
//! [`IrqSpinLock`] masks interrupts while held, through whatever
//! [`IrqControl`] the HAL supplies for the selected architecture, so the
//! same lock can be taken from thread, interrupt and fault context.

pub mod irq;
pub mod irq_spinlock;

pub use irq::IrqControl;
pub use irq_spinlock::IrqSpinLock;
