//! Compile-Time Bound Hardware Abstraction Layer
//!
//! Firmware is written once against abstract peripherals and control
//! operations; the board chosen with a cargo feature decides, at build time,
//! which vendor driver each one resolves to. No dispatch remains at runtime.
//!
//! # Module Organization
//!
//! - [`hal`]: Platform-independent peripheral traits and the error taxonomy
//! - [`platform`]: Board selection, the [`Board`](platform::Board) binding
//!   trait and per-chip adapters
//! - [`hw`]: Register-level vendor drivers
//! - [`arch`]: Reset, interrupt masking and low-power wait
//!
//! # Usage Example
//!
//! ```rust,ignore
//! use machine::hal::serial::{SerialConfig, SerialPort};
//! use machine::hal::spi::{SpiBus, SpiConfig};
//!
//! let mut p = machine::Peripherals::take().unwrap();
//! p.uart0.configure(SerialConfig::new_8n1(115_200))?;
//! p.spi1.configure(SpiConfig::new(0))?;
//! p.spi1.write(&[0x9F])?;
//! ```

#![cfg_attr(not(test), no_std)]

pub mod arch;
pub mod hal;
pub mod hw;
pub mod platform;

use core::sync::atomic::{AtomicBool, Ordering};
use platform::{Board, Selected};

pub use arch::{Irq, IrqState, cpu_reset, interrupt, wait_for_interrupt};
pub use hal::{Error, Result};
pub use platform::target::{ArchFamily, TargetDescriptor};

/// The board this crate was built for.
pub const TARGET: TargetDescriptor = <Selected as Board>::TARGET;

/// SPI master of the selected board.
pub type Spi = <Selected as Board>::Spi;
/// Console UART of the selected board.
pub type Serial = <Selected as Board>::Serial;
/// User LED of the selected board.
pub type Led = <Selected as Board>::Led;
/// Free-running counter of the selected board.
pub type Timer = <Selected as Board>::Timer;

static TAKEN: AtomicBool = AtomicBool::new(false);

/// Every peripheral of the selected board, owned once.
pub struct Peripherals {
    pub spi1: Spi,
    pub uart0: Serial,
    pub led: Led,
    pub timer: Timer,
}

impl Peripherals {
    /// Hand out the peripherals on the first call; `None` afterwards.
    pub fn take() -> Option<Self> {
        if TAKEN.swap(true, Ordering::AcqRel) {
            return None;
        }
        // SAFETY: the flag guarantees this runs once.
        Some(unsafe { Self::steal() })
    }

    /// Create the peripherals regardless of earlier calls.
    ///
    /// # Safety
    ///
    /// The caller must not use the result alongside another live instance.
    pub unsafe fn steal() -> Self {
        TAKEN.store(true, Ordering::Release);
        unsafe {
            Self {
                spi1: Selected::spi1(),
                uart0: Selected::uart0(),
                led: Selected::led(),
                timer: Selected::timer(),
            }
        }
    }
}
