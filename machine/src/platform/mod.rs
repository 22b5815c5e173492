//! Platform Binding Layer
//!
//! Binds the abstract peripherals in [`hal`](crate::hal) to one board.
//! Each board module implements [`Board`], which names every required
//! peripheral; a board that leaves one out does not compile.
//!
//! # Selection
//!
//! The board is a cargo feature (`hifive1b`, `pca10056`,
//! `feather-nrf52840`). The feature implies the chip (`fe310`, `nrf52840`)
//! and the chip implies the architecture family (`riscv`, `cortexm`).
//! `build.rs` checks the selection against [`target::BOARDS`] first; the
//! items below repeat the check in source so that a build without the
//! script still cannot bind zero or two boards.
//!
//! ```rust,ignore
//! use machine::platform::{Board, Selected};
//!
//! let mut led = unsafe { Selected::led() };
//! led.set_high()?;
//! ```

use crate::hal::gpio::{ConfigurablePin, OutputPin, StatefulOutputPin};
use crate::hal::serial::SerialPort;
use crate::hal::spi::SpiBus;
use crate::hal::timer::CountingTimer;

pub mod target;

use target::TargetDescriptor;

#[cfg(any(feature = "fe310", test))]
pub mod fe310;
#[cfg(any(feature = "nrf52840", test))]
pub mod nrf52840;

#[cfg(any(feature = "feather-nrf52840", test))]
pub mod feather_nrf52840;
#[cfg(any(feature = "hifive1b", test))]
pub mod hifive1b;
#[cfg(any(feature = "pca10056", test))]
pub mod pca10056;

/// The peripherals every board must provide.
///
/// Constructors only record base addresses and pin numbers. The hardware
/// is touched on the first `configure` or I/O call.
pub trait Board {
    /// Descriptor of this board; must match its row in [`target::BOARDS`].
    const TARGET: TargetDescriptor;

    type Spi: SpiBus;
    type Serial: SerialPort;
    type Led: OutputPin + StatefulOutputPin + ConfigurablePin;
    type Timer: CountingTimer;

    /// The board's general-purpose SPI master.
    ///
    /// # Safety
    ///
    /// At most one handle may exist at a time. The same holds for every
    /// other constructor of this trait.
    unsafe fn spi1() -> Self::Spi;

    /// The console UART.
    unsafe fn uart0() -> Self::Serial;

    /// The user LED.
    unsafe fn led() -> Self::Led;

    /// A free-running counter.
    unsafe fn timer() -> Self::Timer;
}

// One independent item per board. Two enabled boards define `Selected`
// twice and fail to compile.
#[cfg(feature = "hifive1b")]
pub use hifive1b::HiFive1b as Selected;

#[cfg(feature = "pca10056")]
pub use pca10056::Pca10056 as Selected;

#[cfg(feature = "feather-nrf52840")]
pub use feather_nrf52840::FeatherNrf52840 as Selected;

#[cfg(not(any(
    feature = "hifive1b",
    feature = "pca10056",
    feature = "feather-nrf52840"
)))]
compile_error!(
    "No board selected!\n\
    Use: cargo build -p machine --features hifive1b\n\
    Or:  cargo build -p machine --no-default-features --features pca10056\n\
    Or:  cargo build -p machine --no-default-features --features feather-nrf52840"
);

#[cfg(any(
    all(feature = "hifive1b", feature = "pca10056"),
    all(feature = "hifive1b", feature = "feather-nrf52840"),
    all(feature = "pca10056", feature = "feather-nrf52840"),
))]
compile_error!("Multiple boards selected! Enable exactly one board feature.");
