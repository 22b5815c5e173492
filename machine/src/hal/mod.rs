//! Hardware Abstraction Layer (HAL) - Platform-Independent Traits
//!
//! This module defines the capability sets firmware programs against.
//! Every supported board binds each symbol to a concrete chip driver that
//! implements these traits, so code written against them compiles unchanged
//! for any board.
//!
//! # Design Principles
//!
//! - **Zero-cost abstractions**: Traits are used through concrete types,
//!   never through trait objects on the data path
//! - **One error taxonomy**: Every operation returns [`Error`]
//! - **No platform leakage**: Traits must not reference platform-specific types
//! - **Bounded**: No operation waits on hardware without a poll budget
//!
//! # Available Interfaces
//!
//! - [`spi`]: SPI bus master
//! - [`serial`]: Serial port (UART) communication
//! - [`gpio`]: General Purpose Input/Output pins
//! - [`timer`]: Free-running counters and delays

pub mod error;
pub mod gpio;
pub mod serial;
pub mod spi;
pub mod timer;

pub use error::{Error, Result};

