//! Error taxonomy shared by every peripheral on every target.
//!
//! Chip adapters convert their vendor-specific failures into [`Error`], so
//! firmware can match on the same variants whichever board it is built for.

use core::fmt;

/// Peripheral operation errors.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Error {
    /// The peripheral did not accept new work within the poll budget.
    Busy,
    /// An operation started but did not complete within the poll budget.
    Timeout,
    /// A configuration value the hardware cannot represent.
    InvalidConfig,
    /// Received data was lost before it could be read.
    Overrun,
    /// No data is available yet; retry later.
    WouldBlock,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Busy => write!(f, "Peripheral busy"),
            Error::Timeout => write!(f, "Operation timed out"),
            Error::InvalidConfig => write!(f, "Invalid configuration"),
            Error::Overrun => write!(f, "Receive overrun"),
            Error::WouldBlock => write!(f, "Operation would block"),
        }
    }
}

/// Result type of every peripheral operation.
pub type Result<T> = core::result::Result<T, Error>;
