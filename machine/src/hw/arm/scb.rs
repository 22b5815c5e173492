//! System control block: software-requested system reset.

use crate::hw::{read_reg, write_reg};
use bitflags::bitflags;

const AIRCR: usize = 0x0C;

/// Writes to AIRCR are ignored unless the upper half holds this key.
const VECTKEY: u32 = 0x05FA << 16;

bitflags! {
    /// Application interrupt and reset control register.
    #[derive(Debug, Copy, Clone, PartialEq, Eq)]
    pub struct Aircr: u32 {
        /// Request a system-level reset.
        const SYSRESETREQ = 1 << 2;
        /// Priority grouping field.
        const PRIGROUP = 0b111 << 8;
    }
}

pub struct Scb {
    base: usize,
}

impl Scb {
    /// # Safety
    ///
    /// `base` must be the address of the SCB.
    pub const unsafe fn new(base: usize) -> Self {
        Self { base }
    }

    /// Ask the core to reset the system, keeping the priority grouping.
    ///
    /// Returns once the request is written; the reset itself lands a few
    /// cycles later. Callers issue the surrounding barriers.
    pub fn request_reset(&mut self) {
        let prigroup = Aircr::from_bits_truncate(read_reg(self.base, AIRCR)) & Aircr::PRIGROUP;
        write_reg(
            self.base,
            AIRCR,
            VECTKEY | (prigroup | Aircr::SYSRESETREQ).bits(),
        );
    }
}

/// Request a system reset through the SCB at its architectural address.
///
/// # Safety
///
/// Only valid on an ARMv7-M core.
pub unsafe fn system_reset() {
    unsafe { Scb::new(super::SCB_BASE) }.request_reset();
}
