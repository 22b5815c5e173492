//! ARMv7-M architectural peripherals shared by every Cortex-M chip.

pub mod scb;

/// System control block.
pub const SCB_BASE: usize = 0xE000_ED00;
