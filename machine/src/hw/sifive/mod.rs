//! SiFive FE310 register package.
//!
//! Base addresses from the FE310-G002 manual, memory map chapter.

pub mod aon;
pub mod clint;
pub mod gpio;
pub mod qspi;
pub mod uart;

pub const CLINT_BASE: usize = 0x0200_0000;
pub const AON_BASE: usize = 0x1000_0000;
pub const GPIO0_BASE: usize = 0x1001_2000;
pub const UART0_BASE: usize = 0x1001_3000;
pub const QSPI0_BASE: usize = 0x1001_4000;
pub const UART1_BASE: usize = 0x1002_3000;
pub const QSPI1_BASE: usize = 0x1002_4000;
pub const QSPI2_BASE: usize = 0x1003_4000;
