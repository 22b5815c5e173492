//! Core-local interruptor: the 64-bit `mtime` counter.

use crate::hw::read_reg;

const MTIME_LO: usize = 0xBFF8;
const MTIME_HI: usize = 0xBFFC;

/// `mtime` is clocked from the always-on 32.768 kHz oscillator.
pub const MTIME_HZ: u32 = 32_768;

pub struct Clint {
    base: usize,
}

impl Clint {
    /// # Safety
    ///
    /// `base` must be the address of the CLINT register block.
    pub const unsafe fn new(base: usize) -> Self {
        Self { base }
    }

    /// Read `mtime`, re-reading once if the high word rolled over mid-read.
    pub fn mtime(&self) -> u64 {
        sample(|offset| read_reg(self.base, offset))
    }
}

/// hi/lo/hi read. After a rollover the low word just restarted, so the
/// second lo sample pairs with the second hi sample.
fn sample(mut read: impl FnMut(usize) -> u32) -> u64 {
    let hi = read(MTIME_HI);
    let lo = read(MTIME_LO);
    let hi_again = read(MTIME_HI);
    let (hi, lo) = if hi_again == hi {
        (hi, lo)
    } else {
        (hi_again, read(MTIME_LO))
    };
    ((hi as u64) << 32) | lo as u64
}
