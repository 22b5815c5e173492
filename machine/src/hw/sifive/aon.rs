//! FE310 always-on domain: the watchdog is the only way to reset the chip
//! from software.

use crate::hw::write_reg;
use bitflags::bitflags;

const WDOGCFG: usize = 0x000;
const WDOGCOUNT: usize = 0x008;
const WDOGKEY: usize = 0x01C;
const WDOGCMP0: usize = 0x020;

/// Unlocks the next write to any watchdog register.
pub const WDOG_KEY: u32 = 0x0051_F15E;

bitflags! {
    /// `wdogcfg` register (scale field left at 0).
    #[derive(Debug, Copy, Clone, PartialEq, Eq)]
    pub struct WdogCfg: u32 {
        /// Reset the chip when the comparator fires.
        const RSTEN = 1 << 8;
        /// Clear the counter when it matches.
        const ZEROCMP = 1 << 9;
        /// Count continuously.
        const ENALWAYS = 1 << 12;
        /// Count only while the core is awake.
        const ENCOREAWAKE = 1 << 13;
    }
}

pub struct Watchdog {
    base: usize,
}

impl Watchdog {
    /// # Safety
    ///
    /// `base` must be the address of the AON register block.
    pub const unsafe fn new(base: usize) -> Self {
        Self { base }
    }

    fn unlocked_write(&mut self, offset: usize, value: u32) {
        write_reg(self.base, WDOGKEY, WDOG_KEY);
        write_reg(self.base, offset, value);
    }

    /// Arm the watchdog so that it resets the chip on its next tick.
    ///
    /// The reset happens asynchronously within one 32 kHz period; the
    /// caller must not expect to run much longer.
    pub fn reset_now(&mut self) {
        self.unlocked_write(WDOGCMP0, 0);
        self.unlocked_write(WDOGCOUNT, 0);
        self.unlocked_write(WDOGCFG, (WdogCfg::RSTEN | WdogCfg::ENALWAYS).bits());
    }
}

/// Reset the chip through the watchdog at `base`.
///
/// # Safety
///
/// `base` must be the address of the AON register block. Everything the
/// caller has not flushed is lost.
pub unsafe fn system_reset(base: usize) {
    unsafe { Watchdog::new(base) }.reset_now();
}
