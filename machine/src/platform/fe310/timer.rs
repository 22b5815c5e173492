use crate::hal::timer::CountingTimer;
use crate::hw::sifive::clint::{Clint, MTIME_HZ};

/// The RISC-V `mtime` counter, 64 bits wide and always running.
pub struct MachineTimer {
    clint: Clint,
}

impl MachineTimer {
    /// # Safety
    ///
    /// `clint_base` must be the address of the CLINT.
    pub const unsafe fn new(clint_base: usize) -> Self {
        Self {
            clint: unsafe { Clint::new(clint_base) },
        }
    }
}

impl CountingTimer for MachineTimer {
    const TICK_HZ: u32 = MTIME_HZ;

    fn ticks(&self) -> u64 {
        self.clint.mtime()
    }
}
