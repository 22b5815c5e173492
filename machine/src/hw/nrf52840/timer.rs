//! nRF52840 TIMER peripheral used as a free-running microsecond counter.

use super::TRIGGER;
use crate::hw::{read_reg, write_reg};

const TASKS_START: usize = 0x000;
const TASKS_STOP: usize = 0x004;
const TASKS_CLEAR: usize = 0x00C;
const TASKS_CAPTURE: usize = 0x040;
const MODE: usize = 0x504;
const BITMODE: usize = 0x508;
const PRESCALER: usize = 0x510;
const CC: usize = 0x540;

const MODE_TIMER: u32 = 0;
const BITMODE_32: u32 = 3;
/// 16 MHz / 2^4
const PRESCALER_1MHZ: u32 = 4;

/// Counting rate after [`Timer::start_free_running`].
pub const TICK_HZ: u32 = 1_000_000;

/// Capture/compare channels on TIMER0..TIMER2.
pub const CHANNELS: u8 = 4;

pub struct Timer {
    base: usize,
}

impl Timer {
    /// # Safety
    ///
    /// `base` must be the address of a TIMER register block and only one
    /// instance may exist per timer.
    pub const unsafe fn new(base: usize) -> Self {
        Self { base }
    }

    /// Restart the timer from zero as a 32-bit, 1 MHz counter.
    pub fn start_free_running(&self) {
        write_reg(self.base, TASKS_STOP, TRIGGER);
        write_reg(self.base, MODE, MODE_TIMER);
        write_reg(self.base, BITMODE, BITMODE_32);
        write_reg(self.base, PRESCALER, PRESCALER_1MHZ);
        write_reg(self.base, TASKS_CLEAR, TRIGGER);
        write_reg(self.base, TASKS_START, TRIGGER);
    }

    /// Latch the counter into `CC[channel]` and return it.
    ///
    /// # Panics
    ///
    /// If `channel` is not below [`CHANNELS`].
    pub fn capture(&self, channel: u8) -> u32 {
        assert!(channel < CHANNELS, "TIMER has {CHANNELS} CC channels");
        let slot = 4 * channel as usize;
        write_reg(self.base, TASKS_CAPTURE + slot, TRIGGER);
        read_reg(self.base, CC + slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hw::fake::RegisterBlock;

    #[test]
    fn free_running_setup() {
        let regs = RegisterBlock::new(0x600);
        let timer = unsafe { Timer::new(regs.base()) };
        timer.start_free_running();
        assert_eq!(regs.get(BITMODE), BITMODE_32);
        assert_eq!(regs.get(PRESCALER), PRESCALER_1MHZ);
        assert_eq!(regs.get(TASKS_CLEAR), TRIGGER);
        assert_eq!(regs.get(TASKS_START), TRIGGER);
    }

    #[test]
    fn capture_reads_matching_channel() {
        let regs = RegisterBlock::new(0x600);
        regs.set(CC + 4, 1234);
        let timer = unsafe { Timer::new(regs.base()) };
        assert_eq!(timer.capture(1), 1234);
        assert_eq!(regs.get(TASKS_CAPTURE + 4), TRIGGER);
        assert_eq!(regs.get(TASKS_CAPTURE), 0);
    }
}
