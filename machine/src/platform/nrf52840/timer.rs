use crate::hal::timer::CountingTimer;
use crate::hw::nrf52840::timer::{TICK_HZ, Timer};
use core::cell::Cell;

const CAPTURE_CHANNEL: u8 = 0;

/// TIMER peripheral extended from 32 to 64 bits in software.
///
/// The counter starts on the first read. It wraps every ~71 minutes at
/// 1 MHz, so `ticks` must be called at least that often for the extension
/// to stay correct.
pub struct Nrf52Timer {
    timer: Timer,
    started: Cell<bool>,
    last: Cell<u32>,
    wraps: Cell<u32>,
}

impl Nrf52Timer {
    /// # Safety
    ///
    /// `timer_base` must address a TIMER instance owned by nobody else.
    pub const unsafe fn new(timer_base: usize) -> Self {
        Self {
            timer: unsafe { Timer::new(timer_base) },
            started: Cell::new(false),
            last: Cell::new(0),
            wraps: Cell::new(0),
        }
    }
}

impl CountingTimer for Nrf52Timer {
    const TICK_HZ: u32 = TICK_HZ;

    fn ticks(&self) -> u64 {
        if !self.started.replace(true) {
            self.timer.start_free_running();
            log::debug!("nrf52840 timer: started at {} Hz", TICK_HZ);
        }
        let now = self.timer.capture(CAPTURE_CHANNEL);
        if now < self.last.get() {
            self.wraps.set(self.wraps.get().wrapping_add(1));
        }
        self.last.set(now);
        ((self.wraps.get() as u64) << 32) | now as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hw::fake::RegisterBlock;

    const TASKS_START: usize = 0x000;
    const CC0: usize = 0x540;

    #[test]
    fn construction_is_side_effect_free() {
        let regs = RegisterBlock::new(0x600);
        let before = regs.snapshot();
        let _timer = unsafe { Nrf52Timer::new(regs.base()) };
        assert_eq!(regs.snapshot(), before);
    }

    #[test]
    fn first_read_starts_the_counter() {
        let regs = RegisterBlock::new(0x600);
        let timer = unsafe { Nrf52Timer::new(regs.base()) };
        regs.set(CC0, 250);
        assert_eq!(timer.ticks(), 250);
        assert_eq!(regs.get(TASKS_START), 1);
    }

    #[test]
    fn wrap_extends_into_high_word() {
        let regs = RegisterBlock::new(0x600);
        let timer = unsafe { Nrf52Timer::new(regs.base()) };
        regs.set(CC0, u32::MAX - 1);
        timer.ticks();
        regs.set(CC0, 5);
        assert_eq!(timer.ticks(), (1 << 32) | 5);
        assert_eq!(timer.now_us(), (1u64 << 32) | 5);
    }
}
