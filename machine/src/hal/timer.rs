//! Timer Hardware Abstraction Layer.
//!
//! This module defines the platform-independent interface to a free-running
//! hardware counter.

/// Free-running counter that never stops once the board hands it out.
pub trait CountingTimer {
    /// Counter frequency in Hz.
    const TICK_HZ: u32;

    /// Current counter value, extended to 64 bits by the driver.
    fn ticks(&self) -> u64;

    /// Current counter value in microseconds.
    fn now_us(&self) -> u64 {
        ticks_to_us(self.ticks(), Self::TICK_HZ)
    }

    /// Busy-wait delay for the specified number of microseconds.
    ///
    /// This blocks the CPU and should only be used for short delays.
    fn delay_us(&self, us: u32) {
        let start = self.now_us();
        let duration = us as u64;

        while self.now_us().wrapping_sub(start) < duration {
            core::hint::spin_loop();
        }
    }

    /// Busy-wait delay for the specified number of milliseconds.
    fn delay_ms(&self, ms: u32) {
        self.delay_us(ms.saturating_mul(1000));
    }
}

/// Convert a tick count at `tick_hz` to microseconds without overflowing.
pub const fn ticks_to_us(ticks: u64, tick_hz: u32) -> u64 {
    let hz = tick_hz as u64;
    (ticks / hz) * 1_000_000 + (ticks % hz) * 1_000_000 / hz
}
