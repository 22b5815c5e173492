//! FE310 QSPI controller in single-lane, 8-bit programmed-I/O mode.

use crate::hw::{read_reg, wait_until, write_reg};
use bitflags::bitflags;

const SCKDIV: usize = 0x00;
const SCKMODE: usize = 0x04;
const CSMODE: usize = 0x18;
const FMT: usize = 0x40;
const TXDATA: usize = 0x48;
const RXDATA: usize = 0x4C;

/// `txdata` reads back with this bit set while the TX FIFO is full.
const TXDATA_FULL: u32 = 1 << 31;
/// `rxdata` reads with this bit set while the RX FIFO is empty.
const RXDATA_EMPTY: u32 = 1 << 31;

/// Entries in each FIFO.
pub const FIFO_DEPTH: usize = 8;

/// Largest value the 12-bit `sckdiv` field holds.
pub const MAX_DIVISOR: u32 = 0xFFF;

bitflags! {
    /// `sckmode` register.
    #[derive(Debug, Copy, Clone, PartialEq, Eq)]
    pub struct SckMode: u32 {
        /// Sample on the trailing edge.
        const PHA = 1 << 0;
        /// Clock idles high.
        const POL = 1 << 1;
    }
}

bitflags! {
    /// `fmt` register. `proto` stays 0 (single lane).
    #[derive(Debug, Copy, Clone, PartialEq, Eq)]
    pub struct Format: u32 {
        /// Shift the least significant bit first.
        const ENDIAN_LSB = 1 << 2;
        /// Transmit only; received bytes are not pushed to the RX FIFO.
        const DIR_TX = 1 << 3;
        /// Eight bits per frame in the `len` field.
        const LEN_8 = 8 << 16;
    }
}

/// Chip-select behaviour (`csmode`).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u32)]
pub enum CsMode {
    /// Assert around every frame.
    Auto = 0,
    /// Keep asserted after the first frame.
    Hold = 2,
    /// Never drive chip select.
    Off = 3,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum QspiError {
    /// The TX FIFO stayed full.
    TxFull,
    /// No byte arrived in the RX FIFO.
    RxTimeout,
    /// The clock divisor does not fit in `sckdiv`.
    InvalidDivisor,
}

/// One QSPI controller.
pub struct Qspi {
    base: usize,
    /// A reply timed out and may still land in the RX FIFO.
    rx_stale: bool,
}

impl Qspi {
    /// # Safety
    ///
    /// `base` must be the address of a QSPI register block and only one
    /// instance may exist per controller.
    pub const unsafe fn new(base: usize) -> Self {
        Self {
            base,
            rx_stale: false,
        }
    }

    /// Compute the `sckdiv` value for `sck_hz` from the bus clock.
    ///
    /// The controller produces `f_in / (2 * (div + 1))`; the divisor is
    /// rounded up so the bus never runs faster than requested.
    pub fn divisor_for(f_in: u32, sck_hz: u32) -> Result<u32, QspiError> {
        if sck_hz == 0 || sck_hz > f_in / 2 {
            return Err(QspiError::InvalidDivisor);
        }
        let div = f_in.div_ceil(2 * sck_hz) - 1;
        if div > MAX_DIVISOR {
            return Err(QspiError::InvalidDivisor);
        }
        Ok(div)
    }

    /// Program clock divisor, clock mode, frame format and chip-select mode.
    pub fn configure(
        &mut self,
        divisor: u32,
        mode: SckMode,
        format: Format,
        cs: CsMode,
    ) -> Result<(), QspiError> {
        if divisor > MAX_DIVISOR {
            return Err(QspiError::InvalidDivisor);
        }
        write_reg(self.base, SCKDIV, divisor);
        write_reg(self.base, SCKMODE, mode.bits());
        write_reg(self.base, FMT, format.bits());
        write_reg(self.base, CSMODE, cs as u32);
        self.drain_rx();
        Ok(())
    }

    /// Discard whatever sits in the RX FIFO. Returns the number of entries
    /// popped, at most [`FIFO_DEPTH`].
    pub fn drain_rx(&mut self) -> usize {
        self.rx_stale = false;
        (0..FIFO_DEPTH)
            .take_while(|_| read_reg(self.base, RXDATA) & RXDATA_EMPTY == 0)
            .count()
    }

    /// Push one byte and pop the byte clocked in with it.
    pub fn transfer(&mut self, byte: u8) -> Result<u8, QspiError> {
        if self.rx_stale {
            self.drain_rx();
        }
        if !wait_until(|| read_reg(self.base, TXDATA) & TXDATA_FULL == 0) {
            return Err(QspiError::TxFull);
        }
        write_reg(self.base, TXDATA, byte as u32);

        let mut received = RXDATA_EMPTY;
        if !wait_until(|| {
            received = read_reg(self.base, RXDATA);
            received & RXDATA_EMPTY == 0
        }) {
            self.rx_stale = true;
            return Err(QspiError::RxTimeout);
        }
        Ok(received as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hw::fake::RegisterBlock;

    #[test]
    fn divisor_rounds_towards_slower_clock() {
        assert_eq!(Qspi::divisor_for(16_000_000, 4_000_000), Ok(1));
        assert_eq!(Qspi::divisor_for(16_000_000, 3_000_000), Ok(2));
        assert_eq!(Qspi::divisor_for(16_000_000, 8_000_000), Ok(0));
        assert_eq!(
            Qspi::divisor_for(16_000_000, 9_000_000),
            Err(QspiError::InvalidDivisor)
        );
        assert_eq!(
            Qspi::divisor_for(320_000_000, 1_000),
            Err(QspiError::InvalidDivisor)
        );
    }

    #[test]
    fn configure_writes_registers() {
        let regs = RegisterBlock::new(0x80);
        let mut qspi = unsafe { Qspi::new(regs.base()) };
        qspi.configure(3, SckMode::POL, Format::LEN_8 | Format::ENDIAN_LSB, CsMode::Auto)
            .unwrap();
        assert_eq!(regs.get(SCKDIV), 3);
        assert_eq!(regs.get(SCKMODE), 0b10);
        assert_eq!(regs.get(FMT), (8 << 16) | (1 << 2));
        assert_eq!(regs.get(CSMODE), 0);
    }

    #[test]
    fn transfer_pushes_and_pops() {
        let regs = RegisterBlock::new(0x80);
        regs.set(RXDATA, 0xA5);
        let mut qspi = unsafe { Qspi::new(regs.base()) };
        assert_eq!(qspi.transfer(0x3C), Ok(0xA5));
        assert_eq!(regs.get(TXDATA), 0x3C);
    }

    #[test]
    fn full_fifo_gives_up() {
        let regs = RegisterBlock::new(0x80);
        regs.set(TXDATA, TXDATA_FULL);
        let mut qspi = unsafe { Qspi::new(regs.base()) };
        assert_eq!(qspi.transfer(0x00), Err(QspiError::TxFull));
        assert_eq!(regs.get(TXDATA), TXDATA_FULL);
    }

    #[test]
    fn missing_reply_times_out() {
        let regs = RegisterBlock::new(0x80);
        regs.set(RXDATA, RXDATA_EMPTY);
        let mut qspi = unsafe { Qspi::new(regs.base()) };
        assert_eq!(qspi.transfer(0x11), Err(QspiError::RxTimeout));
        assert!(qspi.rx_stale);
    }

    #[test]
    fn drain_pops_until_empty_within_fifo_depth() {
        let regs = RegisterBlock::new(0x80);
        regs.set(RXDATA, RXDATA_EMPTY);
        let mut qspi = unsafe { Qspi::new(regs.base()) };
        assert_eq!(qspi.drain_rx(), 0);
        // the image never empties, so the drain stops at the FIFO depth
        regs.set(RXDATA, 0x42);
        assert_eq!(qspi.drain_rx(), FIFO_DEPTH);
    }

    #[test]
    fn late_reply_is_discarded_before_next_exchange() {
        let regs = RegisterBlock::new(0x80);
        regs.set(RXDATA, RXDATA_EMPTY);
        let mut qspi = unsafe { Qspi::new(regs.base()) };
        assert_eq!(qspi.transfer(0x11), Err(QspiError::RxTimeout));

        // late byte lands, then the bus goes quiet again
        regs.set(RXDATA, 0x77);
        assert_eq!(qspi.drain_rx(), FIFO_DEPTH);
        assert!(!qspi.rx_stale);
        regs.set(RXDATA, RXDATA_EMPTY);
        assert_eq!(qspi.transfer(0x22), Err(QspiError::RxTimeout));
        assert!(qspi.rx_stale);
        regs.set(RXDATA, 0x5A);
        assert_eq!(qspi.transfer(0x33), Ok(0x5A));
        assert!(!qspi.rx_stale);
    }
}
