//! nRF52840 GPIO ports P0 (32 pins) and P1 (16 pins).
//!
//! `OUTSET`/`OUTCLR` make single-pin writes atomic, so pins of one port can
//! have different owners.

use crate::hw::{read_reg, write_reg};
use bitflags::bitflags;

const OUT: usize = 0x504;
const OUTSET: usize = 0x508;
const OUTCLR: usize = 0x50C;
const IN: usize = 0x510;
const PIN_CNF: usize = 0x700;

bitflags! {
    /// `PIN_CNF[n]` register.
    #[derive(Debug, Copy, Clone, PartialEq, Eq)]
    pub struct PinCnf: u32 {
        /// Output driver enabled.
        const DIR_OUTPUT = 1 << 0;
        /// Input buffer disconnected.
        const INPUT_DISCONNECT = 1 << 1;
        const PULL_DOWN = 0b01 << 2;
        const PULL_UP = 0b11 << 2;
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GpioError {
    InvalidPin,
}

/// One GPIO port.
pub struct Port {
    base: usize,
    width: u8,
}

impl Port {
    /// # Safety
    ///
    /// `base` must be the address of a GPIO port register block with
    /// `width` pins. Several instances may coexist as long as each pin has
    /// a single owner.
    pub const unsafe fn new(base: usize, width: u8) -> Self {
        Self { base, width }
    }

    fn mask(&self, pin: u8) -> Result<u32, GpioError> {
        if pin < self.width {
            Ok(1 << pin)
        } else {
            Err(GpioError::InvalidPin)
        }
    }

    pub fn configure(&mut self, pin: u8, cnf: PinCnf) -> Result<(), GpioError> {
        self.mask(pin)?;
        write_reg(self.base, PIN_CNF + 4 * pin as usize, cnf.bits());
        Ok(())
    }

    pub fn set_output(&mut self, pin: u8, high: bool) -> Result<(), GpioError> {
        let mask = self.mask(pin)?;
        write_reg(self.base, if high { OUTSET } else { OUTCLR }, mask);
        Ok(())
    }

    /// Level `pin` is being driven to.
    pub fn output(&self, pin: u8) -> Result<bool, GpioError> {
        Ok(read_reg(self.base, OUT) & self.mask(pin)? != 0)
    }

    /// Level sampled on `pin`.
    pub fn input(&self, pin: u8) -> Result<bool, GpioError> {
        Ok(read_reg(self.base, IN) & self.mask(pin)? != 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hw::fake::RegisterBlock;

    #[test]
    fn set_and_clear_use_dedicated_registers() {
        let regs = RegisterBlock::new(0x800);
        let mut port = unsafe { Port::new(regs.base(), 32) };
        port.set_output(13, true).unwrap();
        assert_eq!(regs.get(OUTSET), 1 << 13);
        port.set_output(13, false).unwrap();
        assert_eq!(regs.get(OUTCLR), 1 << 13);
    }

    #[test]
    fn pin_configuration_lands_in_its_slot() {
        let regs = RegisterBlock::new(0x800);
        let mut port = unsafe { Port::new(regs.base(), 32) };
        port.configure(5, PinCnf::PULL_UP).unwrap();
        assert_eq!(regs.get(PIN_CNF + 4 * 5), 0b1100);
        assert_eq!(regs.get(PIN_CNF + 4 * 4), 0);
    }

    #[test]
    fn narrow_port_rejects_high_pins() {
        let regs = RegisterBlock::new(0x800);
        let mut port = unsafe { Port::new(regs.base(), 16) };
        assert_eq!(port.set_output(16, true), Err(GpioError::InvalidPin));
        assert_eq!(regs.get(OUTSET), 0);
    }
}
