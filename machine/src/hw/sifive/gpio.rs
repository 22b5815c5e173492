//! FE310 GPIO controller.
//!
//! The controller has no set/clear registers, so single-bit updates use
//! atomic read-modify-write (`amoor.w`/`amoand.w` on the chip). Several
//! owners of different pins can then share the register block safely.

use crate::hw::read_reg;
use core::sync::atomic::{AtomicU32, Ordering};

const INPUT_VAL: usize = 0x00;
const INPUT_EN: usize = 0x04;
const OUTPUT_EN: usize = 0x08;
const OUTPUT_VAL: usize = 0x0C;
const PUE: usize = 0x10;
const IOF_EN: usize = 0x38;
const IOF_SEL: usize = 0x3C;

/// Number of GPIO lines on the FE310.
pub const PIN_COUNT: u8 = 32;

/// Hardware I/O function a pin can be handed to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Iof {
    /// IOF0: SPI, UART, I2C.
    Iof0,
    /// IOF1: PWM.
    Iof1,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GpioError {
    InvalidPin,
}

pub struct Gpio {
    base: usize,
}

impl Gpio {
    /// # Safety
    ///
    /// `base` must be the address of the GPIO register block. Several
    /// instances may coexist as long as each pin has a single owner.
    pub const unsafe fn new(base: usize) -> Self {
        Self { base }
    }

    fn mask(pin: u8) -> Result<u32, GpioError> {
        if pin < PIN_COUNT {
            Ok(1 << pin)
        } else {
            Err(GpioError::InvalidPin)
        }
    }

    fn register(&self, offset: usize) -> &AtomicU32 {
        // SAFETY: MMIO words are 4-byte aligned and live for the program's lifetime.
        unsafe { AtomicU32::from_ptr((self.base + offset) as *mut u32) }
    }

    fn update(&self, offset: usize, mask: u32, on: bool) {
        if on {
            self.register(offset).fetch_or(mask, Ordering::SeqCst);
        } else {
            self.register(offset).fetch_and(!mask, Ordering::SeqCst);
        }
    }

    /// Enable or disable the input buffer of `pin`.
    pub fn set_input_enable(&mut self, pin: u8, on: bool) -> Result<(), GpioError> {
        self.update(INPUT_EN, Self::mask(pin)?, on);
        Ok(())
    }

    /// Enable or disable the output driver of `pin`.
    pub fn set_output_enable(&mut self, pin: u8, on: bool) -> Result<(), GpioError> {
        self.update(OUTPUT_EN, Self::mask(pin)?, on);
        Ok(())
    }

    /// Enable or disable the weak pull-up of `pin`.
    pub fn set_pullup(&mut self, pin: u8, on: bool) -> Result<(), GpioError> {
        self.update(PUE, Self::mask(pin)?, on);
        Ok(())
    }

    /// Drive `pin` high or low.
    pub fn set_output(&mut self, pin: u8, high: bool) -> Result<(), GpioError> {
        self.update(OUTPUT_VAL, Self::mask(pin)?, high);
        Ok(())
    }

    /// Level `pin` is being driven to.
    pub fn output(&self, pin: u8) -> Result<bool, GpioError> {
        Ok(read_reg(self.base, OUTPUT_VAL) & Self::mask(pin)? != 0)
    }

    /// Level sampled on `pin`.
    pub fn input(&self, pin: u8) -> Result<bool, GpioError> {
        Ok(read_reg(self.base, INPUT_VAL) & Self::mask(pin)? != 0)
    }

    /// Route every pin in `pins` to the hardware function `iof`.
    pub fn enable_iof(&mut self, pins: u32, iof: Iof) {
        self.update(IOF_SEL, pins, iof == Iof::Iof1);
        self.update(IOF_EN, pins, true);
    }

    /// Return every pin in `pins` to software control.
    pub fn disable_iof(&mut self, pins: u32) {
        self.update(IOF_EN, pins, false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hw::fake::RegisterBlock;

    #[test]
    fn single_bit_updates_leave_neighbours_alone() {
        let regs = RegisterBlock::new(0x44);
        regs.set(OUTPUT_VAL, 0b1001);
        let mut gpio = unsafe { Gpio::new(regs.base()) };

        gpio.set_output(1, true).unwrap();
        assert_eq!(regs.get(OUTPUT_VAL), 0b1011);
        gpio.set_output(0, false).unwrap();
        assert_eq!(regs.get(OUTPUT_VAL), 0b1010);
        assert!(gpio.output(3).unwrap());
    }

    #[test]
    fn iof_routing() {
        let regs = RegisterBlock::new(0x44);
        let mut gpio = unsafe { Gpio::new(regs.base()) };
        gpio.enable_iof(0b11 << 16, Iof::Iof0);
        assert_eq!(regs.get(IOF_EN), 0b11 << 16);
        assert_eq!(regs.get(IOF_SEL), 0);
        gpio.disable_iof(1 << 16);
        assert_eq!(regs.get(IOF_EN), 1 << 17);
    }

    #[test]
    fn out_of_range_pin_is_rejected() {
        let regs = RegisterBlock::new(0x44);
        let mut gpio = unsafe { Gpio::new(regs.base()) };
        assert_eq!(gpio.set_output(32, true), Err(GpioError::InvalidPin));
        assert_eq!(regs.get(OUTPUT_VAL), 0);
    }
}
