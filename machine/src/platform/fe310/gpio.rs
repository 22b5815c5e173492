use crate::hal::gpio::{
    ConfigurablePin, InputPin, OutputPin, PinLevel, PinMode, StatefulOutputPin,
};
use crate::hal::{Error, Result};
use crate::hw::sifive::gpio::Gpio;

/// One FE310 GPIO line.
pub struct Fe310Pin {
    gpio: Gpio,
    pin: u8,
}

impl Fe310Pin {
    /// # Safety
    ///
    /// No other handle may own `pin` on the GPIO block at `gpio_base`.
    pub const unsafe fn new(gpio_base: usize, pin: u8) -> Self {
        Self {
            gpio: unsafe { Gpio::new(gpio_base) },
            pin,
        }
    }
}

impl ConfigurablePin for Fe310Pin {
    fn configure(&mut self, mode: PinMode) -> Result<()> {
        let (output, pullup) = match mode {
            PinMode::Input => (false, false),
            PinMode::InputPullUp => (false, true),
            PinMode::Output => (true, false),
            // no pull-down resistors on this chip
            PinMode::InputPullDown => return Err(Error::InvalidConfig),
        };
        self.gpio.set_pullup(self.pin, pullup)?;
        self.gpio.set_input_enable(self.pin, true)?;
        self.gpio.set_output_enable(self.pin, output)?;
        self.gpio.disable_iof(1 << self.pin);
        Ok(())
    }
}

impl InputPin for Fe310Pin {
    fn read(&self) -> Result<PinLevel> {
        Ok(self.gpio.input(self.pin)?.into())
    }
}

impl OutputPin for Fe310Pin {
    fn set_high(&mut self) -> Result<()> {
        Ok(self.gpio.set_output(self.pin, true)?)
    }

    fn set_low(&mut self) -> Result<()> {
        Ok(self.gpio.set_output(self.pin, false)?)
    }
}

impl StatefulOutputPin for Fe310Pin {
    fn output_level(&self) -> Result<PinLevel> {
        Ok(self.gpio.output(self.pin)?.into())
    }
}
