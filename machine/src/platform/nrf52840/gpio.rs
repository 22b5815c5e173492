use super::port_for;
use crate::hal::gpio::{
    ConfigurablePin, InputPin, OutputPin, PinLevel, PinMode, StatefulOutputPin,
};
use crate::hal::Result;
use crate::hw::nrf52840::gpio::{PinCnf, Port};

/// One nRF52840 GPIO line, by global pin number.
pub struct Nrf52Pin {
    p0_base: usize,
    pin: u8,
}

impl Nrf52Pin {
    /// # Safety
    ///
    /// `p0_base` must be the address of P0 and no other handle may own
    /// `pin`.
    pub const unsafe fn new(p0_base: usize, pin: u8) -> Self {
        Self { p0_base, pin }
    }

    fn port(&self) -> Result<(Port, u8)> {
        // SAFETY: this handle owns the pin.
        unsafe { port_for(self.p0_base, self.pin) }
    }
}

impl ConfigurablePin for Nrf52Pin {
    fn configure(&mut self, mode: PinMode) -> Result<()> {
        let cnf = match mode {
            PinMode::Input => PinCnf::empty(),
            PinMode::InputPullUp => PinCnf::PULL_UP,
            PinMode::InputPullDown => PinCnf::PULL_DOWN,
            PinMode::Output => PinCnf::DIR_OUTPUT,
        };
        let (mut port, index) = self.port()?;
        port.configure(index, cnf)?;
        Ok(())
    }
}

impl InputPin for Nrf52Pin {
    fn read(&self) -> Result<PinLevel> {
        let (port, index) = self.port()?;
        Ok(port.input(index)?.into())
    }
}

impl OutputPin for Nrf52Pin {
    fn set_high(&mut self) -> Result<()> {
        let (mut port, index) = self.port()?;
        Ok(port.set_output(index, true)?)
    }

    fn set_low(&mut self) -> Result<()> {
        let (mut port, index) = self.port()?;
        Ok(port.set_output(index, false)?)
    }
}

impl StatefulOutputPin for Nrf52Pin {
    fn output_level(&self) -> Result<PinLevel> {
        let (port, index) = self.port()?;
        Ok(port.output(index)?.into())
    }
}
