//! GPIO (General Purpose Input/Output) Hardware Abstraction Layer.
//!
//! This module defines platform-independent traits for single pins. A pin
//! handle owns one physical pin; the board decides which.

use super::Result;

/// Pin logic level.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PinLevel {
    /// Logic low (0V or ground).
    Low,
    /// Logic high (VDD).
    High,
}

impl From<bool> for PinLevel {
    fn from(value: bool) -> Self {
        if value {
            PinLevel::High
        } else {
            PinLevel::Low
        }
    }
}

impl From<PinLevel> for bool {
    fn from(level: PinLevel) -> bool {
        matches!(level, PinLevel::High)
    }
}

impl core::ops::Not for PinLevel {
    type Output = PinLevel;

    fn not(self) -> PinLevel {
        match self {
            PinLevel::High => PinLevel::Low,
            PinLevel::Low => PinLevel::High,
        }
    }
}

/// Electrical configuration of a pin.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PinMode {
    /// Floating input.
    Input,
    /// Input with the internal pull-up enabled.
    InputPullUp,
    /// Input with the internal pull-down enabled.
    InputPullDown,
    /// Push-pull output.
    Output,
}

/// A pin whose direction and pull can be changed.
pub trait ConfigurablePin {
    /// Apply `mode` to the pin.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` if the chip cannot provide `mode` (for example a
    /// pull-down on a chip with pull-ups only) or the pin does not exist.
    fn configure(&mut self, mode: PinMode) -> Result<()>;
}

/// Input pin trait.
pub trait InputPin {
    /// Read the pin state.
    fn read(&self) -> Result<PinLevel>;

    /// Check if the pin is currently high.
    fn is_high(&self) -> Result<bool> {
        Ok(self.read()? == PinLevel::High)
    }

    /// Check if the pin is currently low.
    fn is_low(&self) -> Result<bool> {
        Ok(self.read()? == PinLevel::Low)
    }
}

/// Output pin trait.
pub trait OutputPin {
    /// Set the pin to logic high.
    fn set_high(&mut self) -> Result<()>;

    /// Set the pin to logic low.
    fn set_low(&mut self) -> Result<()>;

    /// Set the pin to a specific level.
    fn set_level(&mut self, level: PinLevel) -> Result<()> {
        match level {
            PinLevel::High => self.set_high(),
            PinLevel::Low => self.set_low(),
        }
    }

    /// Set the pin state based on a boolean value.
    fn set_state(&mut self, state: bool) -> Result<()> {
        self.set_level(state.into())
    }
}

/// Stateful output pin that can be toggled.
pub trait StatefulOutputPin: OutputPin {
    /// Read back the level the pin is being driven to.
    fn output_level(&self) -> Result<PinLevel>;

    /// Toggle the output state.
    fn toggle(&mut self) -> Result<()> {
        let level = self.output_level()?;
        self.set_level(!level)
    }

    /// Check if the pin is currently driven high.
    fn is_set_high(&self) -> Result<bool> {
        Ok(self.output_level()? == PinLevel::High)
    }

    /// Check if the pin is currently driven low.
    fn is_set_low(&self) -> Result<bool> {
        Ok(self.output_level()? == PinLevel::Low)
    }
}
