//! SPI Bus Hardware Abstraction Layer.
//!
//! This module defines the platform-independent SPI master interface.

use super::Result;

/// Clock frequency used when a configuration asks for `0`.
pub const DEFAULT_FREQUENCY: u32 = 4_000_000;

/// Clock polarity and phase combination.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum SpiMode {
    /// CPOL = 0, CPHA = 0.
    #[default]
    Mode0,
    /// CPOL = 0, CPHA = 1.
    Mode1,
    /// CPOL = 1, CPHA = 0.
    Mode2,
    /// CPOL = 1, CPHA = 1.
    Mode3,
}

impl SpiMode {
    /// Clock idles high.
    pub const fn polarity(self) -> bool {
        matches!(self, SpiMode::Mode2 | SpiMode::Mode3)
    }

    /// Data is sampled on the trailing clock edge.
    pub const fn phase(self) -> bool {
        matches!(self, SpiMode::Mode1 | SpiMode::Mode3)
    }
}

/// Order in which the bits of each byte are shifted out.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum BitOrder {
    #[default]
    MsbFirst,
    LsbFirst,
}

/// SPI bus configuration.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct SpiConfig {
    /// SCK frequency in Hz. `0` selects [`DEFAULT_FREQUENCY`].
    pub frequency: u32,
    pub mode: SpiMode,
    pub bit_order: BitOrder,
}

impl SpiConfig {
    /// Configuration with the given frequency, mode 0, MSB first.
    pub const fn new(frequency: u32) -> Self {
        Self {
            frequency,
            mode: SpiMode::Mode0,
            bit_order: BitOrder::MsbFirst,
        }
    }

    pub const fn with_mode(mut self, mode: SpiMode) -> Self {
        self.mode = mode;
        self
    }

    pub const fn with_bit_order(mut self, bit_order: BitOrder) -> Self {
        self.bit_order = bit_order;
        self
    }

    /// The frequency to program, with `0` replaced by the default.
    pub const fn effective_frequency(&self) -> u32 {
        if self.frequency == 0 {
            DEFAULT_FREQUENCY
        } else {
            self.frequency
        }
    }
}

/// SPI bus master.
///
/// Every byte clocked out clocks one byte in. Chip select is the caller's
/// business (usually a GPIO pin).
///
/// A bus handle is exclusively owned. Driving one bus from several
/// execution contexts needs external synchronisation.
pub trait SpiBus {
    /// Configure clock rate, mode and bit order.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` if the hardware cannot generate the requested clock.
    fn configure(&mut self, config: SpiConfig) -> Result<()>;

    /// Exchange a single byte.
    ///
    /// # Errors
    ///
    /// `Busy` if the transmitter never accepts the byte, `Timeout` if the
    /// received byte never arrives.
    fn transfer_byte(&mut self, byte: u8) -> Result<u8>;

    /// Full-duplex transfer in place: each byte is sent and replaced by the
    /// byte received in its slot.
    ///
    /// An empty buffer returns `Ok(())` without touching the hardware.
    fn transfer(&mut self, bytes: &mut [u8]) -> Result<()> {
        for byte in bytes.iter_mut() {
            *byte = self.transfer_byte(*byte)?;
        }
        Ok(())
    }

    /// Send `write` while receiving into `read`.
    ///
    /// The longer slice sets how many bytes are clocked. Missing write bytes
    /// are sent as `0x00`; received bytes beyond `read` are discarded.
    fn tx(&mut self, write: &[u8], read: &mut [u8]) -> Result<()> {
        let len = write.len().max(read.len());
        for i in 0..len {
            let out = write.get(i).copied().unwrap_or(0);
            let incoming = self.transfer_byte(out)?;
            if let Some(slot) = read.get_mut(i) {
                *slot = incoming;
            }
        }
        Ok(())
    }

    /// Send bytes, discarding whatever is received.
    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        self.tx(bytes, &mut [])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hal::Error;

    /// Answers each byte with its bitwise complement and counts exchanges.
    struct Inverter {
        exchanged: usize,
        fail_after: Option<usize>,
    }

    impl Inverter {
        fn new() -> Self {
            Self {
                exchanged: 0,
                fail_after: None,
            }
        }
    }

    impl SpiBus for Inverter {
        fn configure(&mut self, _config: SpiConfig) -> Result<()> {
            Ok(())
        }

        fn transfer_byte(&mut self, byte: u8) -> Result<u8> {
            if self.fail_after == Some(self.exchanged) {
                return Err(Error::Timeout);
            }
            self.exchanged += 1;
            Ok(!byte)
        }
    }

    #[test]
    fn empty_transfer_touches_nothing() {
        let mut bus = Inverter::new();
        assert_eq!(bus.transfer(&mut []), Ok(()));
        assert_eq!(bus.tx(&[], &mut []), Ok(()));
        assert_eq!(bus.write(&[]), Ok(()));
        assert_eq!(bus.exchanged, 0);
    }

    #[test]
    fn transfer_replaces_in_place() {
        let mut bus = Inverter::new();
        let mut buf = [0x00, 0xF0, 0x5A];
        bus.transfer(&mut buf).unwrap();
        assert_eq!(buf, [0xFF, 0x0F, 0xA5]);
    }

    #[test]
    fn tx_pads_short_write_with_zeros() {
        let mut bus = Inverter::new();
        let mut read = [0u8; 3];
        bus.tx(&[0x0F], &mut read).unwrap();
        assert_eq!(read, [0xF0, 0xFF, 0xFF]);
        assert_eq!(bus.exchanged, 3);
    }

    #[test]
    fn tx_discards_surplus_reads() {
        let mut bus = Inverter::new();
        let mut read = [0u8; 1];
        bus.tx(&[1, 2, 3], &mut read).unwrap();
        assert_eq!(read, [!1]);
        assert_eq!(bus.exchanged, 3);
    }

    #[test]
    fn errors_stop_the_transfer() {
        let mut bus = Inverter::new();
        bus.fail_after = Some(1);
        let mut buf = [1, 2, 3];
        assert_eq!(bus.transfer(&mut buf), Err(Error::Timeout));
        assert_eq!(buf, [!1, 2, 3]);
    }

    #[test]
    fn zero_frequency_means_default() {
        assert_eq!(SpiConfig::new(0).effective_frequency(), DEFAULT_FREQUENCY);
        assert_eq!(SpiConfig::new(1_000_000).effective_frequency(), 1_000_000);
    }

    #[test]
    fn mode_bits() {
        assert!(!SpiMode::Mode0.polarity() && !SpiMode::Mode0.phase());
        assert!(!SpiMode::Mode1.polarity() && SpiMode::Mode1.phase());
        assert!(SpiMode::Mode2.polarity() && !SpiMode::Mode2.phase());
        assert!(SpiMode::Mode3.polarity() && SpiMode::Mode3.phase());
    }
}
