//! Firmware-style code written only against the abstract API.
//!
//! The helpers below are generic over the HAL traits, instantiated with the
//! selected board's types to prove they bind, and run against small mocks
//! since the host has no peripherals.

use machine::hal::gpio::{OutputPin, PinLevel, StatefulOutputPin};
use machine::hal::spi::{SpiBus, SpiConfig};
use machine::hal::timer::CountingTimer;
use machine::hal::{Error, Result};
use machine::{ArchFamily, Peripherals, TARGET, interrupt};
use serial_test::serial;

/// JEDEC "read ID" on a SPI flash.
fn read_flash_id<S: SpiBus>(spi: &mut S) -> Result<[u8; 3]> {
    spi.configure(SpiConfig::new(0))?;
    let mut reply = [0u8; 4];
    spi.tx(&[0x9F], &mut reply)?;
    Ok([reply[1], reply[2], reply[3]])
}

fn blink<P, T>(led: &mut P, timer: &T, times: u32) -> Result<()>
where
    P: StatefulOutputPin,
    T: CountingTimer,
{
    for _ in 0..times * 2 {
        led.toggle()?;
        timer.delay_ms(1);
    }
    Ok(())
}

struct FakeFlash {
    configured: Option<SpiConfig>,
    clocked: Vec<u8>,
}

impl SpiBus for FakeFlash {
    fn configure(&mut self, config: SpiConfig) -> Result<()> {
        self.configured = Some(config);
        Ok(())
    }

    fn transfer_byte(&mut self, byte: u8) -> Result<u8> {
        if self.configured.is_none() {
            return Err(Error::InvalidConfig);
        }
        self.clocked.push(byte);
        Ok(match self.clocked.len() {
            2 => 0xEF,
            3 => 0x40,
            4 => 0x18,
            _ => 0xFF,
        })
    }
}

struct FakeLed(PinLevel, u32);

impl OutputPin for FakeLed {
    fn set_high(&mut self) -> Result<()> {
        self.0 = PinLevel::High;
        self.1 += 1;
        Ok(())
    }

    fn set_low(&mut self) -> Result<()> {
        self.0 = PinLevel::Low;
        self.1 += 1;
        Ok(())
    }
}

impl StatefulOutputPin for FakeLed {
    fn output_level(&self) -> Result<PinLevel> {
        Ok(self.0)
    }
}

struct FastClock(core::cell::Cell<u64>);

impl CountingTimer for FastClock {
    const TICK_HZ: u32 = 1_000_000;

    fn ticks(&self) -> u64 {
        let now = self.0.get();
        self.0.set(now + 250);
        now
    }
}

#[test]
fn helpers_bind_to_the_selected_board() {
    let _: fn(&mut machine::Spi) -> Result<[u8; 3]> = read_flash_id::<machine::Spi>;
    let _: fn(&mut machine::Led, &machine::Timer, u32) -> Result<()> =
        blink::<machine::Led, machine::Timer>;
}

#[test]
fn flash_id_through_the_spi_trait() {
    let mut flash = FakeFlash {
        configured: None,
        clocked: Vec::new(),
    };
    assert_eq!(read_flash_id(&mut flash), Ok([0xEF, 0x40, 0x18]));
    assert_eq!(flash.clocked, [0x9F, 0, 0, 0]);
    let frequency = flash.configured.map(|c| c.effective_frequency());
    assert_eq!(frequency, Some(4_000_000));
}

#[test]
fn blink_leaves_led_where_it_started() {
    let mut led = FakeLed(PinLevel::Low, 0);
    let clock = FastClock(core::cell::Cell::new(0));
    blink(&mut led, &clock, 3).unwrap();
    assert_eq!(led.0, PinLevel::Low);
    assert_eq!(led.1, 6);
}

#[test]
fn target_matches_enabled_board() {
    #[cfg(feature = "hifive1b")]
    assert_eq!((TARGET.board, TARGET.arch), ("hifive1b", ArchFamily::RiscV));
    #[cfg(feature = "pca10056")]
    assert_eq!((TARGET.board, TARGET.arch), ("pca10056", ArchFamily::CortexM));
    #[cfg(feature = "feather-nrf52840")]
    assert_eq!(
        (TARGET.board, TARGET.arch),
        ("feather-nrf52840", ArchFamily::CortexM)
    );
}

#[test]
fn reset_never_returns() {
    let _: fn() -> ! = machine::cpu_reset;
}

#[test]
fn peripherals_are_handed_out_once() {
    let first = Peripherals::take();
    assert!(first.is_some());
    assert!(Peripherals::take().is_none());
}

#[test]
#[serial]
fn critical_section_restores_previous_state() {
    unsafe { interrupt::enable() };
    let inside = interrupt::free(|| {
        let nested = interrupt::disable();
        let was = nested.was_enabled();
        interrupt::restore(nested);
        was
    });
    assert!(!inside);
    let state = interrupt::disable();
    assert!(state.was_enabled());
    interrupt::restore(state);
}
