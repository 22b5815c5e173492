//! The application proper. Nothing here names a chip or a board.

use crate::{console, kprintln};
use log::LevelFilter;
use machine::hal::gpio::{ConfigurablePin, PinMode, StatefulOutputPin};
use machine::hal::spi::{SpiBus, SpiConfig};
use machine::hal::timer::CountingTimer;
use machine::{Peripherals, TARGET};

const BLINK_MS: u32 = 500;
/// JEDEC "read identification".
const READ_ID: u8 = 0x9F;

pub fn run(peripherals: Peripherals) -> ! {
    let Peripherals {
        mut spi1,
        uart0,
        mut led,
        timer,
    } = peripherals;

    if console::init(uart0, LevelFilter::Debug).is_err() {
        // nowhere to report it
        machine::cpu_reset();
    }
    kprintln!("firmware on {} ({:?})", TARGET.board, TARGET.arch);

    if let Err(err) = led.configure(PinMode::Output) {
        log::error!("led: {}", err);
    }

    match spi1.configure(SpiConfig::new(0)) {
        Ok(()) => {
            let mut id = [0u8; 4];
            match spi1.tx(&[READ_ID], &mut id) {
                Ok(()) => log::info!("spi1 device id {:02x?}", &id[1..]),
                Err(err) => log::warn!("spi1 read id: {}", err),
            }
        }
        Err(err) => log::error!("spi1: {}", err),
    }

    let mut blinks: u64 = 0;
    loop {
        if led.toggle().is_err() {
            machine::cpu_reset();
        }
        timer.delay_ms(BLINK_MS);
        blinks += 1;
        log::debug!("blink {} at {} us", blinks, timer.now_us());
    }
}
