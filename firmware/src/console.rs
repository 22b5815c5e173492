//! Board console: a `log` backend and print macros over the board UART.

use common::sync::IrqSpinLock;
use core::fmt::{self, Write};
use log::{LevelFilter, Log, Metadata, Record};
use machine::hal::serial::{SerialConfig, SerialPort, SerialWriter};
use machine::{Irq, Serial};
use spin::Once;

pub const BAUD_RATE: u32 = 115_200;

static CONSOLE: Once<IrqSpinLock<SerialWriter<Serial>, Irq>> = Once::new();
static LOGGER: ConsoleLogger = ConsoleLogger;

/// Configure `uart` and route `log` records and `kprint!` through it.
///
/// Only the first call takes effect.
pub fn init(mut uart: Serial, level: LevelFilter) -> machine::Result<()> {
    uart.configure(SerialConfig::new_8n1(BAUD_RATE))?;
    CONSOLE.call_once(|| IrqSpinLock::new(SerialWriter(uart)));
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
    Ok(())
}

pub fn write_fmt(args: fmt::Arguments) {
    if let Some(console) = CONSOLE.get() {
        let _ = console.lock().write_fmt(args);
    }
}

/// Best-effort write for the panic path.
///
/// Gives up instead of spinning if the console is held, since the holder
/// may be the code that panicked.
#[cfg(target_os = "none")]
pub fn try_write_fmt(args: fmt::Arguments) {
    if let Some(mut console) = CONSOLE.get().and_then(IrqSpinLock::try_lock) {
        let _ = console.write_fmt(args);
        let _ = console.0.flush();
    }
}

struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    // Records raised by the UART driver while the console is held are
    // dropped; the lock is not reentrant.
    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if let Some(mut console) = CONSOLE.get().and_then(IrqSpinLock::try_lock) {
            let _ = writeln!(console, "[{:>5}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {
        if let Some(mut console) = CONSOLE.get().and_then(IrqSpinLock::try_lock) {
            let _ = console.0.flush();
        }
    }
}

/// Print to console without newline
#[macro_export]
macro_rules! kprint {
    ($($arg:tt)*) => {
        $crate::console::write_fmt(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! kprintln {
    () => { $crate::kprint!("\n") };
    ($($arg:tt)*) => {{
        $crate::kprint!($($arg)*);
        $crate::kprint!("\n");
    }};
}
