#![cfg_attr(target_os = "none", no_std, no_main)]

mod app;
mod console;

/// Entry point, jumped to by the board's startup code once the stack and
/// `.data`/`.bss` are set up.
#[cfg(target_os = "none")]
#[unsafe(no_mangle)]
pub extern "C" fn firmware_main() -> ! {
    match machine::Peripherals::take() {
        Some(peripherals) => app::run(peripherals),
        None => machine::cpu_reset(),
    }
}

// Required panic handler
#[cfg(target_os = "none")]
#[panic_handler]
fn panic(info: &core::panic::PanicInfo) -> ! {
    let _ = machine::interrupt::disable();
    console::try_write_fmt(format_args!("\npanic: {}\n", info));
    machine::cpu_reset()
}

/// Hosted builds only type-check the application.
#[cfg(not(target_os = "none"))]
fn main() {
    let _ = app::run;
    println!(
        "firmware for {} ({:?}); build for the board's bare-metal target to run it",
        machine::TARGET.board,
        machine::TARGET.arch
    );
}
