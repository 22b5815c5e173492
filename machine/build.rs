//! Validates the board selection before any HAL code is compiled.
//!
//! The enabled cargo features must select exactly one board from
//! `platform::target::BOARDS`. When building for bare metal the board's
//! architecture family must also match the compilation target.

use std::env;
use std::process;

#[allow(dead_code)]
#[path = "src/platform/target.rs"]
mod target;

fn main() {
    println!("cargo:rerun-if-changed=src/platform/target.rs");

    let features: Vec<String> = env::vars()
        .filter_map(|(key, _)| {
            key.strip_prefix("CARGO_FEATURE_")
                .map(|name| name.to_ascii_lowercase().replace('_', "-"))
        })
        .collect();
    let features: Vec<&str> = features.iter().map(String::as_str).collect();

    let entry = match target::resolve(target::BOARDS, &features) {
        Ok(entry) => entry,
        Err(err) => fail(&err.to_string()),
    };

    let target_arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();
    let target_os = env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();

    if target_os == "none" && !entry.arch.runs_on(&target_arch) {
        fail(&format!(
            "board `{}` is a {} board but the target architecture is `{}`",
            entry.board,
            entry.arch.feature(),
            target_arch
        ));
    }
}

fn fail(message: &str) -> ! {
    let boards: Vec<&str> = target::BOARDS.iter().map(|b| b.board).collect();
    eprintln!("error: {message}");
    eprintln!("supported boards: {}", boards.join(", "));
    eprintln!("example: cargo build -p machine --no-default-features --features pca10056");
    process::exit(1);
}
