use std::env;
use std::fs;
use std::path::PathBuf;

fn main() {
    // Linker script is only needed for the RP2040 firmware
    let target = env::var("TARGET").unwrap_or_default();
    if !target.starts_with("thumbv6m") {
        return;
    }

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    fs::write(out_dir.join("memory.x"), include_bytes!("memory.x")).unwrap();
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}
