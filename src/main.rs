#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

#[cfg(windows)]
fn main() {
    crosshair_overlay::app::run();
}

#[cfg(not(windows))]
fn main() {
    eprintln!("crosshair-overlay is a Windows application.");
    std::process::exit(1);
}
