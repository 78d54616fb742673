//! Application entry: load settings, create both windows, pump messages,
//! persist on the way out.

use anyhow::{Context, Result};
use windows::Win32::UI::Controls::{InitCommonControlsEx, ICC_BAR_CLASSES, INITCOMMONCONTROLSEX};
use windows::Win32::UI::WindowsAndMessaging::{
    DispatchMessageW, GetMessageW, TranslateMessage, MSG,
};

use crate::app::state;
use crate::storage;
use crate::ui::{overlay, settings};

/// Main entry point.
pub fn run() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(e) = run_app() {
        log::error!("fatal: {e:#}");
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    state::set_settings(storage::load());

    unsafe {
        // Trackbars live in comctl32; register that class set up front.
        let icc = INITCOMMONCONTROLSEX {
            dwSize: std::mem::size_of::<INITCOMMONCONTROLSEX>() as u32,
            dwICC: ICC_BAR_CLASSES,
        };
        let _ = InitCommonControlsEx(&icc);
    }

    // Both windows must exist; there is nothing to fall back to if the
    // platform refuses either of them.
    let overlay_hwnd = overlay::window::create().context("creating overlay window")?;
    state::set_overlay_hwnd(overlay_hwnd);

    settings::window::create().context("creating settings panel")?;

    log::info!("crosshair overlay running");

    unsafe {
        let mut msg = MSG::default();
        while GetMessageW(&mut msg, None, 0, 0).as_bool() {
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }
    }

    // Final persist on shutdown; a failed write is not worth dying over.
    let settings = state::with_settings(Clone::clone);
    if let Err(e) = storage::save(&settings) {
        log::warn!("could not save settings on exit: {e}");
    }

    Ok(())
}
