//! Shared application state.
//!
//! One `Settings` record plus the overlay handle, owned by the UI thread
//! for the lifetime of the run. Everything mutates it synchronously from
//! event handlers, so a thread-local `RefCell` is all the coordination
//! needed.

use std::cell::RefCell;

use windows::Win32::Foundation::HWND;

use crate::commands::{self, SettingsCommand};
use crate::model::Settings;

pub struct AppState {
    pub settings: Settings,
    pub overlay_hwnd: HWND,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            settings: Settings::default(),
            overlay_hwnd: HWND::default(),
        }
    }
}

thread_local! {
    static STATE: RefCell<AppState> = RefCell::new(AppState::default());
}

/// Replace the settings record (startup load).
pub fn set_settings(settings: Settings) {
    STATE.with(|s| s.borrow_mut().settings = settings);
}

/// Read access to the settings record.
pub fn with_settings<R>(f: impl FnOnce(&Settings) -> R) -> R {
    STATE.with(|s| f(&s.borrow().settings))
}

/// Apply one edit command; returns `true` when the record changed.
pub fn apply(command: SettingsCommand) -> bool {
    STATE.with(|s| commands::apply(&mut s.borrow_mut().settings, command))
}

pub fn set_overlay_hwnd(hwnd: HWND) {
    STATE.with(|s| s.borrow_mut().overlay_hwnd = hwnd);
}

pub fn overlay_hwnd() -> HWND {
    STATE.with(|s| s.borrow().overlay_hwnd)
}
