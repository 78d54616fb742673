//! Crosshair overlay: draws a configurable aiming reticle on top of all
//! other windows and provides a settings panel to edit it.
//!
//! The domain layer (model, commands, storage, reticle layout) is pure Rust
//! and testable anywhere; everything that touches Win32 lives behind
//! `cfg(windows)`.

pub mod commands;
pub mod model;
pub mod storage;
pub mod ui;

#[cfg(windows)]
pub mod app;

// Re-export model types for convenience
pub use model::{ReticleConfig, Rgb, Settings, Shape};

/// Parse a numeric form field, accepting only integers inside `[lo, hi]`.
///
/// Anything else (empty text, non-numeric input, out-of-range values)
/// yields `None`; the caller keeps the previously stored value and no
/// error is surfaced.
pub fn parse_field_value(text: &str, lo: i32, hi: i32) -> Option<i32> {
    let value: i32 = text.trim().parse().ok()?;
    if (lo..=hi).contains(&value) {
        Some(value)
    } else {
        None
    }
}
