//! Overlay window and reticle rendering.
//!
//! [`renderer`] lays shapes out as pure data; [`window`] owns the layered
//! Win32 window and strokes the layout onto its paint DC.

pub mod renderer;

#[cfg(windows)]
pub mod window;
