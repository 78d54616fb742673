//! Settings panel window.

pub mod window;
