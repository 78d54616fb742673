//! Settings persistence.
//!
//! Stores the whole record as one binary blob in
//! `%APPDATA%\CrosshairOverlay\settings.dat`.

mod config;

pub use config::*;
