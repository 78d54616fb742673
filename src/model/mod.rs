//! Application domain model.
//!
//! Pure business logic (no FFI dependencies): the reticle configuration,
//! the five-slot preset record and their limits and defaults.
//! Persistence lives in [`crate::storage`].

pub mod constants;
pub mod settings;

pub use constants::*;
pub use settings::{ReticleConfig, Rgb, Settings, Shape};
