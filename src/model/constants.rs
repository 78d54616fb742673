//! Reticle limits and default values.

// === Preset layout ===

/// Number of independent preset slots.
pub const PRESET_COUNT: usize = 5;

/// Number of custom color swatches remembered for the color dialog.
pub const CUSTOM_COLOR_COUNT: usize = 16;

// === Validation Limits ===

/// Minimum reticle half-extent in pixels.
pub const MIN_SIZE: i32 = 1;

/// Maximum reticle half-extent in pixels.
pub const MAX_SIZE: i32 = 50;

/// Minimum stroke width in pixels.
pub const MIN_THICKNESS: i32 = 1;

/// Maximum stroke width in pixels.
pub const MAX_THICKNESS: i32 = 10;

// === Visual Defaults ===

/// Default reticle half-extent in pixels.
pub const DEFAULT_SIZE: i32 = 1;

/// Default stroke width in pixels.
pub const DEFAULT_THICKNESS: i32 = 3;

/// Default stroke color: green.
pub const DEFAULT_COLOR: (u8, u8, u8) = (0, 255, 0);
