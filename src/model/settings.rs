//! Reticle configuration and the persisted settings record.

use serde::{Deserialize, Serialize};

use super::constants::*;

/// Reticle shape.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shape {
    #[default]
    Cross,
    Circle,
    Dot,
}

impl Shape {
    /// Shape for a zero-based combo box index; unknown indices fall back
    /// to the cross.
    pub fn from_index(index: usize) -> Self {
        match index {
            1 => Shape::Circle,
            2 => Shape::Dot,
            _ => Shape::Cross,
        }
    }

    /// Zero-based combo box index for this shape.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// RGB color triple.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pack into a Win32 COLORREF value (0x00BBGGRR).
    pub fn to_colorref(self) -> u32 {
        (self.r as u32) | ((self.g as u32) << 8) | ((self.b as u32) << 16)
    }

    /// Unpack from a Win32 COLORREF value.
    pub fn from_colorref(value: u32) -> Self {
        Self {
            r: (value & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: ((value >> 16) & 0xFF) as u8,
        }
    }
}

/// One reticle preset.
///
/// `custom_colors` carries the color dialog's swatch palette; it is
/// persisted with the preset but never used for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReticleConfig {
    pub shape: Shape,
    /// Half-extent of the shape in pixels, always within `[MIN_SIZE, MAX_SIZE]`.
    pub size: i32,
    /// Stroke width in pixels, always within `[MIN_THICKNESS, MAX_THICKNESS]`.
    pub thickness: i32,
    /// Draw a filled dot at the center on top of the shape.
    pub center_dot: bool,
    pub color: Rgb,
    pub custom_colors: [Rgb; CUSTOM_COLOR_COUNT],
}

impl Default for ReticleConfig {
    fn default() -> Self {
        Self {
            shape: Shape::Cross,
            size: DEFAULT_SIZE,
            thickness: DEFAULT_THICKNESS,
            center_dot: false,
            color: Rgb::new(DEFAULT_COLOR.0, DEFAULT_COLOR.1, DEFAULT_COLOR.2),
            custom_colors: [Rgb::default(); CUSTOM_COLOR_COUNT],
        }
    }
}

impl ReticleConfig {
    pub fn set_size(&mut self, size: i32) {
        self.size = size.clamp(MIN_SIZE, MAX_SIZE);
    }

    pub fn set_thickness(&mut self, thickness: i32) {
        self.thickness = thickness.clamp(MIN_THICKNESS, MAX_THICKNESS);
    }
}

/// The whole persisted record: five presets plus the live slot index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Index of the preset that drives both the overlay and the panel,
    /// always a valid slot.
    pub active_preset: u32,
    pub presets: [ReticleConfig; PRESET_COUNT],
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            active_preset: 0,
            presets: [ReticleConfig::default(); PRESET_COUNT],
        }
    }
}

impl Settings {
    /// The configuration currently rendered and edited.
    pub fn active(&self) -> &ReticleConfig {
        &self.presets[self.active_preset as usize]
    }

    pub fn active_mut(&mut self) -> &mut ReticleConfig {
        &mut self.presets[self.active_preset as usize]
    }

    /// Switch the live slot; out-of-range indices are ignored.
    pub fn select_preset(&mut self, index: u32) {
        if (index as usize) < PRESET_COUNT {
            self.active_preset = index;
        }
    }

    /// Clamp every field back into its documented range.
    ///
    /// Runs on every load so a hand-edited or stale file cannot put the
    /// record outside its invariants.
    pub fn validate(&mut self) {
        if self.active_preset as usize >= PRESET_COUNT {
            self.active_preset = 0;
        }
        for preset in &mut self.presets {
            preset.size = preset.size.clamp(MIN_SIZE, MAX_SIZE);
            preset.thickness = preset.thickness.clamp(MIN_THICKNESS, MAX_THICKNESS);
        }
    }
}
