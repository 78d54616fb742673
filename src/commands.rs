//! Settings-panel edits as commands.
//!
//! Every control event becomes one [`SettingsCommand`] applied through
//! [`apply`], so clamping and change detection live in a single place
//! instead of being scattered across window-procedure arms.

use crate::model::{ReticleConfig, Rgb, Settings, Shape, CUSTOM_COLOR_COUNT};

/// One edit to the settings record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsCommand {
    /// Switch the live preset slot.
    SelectPreset(u32),
    SetShape(Shape),
    /// Set the half-extent; clamped into its valid range on apply.
    SetSize(i32),
    /// Set the stroke width; clamped into its valid range on apply.
    SetThickness(i32),
    SetCenterDot(bool),
    SetColor(Rgb),
    /// Replace the color dialog's swatch palette for the active preset.
    SetCustomColors([Rgb; CUSTOM_COLOR_COUNT]),
    /// Replace the active preset with the default configuration.
    ResetActive,
}

/// Apply one command to the settings record.
///
/// Returns `true` when the record changed; callers use that to decide
/// whether controls need refreshing and the overlay repainting.
pub fn apply(settings: &mut Settings, command: SettingsCommand) -> bool {
    let before = settings.clone();
    match command {
        SettingsCommand::SelectPreset(index) => settings.select_preset(index),
        SettingsCommand::SetShape(shape) => settings.active_mut().shape = shape,
        SettingsCommand::SetSize(size) => settings.active_mut().set_size(size),
        SettingsCommand::SetThickness(thickness) => settings.active_mut().set_thickness(thickness),
        SettingsCommand::SetCenterDot(center_dot) => settings.active_mut().center_dot = center_dot,
        SettingsCommand::SetColor(color) => settings.active_mut().color = color,
        SettingsCommand::SetCustomColors(colors) => settings.active_mut().custom_colors = colors,
        SettingsCommand::ResetActive => *settings.active_mut() = ReticleConfig::default(),
    }
    *settings != before
}
