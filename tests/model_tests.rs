//! Tests for the reticle model and the settings command layer.

use crosshair_overlay::commands::{apply, SettingsCommand};
use crosshair_overlay::model::constants::*;
use crosshair_overlay::model::{ReticleConfig, Rgb, Settings, Shape};
use crosshair_overlay::parse_field_value;

// === Default Values ===

#[test]
fn default_preset_is_a_thin_green_cross() {
    let config = ReticleConfig::default();
    assert_eq!(config.shape, Shape::Cross);
    assert_eq!(config.size, 1);
    assert_eq!(config.thickness, 3);
    assert!(!config.center_dot);
    assert_eq!(config.color, Rgb::new(0, 255, 0));
    assert!(config.custom_colors.iter().all(|c| *c == Rgb::default()));
}

#[test]
fn default_settings_have_five_default_presets_and_slot_zero_active() {
    let settings = Settings::default();
    assert_eq!(settings.active_preset, 0);
    assert_eq!(settings.presets.len(), PRESET_COUNT);
    for preset in &settings.presets {
        assert_eq!(*preset, ReticleConfig::default());
    }
}

// === Command Application ===

#[test]
fn set_size_clamps_to_valid_range() {
    let mut settings = Settings::default();
    apply(&mut settings, SettingsCommand::SetSize(500));
    assert_eq!(settings.active().size, MAX_SIZE);
    apply(&mut settings, SettingsCommand::SetSize(-7));
    assert_eq!(settings.active().size, MIN_SIZE);
}

#[test]
fn set_thickness_clamps_to_valid_range() {
    let mut settings = Settings::default();
    apply(&mut settings, SettingsCommand::SetThickness(99));
    assert_eq!(settings.active().thickness, MAX_THICKNESS);
    apply(&mut settings, SettingsCommand::SetThickness(0));
    assert_eq!(settings.active().thickness, MIN_THICKNESS);
}

#[test]
fn apply_reports_whether_the_record_changed() {
    let mut settings = Settings::default();
    assert!(apply(&mut settings, SettingsCommand::SetCenterDot(true)));
    assert!(!apply(&mut settings, SettingsCommand::SetCenterDot(true)));
}

#[test]
fn select_preset_switches_the_active_slot() {
    let mut settings = Settings::default();
    assert!(apply(&mut settings, SettingsCommand::SelectPreset(3)));
    assert_eq!(settings.active_preset, 3);
}

#[test]
fn select_preset_out_of_range_is_ignored() {
    let mut settings = Settings::default();
    assert!(!apply(&mut settings, SettingsCommand::SelectPreset(5)));
    assert_eq!(settings.active_preset, 0);
}

#[test]
fn switching_presets_does_not_bleed_between_slots() {
    let mut settings = Settings::default();
    apply(&mut settings, SettingsCommand::SetShape(Shape::Circle));
    apply(&mut settings, SettingsCommand::SetSize(30));
    let slot_a = *settings.active();

    apply(&mut settings, SettingsCommand::SelectPreset(1));
    apply(&mut settings, SettingsCommand::SetShape(Shape::Dot));
    apply(&mut settings, SettingsCommand::SetSize(7));

    apply(&mut settings, SettingsCommand::SelectPreset(0));
    assert_eq!(*settings.active(), slot_a);
    assert_eq!(settings.presets[1].shape, Shape::Dot);
    assert_eq!(settings.presets[1].size, 7);
}

#[test]
fn reset_touches_only_the_active_slot() {
    let mut settings = Settings::default();
    apply(&mut settings, SettingsCommand::SetSize(25));
    apply(&mut settings, SettingsCommand::SelectPreset(2));
    apply(&mut settings, SettingsCommand::SetColor(Rgb::new(255, 0, 0)));
    apply(&mut settings, SettingsCommand::SetThickness(9));

    assert!(apply(&mut settings, SettingsCommand::ResetActive));
    assert_eq!(*settings.active(), ReticleConfig::default());
    // Slot 0 keeps its edit.
    assert_eq!(settings.presets[0].size, 25);
}

#[test]
fn set_custom_colors_replaces_the_palette() {
    let mut settings = Settings::default();
    let mut palette = [Rgb::default(); CUSTOM_COLOR_COUNT];
    palette[0] = Rgb::new(1, 2, 3);
    palette[15] = Rgb::new(200, 100, 50);
    assert!(apply(&mut settings, SettingsCommand::SetCustomColors(palette)));
    assert_eq!(settings.active().custom_colors, palette);
}

// === Numeric Field Parsing ===

#[test]
fn field_value_in_range_is_accepted() {
    assert_eq!(parse_field_value("1", MIN_SIZE, MAX_SIZE), Some(1));
    assert_eq!(parse_field_value("50", MIN_SIZE, MAX_SIZE), Some(50));
    assert_eq!(parse_field_value(" 25 ", MIN_SIZE, MAX_SIZE), Some(25));
}

#[test]
fn field_boundary_values_are_rejected() {
    assert_eq!(parse_field_value("0", MIN_SIZE, MAX_SIZE), None);
    assert_eq!(parse_field_value("51", MIN_SIZE, MAX_SIZE), None);
}

#[test]
fn field_non_numeric_input_is_rejected() {
    assert_eq!(parse_field_value("", MIN_SIZE, MAX_SIZE), None);
    assert_eq!(parse_field_value("abc", MIN_SIZE, MAX_SIZE), None);
    assert_eq!(parse_field_value("1.5", MIN_SIZE, MAX_SIZE), None);
}

// === Validation ===

#[test]
fn validate_clamps_out_of_range_fields() {
    let mut settings = Settings::default();
    settings.presets[1].size = 900;
    settings.presets[2].thickness = -4;
    settings.validate();
    assert_eq!(settings.presets[1].size, MAX_SIZE);
    assert_eq!(settings.presets[2].thickness, MIN_THICKNESS);
}

#[test]
fn validate_resets_an_invalid_active_index() {
    let mut settings = Settings::default();
    settings.active_preset = 42;
    settings.validate();
    assert_eq!(settings.active_preset, 0);
}

// === Color Conversions ===

#[test]
fn colorref_roundtrip() {
    let color = Rgb::new(0x12, 0x34, 0x56);
    assert_eq!(color.to_colorref(), 0x0056_3412);
    assert_eq!(Rgb::from_colorref(color.to_colorref()), color);
}

#[test]
fn shape_index_roundtrip() {
    for shape in [Shape::Cross, Shape::Circle, Shape::Dot] {
        assert_eq!(Shape::from_index(shape.index()), shape);
    }
    assert_eq!(Shape::from_index(99), Shape::Cross);
}
