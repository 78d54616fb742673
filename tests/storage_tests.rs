//! Round-trip tests for the binary settings store.

use std::fs;
use std::path::PathBuf;

use crosshair_overlay::commands::{apply, SettingsCommand};
use crosshair_overlay::model::{Rgb, Settings, Shape, CUSTOM_COLOR_COUNT};
use crosshair_overlay::storage::{load_from, save_to, SETTINGS_BLOB_LEN};

/// Per-test file under the system temp directory.
struct TempSettingsFile(PathBuf);

impl TempSettingsFile {
    fn new(name: &str) -> Self {
        let path = std::env::temp_dir().join(format!(
            "crosshair-overlay-test-{}-{}.dat",
            std::process::id(),
            name
        ));
        let _ = fs::remove_file(&path);
        Self(path)
    }
}

impl Drop for TempSettingsFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.0);
    }
}

fn varied_settings() -> Settings {
    let mut settings = Settings::default();
    settings.active_preset = 2;
    for (i, preset) in settings.presets.iter_mut().enumerate() {
        preset.shape = Shape::from_index(i % 3);
        preset.size = 1 + (i as i32) * 10;
        preset.thickness = 1 + i as i32;
        preset.center_dot = i % 2 == 0;
        preset.color = Rgb::new(i as u8 * 40, 255 - i as u8 * 40, 17);
        for (j, swatch) in preset.custom_colors.iter_mut().enumerate() {
            *swatch = Rgb::new(i as u8, j as u8, (i * j) as u8);
        }
    }
    settings
}

#[test]
fn save_then_load_reproduces_every_field() {
    let file = TempSettingsFile::new("roundtrip");
    let settings = varied_settings();

    save_to(&settings, &file.0).expect("save should succeed");
    assert_eq!(load_from(&file.0), settings);
}

#[test]
fn missing_file_yields_defaults() {
    let file = TempSettingsFile::new("missing");
    assert_eq!(load_from(&file.0), Settings::default());
}

#[test]
fn truncated_file_yields_defaults() {
    let file = TempSettingsFile::new("truncated");
    let settings = varied_settings();
    save_to(&settings, &file.0).expect("save should succeed");

    let blob = fs::read(&file.0).unwrap();
    assert_eq!(blob.len(), SETTINGS_BLOB_LEN);
    fs::write(&file.0, &blob[..blob.len() / 2]).unwrap();

    assert_eq!(load_from(&file.0), Settings::default());
}

#[test]
fn garbage_file_yields_defaults() {
    let file = TempSettingsFile::new("garbage");
    // A plausible length but an impossible shape tag in the first preset.
    let mut blob = vec![0u8; SETTINGS_BLOB_LEN];
    blob[4] = 0xFF;
    fs::write(&file.0, &blob).unwrap();

    assert_eq!(load_from(&file.0), Settings::default());
}

#[test]
fn save_creates_the_containing_directory() {
    let dir = std::env::temp_dir().join(format!(
        "crosshair-overlay-test-dir-{}",
        std::process::id()
    ));
    let _ = fs::remove_dir_all(&dir);
    let path = dir.join("settings.dat");

    save_to(&Settings::default(), &path).expect("save should create the directory");
    assert!(path.exists());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn palette_survives_the_roundtrip() {
    let file = TempSettingsFile::new("palette");
    let mut settings = Settings::default();
    let mut palette = [Rgb::default(); CUSTOM_COLOR_COUNT];
    for (i, swatch) in palette.iter_mut().enumerate() {
        *swatch = Rgb::new(i as u8, 255 - i as u8, 128);
    }
    settings.presets[4].custom_colors = palette;

    save_to(&settings, &file.0).expect("save should succeed");
    assert_eq!(load_from(&file.0).presets[4].custom_colors, palette);
}

#[test]
fn edited_preset_survives_a_reload() {
    let file = TempSettingsFile::new("scenario");

    // Start from defaults and edit preset 0 the way the panel would.
    let mut settings = Settings::default();
    apply(&mut settings, SettingsCommand::SetShape(Shape::Circle));
    apply(&mut settings, SettingsCommand::SetSize(20));
    apply(&mut settings, SettingsCommand::SetThickness(4));
    apply(&mut settings, SettingsCommand::SetColor(Rgb::new(255, 0, 0)));
    apply(&mut settings, SettingsCommand::SetCenterDot(true));
    save_to(&settings, &file.0).expect("save should succeed");

    // Fresh process: load from disk and check preset 0.
    let reloaded = load_from(&file.0);
    let preset = &reloaded.presets[0];
    assert_eq!(preset.shape, Shape::Circle);
    assert_eq!(preset.size, 20);
    assert_eq!(preset.thickness, 4);
    assert_eq!(preset.color, Rgb::new(255, 0, 0));
    assert!(preset.center_dot);
}
