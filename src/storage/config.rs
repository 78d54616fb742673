//! Binary settings file.
//!
//! The record is small, local and single-writer, so it is written in one
//! shot as a fixed-size blob and read back all-or-nothing: any failure to
//! read or decode falls back to defaults, no partial recovery.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::model::Settings;

/// Encoded size of the settings record in bytes.
///
/// bincode with its default options gives a stable layout: little-endian
/// fixed-width integers, fieldless enums as `u32` tags, `bool` as one
/// byte, fixed-size arrays element by element with no length prefix.
/// In declaration order that is 4 bytes for the active slot plus five
/// presets of 64 bytes each (4 shape + 4 size + 4 thickness + 1 center
/// dot + 3 color + 48 swatch palette).
pub const SETTINGS_BLOB_LEN: usize = 324;

/// Settings file path: `%APPDATA%\CrosshairOverlay\settings.dat`
pub fn settings_path() -> PathBuf {
    let appdata = std::env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(appdata)
        .join("CrosshairOverlay")
        .join("settings.dat")
}

/// Load settings from the default location.
pub fn load() -> Settings {
    load_from(&settings_path())
}

/// Load settings from `path`.
///
/// An absent, unreadable, truncated or undecodable file yields the
/// default record (all five presets at their defaults, slot 0 active).
/// Decoded values are clamped back into range.
pub fn load_from(path: &Path) -> Settings {
    let mut settings = match fs::read(path) {
        Ok(bytes) => match bincode::deserialize(&bytes) {
            Ok(settings) => settings,
            Err(e) => {
                log::info!(
                    "ignoring undecodable settings file {}: {}",
                    path.display(),
                    e
                );
                Settings::default()
            }
        },
        Err(e) => {
            log::info!(
                "no settings file at {} ({}), using defaults",
                path.display(),
                e
            );
            Settings::default()
        }
    };
    settings.validate();
    settings
}

/// Save settings to the default location.
pub fn save(settings: &Settings) -> io::Result<()> {
    save_to(settings, &settings_path())
}

/// Write the whole record to `path`, creating the containing directory
/// if absent and overwriting any existing file.
pub fn save_to(settings: &Settings, path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let blob = bincode::serialize(settings)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(path, blob)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_encodes_to_fixed_size() {
        let blob = bincode::serialize(&Settings::default()).unwrap();
        assert_eq!(blob.len(), SETTINGS_BLOB_LEN);
    }

    #[test]
    fn encoding_roundtrip() {
        let mut settings = Settings::default();
        settings.active_preset = 3;
        settings.presets[3].size = 42;
        let blob = bincode::serialize(&settings).unwrap();
        let loaded: Settings = bincode::deserialize(&blob).unwrap();
        assert_eq!(loaded, settings);
    }
}
