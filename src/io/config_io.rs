use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;

use crate::model::{Config, ConfigError};

use super::storage::atomic_write;

/// Error type for the settings file
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("could not read {path}: {source}")]
    ReadError { path: PathBuf, source: io::Error },
    #[error("could not write {path}: {source}")]
    WriteError { path: PathBuf, source: io::Error },
    #[error("invalid settings file: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("invalid settings file: {0}")]
    EditError(#[from] toml_edit::TomlError),
}

/// Contents of `settings.toml`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Settings {
    /// Stored values for `Config` fields, by field name
    #[serde(default)]
    pub settings: IndexMap<String, String>,
    #[serde(default)]
    pub ui: UiSettings,
    #[serde(default)]
    pub storage: StorageSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UiSettings {
    /// Width of the command side panel, in cells
    #[serde(default = "default_side_pane_width")]
    pub side_pane_width: u16,
    /// Colour overrides, `name = "#RRGGBB"`
    #[serde(default)]
    pub colors: IndexMap<String, String>,
}

impl Default for UiSettings {
    fn default() -> Self {
        UiSettings {
            side_pane_width: default_side_pane_width(),
            colors: IndexMap::new(),
        }
    }
}

fn default_side_pane_width() -> u16 {
    16
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StorageSettings {
    /// Data file location
    pub path: Option<PathBuf>,
}

/// The settings file on disk, kept as an editable document so single values
/// can be written back without disturbing the rest of the file.
#[derive(Debug, Clone)]
pub struct SettingsFile {
    pub path: PathBuf,
    pub doc: toml_edit::DocumentMut,
}

impl SettingsFile {
    /// Store one `[settings]` value and write the file
    pub fn persist(&mut self, name: &str, value: &str) -> Result<(), SettingsError> {
        set_setting(&mut self.doc, name, value);
        write_settings(&self.path, &self.doc)
    }
}

/// Default settings file: `$XDG_CONFIG_HOME/lists/settings.toml`, falling
/// back to `~/.config/lists/settings.toml`
pub fn default_settings_path() -> Option<PathBuf> {
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
    Some(base.join("lists").join("settings.toml"))
}

/// Read the settings file, returning both the parsed settings and the raw
/// document. A missing file reads as defaults and an empty document.
pub fn read_settings(path: &Path) -> Result<(Settings, SettingsFile), SettingsError> {
    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
        Err(e) => {
            return Err(SettingsError::ReadError {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };
    let settings: Settings = toml::from_str(&text)?;
    let doc: toml_edit::DocumentMut = text.parse()?;
    Ok((
        settings,
        SettingsFile {
            path: path.to_path_buf(),
            doc,
        },
    ))
}

/// Apply stored values to `config`. Values that `config` rejects are skipped
/// and returned, leaving the field at its default.
pub fn apply_settings(config: &mut Config, settings: &Settings) -> Vec<ConfigError> {
    settings
        .settings
        .iter()
        .filter_map(|(name, value)| config.set(name, value).err())
        .collect()
}

/// Set one value in the `[settings]` table of the document
pub fn set_setting(doc: &mut toml_edit::DocumentMut, name: &str, value: &str) {
    if !doc.contains_key("settings") {
        doc["settings"] = toml_edit::Item::Table(toml_edit::Table::new());
    }
    doc["settings"][name] = toml_edit::value(value);
}

/// Write the document back to disk, preserving formatting
pub fn write_settings(path: &Path, doc: &toml_edit::DocumentMut) -> Result<(), SettingsError> {
    let write_err = |e| SettingsError::WriteError {
        path: path.to_path_buf(),
        source: e,
    };
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir).map_err(write_err)?;
    }
    atomic_write(path, doc.to_string().as_bytes()).map_err(write_err)
}
