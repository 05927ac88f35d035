use crate::error::{PikdexError, Result};
use crate::export::EXPORT_FILENAME;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::str::FromStr;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for pikdex, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PikdexConfig {
    /// File name used by `export` when no output path is given
    #[serde(default = "default_export_file")]
    pub export_file: String,

    /// Ask before deleting entries
    #[serde(default = "default_confirm_delete")]
    pub confirm_delete: bool,
}

fn default_export_file() -> String {
    EXPORT_FILENAME.to_string()
}

fn default_confirm_delete() -> bool {
    true
}

impl Default for PikdexConfig {
    fn default() -> Self {
        Self {
            export_file: default_export_file(),
            confirm_delete: default_confirm_delete(),
        }
    }
}

/// A settable configuration key, as typed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    ExportFile,
    ConfirmDelete,
}

impl ConfigKey {
    pub const ALL: &'static [ConfigKey] = &[ConfigKey::ExportFile, ConfigKey::ConfirmDelete];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigKey::ExportFile => "export-file",
            ConfigKey::ConfirmDelete => "confirm-delete",
        }
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfigKey {
    type Err = PikdexError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|k| k.as_str() == s.trim())
            .ok_or_else(|| PikdexError::Config(format!("Unknown config key: {}", s)))
    }
}

impl PikdexConfig {
    /// Reads `config.json` from `dir`. A missing file means defaults.
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self> {
        match fs::read_to_string(dir.as_ref().join(CONFIG_FILENAME)) {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(PikdexError::Io(e)),
        }
    }

    /// Writes `config.json` into `dir`, creating the directory on first use.
    pub fn save<P: AsRef<Path>>(&self, dir: P) -> Result<()> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;
        fs::write(dir.join(CONFIG_FILENAME), serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn get(&self, key: ConfigKey) -> String {
        match key {
            ConfigKey::ExportFile => self.export_file.clone(),
            ConfigKey::ConfirmDelete => self.confirm_delete.to_string(),
        }
    }

    /// Validates and stores `value`; on error the config is unchanged.
    pub fn set(&mut self, key: ConfigKey, value: &str) -> Result<()> {
        match key {
            ConfigKey::ExportFile => {
                let value = value.trim();
                if value.is_empty() {
                    return Err(PikdexError::Config("export-file cannot be empty".into()));
                }
                self.export_file = value.to_string();
            }
            ConfigKey::ConfirmDelete => {
                self.confirm_delete = parse_bool(value).ok_or_else(|| {
                    PikdexError::Config(format!("confirm-delete expects true/false, got '{}'", value))
                })?;
            }
        }
        Ok(())
    }

    pub fn list_all(&self) -> Vec<(ConfigKey, String)> {
        ConfigKey::ALL.iter().map(|k| (*k, self.get(*k))).collect()
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}
