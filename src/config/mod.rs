
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

fn default_venv_dir() -> String {
    "venv".to_string()
}
fn default_quick_test_script() -> String {
    "quick_test.py".to_string()
}
fn default_monitor_script() -> String {
    "trends_monitor.py".to_string()
}
fn default_view_data_script() -> String {
    "view_data.py".to_string()
}
fn default_file_logging() -> bool {
    true
}

/// On-disk shape of `launcher.json`. Every field is optional; the file itself
/// is optional too, since the launcher must keep working in a bare checkout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default = "default_venv_dir")]
    pub venv_dir: String,
    /// Explicit interpreter override. When unset the launcher resolves the
    /// interpreter from the venv, falling back to PATH.
    #[serde(default)]
    pub python: Option<PathBuf>,
    #[serde(default = "default_quick_test_script")]
    pub quick_test_script: String,
    #[serde(default = "default_monitor_script")]
    pub monitor_script: String,
    #[serde(default = "default_view_data_script")]
    pub view_data_script: String,
    #[serde(default = "default_file_logging")]
    pub file_logging_enabled: bool,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            venv_dir: default_venv_dir(),
            python: None,
            quick_test_script: default_quick_test_script(),
            monitor_script: default_monitor_script(),
            view_data_script: default_view_data_script(),
            file_logging_enabled: default_file_logging(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    path: PathBuf,
    data: ConfigFile,
}

impl Config {
    /// Load `launcher.json` from `path`. A missing file yields defaults; a
    /// present-but-unreadable file is an error worth stopping for.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Ok(Self {
                path,
                data: ConfigFile::default(),
            });
        }
        let text = fs::read_to_string(&path)
            .map_err(|e| Error::config(format!("Failed to read {}: {}", path.display(), e)))?;
        let data: ConfigFile = serde_json::from_str(&text)
            .map_err(|e| Error::config(format!("Invalid JSON in '{}': {}", path.display(), e)))?;
        Ok(Self { path, data })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn view(&self) -> &ConfigFile {
        &self.data
    }

    pub fn venv_dir(&self) -> &str {
        &self.data.venv_dir
    }
    pub fn python(&self) -> Option<&Path> {
        self.data.python.as_deref()
    }
    pub fn quick_test_script(&self) -> &str {
        &self.data.quick_test_script
    }
    pub fn monitor_script(&self) -> &str {
        &self.data.monitor_script
    }
    pub fn view_data_script(&self) -> &str {
        &self.data.view_data_script
    }
    pub fn file_logging_enabled(&self) -> bool {
        self.data.file_logging_enabled
    }

    /// Write the current values back out, e.g. to seed an editable file.
    pub fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.data)?;
        fs::write(&self.path, json)
            .map_err(|e| Error::config(format!("Failed to write {}: {}", self.path.display(), e)))
    }
}
