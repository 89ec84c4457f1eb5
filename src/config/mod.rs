use crate::errors::{AppError, AppResult};
use crate::utils::path::{absolutize, expand_tilde};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

pub mod migrate;

pub const DATA_FILE_NAME: &str = "work_log.csv";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_file")]
    pub data_file: String,
    #[serde(default = "default_start")]
    pub default_start: String,
    #[serde(default = "default_end")]
    pub default_end: String,
    #[serde(default = "default_audit_log")]
    pub audit_log: bool,
}

fn default_data_file() -> String {
    Config::data_file_default().to_string_lossy().to_string()
}
fn default_start() -> String {
    "18:00".to_string()
}
fn default_end() -> String {
    "20:00".to_string()
}
fn default_audit_log() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            default_start: default_start(),
            default_end: default_end(),
            audit_log: default_audit_log(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("otlog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".otlog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("otlog.conf")
    }

    /// Default location of the CSV store
    pub fn data_file_default() -> PathBuf {
        Self::config_dir().join(DATA_FILE_NAME)
    }

    /// Internal audit log, always next to the config file
    pub fn audit_file() -> PathBuf {
        Self::config_dir().join("otlog.audit.csv")
    }

    /// Resolved path of the CSV store (`~/` expanded)
    pub fn data_path(&self) -> PathBuf {
        expand_tilde(&self.data_file)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Write this configuration to the standard config file
    pub fn save(&self) -> AppResult<()> {
        fs::create_dir_all(Self::config_dir()).map_err(|_| AppError::ConfigSave)?;
        let yaml = self.to_yaml()?;
        fs::write(Self::config_file(), yaml).map_err(|_| AppError::ConfigSave)
    }

    /// Initialize configuration directory and file.
    /// A custom data file is stored as an absolute path.
    pub fn init_all(custom_file: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let data_path = match custom_file {
            Some(name) => absolutize(&expand_tilde(&name)),
            None => Self::data_file_default(),
        };

        let config = Config {
            data_file: data_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            config.save()?;
        }

        Ok(config)
    }
}
