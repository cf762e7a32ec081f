use crate::errors::{AppError, AppResult};
use crate::utils::time::parse_time;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// How the normalizer reacts to a malformed row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IngestMode {
    /// First malformed row aborts the whole load.
    Strict,
    /// Malformed rows are skipped and reported.
    Lenient,
}

/// Which Entry/Exit pairing strategy the reconstructor uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PairingKind {
    Positional,
    Sequential,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    pub time_format: String,
    pub mode: IngestMode,
    pub unknown_department: String,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            time_format: "%d/%m/%Y %H:%M:%S".to_string(),
            mode: IngestMode::Strict,
            unknown_department: "Unknown".to_string(),
        }
    }
}

/// Office-hours window and temperature ceiling, as written in the config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    pub office_start: String,
    pub office_end: String,
    pub temp_ceiling: f64,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            office_start: "08:00".to_string(),
            office_end: "18:00".to_string(),
            temp_ceiling: 37.5,
        }
    }
}

/// Thresholds resolved into typed values, ready for the classifier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Policy {
    pub office_start: NaiveTime,
    pub office_end: NaiveTime,
    pub temp_ceiling: f64,
}

impl PolicyConfig {
    pub fn resolve(&self) -> AppResult<Policy> {
        let office_start = parse_time(&self.office_start)
            .ok_or_else(|| AppError::InvalidTime(self.office_start.clone()))?;
        let office_end = parse_time(&self.office_end)
            .ok_or_else(|| AppError::InvalidTime(self.office_end.clone()))?;

        if office_end <= office_start {
            return Err(AppError::Config(format!(
                "office_end ({}) must be later than office_start ({})",
                self.office_end, self.office_start
            )));
        }
        if !self.temp_ceiling.is_finite() {
            return Err(AppError::Config("temp_ceiling must be a number".into()));
        }

        Ok(Policy {
            office_start,
            office_end,
            temp_ceiling: self.temp_ceiling,
        })
    }
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            office_start: NaiveTime::from_hms_opt(8, 0, 0).unwrap_or(NaiveTime::MIN),
            office_end: NaiveTime::from_hms_opt(18, 0, 0).unwrap_or(NaiveTime::MIN),
            temp_ceiling: 37.5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PairingConfig {
    pub strategy: PairingKind,
}

impl Default for PairingConfig {
    fn default() -> Self {
        Self {
            strategy: PairingKind::Positional,
        }
    }
}

/// Placeholder login gate. Not a security model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub required: bool,
    pub username: String,
    pub password: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            required: false,
            username: "admin".to_string(),
            password: "password123".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ingest: IngestConfig,
    #[serde(default)]
    pub policy: PolicyConfig,
    #[serde(default)]
    pub pairing: PairingConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("raccesslog")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".raccesslog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("raccesslog.conf")
    }

    /// Load configuration from the standard location, or defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    /// Load configuration from `path`, or defaults if the file does not exist
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content)?;

        // thresholds must resolve before any report runs
        cfg.policy.resolve()?;
        Ok(cfg)
    }

    /// Write the default configuration to `path`, creating parent directories.
    /// An existing file is left untouched unless `overwrite` is set.
    pub fn init_at(path: &Path, overwrite: bool) -> AppResult<bool> {
        if path.exists() && !overwrite {
            return Ok(false);
        }

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(&Config::default())?;
        let mut file = fs::File::create(path).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;

        Ok(true)
    }
}
