use crate::errors::{AppError, AppResult};
use crate::models::actor::Actor;
use crate::models::worker::{Worker, WorkerStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_admin_id")]
    pub admin_id: String,
    #[serde(default = "default_admin_name")]
    pub admin_name: String,
    /// Thousands separator used when printing point amounts
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    /// Workers seeded into the directory at startup
    #[serde(default = "default_workers")]
    pub workers: Vec<Worker>,
}

fn default_admin_id() -> String {
    "admin".to_string()
}
fn default_admin_name() -> String {
    "Administrator".to_string()
}
fn default_separator_char() -> String {
    ",".to_string()
}
fn default_workers() -> Vec<Worker> {
    vec![Worker {
        id: "1".to_string(),
        name: "Taro Yamada".to_string(),
        email: "worker@example.com".to_string(),
        points: 0,
        total_earned: 0,
        joined_at: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap_or_default(),
        status: WorkerStatus::Active,
    }]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            admin_id: default_admin_id(),
            admin_name: default_admin_name(),
            separator_char: default_separator_char(),
            workers: default_workers(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".pointadmin")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("pointadmin.conf")
    }

    /// Load configuration from `path`, or return defaults if the file does not exist
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {}", path.display(), e)))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject seed data the directory cannot hold (duplicate or empty ids).
    pub fn validate(&self) -> AppResult<()> {
        let mut seen = std::collections::HashSet::new();
        for w in &self.workers {
            if w.id.trim().is_empty() {
                return Err(AppError::Config(format!(
                    "worker '{}' has an empty id",
                    w.name
                )));
            }
            if !seen.insert(w.id.as_str()) {
                return Err(AppError::Config(format!("duplicate worker id '{}'", w.id)));
            }
        }
        Ok(())
    }

    pub fn actor(&self) -> Actor {
        Actor::new(&self.admin_id, &self.admin_name)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Write the default configuration to `path`, creating parent directories.
    /// An existing file is kept unless `force` is set.
    pub fn init_file(path: &Path, force: bool) -> AppResult<bool> {
        if path.exists() && !force {
            return Ok(false);
        }

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let yaml = Self::default().to_yaml()?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(true)
    }
}
