use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_user")]
    pub default_user: String,
}

fn default_user() -> String {
    "default".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            default_user: default_user(),
        }
    }
}

impl Config {
    /// Standard configuration directory depending on the platform.
    pub fn config_dir() -> PathBuf {
        match dirs::home_dir() {
            Some(home) => home.join(".hourbook"),
            None => PathBuf::from(".hourbook"),
        }
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("hourbook.conf")
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join("hourbook.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
            serde_yaml::from_str(&content).map_err(|_| AppError::ConfigLoad)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir).map_err(|_| AppError::ConfigSave)?;

        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        let mut file = fs::File::create(Self::config_file()).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes()).map_err(|_| AppError::ConfigSave)
    }

    /// Report config file fields that are missing and would fall back to
    /// defaults on load.
    pub fn check() -> AppResult<Vec<&'static str>> {
        let path = Self::config_file();
        if !path.exists() {
            return Err(AppError::Config(format!(
                "config file not found: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(&path)?;
        let raw: serde_yaml::Value =
            serde_yaml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))?;

        let mut missing = Vec::new();
        for field in ["database", "default_user"] {
            if raw.get(field).is_none() {
                missing.push(field);
            }
        }
        Ok(missing)
    }

    /// Initialize configuration and database files.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let db_path = match custom_db {
            Some(name) => {
                let p = PathBuf::from(&name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            default_user: default_user(),
        };

        // test runs must not touch the real config file
        if !is_test {
            config.save()?;
        }

        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        Ok(db_path)
    }
}
