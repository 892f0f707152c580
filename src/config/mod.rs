use crate::errors::{AppError, AppResult};
use crate::models::city::City;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_city")]
    pub default_city: String,
    #[serde(default = "default_progress_width")]
    pub progress_width: usize,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    #[serde(default = "default_use_colors")]
    pub use_colors: bool,
}

fn default_city() -> String {
    City::Istanbul.id().to_string()
}
fn default_progress_width() -> usize {
    24
}
fn default_separator_char() -> String {
    "-".to_string()
}
fn default_use_colors() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_city: default_city(),
            progress_width: default_progress_width(),
            separator_char: default_separator_char(),
            use_colors: default_use_colors(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("rimsakiye")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rimsakiye")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rimsakiye.conf")
    }

    /// Load configuration from `path`, or return defaults if not found.
    /// Fields missing from the file take their default value.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            log::error!("cannot read {}: {}", path.display(), e);
            AppError::ConfigLoad
        })?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    /// City selected when `--city` is not given.
    pub fn city(&self) -> AppResult<City> {
        City::from_id(&self.default_city)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Write a default configuration file at `path`, creating its directory.
    /// In test mode nothing is written.
    pub fn init_at(path: &Path, is_test: bool) -> AppResult<Self> {
        let config = Self::default();

        if is_test {
            return Ok(config);
        }

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let yaml = config.to_yaml()?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        log::info!("config written to {}", path.display());

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_conf(name: &str) -> PathBuf {
        let p = env::temp_dir().join(format!("{}_rimsakiye.conf", name));
        fs::remove_file(&p).ok();
        p
    }

    #[test]
    fn missing_file_gives_defaults() {
        let cfg = Config::load_from(&temp_conf("cfg_missing")).unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.city().unwrap(), City::Istanbul);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let path = temp_conf("cfg_partial");
        fs::write(&path, "default_city: izmir\n").unwrap();
        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.city().unwrap(), City::Izmir);
        assert_eq!(cfg.progress_width, 24);
        assert!(cfg.use_colors);
    }

    #[test]
    fn invalid_yaml_is_config_error() {
        let path = temp_conf("cfg_invalid");
        fs::write(&path, "progress_width: [nope\n").unwrap();
        assert!(matches!(Config::load_from(&path), Err(AppError::Config(_))));
    }

    #[test]
    fn init_writes_loadable_file() {
        let path = temp_conf("cfg_init");
        Config::init_at(&path, false).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn init_in_test_mode_writes_nothing() {
        let path = temp_conf("cfg_init_test");
        Config::init_at(&path, true).unwrap();
        assert!(!path.exists());
    }
}
