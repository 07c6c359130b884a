use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Front-end settings. Engine inputs live in the project file, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `auto`, `nl` or `en`
    pub language: String,
    /// Directory with `<lang>.toml` string overrides.
    pub language_pack_dir: Option<String>,
    /// Project used when the command line names none.
    pub default_project: Option<PathBuf>,
    pub currency_symbol: String,
    /// Decimals for money and heat-demand output.
    pub decimals: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".into(),
            language_pack_dir: None,
            default_project: None,
            currency_symbol: "€".into(),
            decimals: 2,
        }
    }
}

/// Errors while loading or saving the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Loads the config at `path`, writing the defaults there when it does not exist.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        log::debug!("loaded config from {}", path.display());
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        log::info!("wrote default config to {}", path.display());
        Ok(cfg)
    }
}

impl Config {
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
