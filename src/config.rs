use std::path::PathBuf;

use eyre::Result;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::DEFAULT_MODEL;
use crate::ollama::DEFAULT_HOST;

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub default_model: Option<String>,
    pub ollama_host: Option<String>,
}

impl Config {
    /// Load config from ~/.config/ytsum/config.toml if it exists
    pub fn load() -> Result<Self> {
        let path = config_path();
        if path.exists() {
            debug!("Loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            debug!("No config file found at {}", path.display());
            Ok(Config::default())
        }
    }

    /// CLI flag, then config file, then the built-in default
    pub fn model(&self, flag: Option<&str>) -> String {
        flag.or(self.default_model.as_deref())
            .unwrap_or(DEFAULT_MODEL)
            .to_string()
    }

    /// CLI flag, then `env`, then config file, then the built-in default
    pub fn host(&self, flag: Option<&str>, env: Option<&str>) -> String {
        flag.or(env)
            .or(self.ollama_host.as_deref())
            .unwrap_or(DEFAULT_HOST)
            .to_string()
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from(".config"))
        .join("ytsum")
        .join("config.toml")
}
