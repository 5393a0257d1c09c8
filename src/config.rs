use crate::api::ClientConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Settings read from `<config dir>/figshare/config.toml`
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    pub token: Option<String>,
    #[serde(default)]
    pub private: bool,
    pub base_url: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let mut path = dirs::config_dir().context("Could not find config directory")?;
        path.push("figshare");
        path.push("config.toml");
        Ok(path)
    }

    /// Apply command-line or environment values on top of the file
    pub fn merge(
        mut self,
        token: Option<String>,
        private: Option<bool>,
        base_url: Option<String>,
    ) -> Self {
        if token.is_some() {
            self.token = token;
        }
        if let Some(private) = private {
            self.private = private;
        }
        if base_url.is_some() {
            self.base_url = base_url;
        }
        self
    }

    pub fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::new().with_private(self.private);
        if let Some(token) = &self.token {
            config = config.with_token(token.clone());
        }
        if let Some(base_url) = &self.base_url {
            config = config.with_base_url(base_url.clone());
        }
        config
    }
}
