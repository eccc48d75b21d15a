use std::env;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use serde::Deserialize;
use tokio::fs;
use tracing::warn;

use pubg_domain::Shard;

use crate::config::validation::{validate_base_url, validate_shard};

pub const DEFAULT_CONFIG_PATH: &str = "./config.toml";

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub shard: String,
    pub player_name: Option<String>,
    pub player_id: Option<String>,
    pub data_dir: String,
    pub request_timeout_seconds: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.pubg.com".to_string(),
            shard: "steam".to_string(),
            player_name: None,
            player_id: None,
            data_dir: "./data".to_string(),
            request_timeout_seconds: 30,
        }
    }
}

impl AppConfig {
    /// Loads from `PUBG_CONFIG` (default `./config.toml`), then applies `PUBG_*`
    /// environment overrides.
    pub async fn load() -> Result<Self> {
        let path = env::var("PUBG_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(Path::new(&path), |key| env::var(key).ok()).await
    }

    pub async fn load_from<F>(file_path: &Path, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_dir = file_path.parent();
        let mut config = if file_path.exists() {
            let content = fs::read_to_string(file_path).await?;
            toml::from_str::<AppConfig>(&content)
                .map_err(|err| anyhow!("invalid config {}: {}", file_path.display(), err))?
        } else {
            warn!("{} not found, using defaults", file_path.display());
            AppConfig::default()
        };
        config.apply_env_overrides(lookup);
        config.resolve_paths(base_dir);
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    pub fn normalize(&mut self) {
        blank_to_none(&mut self.api_key);
        blank_to_none(&mut self.player_name);
        blank_to_none(&mut self.player_id);
        self.base_url = self.base_url.trim().trim_end_matches('/').to_string();
        self.shard = self.shard.trim().to_lowercase();
    }

    fn resolve_paths(&mut self, base_dir: Option<&Path>) {
        let Some(base) = base_dir else {
            return;
        };
        self.data_dir = resolve_path(base, &self.data_dir);
    }

    pub fn validate(&self) -> Result<()> {
        validate_base_url(&self.base_url)?;
        validate_shard(&self.shard)?;
        if self.request_timeout_seconds == 0 {
            return Err(anyhow!("request_timeout_seconds must be greater than 0"));
        }
        if self.data_dir.trim().is_empty() {
            return Err(anyhow!("data_dir must not be empty"));
        }
        Ok(())
    }

    pub fn shard(&self) -> Result<Shard> {
        validate_shard(&self.shard)
    }

    pub fn data_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir)
    }

    /// The API key, required only by commands that hit the network.
    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            anyhow!("api_key is not configured (set PUBG_API_KEY or api_key in config.toml)")
        })
    }

    fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("PUBG_API_KEY") {
            self.api_key = Some(value);
        }
        if let Some(value) = lookup("PUBG_BASE_URL") {
            self.base_url = value;
        }
        if let Some(value) = lookup("PUBG_SHARD") {
            self.shard = value;
        }
        if let Some(value) = lookup("PUBG_PLAYER_NAME") {
            self.player_name = Some(value);
        }
        if let Some(value) = lookup("PUBG_PLAYER_ID") {
            self.player_id = Some(value);
        }
        if let Some(value) = lookup("PUBG_DATA_DIR") {
            self.data_dir = value;
        }
        if let Some(value) = lookup("PUBG_REQUEST_TIMEOUT_SECONDS") {
            self.request_timeout_seconds = value.parse().unwrap_or(self.request_timeout_seconds);
        }
    }
}

fn blank_to_none(value: &mut Option<String>) {
    *value = value
        .take()
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty());
}

fn resolve_path(base: &Path, value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return trimmed.to_string();
    }
    let path = Path::new(trimmed);
    if path.is_absolute() {
        trimmed.to_string()
    } else {
        base.join(path).to_string_lossy().to_string()
    }
}
