use anyhow::{anyhow, Result};
use dict::{Dict, DictError};
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;

pub use dict::namespace::DEFAULT_PREFIX as DEFAULT_NAMESPACE_PREFIX;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub dict: DictSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DictSettings {
    #[serde(default = "default_namespace_prefix")]
    pub namespace_prefix: String,
    #[serde(default)]
    pub log_format: LogFormat,
    /// Initial entries for the demo registry, in file order.
    #[serde(default)]
    pub seed: IndexMap<String, String>,
}

impl Default for DictSettings {
    fn default() -> Self {
        Self { namespace_prefix: default_namespace_prefix(), log_format: LogFormat::default(), seed: IndexMap::new() }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

fn default_namespace_prefix() -> String { DEFAULT_NAMESPACE_PREFIX.to_string() }

fn config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string())
}

pub fn load_default() -> Result<AppConfig> {
    load_from_file(&config_path())
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&content)?;
    Ok(cfg)
}

/// Like [`load_default`], but a missing file yields the defaults.
pub fn load_or_default() -> Result<AppConfig> {
    if !Path::new(&config_path()).exists() {
        return Ok(AppConfig::default());
    }
    load_default()
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        dotenvy::dotenv().ok();
        let mut cfg = load_or_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.dict.normalize_from_env();
        self.dict.validate()
    }
}

impl DictSettings {
    /// `DICT_NAMESPACE_PREFIX` overrides the file value.
    pub fn normalize_from_env(&mut self) {
        if let Ok(prefix) = std::env::var("DICT_NAMESPACE_PREFIX") {
            self.namespace_prefix = prefix;
        }
        self.normalize();
    }

    pub fn normalize(&mut self) {
        self.namespace_prefix = self.namespace_prefix.trim().to_string();
    }

    pub fn validate(&self) -> Result<()> {
        if self.namespace_prefix.is_empty() {
            return Err(anyhow!("dict.namespace_prefix must not be empty"));
        }
        if let Some(key) = self.seed.keys().find(|k| k.is_empty()) {
            return Err(anyhow!("dict.seed contains an empty key: {key:?}"));
        }
        Ok(())
    }

    /// Registry seeded from `seed`, in file order.
    pub fn seed_registry(&self) -> Result<Dict<String>, DictError> {
        Dict::from_entries(self.seed.iter().map(|(k, v)| (k.as_str(), v.clone())))
    }
}
