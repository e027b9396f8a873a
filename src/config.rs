//! TOML configuration.
//!
//! Every section is optional; a missing file at the default location means
//! "use the defaults". See `config/sathi.example.toml`.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use soilsathi_core::DEFAULT_LIMIT;

/// Config file read when `--config` is not given, if it exists.
pub const DEFAULT_CONFIG_PATH: &str = "./config/sathi.toml";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub retrieval: RetrievalConfig,
    #[serde(default)]
    pub knowledge: KnowledgeConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RetrievalConfig {
    #[serde(default = "default_limit")]
    pub default_limit: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
        }
    }
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

/// Where knowledge-base entries come from.
#[derive(Debug, Deserialize, Clone)]
pub struct KnowledgeConfig {
    /// TOML file with extra `[[entries]]`. Relative paths resolve against
    /// the config file's directory.
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Keep the compiled-in catalogue ahead of file entries.
    #[serde(default = "default_include_builtin")]
    pub include_builtin: bool,
}

impl Default for KnowledgeConfig {
    fn default() -> Self {
        Self {
            path: None,
            include_builtin: true,
        }
    }
}

fn default_include_builtin() -> bool {
    true
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "127.0.0.1:7341".to_string()
}

/// Load and validate a config file.
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let mut config: Config =
        toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    if let Some(kb_path) = &config.knowledge.path {
        if kb_path.is_relative() {
            if let Some(dir) = path.parent() {
                config.knowledge.path = Some(dir.join(kb_path));
            }
        }
    }

    validate(&config)?;
    Ok(config)
}

/// Resolve the config for a CLI invocation.
///
/// An explicit path must exist. Without one, [`DEFAULT_CONFIG_PATH`] is used
/// when present and the built-in defaults otherwise.
pub fn resolve_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => load_config(path),
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_PATH);
            if default_path.exists() {
                load_config(default_path)
            } else {
                tracing::debug!("no config file at {}, using defaults", DEFAULT_CONFIG_PATH);
                Ok(Config::default())
            }
        }
    }
}

fn validate(config: &Config) -> Result<()> {
    if config.retrieval.default_limit == 0 {
        anyhow::bail!("retrieval.default_limit must be >= 1");
    }

    if config.server.bind.trim().is_empty() {
        anyhow::bail!("server.bind must not be empty");
    }

    if !config.knowledge.include_builtin && config.knowledge.path.is_none() {
        anyhow::bail!("knowledge.include_builtin = false requires knowledge.path");
    }

    Ok(())
}
