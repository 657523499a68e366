use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub storage: StorageConfig,
    pub gate: GateConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// Path of the durable collection snapshot (one JSON document).
    pub snapshot_path: PathBuf,
    /// Path of the session flag marker, distinct from the snapshot.
    #[serde(default = "default_session_path")]
    pub session_path: PathBuf,
}

fn default_session_path() -> PathBuf {
    PathBuf::from("data/session")
}

#[derive(Debug, Deserialize, Clone)]
pub struct GateConfig {
    /// The shared secret. A soft access deterrent, not a security
    /// boundary: anyone who can read this file can read the secret.
    pub secret: String,
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    if config.gate.secret.trim().is_empty() {
        anyhow::bail!("gate.secret must not be empty");
    }

    if config.storage.snapshot_path == config.storage.session_path {
        anyhow::bail!("storage.snapshot_path and storage.session_path must differ");
    }

    Ok(config)
}
