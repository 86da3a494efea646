//! Configuration and data directory management.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Development-only signing secret used when `SECRET_KEY` is unset.
/// Anyone who knows it can forge session cookies; never run with it in production.
pub const DEV_SECRET_KEY: &str = "haven-dev-secret-change-me";

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_MODEL: &str = "microsoft/DialoGPT-small";
pub const DEFAULT_MODEL_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_MAX_HISTORY_TURNS: usize = 10;

/// Paths to all Haven data files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataPaths {
    /// Root data directory (e.g., `data/`).
    pub root: PathBuf,
    /// Plain-text turn log (`data/sessions.log`).
    pub sessions_log: PathBuf,
    /// Per-session JSON transcripts (`data/logs/`).
    pub logs_dir: PathBuf,
}

impl DataPaths {
    /// Create data paths from a root directory. Creates directories if needed.
    pub fn new(root: impl AsRef<Path>) -> std::io::Result<Self> {
        let root = root.as_ref().to_path_buf();
        let paths = Self {
            sessions_log: root.join("sessions.log"),
            logs_dir: root.join("logs"),
            root,
        };
        std::fs::create_dir_all(&paths.logs_dir)?;
        Ok(paths)
    }
}

/// Settings for the optional generative model backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSettings {
    /// Base URL of an OpenAI-compatible endpoint. `None` means rule-based only.
    pub api_url: Option<String>,
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    pub model: String,
    pub timeout_secs: u64,
    /// Number of prior turns sent to the model as context.
    pub max_history_turns: usize,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            api_url: None,
            api_key: None,
            model: DEFAULT_MODEL.into(),
            timeout_secs: DEFAULT_MODEL_TIMEOUT_SECS,
            max_history_turns: DEFAULT_MAX_HISTORY_TURNS,
        }
    }
}

/// Top-level Haven configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HavenConfig {
    /// HTTP server port.
    pub port: u16,
    /// Secret used to sign the session cookie.
    #[serde(skip_serializing)]
    pub secret_key: String,
    /// Data directory paths.
    pub data_paths: DataPaths,
    pub model: ModelSettings,
}

impl HavenConfig {
    /// Create configuration from environment and defaults.
    pub fn from_env(data_dir: impl AsRef<Path>) -> std::io::Result<Self> {
        Self::from_lookup(data_dir, |key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup (the environment in production).
    pub fn from_lookup<F>(data_dir: impl AsRef<Path>, lookup: F) -> std::io::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = lookup("PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let secret_key = match lookup("SECRET_KEY").filter(|s| !s.is_empty()) {
            Some(secret) => secret,
            None => {
                warn!("SECRET_KEY is not set; using the insecure development secret");
                DEV_SECRET_KEY.to_string()
            }
        };

        let model = ModelSettings {
            api_url: lookup("HAVEN_MODEL_URL").filter(|s| !s.trim().is_empty()),
            api_key: lookup("HAVEN_MODEL_API_KEY").filter(|s| !s.is_empty()),
            model: lookup("HAVEN_MODEL").unwrap_or_else(|| DEFAULT_MODEL.into()),
            timeout_secs: lookup("HAVEN_MODEL_TIMEOUT_SECS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_MODEL_TIMEOUT_SECS),
            max_history_turns: lookup("HAVEN_MAX_HISTORY_TURNS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_MAX_HISTORY_TURNS),
        };

        let data_paths = DataPaths::new(data_dir)?;

        Ok(Self {
            port,
            secret_key,
            data_paths,
            model,
        })
    }

    /// Whether the cookie secret is the shipped development value.
    pub fn uses_dev_secret(&self) -> bool {
        self.secret_key == DEV_SECRET_KEY
    }
}
