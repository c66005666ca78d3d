use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct OmiMcpConfig {
    pub server: ServerConfig,
    pub omi: OmiApiConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub transport: String,
    pub log_level: String,
    pub host: String,
    pub port: u16,
}

#[derive(Deserialize, Clone)]
#[serde(default)]
pub struct OmiApiConfig {
    pub base_url: String,
    pub api_key: String,
    pub app_id: String,
    /// Per-request HTTP timeout. Unset means the client never times out a call.
    pub timeout_secs: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            transport: "stdio".into(),
            log_level: "info".into(),
            host: "127.0.0.1".into(),
            port: 8787,
        }
    }
}

impl Default for OmiApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.omi.me".into(),
            api_key: String::new(),
            app_id: String::new(),
            timeout_secs: None,
        }
    }
}

impl std::fmt::Debug for OmiApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OmiApiConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &redact(&self.api_key))
            .field("app_id", &self.app_id)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn redact(secret: &str) -> &'static str {
    if secret.is_empty() {
        "(not set)"
    } else {
        "***"
    }
}

impl OmiApiConfig {
    /// Startup check: the server must not come up without credentials.
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            bail!("Omi API key is not configured; set OMI_API_KEY or [omi].api_key");
        }
        if self.app_id.trim().is_empty() {
            bail!("Omi app id is not configured; set OMI_APP_ID or [omi].app_id");
        }
        let url = reqwest::Url::parse(&self.base_url)
            .with_context(|| format!("invalid Omi base URL: {}", self.base_url))?;
        if !matches!(url.scheme(), "http" | "https") {
            bail!("Omi base URL must be http or https, got {}", url.scheme());
        }
        Ok(())
    }

    /// Whether an API key is present, for display without revealing it.
    pub fn api_key_display(&self) -> &'static str {
        redact(&self.api_key)
    }
}

/// Returns `~/.omi-mcp/`, or `./.omi-mcp` when no home directory is known.
pub fn default_config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".omi-mcp")
}

/// Returns the default config file path: `~/.omi-mcp/config.toml`
pub fn default_config_path() -> PathBuf {
    default_config_dir().join("config.toml")
}

/// Load `.env` from the working directory (or a parent) into the process
/// environment. Variables already set win. A missing file is fine; a malformed one
/// is an error.
pub fn load_dotenv() -> Result<()> {
    tolerate_missing(dotenvy::dotenv().map(|_| ()))
}

/// Load a specific dotenv file, with the same rules as [`load_dotenv`].
pub fn load_dotenv_from(path: impl AsRef<Path>) -> Result<()> {
    tolerate_missing(dotenvy::from_path(path.as_ref()))
}

fn tolerate_missing(result: std::result::Result<(), dotenvy::Error>) -> Result<()> {
    match result {
        Ok(()) => Ok(()),
        Err(dotenvy::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e).context("failed to load .env file"),
    }
}

impl OmiMcpConfig {
    /// Load config from TOML file (if it exists) then apply env var overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path())
    }

    /// Load from a specific path, then apply env var overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents =
                std::fs::read_to_string(path).context("failed to read config file")?;
            toml::from_str(&contents).context("failed to parse config TOML")?
        } else {
            info!("no config file at {}, using defaults", path.display());
            OmiMcpConfig::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides (OMI_API_KEY, OMI_APP_ID, OMI_BASE_URL,
    /// OMI_MCP_TRANSPORT, OMI_MCP_LOG_LEVEL).
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("OMI_API_KEY") {
            self.omi.api_key = val;
        }
        if let Ok(val) = std::env::var("OMI_APP_ID") {
            self.omi.app_id = val;
        }
        if let Ok(val) = std::env::var("OMI_BASE_URL") {
            self.omi.base_url = val;
        }
        if let Ok(val) = std::env::var("OMI_MCP_TRANSPORT") {
            self.server.transport = val;
        }
        if let Ok(val) = std::env::var("OMI_MCP_LOG_LEVEL") {
            self.server.log_level = val;
        }
    }
}
