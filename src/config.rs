use anyhow::Context;
use serde::Deserialize;
use std::time::Duration;

/// Env var naming an optional YAML config file.
pub const CONFIG_PATH_ENV: &str = "CRUMB_CONFIG";

/// Env var overriding `server.listen_addr`.
pub const LISTEN_ENV: &str = "LISTEN";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub session: SessionConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen_addr: String,
    pub backlog: u32,
    /// Upper bound on the bytes read for a single request.
    pub max_request_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub cookie_name: String,
    pub cookie_path: String,
    pub cookie_ttl_secs: u64,
    /// Literal tag in front of every issued visitor id.
    pub id_prefix: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8081".to_string(),
            backlog: 5,
            max_request_bytes: 4096,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: "user_id".to_string(),
            cookie_path: "/".to_string(),
            cookie_ttl_secs: 3600,
            id_prefix: "User".to_string(),
        }
    }
}

impl SessionConfig {
    pub fn cookie_ttl(&self) -> Duration {
        Duration::from_secs(self.cookie_ttl_secs)
    }
}

impl Config {
    /// Loads defaults, then the YAML file named by `CRUMB_CONFIG`, then
    /// the `LISTEN` override.
    pub fn load() -> anyhow::Result<Self> {
        let yaml = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => Some(
                std::fs::read_to_string(&path)
                    .with_context(|| format!("cannot read config file {}", path))?,
            ),
            Err(_) => None,
        };
        let listen = std::env::var(LISTEN_ENV).ok();

        Self::from_sources(yaml.as_deref(), listen)
    }

    pub fn from_sources(yaml: Option<&str>, listen: Option<String>) -> anyhow::Result<Self> {
        let mut cfg = match yaml {
            Some(text) => Self::from_yaml_str(text)?,
            None => Self::default(),
        };

        if let Some(addr) = listen {
            cfg.server.listen_addr = addr;
        }

        Ok(cfg)
    }

    pub fn from_yaml_str(text: &str) -> anyhow::Result<Self> {
        // An empty document deserializes to unit, not to an empty mapping.
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text).context("invalid YAML configuration")
    }
}
