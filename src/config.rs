//! Configuration with layered resolution using figment.
//!
//! Resolution order (highest priority last):
//! 1. Built-in defaults (`host = "0.0.0.0"`, `port = 3000`)
//! 2. User config: `~/.config/ontograph/config.toml` (XDG) or platform config dir
//! 3. Project config: `.ontograph.toml`
//! 4. Environment variables: `PORT`, `NEO4J_URL`, `NEO4J_USER`, `NEO4J_PASS`,
//!    `NEO4J_DATABASE`
//!
//! # Example
//!
//! ```toml
//! port = 8080
//!
//! [neo4j]
//! url = "bolt://localhost:7687"
//! user = "neo4j"
//! pass = "password"
//! max_connections = 8
//! ```

use std::ops::Deref;

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;

/// Environment variables read by the service, split on `_` into config keys.
const ENV_KEYS: [&str; 5] = [
    "PORT",
    "NEO4J_URL",
    "NEO4J_USER",
    "NEO4J_PASS",
    "NEO4J_DATABASE",
];

/// Boxed wrapper for figment::Error to reduce Result size on the stack.
#[derive(Debug)]
pub struct ConfigError(Box<figment::Error>);

impl Deref for ConfigError {
    type Target = figment::Error;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self(Box::new(err))
    }
}

/// Root configuration structure.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Address the HTTP server binds to.
    #[serde(default = "default_host")]
    pub host: String,
    /// HTTP listen port.
    #[serde(default = "default_port")]
    pub port: u16,
    pub neo4j: Neo4jConfig,
}

/// Neo4j connection settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Neo4jConfig {
    /// Bolt endpoint, e.g. `bolt://localhost:7687` or `neo4j+s://host`.
    pub url: String,
    pub user: String,
    #[serde(default)]
    pub pass: String,
    /// Target database; the server default is used when unset.
    #[serde(default)]
    pub database: Option<String>,
    /// Upper bound for the driver's connection pool.
    #[serde(default)]
    pub max_connections: Option<usize>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load config with layered resolution (user → project → env).
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// The provider stack used by [`Config::load`].
    pub fn figment() -> Figment {
        Figment::new()
            // Defaults come from serde; user config is the lowest file layer
            .merge(Toml::file(Self::user_config_path()))
            // Project config
            .merge(Toml::file(".ontograph.toml"))
            // Environment variables (highest priority)
            .merge(Env::raw().only(&ENV_KEYS).split("_"))
    }

    /// User config path: ~/.config/ontograph/config.toml (XDG) or platform config dir.
    fn user_config_path() -> std::path::PathBuf {
        // Prefer XDG config location (~/.config) on all platforms
        if let Some(home) = dirs::home_dir() {
            let xdg_path = home.join(".config").join("ontograph").join("config.toml");
            if xdg_path.exists() {
                return xdg_path;
            }
        }
        // Fall back to platform-specific config dir
        dirs::config_dir()
            .map(|p| p.join("ontograph").join("config.toml"))
            .unwrap_or_default()
    }
}
