//! Server configuration.
//!
//! Values are layered, later sources winning: built-in defaults, an
//! optional TOML file, environment variables, then command-line flags
//! (applied in `main`).
//!
//! ```toml
//! bind = "0.0.0.0:8000"
//! root_dir = "/srv/playground"
//! allowed_origins = ["https://terminal.example.com"]
//! session_mode = "per-session"
//! max_sessions = 32
//! registry_profile = "extended"
//!
//! [logging]
//! level = "debug"
//! json = true
//! file_dir = "/var/log/rterm"
//! ```

use std::fmt;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::Context as _;
use rterm_builtins::RegistryProfile;
use serde::Deserialize;

pub const DEFAULT_BIND: &str = "127.0.0.1:8000";
pub const DEFAULT_ORIGINS: [&str; 2] = ["http://localhost:8080", "http://localhost:3000"];
pub const DEFAULT_MAX_SESSIONS: usize = 64;

/// How interpreters are shared between clients.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SessionMode {
    /// One interpreter for every client.
    #[default]
    Shared,
    /// One interpreter per client-supplied session id.
    PerSession,
}

impl fmt::Display for SessionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SessionMode::Shared => "shared",
            SessionMode::PerSession => "per-session",
        })
    }
}

impl FromStr for SessionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "shared" => Ok(SessionMode::Shared),
            "per-session" | "per_session" => Ok(SessionMode::PerSession),
            other => Err(format!("unknown session mode '{other}' (expected 'shared' or 'per-session')")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub level: String,
    /// JSON console output instead of compact text
    pub json: bool,
    /// Directory for a daily-rolling log file; console only when unset
    pub file_dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file_dir: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    /// Starting directory for new interpreters; the process cwd when unset
    pub root_dir: Option<PathBuf>,
    pub allowed_origins: Vec<String>,
    pub session_mode: SessionMode,
    /// Upper bound on concurrently tracked sessions in per-session mode
    pub max_sessions: usize,
    pub registry_profile: RegistryProfile,
    pub logging: LoggingConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 8000)),
            root_dir: None,
            allowed_origins: DEFAULT_ORIGINS.iter().map(|s| s.to_string()).collect(),
            session_mode: SessionMode::default(),
            max_sessions: DEFAULT_MAX_SESSIONS,
            registry_profile: RegistryProfile::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Defaults, overlaid with `path` when given.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            None => Ok(Self::default()),
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read config file {}", path.display()))?;
                Self::from_toml_str(&text).with_context(|| format!("invalid config file {}", path.display()))
            }
        }
    }

    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Overlay `FRONTEND_URL`, `RTERM_BIND` and `RTERM_ROOT` from the process environment.
    pub fn apply_env(&mut self) -> anyhow::Result<()> {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    pub fn apply_env_from(&mut self, lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<()> {
        if let Some(url) = lookup("FRONTEND_URL").filter(|s| !s.trim().is_empty()) {
            self.add_origin(url.trim());
        }
        if let Some(bind) = lookup("RTERM_BIND") {
            self.bind = bind
                .parse()
                .with_context(|| format!("invalid RTERM_BIND {bind:?}"))?;
        }
        if let Some(root) = lookup("RTERM_ROOT").filter(|s| !s.is_empty()) {
            self.root_dir = Some(PathBuf::from(root));
        }
        Ok(())
    }

    pub fn add_origin(&mut self, origin: &str) {
        if !self.allowed_origins.iter().any(|o| o == origin) {
            self.allowed_origins.push(origin.to_string());
        }
    }

    /// Starting directory for interpreters.
    pub fn root(&self) -> anyhow::Result<PathBuf> {
        match &self.root_dir {
            Some(root) => Ok(root.clone()),
            None => std::env::current_dir().context("failed to determine current directory"),
        }
    }
}
