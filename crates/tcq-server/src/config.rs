use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ServerError, ServerResult};

/// Server configuration, loadable from TOML with per-field defaults.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to.
    pub bind_addr: SocketAddr,
    /// Delay between queue processor ticks, in milliseconds.
    pub tick_interval_ms: u64,
    /// Simulated latency of a store commit, in milliseconds. Keep it below
    /// the tick interval so an attempt finishes before the next tick fires.
    pub commit_latency_ms: u64,
    /// Seed the store with the demo fixtures on startup.
    pub seed_demo: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".parse().unwrap(),
            tick_interval_ms: 1000,
            commit_latency_ms: 250,
            seed_demo: false,
        }
    }
}

impl ServerConfig {
    /// Tick interval as a [`Duration`].
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Commit latency as a [`Duration`].
    pub fn commit_latency(&self) -> Duration {
        Duration::from_millis(self.commit_latency_ms)
    }

    /// Load configuration from a TOML file. Missing fields fall back to
    /// their defaults.
    pub fn load(path: &Path) -> ServerResult<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ServerError::Config(format!("read {}: {e}", path.display())))?;
        toml::from_str(&raw)
            .map_err(|e| ServerError::Config(format!("parse {}: {e}", path.display())))
    }
}
