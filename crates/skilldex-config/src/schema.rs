use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level configuration, loaded from skilldex.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SkilldexConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub data: DataConfig,
}

// ── Server ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// HTTP listen address.
    pub listen: String,
    /// Enable permissive CORS.
    pub cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: "127.0.0.1:3001".into(),
            cors: true,
        }
    }
}

impl ServerConfig {
    /// Replace just the port of the listen address.
    pub fn set_port(&mut self, port: u16) {
        let host = self
            .listen
            .rsplit_once(':')
            .map(|(h, _)| h.to_string())
            .unwrap_or_else(|| "127.0.0.1".into());
        self.listen = format!("{host}:{port}");
    }
}

// ── Logging ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: "trace", "debug", "info", "warn", "error".
    pub level: String,
    /// Output format: "pretty", "json", "compact".
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}

// ── Data ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Path to the skills JSON source. Relative paths resolve against
    /// the working directory of the deployment.
    pub path: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/skills.json"),
        }
    }
}

impl SkilldexConfig {
    /// Validate the config. Returns warnings for suspicious values,
    /// errors for values the server cannot start with.
    pub fn validate(&self) -> Result<Vec<String>, String> {
        let mut warnings = Vec::new();

        if self.server.listen.parse::<std::net::SocketAddr>().is_err() {
            return Err(format!(
                "server.listen is not a valid socket address: {}",
                self.server.listen
            ));
        }

        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => warnings.push(format!(
                "logging.level '{other}' is not a known level, treating as a filter directive"
            )),
        }

        match self.logging.format.as_str() {
            "pretty" | "json" | "compact" => {}
            other => warnings.push(format!(
                "logging.format '{other}' is not recognized, falling back to pretty"
            )),
        }

        if self.data.path.as_os_str().is_empty() {
            return Err("data.path must not be empty".into());
        }

        Ok(warnings)
    }
}
