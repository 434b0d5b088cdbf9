use parking_lot::RwLock;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

use crate::schema::SkilldexConfig;

/// Loads the skilldex configuration from disk with env overrides.
pub struct ConfigLoader {
    config: Arc<RwLock<SkilldexConfig>>,
    config_path: PathBuf,
}

impl ConfigLoader {
    /// Resolve the config path: explicit path > SKILLDEX_CONFIG env >
    /// ~/.skilldex/skilldex.toml
    pub fn resolve_path(explicit: Option<&Path>) -> PathBuf {
        if let Some(p) = explicit {
            return p.to_path_buf();
        }
        if let Ok(p) = std::env::var("SKILLDEX_CONFIG") {
            return PathBuf::from(p);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".skilldex")
            .join("skilldex.toml")
    }

    /// Load the config from disk, falling back to defaults.
    pub fn load(path: Option<&Path>) -> skilldex_core::Result<Self> {
        let config_path = Self::resolve_path(path);
        let config = if config_path.exists() {
            info!(?config_path, "loading configuration");
            let raw = std::fs::read_to_string(&config_path)?;
            toml::from_str::<SkilldexConfig>(&raw).map_err(|e| {
                skilldex_core::SkilldexError::Config(format!(
                    "failed to parse {}: {}",
                    config_path.display(),
                    e
                ))
            })?
        } else {
            warn!(?config_path, "config file not found, using defaults");
            SkilldexConfig::default()
        };

        // Apply environment variable overrides
        let config = Self::apply_env_overrides(config);

        // Validate config — log warnings, fail on errors
        match config.validate() {
            Ok(warnings) => {
                for w in &warnings {
                    warn!("{}", w);
                }
            }
            Err(e) => {
                return Err(skilldex_core::SkilldexError::Config(e));
            }
        }

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            config_path,
        })
    }

    /// Get a read snapshot of the current config.
    pub fn get(&self) -> SkilldexConfig {
        self.config.read().clone()
    }

    /// Path the config was loaded from (or would be).
    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Apply env var overrides (PORT, SKILLDEX_LISTEN, SKILLDEX_LOG_LEVEL).
    fn apply_env_overrides(config: SkilldexConfig) -> SkilldexConfig {
        Self::apply_overrides(
            config,
            std::env::var("PORT").ok(),
            std::env::var("SKILLDEX_LISTEN").ok(),
            std::env::var("SKILLDEX_LOG_LEVEL").ok(),
        )
    }

    /// Apply overrides from explicit values. Split from the env read so
    /// the logic is drivable without process-global state.
    pub fn apply_overrides(
        mut config: SkilldexConfig,
        port: Option<String>,
        listen: Option<String>,
        log_level: Option<String>,
    ) -> SkilldexConfig {
        // PORT overrides just the port, keeping the configured host;
        // a non-numeric value is ignored.
        if let Some(v) = port {
            if let Ok(port) = v.parse::<u16>() {
                config.server.set_port(port);
            }
        }
        // SKILLDEX_LISTEN overrides the full listen address, winning
        // over PORT when both are set.
        if let Some(v) = listen {
            config.server.listen = v;
        }
        if let Some(v) = log_level {
            config.logging.level = v;
        }
        config
    }
}
