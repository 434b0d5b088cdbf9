//! # skilldex-config
//!
//! Configuration system for skilldex. Config lives in a TOML file
//! (default `~/.skilldex/skilldex.toml`) with every field defaulted,
//! plus a small set of environment overrides (`PORT`,
//! `SKILLDEX_LISTEN`, `SKILLDEX_LOG_LEVEL`).

pub mod loader;
pub mod schema;

pub use loader::ConfigLoader;
pub use schema::SkilldexConfig;
