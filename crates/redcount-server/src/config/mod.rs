//! Server config loader: optional strict YAML file, then environment overrides.
//!
//! An empty environment variable is treated the same as an unset one.

pub mod schema;

use std::fs;

use redcount_core::error::{RedcountError, Result};

pub use schema::{ServerConfig, ServerSection, StoreBackend, StoreSection};

/// Environment variable naming an optional YAML config file.
pub const CONFIG_PATH_ENV: &str = "REDCOUNT_CONFIG";

pub fn load_from_file(path: &str) -> Result<ServerConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| RedcountError::Config(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ServerConfig> {
    let cfg: ServerConfig = serde_yaml::from_str(s)
        .map_err(|e| RedcountError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Load the process configuration: file (if `REDCOUNT_CONFIG` names one) or
/// defaults, with environment overrides applied on top.
pub fn load() -> Result<ServerConfig> {
    let mut cfg = match env_var(CONFIG_PATH_ENV) {
        Some(path) => load_from_file(&path)?,
        None => ServerConfig::default(),
    };
    apply_env(&mut cfg, env_var)?;
    Ok(cfg)
}

/// Apply `REDIS_ADDR`, `REDIS_PASSWORD`, `STORE_BACKEND`, `API_PORT` and
/// `TRACK_LAST_VISIT` from `lookup`.
pub fn apply_env<F>(cfg: &mut ServerConfig, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |name: &str| lookup(name).filter(|v| !v.is_empty());

    if let Some(addr) = get("REDIS_ADDR") {
        cfg.store.addr = addr;
    }
    if let Some(password) = get("REDIS_PASSWORD") {
        cfg.store.password = password;
    }
    if let Some(backend) = get("STORE_BACKEND") {
        cfg.store.backend = backend.parse()?;
    }
    if let Some(port) = get("API_PORT") {
        cfg.server.port = port
            .parse::<u16>()
            .map_err(|e| RedcountError::Config(format!("API_PORT {port:?}: {e}")))?;
    }
    if let Some(flag) = get("TRACK_LAST_VISIT") {
        match flag.to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => cfg.server.track_last_visit = true,
            "0" | "false" | "no" | "off" => cfg.server.track_last_visit = false,
            _ => tracing::warn!(value = %flag, "ignoring unrecognized TRACK_LAST_VISIT"),
        }
    }
    Ok(())
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}
