use serde::Deserialize;
use redcount_core::error::{RedcountError, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub store: StoreSection,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            server: ServerSection::default(),
            store: StoreSection::default(),
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(RedcountError::Config(format!(
                "unsupported config version {}",
                self.version
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_port")]
    pub port: u16,

    /// Also record and report the previous visit time.
    #[serde(default)]
    pub track_last_visit: bool,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            port: default_port(),
            track_last_visit: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    Redis,
    Memory,
}

impl StoreBackend {
    pub fn as_str(self) -> &'static str {
        match self {
            StoreBackend::Redis => "redis",
            StoreBackend::Memory => "memory",
        }
    }
}

impl std::str::FromStr for StoreBackend {
    type Err = RedcountError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "redis" => Ok(StoreBackend::Redis),
            "memory" => Ok(StoreBackend::Memory),
            other => Err(RedcountError::Config(format!("unknown store backend: {other}"))),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreSection {
    #[serde(default = "default_backend")]
    pub backend: StoreBackend,

    /// `host:port` of the Redis server.
    #[serde(default = "default_store_addr")]
    pub addr: String,

    #[serde(default)]
    pub password: String,
}

impl Default for StoreSection {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            addr: default_store_addr(),
            password: String::new(),
        }
    }
}

fn default_version() -> u32 {
    1
}
fn default_port() -> u16 {
    10000
}
fn default_backend() -> StoreBackend {
    StoreBackend::Redis
}
fn default_store_addr() -> String {
    "redis:6379".into()
}
