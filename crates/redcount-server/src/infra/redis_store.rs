//! Redis-backed `KvStore`.
//!
//! The connection is opened on first use rather than at startup. Each request
//! makes at most one connect attempt, and a failure comes back with the
//! driver's own error text. The next request tries again. Once established,
//! `ConnectionManager` reconnects on its own.

use std::time::Duration;

use async_trait::async_trait;
use redis::aio::{ConnectionManager, ConnectionManagerConfig};
use redis::{AsyncCommands, Client, ConnectionAddr, ConnectionInfo, RedisConnectionInfo};
use tokio::sync::OnceCell;

use redcount_core::error::{RedcountError, Result};
use redcount_core::KvStore;

const DEFAULT_REDIS_PORT: u16 = 6379;
const CONNECT_TIMEOUT: Duration = Duration::from_secs(3);

pub struct RedisStore {
    client: Client,
    conn: OnceCell<ConnectionManager>,
}

impl RedisStore {
    /// Build a store for `addr`. Does not connect.
    ///
    /// `addr` is `host`, `host:port`, `[v6]` or `[v6]:port`; the port defaults to 6379.
    pub fn new(addr: &str, password: &str) -> Result<Self> {
        let (host, port) = split_addr(addr)?;
        let info = ConnectionInfo {
            addr: ConnectionAddr::Tcp(host, port),
            redis: RedisConnectionInfo {
                db: 0,
                password: (!password.is_empty()).then(|| password.to_string()),
                ..Default::default()
            },
        };
        let client = Client::open(info).map_err(|e| RedcountError::Config(format!("redis client: {e}")))?;
        Ok(Self {
            client,
            conn: OnceCell::new(),
        })
    }

    async fn connection(&self) -> Result<ConnectionManager> {
        let conn = self
            .conn
            .get_or_try_init(|| async {
                let config = ConnectionManagerConfig::new()
                    .set_number_of_retries(0)
                    .set_connection_timeout(CONNECT_TIMEOUT);
                let conn = ConnectionManager::new_with_config(self.client.clone(), config)
                    .await
                    .map_err(store_err)?;
                tracing::info!("redis connection established");
                Ok::<_, RedcountError>(conn)
            })
            .await?;
        Ok(conn.clone())
    }
}

#[async_trait]
impl KvStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.connection().await?;
        conn.get::<_, Option<String>>(key).await.map_err(store_err)
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut conn = self.connection().await?;
        conn.set::<_, _, ()>(key, value).await.map_err(store_err)
    }
}

fn store_err(e: redis::RedisError) -> RedcountError {
    RedcountError::Store(e.to_string())
}

fn split_addr(addr: &str) -> Result<(String, u16)> {
    let bad = |reason: String| RedcountError::Config(format!("redis address {addr:?}: {reason}"));

    let (host, port) = if let Some(rest) = addr.strip_prefix('[') {
        let (host, tail) = rest
            .split_once(']')
            .ok_or_else(|| bad("missing ']'".into()))?;
        match tail {
            "" => (host, None),
            _ => (host, Some(tail.strip_prefix(':').ok_or_else(|| bad("expected ':' after ']'".into()))?)),
        }
    } else {
        match addr.rsplit_once(':') {
            // A bare IPv6 literal has several colons and no port.
            Some((host, _)) if host.contains(':') => (addr, None),
            Some((host, port)) => (host, Some(port)),
            None => (addr, None),
        }
    };

    let port = match port {
        None => DEFAULT_REDIS_PORT,
        Some(p) => p.parse::<u16>().map_err(|e| bad(e.to_string()))?,
    };
    Ok((host.to_string(), port))
}
