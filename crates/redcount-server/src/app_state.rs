//! Shared application state for the redcount server.
//!
//! One store handle and one tracker live for the whole process and are shared
//! by every request handler.

use std::sync::Arc;

use redcount_core::error::Result;
use redcount_core::{Clock, InMemoryStore, KvStore, SystemClock, VisitTracker};

use crate::config::{ServerConfig, StoreBackend};
use crate::infra::RedisStore;
use crate::obs::metrics::ServerMetrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ServerConfig,
    tracker: VisitTracker,
    clock: Arc<dyn Clock>,
    metrics: ServerMetrics,
}

impl AppState {
    /// Build application state with the store backend named in `cfg`.
    /// The Redis backend does not connect here; see `RedisStore`.
    pub fn new(cfg: ServerConfig) -> Result<Self> {
        let store: Arc<dyn KvStore> = match cfg.store.backend {
            StoreBackend::Redis => Arc::new(RedisStore::new(&cfg.store.addr, &cfg.store.password)?),
            StoreBackend::Memory => Arc::new(InMemoryStore::new()),
        };
        Ok(Self::with_store(cfg, store, Arc::new(SystemClock)))
    }

    pub fn with_store(cfg: ServerConfig, store: Arc<dyn KvStore>, clock: Arc<dyn Clock>) -> Self {
        let tracker = VisitTracker::new(store, Arc::clone(&clock), cfg.server.track_last_visit);
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                tracker,
                clock,
                metrics: ServerMetrics::default(),
            }),
        }
    }

    pub fn cfg(&self) -> &ServerConfig {
        &self.inner.cfg
    }

    pub fn tracker(&self) -> &VisitTracker {
        &self.inner.tracker
    }

    pub fn clock(&self) -> &dyn Clock {
        self.inner.clock.as_ref()
    }

    pub fn metrics(&self) -> &ServerMetrics {
        &self.inner.metrics
    }

    pub fn is_draining(&self) -> bool {
        self.inner.metrics.is_draining()
    }

    pub fn set_draining(&self) {
        self.inner.metrics.set_draining();
    }
}
