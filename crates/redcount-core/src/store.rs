//! Key-value store contract consumed by the tracker.
//!
//! Only two operations are needed: `GET` with a distinguishable "not found"
//! (`Ok(None)`) and `SET` without expiry.

use async_trait::async_trait;
use dashmap::DashMap;

use crate::error::Result;

#[async_trait]
pub trait KvStore: Send + Sync {
    /// Read `key`. Absent keys are `Ok(None)`, never an error.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key` with no expiry.
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Process-local store. Backs tests and the `memory` backend.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: DashMap<String, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value directly, bypassing the async API.
    pub fn insert(&self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn peek(&self, key: &str) -> Option<String> {
        self.entries.get(key).map(|v| v.value().clone())
    }
}

#[async_trait]
impl KvStore for InMemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.peek(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
