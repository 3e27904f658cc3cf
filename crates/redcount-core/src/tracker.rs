//! Visit tracker: read-increment-write against the store.
//!
//! The sequence is intentionally not atomic. Two concurrent visits can read the
//! same count and both write the same incremented value, losing one increment.
//! Nothing is rolled back on failure: if writing `lastvisit` fails, the count
//! written just before it stays advanced.

use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::clock::Clock;
use crate::error::{RedcountError, Result};
use crate::store::KvStore;

pub const VISITS_KEY: &str = "visits";
pub const LAST_VISIT_KEY: &str = "lastvisit";

/// Outcome of one recorded visit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visit {
    pub count: u64,
    /// Previous visit time. Always `None` when last-visit tracking is off.
    pub last_visit: Option<DateTime<Utc>>,
    pub message: String,
}

pub struct VisitTracker {
    store: Arc<dyn KvStore>,
    clock: Arc<dyn Clock>,
    track_last_visit: bool,
}

impl VisitTracker {
    pub fn new(store: Arc<dyn KvStore>, clock: Arc<dyn Clock>, track_last_visit: bool) -> Self {
        Self {
            store,
            clock,
            track_last_visit,
        }
    }

    pub fn tracks_last_visit(&self) -> bool {
        self.track_last_visit
    }

    pub async fn record_visit(&self) -> Result<Visit> {
        let count = self
            .read_visits()
            .await?
            .checked_add(1)
            .ok_or_else(|| RedcountError::malformed(VISITS_KEY, "counter overflow"))?;

        let last_visit = if self.track_last_visit {
            self.read_last_visit().await?
        } else {
            None
        };

        self.store.set(VISITS_KEY, &count.to_string()).await?;

        if self.track_last_visit {
            let now = format_timestamp(&self.clock.now());
            self.store.set(LAST_VISIT_KEY, &now).await?;
        }

        tracing::debug!(count, ?last_visit, "visit recorded");

        let message = self.compose_message(count, last_visit.as_ref());
        Ok(Visit {
            count,
            last_visit,
            message,
        })
    }

    async fn read_visits(&self) -> Result<u64> {
        match self.store.get(VISITS_KEY).await? {
            None => Ok(0),
            Some(raw) => raw
                .parse::<u64>()
                .map_err(|e| RedcountError::malformed(VISITS_KEY, e)),
        }
    }

    async fn read_last_visit(&self) -> Result<Option<DateTime<Utc>>> {
        match self.store.get(LAST_VISIT_KEY).await? {
            None => Ok(None),
            Some(raw) => parse_timestamp(&raw).map(Some),
        }
    }

    fn compose_message(&self, count: u64, last_visit: Option<&DateTime<Utc>>) -> String {
        if !self.track_last_visit {
            return format!("Hello ! View count: {count}");
        }
        match last_visit {
            Some(at) => format!(
                "Hello visitor #{count}! Last visit was at {}",
                format_timestamp(at)
            ),
            None => format!("Hello visitor #{count}! You are the first visitor!"),
        }
    }
}

/// RFC3339 with nanoseconds, `Z` suffix.
pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

/// Accepts any RFC3339 offset; the result is normalized to UTC.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|at| at.with_timezone(&Utc))
        .map_err(|e| RedcountError::malformed(LAST_VISIT_KEY, e))
}
