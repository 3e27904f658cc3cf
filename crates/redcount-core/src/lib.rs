//! redcount core: the visit tracker, its store contract, and the shared error type.
//!
//! This crate carries no HTTP or Redis dependencies so the tracker can be
//! driven from the server, from tests, or from any other transport.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Every fallible path surfaces as `RedcountError`/`Result`, so a bad value in
//! the store fails one request instead of the process.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod clock;
pub mod error;
pub mod store;
pub mod tracker;

/// Shared result type.
pub use error::{ErrorKind, RedcountError, Result};
pub use clock::{Clock, SystemClock};
pub use store::{InMemoryStore, KvStore};
pub use tracker::{Visit, VisitTracker, LAST_VISIT_KEY, VISITS_KEY};
