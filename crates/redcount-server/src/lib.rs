//! redcount server library entry.
//!
//! Wires configuration, the store backend, the visit tracker and the HTTP
//! routes into one axum application. Consumed by the binary (`main.rs`) and by
//! integration tests.

pub mod api;
pub mod app_state;
pub mod config;
pub mod infra;
pub mod obs;
pub mod ops;
pub mod router;
