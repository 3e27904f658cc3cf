//! Public HTTP endpoints.
//!
//! - `/ping`  : always `pong`, never touches the store
//! - `/`      : current time (only mounted without last-visit tracking)
//! - `/redis` : record a visit and report the count

pub mod error;

use std::time::Instant;

use axum::{extract::State, Json};
use chrono::SecondsFormat;
use serde::Serialize;

use crate::app_state::AppState;

pub use error::ApiError;

#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    fn json(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            message: message.into(),
        })
    }
}

pub async fn ping(State(state): State<AppState>) -> Json<MessageBody> {
    count_request(&state, "/ping", "200");
    MessageBody::json("pong")
}

pub async fn now(State(state): State<AppState>) -> Json<MessageBody> {
    count_request(&state, "/", "200");
    let now = state.clock().now().to_rfc3339_opts(SecondsFormat::Secs, true);
    MessageBody::json(now)
}

pub async fn visit(State(state): State<AppState>) -> Result<Json<MessageBody>, ApiError> {
    let started = Instant::now();
    let result = state.tracker().record_visit().await;
    let metrics = state.metrics();

    match result {
        Ok(visit) => {
            metrics.visit_duration.observe(&[("outcome", "ok")], started.elapsed());
            count_request(&state, "/redis", "200");
            Ok(MessageBody::json(visit.message))
        }
        Err(e) => {
            metrics.visit_duration.observe(&[("outcome", "error")], started.elapsed());
            metrics.visit_errors.inc(&[("kind", e.kind().as_str())]);
            count_request(&state, "/redis", "500");
            tracing::warn!(error = %e, "visit failed");
            Err(e.into())
        }
    }
}

fn count_request(state: &AppState, route: &str, status: &str) {
    state
        .metrics()
        .http_requests
        .inc(&[("route", route), ("status", status)]);
}
