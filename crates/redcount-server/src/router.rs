//! Axum router wiring.
//!
//! `/` is only mounted when last-visit tracking is off.

use axum::{routing::get, Router};

use crate::{api, app_state::AppState, ops};

pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/ping", get(api::ping))
        .route("/redis", get(api::visit))
        .route("/healthz", get(ops::healthz))
        .route("/readyz", get(ops::readyz))
        .route("/metrics", get(ops::metrics));

    if !state.tracker().tracks_last_visit() {
        router = router.route("/", get(api::now));
    }

    router.with_state(state)
}
