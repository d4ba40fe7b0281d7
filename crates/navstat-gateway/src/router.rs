//! Axum router wiring.
//!
//! Report endpoints accept any method so the handlers can answer non-POST
//! requests with their own 405 and `Allow: POST`.

use axum::{
    routing::{any, get},
    Router,
};

use crate::{app_state::AppState, ops, transport::reports};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/nav-timing", any(reports::nav_timing))
        .route("/js-error", any(reports::js_error))
        .route("/csp-report", any(reports::csp_report))
        .route("/healthz", get(ops::healthz))
        .route("/metrics", get(ops::metrics))
        .with_state(state)
}
