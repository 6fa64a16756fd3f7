//! serene-lambda
//!
//! HTTP API for the Serene self-assessment engine, served from AWS Lambda.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use serene_storage::results::ResultStore;

use state::AppState;

/// Build the API router over any result store.
pub fn app<S: ResultStore + Clone + 'static>(state: AppState<S>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health (no auth)
        .route("/health", get(routes::health::health_check))
        // Instruments (public definitions)
        .route("/instruments", get(routes::instruments::list_instruments))
        .route(
            "/instruments/{id}",
            get(routes::instruments::get_instrument_detail),
        )
        // Scoring works anonymously; saving and history need a user
        .route(
            "/assessments/history",
            get(routes::assessments::list_history::<S>),
        )
        .route(
            "/assessments/summary",
            get(routes::assessments::history_summary::<S>),
        )
        .route(
            "/assessments/{id}",
            post(routes::assessments::submit_assessment::<S>),
        )
        .layer(axum_mw::from_fn_with_state(
            state.clone(),
            middleware::auth::identify::<S>,
        ))
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
