use std::sync::Arc;

use serene_auth::jwt::TokenVerifier;

/// Shared application state, injected into all route handlers via Axum state.
///
/// Generic over the result store: S3 in production, in-memory in tests.
#[derive(Clone)]
pub struct AppState<S> {
    pub results: S,
    pub verifier: Option<Arc<TokenVerifier>>,
}
