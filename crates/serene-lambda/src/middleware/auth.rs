use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use serene_auth::jwt::bearer_token;
use serene_auth::user::AuthUser;

use crate::error::ApiError;
use crate::state::AppState;

/// Optional bearer-token authentication.
///
/// Requests without an `Authorization` header pass through anonymously.
/// A present token must verify; on success `AuthUser` is inserted into
/// request extensions for handlers to use.
pub async fn identify<S: Clone + Send + Sync + 'static>(
    State(state): State<AppState<S>>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let Some(header) = req.headers().get("authorization") else {
        return Ok(next.run(req).await);
    };

    let header = header
        .to_str()
        .map_err(|_| ApiError::Unauthorized("malformed authorization header".to_string()))?;
    let token = bearer_token(header).map_err(|e| ApiError::Unauthorized(e.to_string()))?;

    let Some(verifier) = &state.verifier else {
        tracing::debug!("bearer token ignored; no verifier configured");
        return Ok(next.run(req).await);
    };

    let claims = verifier.verify(token).map_err(|e| {
        tracing::info!(error = %e, "rejected bearer token");
        ApiError::Unauthorized(e.to_string())
    })?;

    req.extensions_mut().insert(AuthUser::from(claims));

    Ok(next.run(req).await)
}
