use serene_core::identity::IdentityProvider;
use serene_core::models::user::UserId;

use crate::jwt::TokenClaims;

/// Authenticated user extracted from verified token claims.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub sub: String,
    pub email: Option<String>,
}

impl From<TokenClaims> for AuthUser {
    fn from(claims: TokenClaims) -> Self {
        Self {
            sub: claims.sub,
            email: claims.email,
        }
    }
}

impl IdentityProvider for AuthUser {
    fn current_user(&self) -> Option<UserId> {
        match UserId::parse(self.sub.as_str()) {
            Ok(id) => Some(id),
            Err(e) => {
                tracing::warn!(error = %e, "token subject is not a usable user id");
                None
            }
        }
    }
}
