use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::error::AuthError;

/// Claims extracted from an identity provider JWT.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub iss: String,
    pub exp: u64,
    pub iat: u64,
    /// Cognito sets this to "access" or "id"; other issuers may omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_use: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// What a token must satisfy to be accepted.
#[derive(Debug, Clone)]
pub struct TokenPolicy {
    pub issuer: String,
    pub algorithm: Algorithm,
}

impl TokenPolicy {
    /// RS256 tokens issued by a Cognito user pool.
    pub fn cognito(region: &str, user_pool_id: &str) -> Self {
        Self {
            issuer: format!("https://cognito-idp.{region}.amazonaws.com/{user_pool_id}"),
            algorithm: Algorithm::RS256,
        }
    }
}

/// Signing key plus policy, built once at startup.
#[derive(Clone)]
pub struct TokenVerifier {
    key: DecodingKey,
    policy: TokenPolicy,
}

impl TokenVerifier {
    pub fn new(key: DecodingKey, policy: TokenPolicy) -> Self {
        Self { key, policy }
    }

    /// Build a verifier from an RSA public key in PEM form.
    pub fn from_rsa_pem(pem: &[u8], policy: TokenPolicy) -> Result<Self, AuthError> {
        let key = DecodingKey::from_rsa_pem(pem).map_err(|e| AuthError::InvalidKey(e.to_string()))?;
        Ok(Self::new(key, policy))
    }

    pub fn verify(&self, token: &str) -> Result<TokenClaims, AuthError> {
        validate_token(token, &self.key, &self.policy)
    }
}

/// Validate a JWT's signature, expiry, and issuer.
///
/// Audience is not checked: Cognito access tokens carry `client_id`
/// instead of `aud`.
pub fn validate_token(
    token: &str,
    decoding_key: &DecodingKey,
    policy: &TokenPolicy,
) -> Result<TokenClaims, AuthError> {
    let mut validation = Validation::new(policy.algorithm);
    validation.set_issuer(&[&policy.issuer]);
    validation.validate_exp = true;
    validation.validate_aud = false;

    let token_data = decode::<TokenClaims>(token, decoding_key, &validation)?;

    if let Some(token_use) = &token_data.claims.token_use
        && token_use != "access"
        && token_use != "id"
    {
        return Err(AuthError::InvalidToken(format!(
            "unexpected token_use: {token_use}"
        )));
    }

    Ok(token_data.claims)
}

/// Extract the token from an `Authorization: Bearer <token>` header value.
pub fn bearer_token(header: &str) -> Result<&str, AuthError> {
    header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or(AuthError::MissingToken)
}
