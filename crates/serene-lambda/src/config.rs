use std::env;

use serene_auth::jwt::{TokenPolicy, TokenVerifier};

/// Runtime configuration, read from the environment at cold start.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub bucket: String,
    pub region: String,
    pub cognito_user_pool_id: Option<String>,
    /// RSA public key (PEM) used to verify bearer tokens.
    pub jwt_public_key: Option<String>,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self {
            bucket: var_or("SERENE_BUCKET", "serene"),
            region: var_or("AWS_REGION", "us-east-1"),
            cognito_user_pool_id: env::var("COGNITO_USER_POOL_ID").ok(),
            // Lambda console values often carry escaped newlines
            jwt_public_key: env::var("SERENE_JWT_PUBLIC_KEY")
                .ok()
                .map(|pem| pem.replace("\\n", "\n")),
        }
    }

    /// Token verifier for authenticated routes, or `None` when no signing key
    /// is configured (every caller is then anonymous).
    pub fn token_verifier(&self) -> eyre::Result<Option<TokenVerifier>> {
        let Some(pem) = &self.jwt_public_key else {
            tracing::warn!("SERENE_JWT_PUBLIC_KEY not set; all requests are anonymous");
            return Ok(None);
        };
        let pool_id = self
            .cognito_user_pool_id
            .as_deref()
            .ok_or_else(|| eyre::eyre!("COGNITO_USER_POOL_ID is required when a JWT key is set"))?;

        let policy = TokenPolicy::cognito(&self.region, pool_id);
        let verifier = TokenVerifier::from_rsa_pem(pem.as_bytes(), policy)?;
        Ok(Some(verifier))
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| {
        tracing::info!("{key} not set, using default: {default}");
        default.to_string()
    })
}
