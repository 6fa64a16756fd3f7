use jsonwebtoken::{encode, Algorithm, DecodingKey, EncodingKey, Header};
use serene_auth::error::AuthError;
use serene_auth::jwt::{bearer_token, validate_token, TokenClaims, TokenPolicy, TokenVerifier};
use serene_auth::user::AuthUser;
use serene_core::identity::IdentityProvider;

const SECRET: &[u8] = b"test-signing-secret";
const ISSUER: &str = "https://issuer.test/pool";

fn policy() -> TokenPolicy {
    TokenPolicy {
        issuer: ISSUER.to_string(),
        algorithm: Algorithm::HS256,
    }
}

fn now() -> u64 {
    jiff::Timestamp::now().as_second() as u64
}

fn claims(sub: &str) -> TokenClaims {
    TokenClaims {
        sub: sub.to_string(),
        iss: ISSUER.to_string(),
        exp: now() + 3600,
        iat: now(),
        token_use: Some("id".to_string()),
        email: Some("user@example.com".to_string()),
    }
}

fn sign(claims: &TokenClaims) -> String {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(SECRET),
    )
    .unwrap()
}

#[test]
fn accepts_valid_token() {
    let token = sign(&claims("user-1"));
    let decoded = validate_token(&token, &DecodingKey::from_secret(SECRET), &policy()).unwrap();
    assert_eq!(decoded.sub, "user-1");
    assert_eq!(decoded.email.as_deref(), Some("user@example.com"));
}

#[test]
fn rejects_expired_token() {
    let mut expired = claims("user-1");
    expired.iat = now() - 7200;
    expired.exp = now() - 3600;

    let result = validate_token(&sign(&expired), &DecodingKey::from_secret(SECRET), &policy());
    assert!(matches!(result, Err(AuthError::TokenExpired)));
}

#[test]
fn rejects_wrong_issuer() {
    let mut other = claims("user-1");
    other.iss = "https://elsewhere.test".to_string();

    let result = validate_token(&sign(&other), &DecodingKey::from_secret(SECRET), &policy());
    assert!(matches!(result, Err(AuthError::Jwt(_))));
}

#[test]
fn rejects_wrong_signature() {
    let token = sign(&claims("user-1"));
    let result = validate_token(&token, &DecodingKey::from_secret(b"other"), &policy());
    assert!(result.is_err());
}

#[test]
fn rejects_refresh_token_use() {
    let mut refresh = claims("user-1");
    refresh.token_use = Some("refresh".to_string());

    let result = validate_token(&sign(&refresh), &DecodingKey::from_secret(SECRET), &policy());
    assert!(matches!(result, Err(AuthError::InvalidToken(_))));
}

#[test]
fn verifier_yields_identity() {
    let verifier = TokenVerifier::new(DecodingKey::from_secret(SECRET), policy());
    let user: AuthUser = verifier.verify(&sign(&claims("user-1"))).unwrap().into();
    assert_eq!(user.current_user().unwrap().as_str(), "user-1");
}

#[test]
fn unusable_subject_yields_no_identity() {
    let user = AuthUser {
        sub: "a/b".to_string(),
        email: None,
    };
    assert!(user.current_user().is_none());
    assert!(None::<AuthUser>.current_user().is_none());
}

#[test]
fn bearer_header_parsing() {
    assert_eq!(bearer_token("Bearer abc.def").unwrap(), "abc.def");
    assert!(matches!(bearer_token("Bearer "), Err(AuthError::MissingToken)));
    assert!(matches!(bearer_token("Basic abc"), Err(AuthError::MissingToken)));
}

#[test]
fn cognito_policy_builds_issuer() {
    let policy = TokenPolicy::cognito("us-east-1", "us-east-1_abc");
    assert_eq!(
        policy.issuer,
        "https://cognito-idp.us-east-1.amazonaws.com/us-east-1_abc"
    );
    assert_eq!(policy.algorithm, Algorithm::RS256);
}
