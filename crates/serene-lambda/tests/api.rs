use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use jsonwebtoken::{encode, Algorithm, DecodingKey, EncodingKey, Header};
use serde_json::{json, Value};
use tower::ServiceExt;

use serene_auth::jwt::{TokenClaims, TokenPolicy, TokenVerifier};
use serene_lambda::app;
use serene_lambda::state::AppState;
use serene_storage::results::MemoryResultStore;

const SECRET: &[u8] = b"api-test-secret";
const ISSUER: &str = "https://issuer.test/pool";

fn router(store: &MemoryResultStore) -> Router {
    let verifier = TokenVerifier::new(
        DecodingKey::from_secret(SECRET),
        TokenPolicy {
            issuer: ISSUER.to_string(),
            algorithm: Algorithm::HS256,
        },
    );
    app(AppState {
        results: store.clone(),
        verifier: Some(Arc::new(verifier)),
    })
}

fn token(sub: &str) -> String {
    let now = jiff::Timestamp::now().as_second() as u64;
    let claims = TokenClaims {
        sub: sub.to_string(),
        iss: ISSUER.to_string(),
        exp: now + 3600,
        iat: now,
        token_use: Some("id".to_string()),
        email: None,
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(SECRET),
    )
    .unwrap()
}

fn submit(id: &str, body: &str, bearer: Option<&str>) -> Request<Body> {
    let mut builder = Request::post(format!("/assessments/{id}"))
        .header("content-type", "application/json");
    if let Some(t) = bearer {
        builder = builder.header("authorization", format!("Bearer {t}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

async fn send(router: Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

#[tokio::test]
async fn off_scale_answers_are_bad_requests() {
    let store = MemoryResultStore::new();
    let bodies = [
        json!({ "answers": [1, 1, 1, 1, 1, 1, 4] }).to_string(),
        json!({ "answers": [1, 1, 1, 1, 1, 1, -1] }).to_string(),
        json!({ "answers": [1, 1, 1, 1, 1, 1, 300] }).to_string(),
        json!({ "answers": [1, 1, 1] }).to_string(),
        "not json".to_string(),
    ];

    for body in bodies {
        let (status, json) = send(router(&store), submit("gad7", &body, None)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body}");
        assert!(json["error"].is_string(), "body: {body}");
    }
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn anonymous_submission_is_scored_but_not_saved() {
    let store = MemoryResultStore::new();
    let body = json!({ "answers": [1, 1, 1, 1, 1, 1, 1] }).to_string();

    let (status, json) = send(router(&store), submit("gad7", &body, None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["result"]["score"], 7);
    assert_eq!(json["result"]["type"], "anxiety");
    assert_eq!(json["saved"], false);
    assert_eq!(json["record_status"]["status"], "authentication_required");
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn authenticated_submission_is_saved() {
    let store = MemoryResultStore::new();
    let body = json!({ "answers": [0, 0, 0, 0, 0, 0, 0, 0, 1] }).to_string();
    let bearer = token("user-1");

    let (status, json) = send(router(&store), submit("phq9", &body, Some(&bearer))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["saved"], true);
    assert_eq!(json["record_status"]["status"], "saved");
    assert_eq!(json["record_status"]["record"]["userId"], "user-1");
    assert_eq!(json["result"]["followUpRequired"], true);
    assert_eq!(store.len().await, 1);

    let history = Request::get("/assessments/history")
        .header("authorization", format!("Bearer {bearer}"))
        .body(Body::empty())
        .unwrap();
    let (status, json) = send(router(&store), history).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn history_requires_a_user() {
    let store = MemoryResultStore::new();
    for path in ["/assessments/history", "/assessments/summary"] {
        let req = Request::get(path).body(Body::empty()).unwrap();
        let (status, json) = send(router(&store), req).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "path: {path}");
        assert!(json["error"].is_string(), "path: {path}");
    }
}

#[tokio::test]
async fn invalid_bearer_token_is_rejected_with_json() {
    let store = MemoryResultStore::new();
    let body = json!({ "answers": [1, 1, 1, 1, 1, 1, 1] }).to_string();

    let (status, json) = send(router(&store), submit("gad7", &body, Some("not-a-jwt"))).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(json["error"].is_string());
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn unknown_instrument_is_not_found() {
    let store = MemoryResultStore::new();
    let body = json!({ "answers": [] }).to_string();

    let (status, json) = send(router(&store), submit("bdi", &body, None)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json["error"].is_string());
}
