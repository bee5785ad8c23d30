#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use promptchat_api::auth::jwt::{generate_access_token, JwtConfig};
use promptchat_api::config::ServerConfig;
use promptchat_api::routes;
use promptchat_api::state::AppState;
use promptchat_core::catalog::CatalogConfig;
use promptchat_core::chat_model::DEFAULT_CHAT_MODEL;
use promptchat_core::user_types::UserType;
use promptchat_db::models::user::{CreateUser, User};
use promptchat_db::repositories::UserRepo;

/// Build a test `JwtConfig` with a fixed secret.
pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
        access_token_expiry_mins: 15,
    }
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3001".to_string()],
        request_timeout_secs: 30,
        default_chat_model: DEFAULT_CHAT_MODEL.to_string(),
        chat_model_cookie_max_age_secs: 3600,
        jwt: test_jwt_config(),
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();

    let state = AppState {
        pool,
        config: Arc::new(config),
        catalog: Arc::new(CatalogConfig::default()),
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:3001".parse().unwrap()])
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Identity helpers
// ---------------------------------------------------------------------------

/// Insert a user row and return it with a valid access token.
pub async fn create_user_with_token(
    pool: &PgPool,
    email: &str,
    user_type: UserType,
) -> (User, String) {
    let input = CreateUser {
        email: email.to_string(),
        user_type,
    };
    let user = UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed");
    let token = generate_access_token(user.id, user_type, &test_jwt_config())
        .expect("token generation should succeed");
    (user, token)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

fn builder(method: Method, uri: &str, token: Option<&str>) -> axum::http::request::Builder {
    let builder = Request::builder().method(method).uri(uri);
    match token {
        Some(token) => builder.header(AUTHORIZATION, format!("Bearer {token}")),
        None => builder,
    }
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, builder(Method::GET, uri, None).body(Body::empty()).unwrap()).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, builder(Method::GET, uri, Some(token)).body(Body::empty()).unwrap()).await
}

/// GET with a bearer token and a raw `Cookie` header.
pub async fn get_auth_with_cookie(app: Router, uri: &str, token: &str, cookie: &str) -> Response {
    let request = builder(Method::GET, uri, Some(token))
        .header("cookie", cookie)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = builder(Method::POST, uri, None)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    let request = builder(Method::POST, uri, Some(token))
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_raw_auth(app: Router, uri: &str, body: &str, token: &str) -> Response {
    let request = builder(Method::POST, uri, Some(token))
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    let request = builder(Method::PUT, uri, Some(token))
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, builder(Method::DELETE, uri, None).body(Body::empty()).unwrap()).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, builder(Method::DELETE, uri, Some(token)).body(Body::empty()).unwrap()).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
