use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use tunecast_api::auth::jwt::JwtConfig;
use tunecast_api::auth::password::hash_password;
use tunecast_api::config::ServerConfig;
use tunecast_api::routes;
use tunecast_api::state::AppState;
use tunecast_api::weather::WeatherClient;
use tunecast_core::recommend::StaticPlaylist;
use tunecast_core::user::InMemoryUserStore;

/// Secret used to sign tokens in tests.
pub const TEST_JWT_SECRET: &str = "test-secret-that-is-long-enough-for-hmac";

/// Build a test `ServerConfig` with safe defaults.
///
/// The weather base URL points at localhost on a port nothing listens
/// on; tests that exercise the weather path override it with a mock
/// server URI.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["*".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
            access_token_expiry_mins: 30,
        },
        weather_base_url: "http://127.0.0.1:9".to_string(),
        weather_city_code: "130010".to_string(),
        music_path: "does-not-exist/test.mp3".to_string(),
        demo_username: "alice".to_string(),
        demo_password: "wonderland".to_string(),
    }
}

/// Build the full application router with all middleware layers, using
/// the given configuration.
///
/// This mirrors the router construction in `main.rs` so integration
/// tests exercise the same middleware stack (CORS, request ID,
/// timeout, tracing, panic recovery) that production uses.
pub fn build_test_app(config: ServerConfig) -> Router {
    let password_hash =
        hash_password(&config.demo_password).expect("hashing the seeded password should succeed");
    let users = Arc::new(InMemoryUserStore::with_user(
        &config.demo_username,
        password_hash,
    ));

    let weather = WeatherClient::new(config.weather_base_url.clone())
        .expect("weather client should build");

    let state = AppState {
        config: Arc::new(config),
        users,
        selector: Arc::new(StaticPlaylist::default()),
        weather,
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION]);

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::api_routes())
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

/// Issue a GET request against the app.
#[allow(dead_code)]
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .expect("request should build");

    app.oneshot(request).await.expect("request should not fail")
}

/// Issue a GET request with a bearer token.
#[allow(dead_code)]
pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .expect("request should build");

    app.oneshot(request).await.expect("request should not fail")
}

/// Issue a form-encoded POST request against the app.
#[allow(dead_code)]
pub async fn post_form(app: Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .expect("request should build");

    app.oneshot(request).await.expect("request should not fail")
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}
