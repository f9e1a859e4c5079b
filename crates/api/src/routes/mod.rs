pub mod auth;
pub mod health;
pub mod music;
pub mod recommend;

use axum::Router;

use crate::state::AppState;

/// Build the full route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                 hello message (public)
/// /health           service health (public)
///
/// /token            login, issues a bearer token (public)
/// /users/me         echo the authenticated username (requires auth)
///
/// /recommend        season/weather-aware track recommendation (public)
/// /music            stream the bundled audio file (public)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(recommend::router())
        .merge(music::router())
}
