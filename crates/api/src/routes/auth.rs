//! Login and current-user routes.

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use serde::{Deserialize, Serialize};
use tunecast_core::error::CoreError;

use crate::auth::jwt::generate_access_token;
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Form body for `POST /token`.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Successful authentication response.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
}

/// Response for `GET /users/me`.
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub username: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /token
///
/// Authenticate with a form-encoded username + password. Returns a
/// bearer access token. Unknown usernames and wrong passwords are
/// indistinguishable to the caller (both 400).
pub async fn login(
    State(state): State<AppState>,
    Form(input): Form<LoginForm>,
) -> AppResult<Json<TokenResponse>> {
    // 1. Find user by username.
    let user = state
        .users
        .find_by_username(&input.username)
        .ok_or(AppError::Core(CoreError::InvalidCredentials))?;

    // 2. Verify password against the stored Argon2id hash.
    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::InvalidCredentials));
    }

    // 3. Issue the access token.
    let access_token = generate_access_token(&user.username, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(username = %user.username, "Issued access token");

    Ok(Json(TokenResponse {
        access_token,
        token_type: "bearer",
    }))
}

/// GET /users/me
///
/// Echo the username of the authenticated caller.
pub async fn me(auth_user: AuthUser) -> Json<MeResponse> {
    Json(MeResponse {
        username: auth_user.username,
    })
}

/// Routes mounted at the root.
///
/// ```text
/// POST /token     -> login
/// GET  /users/me  -> me (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/token", post(login))
        .route("/users/me", get(me))
}
