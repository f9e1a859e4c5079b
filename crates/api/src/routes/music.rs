//! Static audio download route.

use axum::body::Body;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use tokio_util::io::ReaderStream;
use tunecast_core::error::CoreError;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /music
///
/// Streams the bundled audio file as `audio/mpeg`. A missing file is a
/// protocol-level 404, not a 200 with an error body. No range support.
pub async fn get_music(State(state): State<AppState>) -> AppResult<Response> {
    let path = std::path::Path::new(&state.config.music_path);

    if !path.exists() {
        return Err(AppError::Core(CoreError::NotFound(
            "Music file not found".into(),
        )));
    }

    let metadata = tokio::fs::metadata(path)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    let file = tokio::fs::File::open(path)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;
    let stream = ReaderStream::new(file);

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "audio/mpeg")
        .header(header::CONTENT_LENGTH, metadata.len().to_string())
        .body(Body::from_stream(stream))
        .map_err(|e| AppError::InternalError(e.to_string()))
}

/// Routes mounted at the root.
///
/// ```text
/// GET /music -> get_music
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/music", get(get_music))
}
