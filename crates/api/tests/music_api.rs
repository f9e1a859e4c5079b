//! Integration tests for the static audio download endpoint.

mod common;

use std::io::Write;

use axum::http::StatusCode;
use common::{body_json, get};
use http_body_util::BodyExt;

// ---------------------------------------------------------------------------
// Test: missing file is a protocol-level 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_music_missing_file_returns_404() {
    // Default test config points at a path that does not exist.
    let app = common::build_test_app(common::test_config());
    let response = get(app, "/music").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Music file not found");
}

// ---------------------------------------------------------------------------
// Test: present file streams with the audio content type
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_music_streams_existing_file() {
    let mut asset = tempfile::NamedTempFile::new().expect("temp file should be created");
    let payload = b"ID3fake-mp3-bytes-for-testing";
    asset
        .write_all(payload)
        .expect("writing the asset should succeed");

    let mut config = common::test_config();
    config.music_path = asset.path().to_string_lossy().into_owned();

    let app = common::build_test_app(config);
    let response = get(app, "/music").await;

    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response
        .headers()
        .get("content-type")
        .expect("response must carry a content type")
        .to_str()
        .unwrap();
    assert_eq!(content_type, "audio/mpeg");

    let content_length = response
        .headers()
        .get("content-length")
        .expect("response must carry a content length")
        .to_str()
        .unwrap();
    assert_eq!(content_length, payload.len().to_string());

    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    assert_eq!(bytes.as_ref(), payload);
}
