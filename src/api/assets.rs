//! Embedded browser emulator
//!
//! Falls back to the filesystem when an asset is missing from the build.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::{IntoResponse, Response},
};
use rust_embed::Embed;
use std::path::PathBuf;

const ASSET_DIR: &str = "ui/dist";

#[derive(Embed)]
#[folder = "ui/dist"]
struct Assets;

/// Serve embedded static files, with filesystem fallback for development
pub async fn serve_static(req: Request<Body>) -> Response {
    let path = req.uri().path().trim_start_matches('/');
    let mime = mime_guess::from_path(path).first_or_octet_stream();

    if let Some(content) = Assets::get(path) {
        return (
            [(header::CONTENT_TYPE, mime.as_ref())],
            content.data.into_owned(),
        )
            .into_response();
    }

    // Never serve anything outside the asset directory
    if path.split('/').any(|segment| segment == "..") {
        return (StatusCode::NOT_FOUND, "Not found").into_response();
    }

    match std::fs::read(PathBuf::from(ASSET_DIR).join(path)) {
        Ok(content) => ([(header::CONTENT_TYPE, mime.as_ref())], content).into_response(),
        Err(_) => (StatusCode::NOT_FOUND, "Not found").into_response(),
    }
}

/// Get the emulator page (embedded or from filesystem)
pub fn get_index_html() -> Option<String> {
    if let Some(content) = Assets::get("index.html") {
        return String::from_utf8(content.data.into_owned()).ok();
    }

    std::fs::read_to_string(PathBuf::from(ASSET_DIR).join("index.html")).ok()
}
