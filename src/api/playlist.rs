use axum::{
    Json,
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{error::MixtapeError, mixtape};

/// `GET /playlist/{id}`: import a public playlist and return its preview.
///
/// The path segment may be a bare id or anything `extract_playlist_id`
/// accepts. The response vocabulary is fixed: missing, empty or
/// unidentifiable playlists are 404, everything else that goes wrong is a
/// 500 with a generic message. Internal error detail never reaches the
/// client.
pub async fn playlist(Path(id): Path<String>) -> Response {
    match mixtape::import(&id).await {
        Ok(preview) => (StatusCode::OK, Json(preview)).into_response(),
        Err(err) => {
            let (status, message) = match err {
                MixtapeError::NotFound | MixtapeError::InvalidInput(_) => {
                    (StatusCode::NOT_FOUND, "Playlist not found")
                }
                MixtapeError::EmptyResult => (StatusCode::NOT_FOUND, "Playlist is empty"),
                MixtapeError::Unparseable => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Could not parse playlist data",
                ),
                MixtapeError::Http(_) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to fetch playlist",
                ),
            };
            (status, Json(json!({ "error": message }))).into_response()
        }
    }
}
