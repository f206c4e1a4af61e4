//! Song CRUD routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use ::songs::{Song, SongList};

use crate::services::song::{self, SongError};
use crate::state::AppState;

/// `GET /api/songs`: list every song.
pub async fn list_songs(State(state): State<AppState>) -> Result<Json<SongList>, StatusCode> {
    let songs = song::list_songs(state.store.as_ref())
        .await
        .map_err(song_error_to_status)?;
    Ok(Json(SongList { songs }))
}

/// `POST /api/songs`: create a song with its client-generated id.
pub async fn create_song(
    State(state): State<AppState>,
    Json(body): Json<Song>,
) -> Result<(StatusCode, Json<Song>), StatusCode> {
    let created = song::create_song(state.store.as_ref(), body)
        .await
        .map_err(song_error_to_status)?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `PUT /api/songs/{id}`: replace a song. The path id wins over the body id.
pub async fn update_song(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(mut body): Json<Song>,
) -> Result<StatusCode, StatusCode> {
    body.id = id;
    song::update_song(state.store.as_ref(), body)
        .await
        .map_err(song_error_to_status)?;
    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /api/songs/{id}`: remove a song.
pub async fn delete_song(State(state): State<AppState>, Path(id): Path<String>) -> Result<StatusCode, StatusCode> {
    song::delete_song(state.store.as_ref(), &id)
        .await
        .map_err(song_error_to_status)?;
    Ok(StatusCode::NO_CONTENT)
}

pub(crate) fn song_error_to_status(err: SongError) -> StatusCode {
    match err {
        SongError::NotFound(_) => StatusCode::NOT_FOUND,
        SongError::Conflict(_) => StatusCode::CONFLICT,
        SongError::MissingId | SongError::Invalid(_) => StatusCode::BAD_REQUEST,
        SongError::Database(e) => {
            tracing::error!(error = %e, "song store failure");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

#[cfg(test)]
#[path = "songs_test.rs"]
mod tests;
