//! REST API helpers for the song-storage service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints are
//! only called from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` outputs instead of panics; the songs page
//! records the message in its state and leaves the form as it was.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use songs::{Song, SongList};

#[cfg(any(test, feature = "hydrate"))]
const SONGS_ENDPOINT: &str = "/api/songs";

#[cfg(any(test, feature = "hydrate"))]
fn song_endpoint(song_id: &str) -> String {
    format!("{SONGS_ENDPOINT}/{song_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(action: &str, status: u16) -> String {
    format!("{action} failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn require_id(song: &Song) -> Result<&str, String> {
    if song.has_id() { Ok(&song.id) } else { Err("song id is required".to_owned()) }
}

/// Fetch every song from `GET /api/songs`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with a non-OK status.
pub async fn fetch_songs() -> Result<SongList, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(SONGS_ENDPOINT)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("list songs", resp.status()));
        }
        resp.json::<SongList>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Create a song via `POST /api/songs`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with a non-OK status.
pub async fn create_song(song: &Song) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(SONGS_ENDPOINT)
            .json(song)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("create song", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = song;
        Err("not available on server".to_owned())
    }
}

/// Replace a song via `PUT /api/songs/{id}`.
///
/// # Errors
///
/// Returns an error string if the song has no id, the request fails, or the
/// server responds with a non-OK status.
pub async fn update_song(song: &Song) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = song_endpoint(require_id(song)?);
        let resp = gloo_net::http::Request::put(&url)
            .json(song)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("update song", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = song;
        Err("not available on server".to_owned())
    }
}

/// Delete a song via `DELETE /api/songs/{id}`.
///
/// # Errors
///
/// Returns an error string if the song has no id, the request fails, or the
/// server responds with a non-OK status.
pub async fn delete_song(song: &Song) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = song_endpoint(require_id(song)?);
        let resp = gloo_net::http::Request::delete(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("delete song", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = song;
        Err("not available on server".to_owned())
    }
}
