//! Song service: CRUD over a pluggable song store.
//!
//! DESIGN
//! ======
//! Route handlers call the free functions in this module, which enforce the
//! shared field rules and identifier presence before touching storage. The
//! `SongStore` trait has two implementations: Postgres (when `DATABASE_URL`
//! is configured) and an in-process map used for local runs and tests.
//!
//! ERROR HANDLING
//! ==============
//! Store implementations report missing rows and duplicate identifiers as
//! typed `SongError` variants; callers map them to HTTP status codes. The
//! list is always returned whole, ordered by artist, title, then id.

use std::collections::BTreeMap;

use async_trait::async_trait;
use songs::{Song, ValidationErrors};
use sqlx::PgPool;
use tokio::sync::RwLock;
use tracing::info;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum SongError {
    #[error("song not found: {0}")]
    NotFound(String),
    #[error("song already exists: {0}")]
    Conflict(String),
    #[error("song id is required")]
    MissingId,
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Storage contract for song records.
#[async_trait]
pub trait SongStore: Send + Sync {
    /// All songs, ordered by artist, title, then id.
    async fn list(&self) -> Result<Vec<Song>, SongError>;

    /// Insert a new song. Fails with [`SongError::Conflict`] if the id exists.
    async fn insert(&self, song: &Song) -> Result<(), SongError>;

    /// Replace an existing song. Fails with [`SongError::NotFound`] if absent.
    async fn replace(&self, song: &Song) -> Result<(), SongError>;

    /// Remove a song by id. Fails with [`SongError::NotFound`] if absent.
    async fn remove(&self, id: &str) -> Result<(), SongError>;
}

// =============================================================================
// CRUD
// =============================================================================

/// List all songs.
///
/// # Errors
///
/// Returns a store error if the listing fails.
pub async fn list_songs(store: &dyn SongStore) -> Result<Vec<Song>, SongError> {
    store.list().await
}

/// Create a song with its client-supplied identifier.
///
/// # Errors
///
/// Returns `MissingId` or `Invalid` for bad input, `Conflict` if the id is
/// taken, or a database error.
pub async fn create_song(store: &dyn SongStore, song: Song) -> Result<Song, SongError> {
    check_song(&song)?;
    store.insert(&song).await?;
    info!(song_id = %song.id, artist = %song.artist, title = %song.title, "song created");
    Ok(song)
}

/// Update every field of an existing song.
///
/// # Errors
///
/// Returns `MissingId` or `Invalid` for bad input, `NotFound` if the id is
/// unknown, or a database error.
pub async fn update_song(store: &dyn SongStore, song: Song) -> Result<Song, SongError> {
    check_song(&song)?;
    store.replace(&song).await?;
    info!(song_id = %song.id, "song updated");
    Ok(song)
}

/// Delete a song by id.
///
/// # Errors
///
/// Returns `MissingId` for an empty id, `NotFound` if the id is unknown, or a
/// database error.
pub async fn delete_song(store: &dyn SongStore, id: &str) -> Result<(), SongError> {
    if id.is_empty() {
        return Err(SongError::MissingId);
    }
    store.remove(id).await?;
    info!(song_id = %id, "song deleted");
    Ok(())
}

fn check_song(song: &Song) -> Result<(), SongError> {
    if !song.has_id() {
        return Err(SongError::MissingId);
    }
    song.validate()?;
    Ok(())
}

fn sort_songs(songs: &mut [Song]) {
    songs.sort_by(|a, b| {
        a.artist
            .cmp(&b.artist)
            .then_with(|| a.title.cmp(&b.title))
            .then_with(|| a.id.cmp(&b.id))
    });
}

// =============================================================================
// MEMORY STORE
// =============================================================================

/// In-process song store keyed by id.
#[derive(Default)]
pub struct MemorySongStore {
    songs: RwLock<BTreeMap<String, Song>>,
}

impl MemorySongStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with `songs`. Later duplicates win.
    #[cfg(test)]
    #[must_use]
    pub fn with_songs(songs: impl IntoIterator<Item = Song>) -> Self {
        let map = songs.into_iter().map(|s| (s.id.clone(), s)).collect();
        Self { songs: RwLock::new(map) }
    }
}

#[async_trait]
impl SongStore for MemorySongStore {
    async fn list(&self) -> Result<Vec<Song>, SongError> {
        let mut songs: Vec<Song> = self.songs.read().await.values().cloned().collect();
        sort_songs(&mut songs);
        Ok(songs)
    }

    async fn insert(&self, song: &Song) -> Result<(), SongError> {
        let mut songs = self.songs.write().await;
        if songs.contains_key(&song.id) {
            return Err(SongError::Conflict(song.id.clone()));
        }
        songs.insert(song.id.clone(), song.clone());
        Ok(())
    }

    async fn replace(&self, song: &Song) -> Result<(), SongError> {
        let mut songs = self.songs.write().await;
        let Some(existing) = songs.get_mut(&song.id) else {
            return Err(SongError::NotFound(song.id.clone()));
        };
        *existing = song.clone();
        Ok(())
    }

    async fn remove(&self, id: &str) -> Result<(), SongError> {
        self.songs
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| SongError::NotFound(id.to_owned()))
    }
}

// =============================================================================
// POSTGRES STORE
// =============================================================================

/// Song store backed by the `songs` table.
pub struct PgSongStore {
    pool: PgPool,
}

impl PgSongStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SongStore for PgSongStore {
    async fn list(&self) -> Result<Vec<Song>, SongError> {
        let rows = sqlx::query_as::<_, (String, String, String, String)>(
            "SELECT id, artist, title, year
             FROM songs
             ORDER BY artist ASC, title ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(id, artist, title, year)| Song { id, artist, title, year })
            .collect())
    }

    async fn insert(&self, song: &Song) -> Result<(), SongError> {
        let result = sqlx::query(
            "INSERT INTO songs (id, artist, title, year) VALUES ($1, $2, $3, $4)
             ON CONFLICT (id) DO NOTHING",
        )
        .bind(&song.id)
        .bind(&song.artist)
        .bind(&song.title)
        .bind(&song.year)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(SongError::Conflict(song.id.clone()));
        }
        Ok(())
    }

    async fn replace(&self, song: &Song) -> Result<(), SongError> {
        let result = sqlx::query(
            "UPDATE songs SET artist = $2, title = $3, year = $4, updated_at = now()
             WHERE id = $1",
        )
        .bind(&song.id)
        .bind(&song.artist)
        .bind(&song.title)
        .bind(&song.year)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(SongError::NotFound(song.id.clone()));
        }
        Ok(())
    }

    async fn remove(&self, id: &str) -> Result<(), SongError> {
        let result = sqlx::query("DELETE FROM songs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(SongError::NotFound(id.to_owned()));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "song_test.rs"]
mod tests;
