//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the song store chosen at startup; handlers never know whether
//! songs live in Postgres or in memory.

use std::sync::Arc;

use crate::services::song::{MemorySongStore, SongStore};

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; the store is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn SongStore>,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<dyn SongStore>) -> Self {
        Self { store }
    }

    /// State backed by an empty in-process store.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemorySongStore::new()))
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use songs::Song;

    /// Create a test `AppState` over a memory store seeded with `songs`.
    #[must_use]
    pub fn test_app_state_with(songs: Vec<Song>) -> AppState {
        AppState::new(Arc::new(MemorySongStore::with_songs(songs)))
    }

    /// Create a dummy `Song` for testing.
    #[must_use]
    pub fn dummy_song(id: &str) -> Song {
        Song { id: id.to_owned(), artist: "Test Artist".into(), title: format!("Track {id}"), year: "2001".into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn in_memory_state_starts_empty() {
        let state = AppState::in_memory();
        assert!(state.store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn cloned_state_shares_store() {
        let state = test_helpers::test_app_state_with(Vec::new());
        let clone = state.clone();
        clone.store.insert(&test_helpers::dummy_song("1")).await.unwrap();
        assert_eq!(state.store.list().await.unwrap().len(), 1);
    }
}
