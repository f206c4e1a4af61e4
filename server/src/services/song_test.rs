use super::*;
#[cfg(feature = "live-db-tests")]
use sqlx::postgres::PgPoolOptions;

fn song(id: &str, artist: &str, title: &str, year: &str) -> Song {
    Song { id: id.to_owned(), artist: artist.to_owned(), title: title.to_owned(), year: year.to_owned() }
}

#[tokio::test]
async fn list_orders_by_artist_then_title_then_id() {
    let store = MemorySongStore::with_songs([
        song("3", "Radiohead", "Reckoner", "2007"),
        song("2", "Portishead", "Roads", "1994"),
        song("9", "Radiohead", "Airbag", "1997"),
        song("1", "Radiohead", "Airbag", "1997"),
    ]);

    let ids: Vec<String> = list_songs(&store).await.unwrap().into_iter().map(|s| s.id).collect();
    assert_eq!(ids, ["2", "1", "9", "3"]);
}

#[tokio::test]
async fn create_then_list_returns_song() {
    let store = MemorySongStore::new();
    let created = create_song(&store, song("100", "Sade", "Cherish the Day", "1993")).await.unwrap();
    assert_eq!(created.id, "100");

    let songs = list_songs(&store).await.unwrap();
    assert_eq!(songs, vec![song("100", "Sade", "Cherish the Day", "1993")]);
}

#[tokio::test]
async fn create_with_existing_id_conflicts() {
    let store = MemorySongStore::with_songs([song("7", "a", "b", "2000")]);
    let err = create_song(&store, song("7", "c", "d", "2001")).await.unwrap_err();
    assert!(matches!(err, SongError::Conflict(id) if id == "7"));

    let songs = list_songs(&store).await.unwrap();
    assert_eq!(songs[0].artist, "a");
}

#[tokio::test]
async fn create_without_id_is_rejected() {
    let store = MemorySongStore::new();
    let err = create_song(&store, song("", "a", "b", "2000")).await.unwrap_err();
    assert!(matches!(err, SongError::MissingId));
    assert!(list_songs(&store).await.unwrap().is_empty());
}

#[tokio::test]
async fn create_with_invalid_fields_is_rejected() {
    let store = MemorySongStore::new();
    let err = create_song(&store, song("1", "", "b", "20001")).await.unwrap_err();
    let SongError::Invalid(errors) = err else {
        panic!("expected validation error");
    };
    assert_eq!(errors.0.len(), 2);
}

#[tokio::test]
async fn update_replaces_every_field() {
    let store = MemorySongStore::with_songs([song("5", "Old", "Name", "1999")]);
    update_song(&store, song("5", "New", "Title", "2024")).await.unwrap();
    assert_eq!(list_songs(&store).await.unwrap(), vec![song("5", "New", "Title", "2024")]);
}

#[tokio::test]
async fn update_unknown_id_is_not_found() {
    let store = MemorySongStore::new();
    let err = update_song(&store, song("404", "a", "b", "2000")).await.unwrap_err();
    assert!(matches!(err, SongError::NotFound(id) if id == "404"));
}

#[tokio::test]
async fn delete_removes_song() {
    let store = MemorySongStore::with_songs([song("1", "a", "b", "2000"), song("2", "c", "d", "2001")]);
    delete_song(&store, "1").await.unwrap();
    let ids: Vec<String> = list_songs(&store).await.unwrap().into_iter().map(|s| s.id).collect();
    assert_eq!(ids, ["2"]);
}

#[tokio::test]
async fn delete_twice_reports_not_found() {
    let store = MemorySongStore::with_songs([song("1", "a", "b", "2000")]);
    delete_song(&store, "1").await.unwrap();
    assert!(matches!(delete_song(&store, "1").await, Err(SongError::NotFound(_))));
}

#[tokio::test]
async fn delete_empty_id_is_rejected() {
    let store = MemorySongStore::new();
    assert!(matches!(delete_song(&store, "").await, Err(SongError::MissingId)));
}

#[cfg(feature = "live-db-tests")]
#[tokio::test]
async fn pg_store_round_trip() {
    let url = std::env::var("TEST_DATABASE_URL").expect("TEST_DATABASE_URL required for live-db-tests");
    let pool = PgPoolOptions::new().connect(&url).await.expect("connect");
    sqlx::migrate!("src/db/migrations").run(&pool).await.expect("migrate");
    let store = PgSongStore::new(pool);

    let id = format!("live-{}", std::process::id());
    create_song(&store, song(&id, "Live", "Test", "2025")).await.unwrap();
    assert!(matches!(create_song(&store, song(&id, "x", "y", "1")).await, Err(SongError::Conflict(_))));
    update_song(&store, song(&id, "Live", "Updated", "2026")).await.unwrap();
    let listed = list_songs(&store).await.unwrap();
    assert!(listed.iter().any(|s| s.id == id && s.title == "Updated"));
    delete_song(&store, &id).await.unwrap();
    assert!(matches!(delete_song(&store, &id).await, Err(SongError::NotFound(_))));
}
