use super::*;

#[test]
fn song_endpoint_formats_expected_path() {
    assert_eq!(song_endpoint("123456"), "/api/songs/123456");
}

#[test]
fn request_failed_message_formats_action_and_status() {
    assert_eq!(request_failed_message("update song", 404), "update song failed: 404");
}

#[test]
fn require_id_rejects_song_without_id() {
    let song = Song::default();
    assert_eq!(require_id(&song), Err("song id is required".to_owned()));

    let song = Song { id: "9".to_owned(), ..Song::default() };
    assert_eq!(require_id(&song), Ok("9"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_are_unavailable_outside_the_browser() {
    let song = Song { id: "1".to_owned(), ..Song::default() };
    let results = futures::executor::block_on(async {
        (
            fetch_songs().await.map(|_| ()),
            create_song(&song).await,
            update_song(&song).await,
            delete_song(&song).await,
        )
    });
    let expected = Err("not available on server".to_owned());
    assert_eq!(results, (expected.clone(), expected.clone(), expected.clone(), expected));
}
