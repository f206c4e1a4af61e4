use super::*;

#[test]
fn root_path_is_home() {
    assert_eq!(Page::match_path("/"), Some(Page::Home));
    assert_eq!(Page::match_path(""), Some(Page::Home));
}

#[test]
fn songs_path_matches_with_or_without_trailing_slash() {
    assert_eq!(Page::match_path("/songs"), Some(Page::Songs));
    assert_eq!(Page::match_path("/songs/"), Some(Page::Songs));
}

#[test]
fn unknown_paths_resolve_to_home() {
    assert_eq!(Page::match_path("/albums"), None);
    assert_eq!(Page::resolve("/albums"), Page::Home);
    assert_eq!(Page::resolve("/songs/42"), Page::Home);
}

#[test]
fn page_paths_round_trip_through_match() {
    for page in Page::ALL {
        assert_eq!(Page::match_path(page.path()), Some(page));
    }
}
