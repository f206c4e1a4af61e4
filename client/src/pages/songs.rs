//! Songs page: song list with create, edit and delete.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetches the list on mount and after every successful mutation, by
//! watching `SongsState::refresh_seq`. Mutations go straight to the song
//! service; the list on screen only ever reflects the last full fetch.

use leptos::prelude::*;
use songs::Song;

use crate::components::song_form::SongForm;
use crate::components::song_table::SongTable;
use crate::state::songs::{SaveRequest, SongsState, new_song_id};

#[component]
pub fn SongsPage() -> impl IntoView {
    let songs = expect_context::<RwSignal<SongsState>>();

    let refresh = Memo::new(move |_| songs.with(|s| s.refresh_seq));
    Effect::new(move || {
        refresh.track();
        load_songs(songs);
    });

    let on_create = move |_| songs.update(SongsState::show_create_song);
    let on_edit = Callback::new(move |song: Song| songs.update(|s| s.show_update_song(song)));
    let on_remove = Callback::new(move |song: Song| remove_song(songs, song));
    let on_cancel = Callback::new(move |()| songs.update(SongsState::cancel_form));
    let on_save = Callback::new(move |()| {
        if let Some(request) = songs.try_update(|s| s.save_song(new_song_id)).flatten() {
            submit_save(songs, request);
        }
    });

    view! {
        <section class="songs-page">
            <header class="songs-page__header">
                <h1>"Songs"</h1>
                <button
                    class="btn btn--primary"
                    on:click=on_create
                    disabled=move || songs.with(SongsState::is_form_open)
                >
                    "+ New Song"
                </button>
            </header>

            <Show when=move || songs.with(|s| s.banner().is_some())>
                <div
                    class="songs-page__banner"
                    class:songs-page__banner--error=move || songs.with(|s| s.error.is_some())
                >
                    <span>
                        {move || songs.with(|s| s.banner().unwrap_or_default())}
                    </span>
                    <button
                        class="songs-page__banner-close"
                        on:click=move |_| songs.update(SongsState::dismiss_messages)
                        aria-label="Dismiss"
                    >
                        "✕"
                    </button>
                </div>
            </Show>

            <Show when=move || songs.with(SongsState::is_form_open)>
                <SongForm songs=songs on_save=on_save on_cancel=on_cancel/>
            </Show>

            <Show
                when=move || !songs.with(|s| s.loading && s.songs.is_empty())
                fallback=move || view! { <p>"Loading songs..."</p> }
            >
                <SongTable songs=songs on_edit=on_edit on_remove=on_remove/>
            </Show>
        </section>
    }
}

fn load_songs(songs: RwSignal<SongsState>) {
    songs.update(SongsState::begin_fetch);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_songs().await {
            Ok(list) => songs.update(|s| s.apply_song_list(list)),
            Err(e) => {
                log::warn!("song list fetch failed: {e}");
                songs.update(|s| s.fail_fetch(format!("Could not load songs: {e}")));
            }
        }
    });
}

fn submit_save(songs: RwSignal<SongsState>, request: SaveRequest) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let kind = request.kind();
        let result = match &request {
            SaveRequest::Create(song) => crate::net::api::create_song(song).await,
            SaveRequest::Update(song) => crate::net::api::update_song(song).await,
        };
        match result {
            Ok(()) => songs.update(|s| s.finish_save(kind)),
            Err(e) => {
                log::warn!("song save failed: {e}");
                songs.update(|s| s.fail(format!("Could not save song: {e}")));
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (songs, request);
    }
}

fn remove_song(songs: RwSignal<SongsState>, song: Song) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::delete_song(&song).await {
            Ok(()) => songs.update(SongsState::finish_remove),
            Err(e) => {
                log::warn!("song delete failed: {e}");
                songs.update(|s| s.fail(format!("Could not remove song: {e}")));
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (songs, song);
    }
}
