//! Table of songs with per-row edit and delete actions.

use leptos::prelude::*;
use songs::Song;

use crate::state::songs::SongsState;

#[component]
pub fn SongTable(songs: RwSignal<SongsState>, on_edit: Callback<Song>, on_remove: Callback<Song>) -> impl IntoView {
    view! {
        <Show
            when=move || songs.with(|s| !s.songs.is_empty())
            fallback=|| view! { <p class="song-table__empty">"No songs yet."</p> }
        >
            <table class="song-table">
                <thead>
                    <tr>
                        <th>"Artist"</th>
                        <th>"Title"</th>
                        <th>"Year"</th>
                        <th class="song-table__actions"></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        songs
                            .with(|s| s.songs.clone())
                            .into_iter()
                            .map(|song| view! { <SongRow song=song on_edit=on_edit on_remove=on_remove/> })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>
        </Show>
    }
}

#[component]
fn SongRow(song: Song, on_edit: Callback<Song>, on_remove: Callback<Song>) -> impl IntoView {
    let edit_song = song.clone();
    let remove_song = song.clone();

    view! {
        <tr class="song-table__row">
            <td>{song.artist}</td>
            <td>{song.title}</td>
            <td>{song.year}</td>
            <td class="song-table__actions">
                <button class="btn" on:click=move |_| on_edit.run(edit_song.clone())>
                    "Edit"
                </button>
                <button
                    class="btn btn--danger"
                    on:click=move |_| on_remove.run(remove_song.clone())
                    title="Delete song"
                >
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
