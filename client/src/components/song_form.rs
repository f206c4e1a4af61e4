//! Create/update form for a single song.
//!
//! DESIGN
//! ======
//! The same form serves both modes; the heading and submit label follow
//! `SongsState::mode`. Inputs write straight into `SongsState::form`, and
//! per-field messages come from the last rejected save.

use leptos::prelude::*;
use songs::{SongField, YEAR_MAX_LEN};

use crate::state::songs::SongsState;

#[component]
pub fn SongForm(songs: RwSignal<SongsState>, on_save: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let heading = move || if songs.with(SongsState::is_update) { "Edit Song" } else { "New Song" };
    let submit_label = move || if songs.with(SongsState::is_update) { "Update" } else { "Create" };

    view! {
        <form
            class="song-form"
            on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                on_save.run(());
            }
        >
            <h2>{heading}</h2>
            {SongField::ALL
                .into_iter()
                .map(|field| view! { <SongFormField songs=songs field=field/> })
                .collect::<Vec<_>>()}
            <div class="song-form__actions">
                <button class="btn" type="button" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
                <button class="btn btn--primary" type="submit">
                    {submit_label}
                </button>
            </div>
        </form>
    }
}

#[component]
fn SongFormField(songs: RwSignal<SongsState>, field: SongField) -> impl IntoView {
    let label = field_label(field);
    let maxlength = (field == SongField::Year).then(|| YEAR_MAX_LEN.to_string());
    let error = move || songs.with(|s| s.field_error(field));

    view! {
        <label class="song-form__label">
            {label}
            <input
                class="song-form__input"
                class:song-form__input--invalid=move || error().is_some()
                type="text"
                name=field.as_str()
                maxlength=maxlength
                required=true
                prop:value=move || songs.with(|s| s.form.value(field).to_owned())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    songs.update(|s| s.form.set(field, value));
                }
            />
            <Show when=move || error().is_some()>
                <span class="song-form__error">{move || error().unwrap_or_default()}</span>
            </Show>
        </label>
    }
}

fn field_label(field: SongField) -> &'static str {
    match field {
        SongField::Artist => "Artist",
        SongField::Title => "Title",
        SongField::Year => "Year",
    }
}
