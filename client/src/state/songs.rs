//! Songs page state: the song list plus the create/update form.
//!
//! DESIGN
//! ======
//! The form is in exactly one of three modes (idle, creating, updating a
//! selected song), so the mode and the selected song live in one enum
//! instead of two flags and a nullable. Every successful mutation bumps
//! `refresh_seq`; the page watches it and re-fetches the whole list. There
//! is no incremental list edit.
//!
//! ERROR HANDLING
//! ==============
//! A failed service call records its message in `error` and leaves the mode
//! untouched, so the open form stays where the user left it.

#[cfg(test)]
#[path = "songs_test.rs"]
mod songs_test;

use songs::{Song, SongField, SongFields, SongList, ValidationErrors, song_id_from_entropy, validate_fields};

/// Which form, if any, the songs page is showing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Idle,
    Creating,
    /// Editing the contained song; its id is reused on save.
    Updating(Song),
}

/// Kind of mutation a save produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveKind {
    Create,
    Update,
}

/// A mutation ready to send to the song service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SaveRequest {
    Create(Song),
    Update(Song),
}

impl SaveRequest {
    #[must_use]
    pub fn kind(&self) -> SaveKind {
        match self {
            Self::Create(_) => SaveKind::Create,
            Self::Update(_) => SaveKind::Update,
        }
    }

    #[must_use]
    pub fn song(&self) -> &Song {
        match self {
            Self::Create(song) | Self::Update(song) => song,
        }
    }
}

/// State behind the songs page, provided as `RwSignal<SongsState>` context.
#[derive(Clone, Debug, Default)]
pub struct SongsState {
    pub mode: FormMode,
    pub form: SongFields,
    pub form_errors: Option<ValidationErrors>,
    pub songs: Vec<Song>,
    pub loading: bool,
    /// Success message from the last mutation.
    pub notice: Option<String>,
    pub error: Option<String>,
    /// Bumped after each successful mutation to request a list re-fetch.
    pub refresh_seq: u64,
}

impl SongsState {
    #[must_use]
    pub fn is_create(&self) -> bool {
        matches!(self.mode, FormMode::Creating)
    }

    #[must_use]
    pub fn is_update(&self) -> bool {
        matches!(self.mode, FormMode::Updating(_))
    }

    /// The song selected for update, if any.
    #[must_use]
    pub fn current_song(&self) -> Option<&Song> {
        match &self.mode {
            FormMode::Updating(song) => Some(song),
            FormMode::Idle | FormMode::Creating => None,
        }
    }

    #[must_use]
    pub fn is_form_open(&self) -> bool {
        !matches!(self.mode, FormMode::Idle)
    }

    /// Open the form for a new song.
    pub fn show_create_song(&mut self) {
        self.mode = FormMode::Creating;
        self.reset_form();
    }

    /// Open the form for `song`, pre-filled with its fields.
    pub fn show_update_song(&mut self, song: Song) {
        self.form = song.fields();
        self.form_errors = None;
        self.mode = FormMode::Updating(song);
    }

    /// Close the form and drop the selection.
    pub fn cancel_form(&mut self) {
        self.mode = FormMode::Idle;
        self.reset_form();
    }

    /// Turn the form into a service mutation.
    ///
    /// Returns `None` when idle, when the fields fail validation (recorded in
    /// `form_errors`), or when the selected song has no id. Otherwise the
    /// form is reset right away; the mode stays until [`finish_save`].
    ///
    /// [`finish_save`]: SongsState::finish_save
    pub fn save_song(&mut self, new_id: impl FnOnce() -> String) -> Option<SaveRequest> {
        if !self.is_form_open() {
            return None;
        }
        if let Err(errors) = validate_fields(&self.form) {
            self.form_errors = Some(errors);
            return None;
        }

        let fields = self.form.clone();
        let request = match &self.mode {
            FormMode::Idle => return None,
            FormMode::Creating => SaveRequest::Create(Song::from_fields(new_id(), fields)),
            FormMode::Updating(current) if current.has_id() => {
                SaveRequest::Update(Song::from_fields(current.id.clone(), fields))
            }
            FormMode::Updating(_) => return None,
        };

        self.reset_form();
        self.error = None;
        Some(request)
    }

    /// Record a successful create/update: close the matching mode and ask
    /// for a list refresh.
    pub fn finish_save(&mut self, kind: SaveKind) {
        match (kind, &self.mode) {
            (SaveKind::Create, FormMode::Creating) | (SaveKind::Update, FormMode::Updating(_)) => {
                self.mode = FormMode::Idle;
            }
            _ => {}
        }
        self.error = None;
        self.notice = Some(
            match kind {
                SaveKind::Create => "Song created.",
                SaveKind::Update => "Song updated.",
            }
            .to_owned(),
        );
        self.request_refresh();
    }

    /// Record a successful delete and ask for a list refresh.
    pub fn finish_remove(&mut self) {
        self.error = None;
        self.notice = Some("Song removed.".to_owned());
        self.request_refresh();
    }

    pub fn begin_fetch(&mut self) {
        self.loading = true;
    }

    /// Replace the list with a freshly fetched one.
    pub fn apply_song_list(&mut self, list: SongList) {
        self.songs = list.songs;
        self.loading = false;
        self.error = None;
    }

    /// Record a failed list fetch.
    pub fn fail_fetch(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.loading = false;
    }

    /// Record a failed create, update or delete. The form mode and any
    /// in-flight fetch are left as they were.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// Banner text: the latest error, else the latest notice.
    #[must_use]
    pub fn banner(&self) -> Option<String> {
        self.error.clone().or_else(|| self.notice.clone())
    }

    pub fn dismiss_messages(&mut self) {
        self.notice = None;
        self.error = None;
    }

    /// Message for the first failed rule on `field`, if any.
    #[must_use]
    pub fn field_error(&self, field: SongField) -> Option<String> {
        self.form_errors
            .as_ref()
            .and_then(|errors| errors.for_field(field))
            .map(ToString::to_string)
    }

    fn reset_form(&mut self) {
        self.form = SongFields::default();
        self.form_errors = None;
    }

    fn request_refresh(&mut self) {
        self.refresh_seq = self.refresh_seq.wrapping_add(1);
    }
}

/// Generate a client-side song id: a random integer below 999,999,999.
#[must_use]
pub fn new_song_id() -> String {
    song_id_from_entropy(uuid::Uuid::new_v4().as_u128())
}
