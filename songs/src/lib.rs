//! Shared song model for the setlist client and server.
//!
//! This crate owns the JSON representation exchanged over `/api/songs` and
//! the field rules the form and the store both enforce. The rules are kept
//! deliberately small: every field is required and the year is capped at
//! four characters.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Upper bound (exclusive) for client-generated song identifiers.
pub const SONG_ID_SPACE: u128 = 999_999_999;

/// Maximum number of characters accepted in the `year` field.
pub const YEAR_MAX_LEN: usize = 4;

/// A song record as stored and listed by the song service.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    /// Client-generated identifier (decimal string).
    pub id: String,
    pub artist: String,
    pub title: String,
    /// Free-form year text, at most [`YEAR_MAX_LEN`] characters.
    pub year: String,
}

impl Song {
    /// Build a song from an identifier and edited fields.
    #[must_use]
    pub fn from_fields(id: impl Into<String>, fields: SongFields) -> Self {
        Self { id: id.into(), artist: fields.artist, title: fields.title, year: fields.year }
    }

    /// The editable fields of this song, without the identifier.
    #[must_use]
    pub fn fields(&self) -> SongFields {
        SongFields { artist: self.artist.clone(), title: self.title.clone(), year: self.year.clone() }
    }

    /// Whether the song carries an identifier usable for update/delete.
    #[must_use]
    pub fn has_id(&self) -> bool {
        !self.id.is_empty()
    }

    /// Check the field rules against this song.
    ///
    /// # Errors
    ///
    /// Returns every failing field, see [`validate_fields`].
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        validate_fields(&self.fields())
    }
}

/// Response body of the list call: `{"songs": [...]}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongList {
    #[serde(default)]
    pub songs: Vec<Song>,
}

/// Editable song fields, as bound to the song form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongFields {
    pub artist: String,
    pub title: String,
    pub year: String,
}

impl SongFields {
    #[must_use]
    pub fn value(&self, field: SongField) -> &str {
        match field {
            SongField::Artist => &self.artist,
            SongField::Title => &self.title,
            SongField::Year => &self.year,
        }
    }

    pub fn set(&mut self, field: SongField, value: String) {
        match field {
            SongField::Artist => self.artist = value,
            SongField::Title => self.title = value,
            SongField::Year => self.year = value,
        }
    }
}

// =============================================================================
// VALIDATION
// =============================================================================

/// Field names covered by the validation rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SongField {
    Artist,
    Title,
    Year,
}

impl SongField {
    pub const ALL: [SongField; 3] = [SongField::Artist, SongField::Title, SongField::Year];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Artist => "artist",
            Self::Title => "title",
            Self::Year => "year",
        }
    }
}

impl fmt::Display for SongField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single failed field rule.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("{0} is required")]
    Required(SongField),
    #[error("{field} must be at most {max} characters")]
    TooLong { field: SongField, max: usize },
}

impl FieldError {
    /// The field this failure belongs to.
    #[must_use]
    pub fn field(&self) -> SongField {
        match self {
            Self::Required(field) | Self::TooLong { field, .. } => *field,
        }
    }
}

/// All failed field rules for one song.
#[derive(Clone, Debug, Default, PartialEq, Eq, thiserror::Error)]
#[error("invalid song: {}", join_errors(.0))]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    /// First failure recorded for `field`, if any.
    #[must_use]
    pub fn for_field(&self, field: SongField) -> Option<&FieldError> {
        self.0.iter().find(|e| e.field() == field)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn join_errors(errors: &[FieldError]) -> String {
    errors.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}

/// Validate song fields: all required, year at most [`YEAR_MAX_LEN`] characters.
///
/// # Errors
///
/// Returns [`ValidationErrors`] listing every failing field in form order.
pub fn validate_fields(fields: &SongFields) -> Result<(), ValidationErrors> {
    let mut errors = Vec::new();
    if fields.artist.is_empty() {
        errors.push(FieldError::Required(SongField::Artist));
    }
    if fields.title.is_empty() {
        errors.push(FieldError::Required(SongField::Title));
    }
    if fields.year.is_empty() {
        errors.push(FieldError::Required(SongField::Year));
    } else if fields.year.chars().count() > YEAR_MAX_LEN {
        errors.push(FieldError::TooLong { field: SongField::Year, max: YEAR_MAX_LEN });
    }

    if errors.is_empty() { Ok(()) } else { Err(ValidationErrors(errors)) }
}

/// Render raw entropy as a song identifier in `[0, SONG_ID_SPACE)`.
#[must_use]
pub fn song_id_from_entropy(entropy: u128) -> String {
    (entropy % SONG_ID_SPACE).to_string()
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
