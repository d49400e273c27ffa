//! Validation for songs.
//!
//! Turns a `SongInput` into a `Song`, collecting every field error in field
//! order instead of stopping at the first one.

use super::models::{Category, Song, SongInput};
use serde::Serialize;
use std::fmt;

const TEXT_MIN_CHARS: usize = 3;
const TEXT_MAX_CHARS: usize = 50;

/// A single rejected field, as reported to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn not_blank(field: &'static str) -> Self {
        FieldError {
            field,
            message: format!("NotBlank: {} must not be null or blank", field),
        }
    }

    fn size(field: &'static str, min: usize, max: usize) -> Self {
        FieldError {
            field,
            message: format!(
                "Size: {} must be between {} and {} characters",
                field, min, max
            ),
        }
    }

    fn not_null(field: &'static str) -> Self {
        FieldError {
            field,
            message: format!("NotNull: {} must not be null", field),
        }
    }

    fn unknown_category(field: &'static str, value: &str) -> Self {
        FieldError {
            field,
            message: format!(
                "Value: {} must be one of {}, got '{}'",
                field,
                Category::names(),
                value
            ),
        }
    }
}

/// Non-empty list of field errors.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<FieldError> {
        self.0
    }

    fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages = self
            .0
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        f.write_str(&messages)
    }
}

impl std::error::Error for ValidationErrors {}

pub type ValidationResult<T> = Result<T, ValidationErrors>;

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

fn check_not_blank(errors: &mut ValidationErrors, field: &'static str, value: Option<&str>) {
    if is_blank(value) {
        errors.push(FieldError::not_blank(field));
    }
}

// A missing value is only reported as blank, a present one is measured even
// when it consists of whitespace.
fn check_size(errors: &mut ValidationErrors, field: &'static str, value: Option<&str>) {
    if let Some(value) = value {
        let chars = value.chars().count();
        if !(TEXT_MIN_CHARS..=TEXT_MAX_CHARS).contains(&chars) {
            errors.push(FieldError::size(field, TEXT_MIN_CHARS, TEXT_MAX_CHARS));
        }
    }
}

fn check_text_fields(
    errors: &mut ValidationErrors,
    title: Option<&str>,
    description: Option<&str>,
    duration: Option<&str>,
    artist_name: Option<&str>,
) {
    check_not_blank(errors, "title", title);
    check_size(errors, "title", title);
    check_not_blank(errors, "description", description);
    check_size(errors, "description", description);
    check_not_blank(errors, "duration", duration);
    check_not_blank(errors, "artistName", artist_name);
}

/// Validate a song input and build the corresponding `Song`.
///
/// The id is carried over untouched; whether it must be present or absent is
/// decided by the operation.
pub fn validate_song_input(input: &SongInput) -> ValidationResult<Song> {
    let mut errors = ValidationErrors::default();
    check_text_fields(
        &mut errors,
        input.title.as_deref(),
        input.description.as_deref(),
        input.duration.as_deref(),
        input.artist_name.as_deref(),
    );

    let category = match input.category.as_deref() {
        None => {
            errors.push(FieldError::not_null("category"));
            None
        }
        Some(name) => {
            let category = Category::from_name(name);
            if category.is_none() {
                errors.push(FieldError::unknown_category("category", name));
            }
            category
        }
    };

    match category {
        Some(category) if errors.is_empty() => Ok(Song {
            id: input.id,
            title: input.title.clone().unwrap_or_default(),
            description: input.description.clone().unwrap_or_default(),
            duration: input.duration.clone().unwrap_or_default(),
            artist_name: input.artist_name.clone().unwrap_or_default(),
            category,
            audit: None,
        }),
        _ => Err(errors),
    }
}

/// Validate an already typed song before it is written.
pub fn validate_song(song: &Song) -> ValidationResult<()> {
    let mut errors = ValidationErrors::default();
    check_text_fields(
        &mut errors,
        Some(&song.title),
        Some(&song.description),
        Some(&song.duration),
        Some(&song.artist_name),
    );
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
