mod models;
mod validation;

pub use models::{AuditInfo, Category, Song, SongId, SongInput};
pub use validation::{
    validate_song, validate_song_input, FieldError, ValidationErrors, ValidationResult,
};
