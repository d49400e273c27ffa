//! Song catalog models.
//!
//! `Song` is the validated, persistable entry. `SongInput` is what callers
//! send over the wire: every field is optional so that missing values are
//! reported as validation errors instead of decoding failures.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Store-assigned identifier of a song.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SongId(pub i64);

impl fmt::Display for SongId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for SongId {
    fn from(value: i64) -> Self {
        SongId(value)
    }
}

// =============================================================================
// Category
// =============================================================================

/// Genre classification of a song.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Jazz,
    Pop,
    Classical,
}

lazy_static! {
    static ref CATEGORIES_BY_NAME: HashMap<&'static str, Category> = Category::ALL
        .iter()
        .map(|category| (category.as_str(), *category))
        .collect();
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Jazz, Category::Pop, Category::Classical];

    /// The enumeration name, as serialized and stored.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Jazz => "JAZZ",
            Category::Pop => "POP",
            Category::Classical => "CLASSICAL",
        }
    }

    /// Resolves a category name ignoring case, e.g. "pop", "Pop" and "POP".
    pub fn from_name(name: &str) -> Option<Category> {
        CATEGORIES_BY_NAME
            .get(name.to_uppercase().as_str())
            .copied()
    }

    /// All names joined for messages, e.g. "JAZZ, POP, CLASSICAL".
    pub fn names() -> String {
        Category::ALL
            .iter()
            .map(Category::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Song
// =============================================================================

/// Creation and last modification times, in Unix seconds. Owned by the store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditInfo {
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    /// `None` until the song has been persisted.
    pub id: Option<SongId>,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub artist_name: String,
    pub category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audit: Option<AuditInfo>,
}

impl Song {
    /// True when both songs carry the same catalog data, regardless of id
    /// and audit information.
    pub fn same_content(&self, other: &Song) -> bool {
        self.title == other.title
            && self.description == other.description
            && self.duration == other.duration
            && self.artist_name == other.artist_name
            && self.category == other.category
    }
}

/// Unvalidated song as received from callers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongInput {
    pub id: Option<SongId>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub duration: Option<String>,
    pub artist_name: Option<String>,
    pub category: Option<String>,
}

impl From<&Song> for SongInput {
    fn from(song: &Song) -> Self {
        SongInput {
            id: song.id,
            title: Some(song.title.clone()),
            description: Some(song.description.clone()),
            duration: Some(song.duration.clone()),
            artist_name: Some(song.artist_name.clone()),
            category: Some(song.category.as_str().to_string()),
        }
    }
}
