//! SongStore trait definition and paging types.

use crate::song::{Category, Song, SongId};
use anyhow::Result;
use serde::Serialize;

/// Sort order applied on song ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

impl SortDirection {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "ASC",
            SortDirection::Descending => "DESC",
        }
    }
}

/// A page window over songs ordered by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Zero-based page index.
    pub page: usize,
    /// Items per page, always at least 1.
    pub size: usize,
    pub direction: SortDirection,
}

impl PageRequest {
    pub fn new(page: usize, size: usize, direction: SortDirection) -> Self {
        PageRequest {
            page,
            size: size.max(1),
            direction,
        }
    }

    /// Rows to skip, saturating at the largest offset SQLite accepts.
    pub fn offset(&self) -> i64 {
        (self.page as u64)
            .saturating_mul(self.size as u64)
            .min(i64::MAX as u64) as i64
    }

    /// Rows to return, as bound in SQL.
    pub fn limit(&self) -> i64 {
        i64::try_from(self.size).unwrap_or(i64::MAX)
    }
}

/// One page of results plus the totals of the whole filtered set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub size: usize,
    pub total_items: u64,
}

impl<T> Page<T> {
    pub fn total_pages(&self) -> u64 {
        if self.size == 0 {
            return 0;
        }
        self.total_items.div_ceil(self.size as u64)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Trait for song storage backends.
///
/// Implementations must be safe to share across request handlers.
pub trait SongStore: Send + Sync {
    /// Get a page of all songs.
    fn find_all(&self, page: PageRequest) -> Result<Page<Song>>;

    /// Get a page of the songs in a category.
    fn find_by_category(&self, category: Category, page: PageRequest) -> Result<Page<Song>>;

    /// Get a page of the songs whose artist name matches exactly.
    fn find_by_artist_name(&self, artist_name: &str, page: PageRequest) -> Result<Page<Song>>;

    /// Get a song by id.
    fn find_by_id(&self, id: SongId) -> Result<Option<Song>>;

    /// Persist a song.
    ///
    /// A song without id is inserted and returned with its new id. A song with
    /// id replaces the stored row only if that row still exists; `None` is
    /// returned otherwise and nothing is written.
    fn save(&self, song: &Song) -> Result<Option<Song>>;

    /// Delete a song, returning whether a row was removed.
    fn delete_by_id(&self, id: SongId) -> Result<bool>;

    /// Get the total number of songs.
    fn count(&self) -> Result<u64>;
}
