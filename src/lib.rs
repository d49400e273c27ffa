//! Playlist Song Catalog Server Library
//!
//! This library exposes the internal modules for testing and potential reuse.

pub mod catalog;
pub mod config;
pub mod server;
pub mod song;
pub mod song_store;
pub mod sqlite_persistence;

// Re-export commonly used types for convenience
pub use catalog::{CatalogError, CatalogService, PagingMode, PagingSettings};
pub use server::{run_server, EmptyPageBody, RequestsLoggingLevel, ServerConfig};
pub use song::{Category, Song, SongId, SongInput};
pub use song_store::{SongStore, SqliteSongStore};
