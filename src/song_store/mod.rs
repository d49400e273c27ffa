mod schema;
mod store;
mod trait_def;

pub use schema::SONG_SCHEMA;
pub use store::SqliteSongStore;
pub use trait_def::{Page, PageRequest, SongStore, SortDirection};
