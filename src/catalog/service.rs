//! Catalog service: the song operations exposed to the HTTP layer.
//!
//! Resolves categories, applies the paging policy, validates input and checks
//! existence before any mutation reaches the store.

use super::errors::{CatalogError, CatalogResult};
use super::paging::PagingSettings;
use super::metrics::{record_catalog_operation, set_catalog_songs};
use crate::song::{validate_song_input, Category, Song, SongId, SongInput};
use crate::song_store::{Page, SongStore};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct CatalogService {
    store: Arc<dyn SongStore>,
    paging: PagingSettings,
}

impl CatalogService {
    pub fn new(store: Arc<dyn SongStore>, paging: PagingSettings) -> Self {
        CatalogService { store, paging }
    }

    pub fn paging(&self) -> PagingSettings {
        self.paging
    }

    /// Count the outcome of `operation` and pass its result through.
    fn track<T>(&self, operation: &str, result: CatalogResult<T>) -> CatalogResult<T> {
        match &result {
            Ok(_) => record_catalog_operation(operation, "ok"),
            Err(err) => record_catalog_operation(operation, err.kind()),
        }
        result
    }

    fn refresh_songs_gauge(&self) {
        match self.store.count() {
            Ok(count) => set_catalog_songs(count),
            Err(err) => warn!("Failed to count songs: {:#}", err),
        }
    }

    pub fn list_all(&self, page: i64, size: i64) -> CatalogResult<Page<Song>> {
        debug!("Listing songs, page {} size {}", page, size);
        let request = self.paging.page_request(page, size);
        let result = self.store.find_all(request).map_err(CatalogError::from);
        self.track("list_all", result)
    }

    /// List songs of a category given by name, in any letter case.
    pub fn list_by_category(
        &self,
        category: &str,
        page: i64,
        size: i64,
    ) -> CatalogResult<Page<Song>> {
        debug!("Listing songs of category {}, page {} size {}", category, page, size);
        let result = Category::from_name(category)
            .ok_or_else(|| CatalogError::CategoryNotFound(category.to_string()))
            .and_then(|category| {
                let request = self.paging.page_request(page, size);
                Ok(self.store.find_by_category(category, request)?)
            });
        self.track("list_by_category", result)
    }

    /// List songs whose artist name matches exactly, case included.
    pub fn list_by_artist(
        &self,
        artist_name: &str,
        page: i64,
        size: i64,
    ) -> CatalogResult<Page<Song>> {
        debug!("Listing songs of artist {}, page {} size {}", artist_name, page, size);
        let request = self.paging.page_request(page, size);
        let result = self
            .store
            .find_by_artist_name(artist_name, request)
            .map_err(CatalogError::from);
        self.track("list_by_artist", result)
    }

    pub fn get_by_id(&self, id: SongId) -> CatalogResult<Song> {
        debug!("Getting song {}", id);
        let result = self
            .store
            .find_by_id(id)
            .map_err(CatalogError::from)
            .and_then(|song| song.ok_or(CatalogError::SongNotFound(Some(id))));
        self.track("get_by_id", result)
    }

    /// Validate and insert a new song. Any id carried by the input is ignored.
    pub fn create(&self, input: SongInput) -> CatalogResult<Song> {
        debug!("Creating song {:?}", input.title);
        let result = self.create_inner(input);
        if result.is_ok() {
            self.refresh_songs_gauge();
        }
        self.track("create", result)
    }

    fn create_inner(&self, input: SongInput) -> CatalogResult<Song> {
        let mut song = validate_song_input(&input).map_err(CatalogError::ValidationFailed)?;
        song.id = None;

        let created = self.store.save(&song)?.ok_or_else(|| {
            CatalogError::Store(anyhow::anyhow!("Insert did not produce a song"))
        })?;
        info!(
            "Created song {} '{}' by {}",
            created.id.map_or_else(String::new, |id| id.to_string()),
            created.title,
            created.artist_name
        );
        Ok(created)
    }

    /// Replace every field of an existing song with the input values.
    pub fn update(&self, input: SongInput) -> CatalogResult<Song> {
        debug!("Updating song {:?}", input.id);
        let result = self.update_inner(input);
        self.track("update", result)
    }

    fn update_inner(&self, input: SongInput) -> CatalogResult<Song> {
        let song = validate_song_input(&input).map_err(CatalogError::ValidationFailed)?;
        let id = song.id.ok_or(CatalogError::SongNotFound(None))?;

        if self.store.find_by_id(id)?.is_none() {
            return Err(CatalogError::SongNotFound(Some(id)));
        }

        // The row can still disappear between the check and the write
        let updated = self
            .store
            .save(&song)?
            .ok_or(CatalogError::SongNotFound(Some(id)))?;
        info!("Updated song {}", id);
        Ok(updated)
    }

    pub fn delete_by_id(&self, id: SongId) -> CatalogResult<()> {
        debug!("Deleting song {}", id);
        let result = self.delete_inner(id);
        if result.is_ok() {
            self.refresh_songs_gauge();
        }
        self.track("delete", result)
    }

    fn delete_inner(&self, id: SongId) -> CatalogResult<()> {
        if self.store.find_by_id(id)?.is_none() {
            return Err(CatalogError::SongNotFound(Some(id)));
        }
        if !self.store.delete_by_id(id)? {
            return Err(CatalogError::SongNotFound(Some(id)));
        }
        info!("Deleted song {}", id);
        Ok(())
    }

    /// Total number of songs in the catalog.
    pub fn count(&self) -> CatalogResult<u64> {
        let count = self.store.count()?;
        set_catalog_songs(count);
        Ok(count)
    }
}
