//! HTTP client for end-to-end tests
//!
//! This module provides a high-level HTTP client that wraps reqwest
//! and provides methods for all song endpoints.
//!
//! When API routes or request formats change, update only this file.

use super::constants::*;
use reqwest::Response;
use serde_json::{json, Value};
use std::time::Duration;

/// Builds a valid song body, as sent on create
pub fn song_body(title: &str, artist_name: &str, category: &str) -> Value {
    json!({
        "title": title,
        "description": format!("{} description", title),
        "duration": "3:01",
        "artistName": artist_name,
        "category": category,
    })
}

/// HTTP test client
pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // ========================================================================
    // Status
    // ========================================================================

    /// GET /
    pub async fn get_status(&self) -> Response {
        self.client
            .get(self.url("/"))
            .send()
            .await
            .expect("Status request failed")
    }

    // ========================================================================
    // Listing
    // ========================================================================

    /// GET /api/songs
    pub async fn list_songs(&self) -> Response {
        self.client
            .get(self.url("/api/songs"))
            .send()
            .await
            .expect("List songs request failed")
    }

    /// GET /api/songs?page=..&size=..
    pub async fn list_songs_page(&self, page: i64, size: i64) -> Response {
        self.client
            .get(self.url("/api/songs"))
            .query(&[("page", page), ("size", size)])
            .send()
            .await
            .expect("List songs request failed")
    }

    /// GET /api/songs/category/{category}
    pub async fn list_songs_by_category(&self, category: &str) -> Response {
        self.client
            .get(self.url(&format!("/api/songs/category/{}", category)))
            .send()
            .await
            .expect("List by category request failed")
    }

    /// GET /api/songs/artist/{artistName}
    pub async fn list_songs_by_artist(&self, artist_name: &str) -> Response {
        let mut url = reqwest::Url::parse(&self.url("/api/songs/artist/")).expect("Bad base url");
        url.path_segments_mut()
            .expect("Base url cannot have path segments")
            .pop_if_empty()
            .push(artist_name);
        self.client
            .get(url)
            .send()
            .await
            .expect("List by artist request failed")
    }

    // ========================================================================
    // Single Song
    // ========================================================================

    /// GET /api/songs/{id}
    pub async fn get_song(&self, id: i64) -> Response {
        self.client
            .get(self.url(&format!("/api/songs/{}", id)))
            .send()
            .await
            .expect("Get song request failed")
    }

    /// POST /api/songs
    pub async fn create_song(&self, body: &Value) -> Response {
        self.client
            .post(self.url("/api/songs"))
            .json(body)
            .send()
            .await
            .expect("Create song request failed")
    }

    /// PUT /api/songs
    pub async fn update_song(&self, body: &Value) -> Response {
        self.client
            .put(self.url("/api/songs"))
            .json(body)
            .send()
            .await
            .expect("Update song request failed")
    }

    /// DELETE /api/songs/{id}
    pub async fn delete_song(&self, id: i64) -> Response {
        self.client
            .delete(self.url(&format!("/api/songs/{}", id)))
            .send()
            .await
            .expect("Delete song request failed")
    }

    /// Creates a song and returns its assigned id
    ///
    /// # Panics
    ///
    /// Panics if the server does not answer 201.
    pub async fn create_song_id(&self, body: &Value) -> i64 {
        let response = self.create_song(body).await;
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);
        let song: Value = response.json().await.expect("Invalid song json");
        song["id"].as_i64().expect("Created song has no id")
    }
}
