//! Common test infrastructure
//!
//! This module provides all the infrastructure needed for end-to-end tests.
//! Tests should only import from this module, not from internal submodules.
//!
//! # Example
//!
//! ```no_run
//! mod common;
//! use common::{TestServer, TestClient, MISSING_SONG_ID};
//! use reqwest::StatusCode;
//!
//! #[tokio::test]
//! async fn test_get_missing_song() {
//!     let server = TestServer::spawn().await;
//!     let client = TestClient::new(server.base_url.clone());
//!
//!     let response = client.get_song(MISSING_SONG_ID).await;
//!     assert_eq!(response.status(), StatusCode::NOT_FOUND);
//! }
//! ```

mod client;
mod constants;
mod fixtures;
mod server;

// Public API - this is what tests import
pub use client::{song_body, TestClient};
pub use constants::*;
#[allow(unused_imports)]
pub use server::{TestServer, TestServerOptions};
