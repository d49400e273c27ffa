//! Test server lifecycle management
//!
//! This module manages spawning and shutting down test HTTP servers.
//! Each test gets an isolated server with its own songs database.

use super::constants::*;
use super::fixtures::create_test_db;
use playlist_server::catalog::{CatalogService, PagingSettings};
use playlist_server::server::{server::make_app, EmptyPageBody, RequestsLoggingLevel, ServerConfig};
use playlist_server::song_store::SqliteSongStore;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::net::TcpListener;

/// Knobs for a test server. The default is a seeded catalog with fixed paging
/// and the empty page envelope.
#[derive(Clone)]
pub struct TestServerOptions {
    pub seed: bool,
    pub paging: PagingSettings,
    pub empty_page_body: EmptyPageBody,
}

impl Default for TestServerOptions {
    fn default() -> Self {
        Self {
            seed: true,
            paging: PagingSettings::default(),
            empty_page_body: EmptyPageBody::Envelope,
        }
    }
}

/// Test server instance with an isolated database
///
/// When dropped, the server gracefully shuts down and temp resources are cleaned up.
pub struct TestServer {
    /// Base URL for making requests (e.g., "http://127.0.0.1:12345")
    pub base_url: String,

    /// The port the server is listening on
    pub port: u16,

    /// Catalog service backing the server, for direct checks in tests
    pub catalog_service: Arc<CatalogService>,

    // Private fields - keep resources alive until drop
    _temp_db_dir: TempDir,
    _shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestServer {
    /// Spawns a new test server with the seeded catalog on a random port
    pub async fn spawn() -> Self {
        Self::spawn_with(TestServerOptions::default()).await
    }

    /// Spawns a new test server with an empty catalog
    pub async fn spawn_empty() -> Self {
        Self::spawn_with(TestServerOptions {
            seed: false,
            ..Default::default()
        })
        .await
    }

    /// Spawns a new test server on a random port
    ///
    /// # Panics
    ///
    /// Panics if:
    /// - Database creation fails
    /// - Port binding fails
    /// - Server doesn't become ready within timeout
    pub async fn spawn_with(options: TestServerOptions) -> Self {
        let (temp_db_dir, db_path) =
            create_test_db(options.seed).expect("Failed to create test database");

        let song_store =
            Arc::new(SqliteSongStore::new(&db_path).expect("Failed to open song store"));
        let catalog_service = Arc::new(CatalogService::new(song_store, options.paging));

        // Bind to random port
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");

        let port = listener
            .local_addr()
            .expect("Failed to get local address")
            .port();

        let base_url = format!("http://127.0.0.1:{}", port);

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        let config = ServerConfig {
            port,
            requests_logging_level: RequestsLoggingLevel::None,
            empty_page_body: options.empty_page_body,
            ..Default::default()
        };

        let app = make_app(config, catalog_service.clone()).expect("Failed to build app");

        // Spawn server in background task with graceful shutdown
        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .expect("Server failed");
        });

        let server = Self {
            base_url,
            port,
            catalog_service,
            _temp_db_dir: temp_db_dir,
            _shutdown_tx: Some(shutdown_tx),
        };

        server.wait_for_ready().await;

        server
    }

    /// Waits for the server to become ready by polling the status endpoint
    async fn wait_for_ready(&self) {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(100))
            .build()
            .expect("Failed to build reqwest client");

        let start = std::time::Instant::now();
        let timeout = Duration::from_millis(SERVER_READY_TIMEOUT_MS);

        loop {
            if start.elapsed() > timeout {
                panic!(
                    "Server did not become ready within {}ms",
                    SERVER_READY_TIMEOUT_MS
                );
            }

            match client.get(format!("{}/", self.base_url)).send().await {
                Ok(response) if response.status().is_success() => return,
                _ => {
                    tokio::time::sleep(Duration::from_millis(SERVER_READY_POLL_INTERVAL_MS)).await;
                }
            }
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self._shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
