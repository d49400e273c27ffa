use axum::extract::FromRef;

use crate::catalog::CatalogService;
use std::sync::Arc;
use std::time::Instant;

use super::ServerConfig;

pub type GuardedCatalogService = Arc<CatalogService>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub catalog_service: GuardedCatalogService,
}

impl ServerState {
    pub fn new(config: ServerConfig, catalog_service: GuardedCatalogService) -> ServerState {
        ServerState {
            config,
            start_time: Instant::now(),
            catalog_service,
        }
    }
}

impl FromRef<ServerState> for GuardedCatalogService {
    fn from_ref(input: &ServerState) -> Self {
        input.catalog_service.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}
