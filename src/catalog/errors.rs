use crate::song::{SongId, ValidationErrors};
use thiserror::Error;

/// Errors that can occur in catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Validation failed: {0}")]
    ValidationFailed(ValidationErrors),

    #[error("Not found Category with value = {0}")]
    CategoryNotFound(String),

    #[error("Not found song with id = {}", id_or_null(.0))]
    SongNotFound(Option<SongId>),

    #[error("Store error: {0}")]
    Store(#[from] anyhow::Error),
}

impl CatalogError {
    /// Short label used for metrics and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            CatalogError::ValidationFailed(_) => "invalid",
            CatalogError::CategoryNotFound(_) | CatalogError::SongNotFound(_) => "not_found",
            CatalogError::Store(_) => "store_error",
        }
    }
}

fn id_or_null(id: &Option<SongId>) -> String {
    id.map_or_else(|| "null".to_string(), |id| id.to_string())
}

pub type CatalogResult<T> = Result<T, CatalogError>;
