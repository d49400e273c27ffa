mod errors;
pub mod metrics;
mod paging;
mod service;

pub use errors::{CatalogError, CatalogResult};
pub use paging::{PagingMode, PagingSettings};
pub use service::CatalogService;
