pub mod config;
mod http_layers;
pub mod metrics;
pub mod server;
mod songs;
pub mod state;

pub use config::{EmptyPageBody, ServerConfig};
pub use http_layers::*;
pub use server::run_server;
