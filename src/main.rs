use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use playlist_server::catalog::{CatalogService, PagingMode};
use playlist_server::config::{AppConfig, CliConfig, FileConfig};
use playlist_server::server::{self, run_server, EmptyPageBody, RequestsLoggingLevel};
use playlist_server::song_store::SqliteSongStore;

fn parse_path(s: &str) -> Result<PathBuf> {
    let path_buf = PathBuf::from(s);
    let original_path = match path_buf.canonicalize() {
        Ok(path) => path,
        Err(msg) => {
            if msg.kind() == std::io::ErrorKind::NotFound {
                path_buf
            } else {
                return Err(msg).with_context(|| format!("Error resolving path: {}", s));
            }
        }
    };
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to a TOML config file. Its values override the command line.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// Directory holding the songs database.
    #[clap(long, value_parser = parse_path)]
    pub db_dir: Option<PathBuf>,

    /// The port to listen on.
    #[clap(short, long, default_value_t = 3001)]
    pub port: u16,

    /// The port for the metrics server (Prometheus scraping).
    #[clap(long, default_value_t = 9091)]
    pub metrics_port: u16,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,

    /// Whether list endpoints always serve the first page or honour the
    /// requested page and size.
    #[clap(long, default_value = "fixed")]
    pub paging_mode: PagingMode,

    /// What list endpoints answer for a page without songs.
    #[clap(long, default_value = "envelope")]
    pub empty_page_body: EmptyPageBody,
}

impl CliArgs {
    fn to_cli_config(&self) -> CliConfig {
        CliConfig {
            db_dir: self.db_dir.clone(),
            port: self.port,
            metrics_port: self.metrics_port,
            logging_level: self.logging_level.clone(),
            paging_mode: self.paging_mode,
            empty_page_body: self.empty_page_body,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    let file_config = match &cli_args.config {
        Some(path) => {
            info!("Loading config file {:?}", path);
            Some(FileConfig::load(path)?)
        }
        None => None,
    };
    let app_config = AppConfig::resolve(&cli_args.to_cli_config(), file_config)?;

    let db_path = app_config.songs_db_path();
    info!("Opening songs database at {:?}...", db_path);
    let song_store = Arc::new(SqliteSongStore::new(&db_path)?);

    info!("Initializing metrics...");
    server::metrics::init_metrics();

    info!(
        "Paging mode {}, default size {}, empty pages as {}",
        app_config.paging.mode, app_config.paging.default_size, app_config.empty_page_body
    );
    let catalog_service = Arc::new(CatalogService::new(song_store, app_config.paging));
    let song_count = catalog_service.count()?;
    info!("Catalog holds {} songs", song_count);

    info!("Ready to serve at port {}!", app_config.port);
    info!("Metrics available at port {}!", app_config.metrics_port);
    run_server(app_config.server_config(), catalog_service).await
}
