mod file_config;

pub use file_config::{FileConfig, PagingConfig};

use crate::catalog::{PagingMode, PagingSettings};
use crate::server::{EmptyPageBody, RequestsLoggingLevel, ServerConfig};
use anyhow::{bail, Result};
use clap::ValueEnum;
use std::path::PathBuf;

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub db_dir: Option<PathBuf>,
    pub port: u16,
    pub metrics_port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub paging_mode: PagingMode,
    pub empty_page_body: EmptyPageBody,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub db_dir: PathBuf,
    pub port: u16,
    pub metrics_port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub empty_page_body: EmptyPageBody,
    pub paging: PagingSettings,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let db_dir = file
            .db_dir
            .map(PathBuf::from)
            .or_else(|| cli.db_dir.clone())
            .ok_or_else(|| {
                anyhow::anyhow!("db_dir must be specified via --db-dir or in config file")
            })?;

        if !db_dir.exists() {
            bail!("Database directory does not exist: {:?}", db_dir);
        }
        if !db_dir.is_dir() {
            bail!("db_dir is not a directory: {:?}", db_dir);
        }

        let port = file.port.unwrap_or(cli.port);
        let metrics_port = file.metrics_port.unwrap_or(cli.metrics_port);

        let logging_level = file
            .logging_level
            .and_then(|s| parse_value::<RequestsLoggingLevel>(&s))
            .unwrap_or_else(|| cli.logging_level.clone());

        let empty_page_body = file
            .empty_page_body
            .and_then(|s| parse_value::<EmptyPageBody>(&s))
            .unwrap_or(cli.empty_page_body);

        // Paging settings - merge [paging] section with defaults
        let paging_file = file.paging.unwrap_or_default();
        let defaults = PagingSettings::default();
        let paging = PagingSettings {
            mode: paging_file
                .mode
                .and_then(|s| parse_value::<PagingMode>(&s))
                .unwrap_or(cli.paging_mode),
            default_page: paging_file.default_page.unwrap_or(defaults.default_page),
            default_size: paging_file.default_size.unwrap_or(defaults.default_size),
            max_size: paging_file.max_size.unwrap_or(defaults.max_size),
        };
        if paging.default_size == 0 {
            bail!("paging.default_size must be at least 1");
        }
        if paging.max_size < paging.default_size {
            bail!(
                "paging.max_size ({}) must not be smaller than paging.default_size ({})",
                paging.max_size,
                paging.default_size
            );
        }

        Ok(Self {
            db_dir,
            port,
            metrics_port,
            logging_level,
            empty_page_body,
            paging,
        })
    }

    pub fn songs_db_path(&self) -> PathBuf {
        self.db_dir.join("songs.db")
    }

    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            requests_logging_level: self.logging_level.clone(),
            port: self.port,
            metrics_port: self.metrics_port,
            empty_page_body: self.empty_page_body,
        }
    }
}

/// Parses a config string into one of the CLI value enums, ignoring case.
fn parse_value<T: ValueEnum>(s: &str) -> Option<T> {
    T::from_str(s, true).ok()
}
