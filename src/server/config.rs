use super::RequestsLoggingLevel;

/// What list endpoints answer when a page has no songs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum EmptyPageBody {
    /// The usual envelope, with an empty `songs` array.
    #[default]
    Envelope,
    /// Status 200 with no body at all.
    Omit,
}

impl std::fmt::Display for EmptyPageBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Clone)]
pub struct ServerConfig {
    pub requests_logging_level: RequestsLoggingLevel,
    pub port: u16,
    pub metrics_port: u16,
    pub empty_page_body: EmptyPageBody,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            requests_logging_level: RequestsLoggingLevel::Path,
            port: 3001,
            metrics_port: 9091,
            empty_page_body: EmptyPageBody::Envelope,
        }
    }
}
