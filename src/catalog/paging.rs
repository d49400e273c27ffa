use crate::song_store::{PageRequest, SortDirection};

/// How list operations pick their page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum PagingMode {
    /// Always the first page with the default size, whatever the caller asked.
    #[default]
    Fixed,
    /// The caller's page and size, with size clamped to the configured bounds.
    Requested,
}

impl std::fmt::Display for PagingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagingSettings {
    pub mode: PagingMode,
    pub default_page: usize,
    pub default_size: usize,
    pub max_size: usize,
}

impl Default for PagingSettings {
    fn default() -> Self {
        PagingSettings {
            mode: PagingMode::Fixed,
            default_page: 0,
            default_size: 3,
            max_size: 100,
        }
    }
}

impl PagingSettings {
    /// Window to query for a caller asking for `page` of `size` items.
    /// Songs are always listed newest id first.
    ///
    /// In requested mode a negative page counts as the first one, and a size
    /// that is not positive falls back to the default size.
    pub fn page_request(&self, page: i64, size: i64) -> PageRequest {
        match self.mode {
            PagingMode::Fixed => PageRequest::new(
                self.default_page,
                self.default_size,
                SortDirection::Descending,
            ),
            PagingMode::Requested => {
                let page = usize::try_from(page.max(0)).unwrap_or(usize::MAX);
                let size = match usize::try_from(size) {
                    Ok(0) | Err(_) => self.default_size,
                    Ok(size) => size,
                };
                PageRequest::new(page, size.min(self.max_size), SortDirection::Descending)
            }
        }
    }
}
