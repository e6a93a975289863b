//! Storefront configuration from environment variables.

use belajar_catalog::{PageSize, SortOption};

pub const PAGE_SIZE_VAR: &str = "BELAJAR_PAGE_SIZE";
pub const DEFAULT_SORT_VAR: &str = "BELAJAR_DEFAULT_SORT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StorefrontConfig {
    /// Products per listing page.
    pub page_size: PageSize,
    /// Sort applied when the listing first opens.
    pub default_sort: SortOption,
}

impl StorefrontConfig {
    /// Read the process environment. Invalid values fall back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(PAGE_SIZE_VAR) {
            match parse_page_size(&raw) {
                Ok(page_size) => config.page_size = page_size,
                Err(err) => tracing::warn!(
                    "{PAGE_SIZE_VAR}={raw:?} is invalid ({err}); using {}",
                    config.page_size.get()
                ),
            }
        }

        if let Some(raw) = lookup(DEFAULT_SORT_VAR) {
            match raw.parse::<SortOption>() {
                Ok(sort) => config.default_sort = sort,
                Err(err) => tracing::warn!(
                    "{DEFAULT_SORT_VAR}={raw:?} is invalid ({err}); using {}",
                    config.default_sort
                ),
            }
        }

        config
    }
}

fn parse_page_size(raw: &str) -> Result<PageSize, String> {
    let size = raw.trim().parse::<usize>().map_err(|e| e.to_string())?;
    PageSize::new(size).map_err(|e| e.to_string())
}
