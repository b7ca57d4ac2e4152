//! Crate constants and configuration

pub const CRATE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Subdirectory of the platform cache dir holding fetched image bytes.
pub const IMAGE_CACHE_SUBDIR: &str = "rowtable/images";

/// Default cap on concurrent image fetches.
pub const DEFAULT_FETCH_CONCURRENCY: usize = 8;

/// File name used by `TableConfig::load`/`save`.
pub const CONFIG_FILE: &str = "rowtable.json";
