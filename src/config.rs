//! Display configuration stored as rowtable.json in a caller-chosen directory
//!
//! Every optional display field has an explicit default here instead of
//! being implied by absent row properties.

use crate::constants::{CONFIG_FILE, DEFAULT_FETCH_CONCURRENCY};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Vertical inset applied above and below cell content when the row
    /// does not override it.
    pub row_padding: f32,

    /// Floor for computed cell heights.
    pub min_row_height: f32,

    /// Whether cells draw their top/bottom separators by default.
    pub display_separators: bool,

    /// Whether selectable rows show a selection indicator by default.
    pub display_selection_indicator: bool,

    /// Cap on concurrent remote image fetches.
    pub max_concurrent_fetches: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            row_padding: 0.0,
            min_row_height: crate::theme::ROW_HEIGHT,
            display_separators: true,
            display_selection_indicator: true,
            max_concurrent_fetches: DEFAULT_FETCH_CONCURRENCY,
        }
    }
}

impl TableConfig {
    pub fn load(dir: &Path) -> Self {
        let path = dir.join(CONFIG_FILE);
        match std::fs::read_to_string(&path) {
            Ok(s) => match serde_json::from_str(&s) {
                Ok(config) => {
                    debug!(path = %path.display(), "Table config loaded");
                    config
                }
                Err(e) => {
                    warn!(error = %e, "Failed to parse table config, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                debug!("No table config file found, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, dir: &Path) {
        let path = dir.join(CONFIG_FILE);
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    warn!(error = %e, "Failed to save table config");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize table config"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = TableConfig::default();
        assert_eq!(config.row_padding, 0.0);
        assert!(config.display_separators);
        assert!(config.display_selection_indicator);
        assert_eq!(config.max_concurrent_fetches, DEFAULT_FETCH_CONCURRENCY);
    }

    #[test]
    fn save_load_round_trip() {
        let dir = std::env::temp_dir().join("rowtable-config-test");
        std::fs::create_dir_all(&dir).unwrap();

        let mut config = TableConfig::default();
        config.row_padding = 6.0;
        config.display_separators = false;
        config.save(&dir);

        let loaded = TableConfig::load(&dir);
        assert_eq!(loaded.row_padding, 6.0);
        assert!(!loaded.display_separators);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = std::env::temp_dir().join("rowtable-config-missing");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::remove_file(dir.join(CONFIG_FILE)).ok();

        let loaded = TableConfig::load(&dir);
        assert!(loaded.display_separators);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn corrupt_file_yields_defaults() {
        let dir = std::env::temp_dir().join("rowtable-config-corrupt");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(CONFIG_FILE), "{not json").unwrap();

        let loaded = TableConfig::load(&dir);
        assert_eq!(loaded.row_padding, 0.0);

        std::fs::remove_dir_all(&dir).ok();
    }
}
