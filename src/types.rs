//! Common types shared by rows, cells and the table view

use std::path::PathBuf;

/// Position of a row within the table: section index + row index.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct IndexPath {
    pub section: usize,
    pub row: usize,
}

impl IndexPath {
    pub fn new(section: usize, row: usize) -> Self {
        Self { section, row }
    }
}

/// Trailing decoration drawn at the right edge of a cell.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Accessory {
    #[default]
    None,
    /// Chevron indicating the row pushes further content.
    Disclosure,
    Checkmark,
    /// Small info glyph hinting at a detail action.
    DetailButton,
}

impl Accessory {
    /// Phosphor glyph for the accessory, if it draws one.
    pub fn glyph(self) -> Option<&'static str> {
        match self {
            Accessory::None => None,
            Accessory::Disclosure => Some(egui_phosphor::regular::CARET_RIGHT),
            Accessory::Checkmark => Some(egui_phosphor::regular::CHECK),
            Accessory::DetailButton => Some(egui_phosphor::regular::INFO),
        }
    }
}

/// Opaque navigation target a row may activate on selection.
///
/// Activation is handed to the OS; what happens next is the navigation
/// collaborator's business, not ours.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Link {
    Url(String),
    Path(PathBuf),
}

impl Link {
    /// Best-effort activation. Failures are logged, not surfaced.
    pub fn activate(&self) {
        let result = match self {
            Link::Url(url) => open::that(url),
            Link::Path(path) => open::that(path),
        };
        if let Err(e) = result {
            tracing::warn!(error = %e, link = ?self, "Failed to open link");
        }
    }
}

/// Selection callback invoked when a row is tapped.
///
/// Arguments are the row's index path and whether the row is now selected.
/// A typed closure replaces the target/selector pair of older table
/// layers; detach by clearing the handler or dropping the row.
pub type SelectionHandler = Box<dyn Fn(IndexPath, bool)>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessory_glyphs() {
        assert!(Accessory::None.glyph().is_none());
        assert!(Accessory::Disclosure.glyph().is_some());
        assert!(Accessory::Checkmark.glyph().is_some());
        assert!(Accessory::DetailButton.glyph().is_some());
    }

    #[test]
    fn index_path_equality() {
        assert_eq!(IndexPath::new(1, 2), IndexPath { section: 1, row: 2 });
        assert_ne!(IndexPath::new(1, 2), IndexPath::new(2, 1));
    }
}
