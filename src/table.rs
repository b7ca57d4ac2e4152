//! Table view - binds sections of rows onto pooled cells and routes taps

use crate::cell::CellPool;
use crate::config::TableConfig;
use crate::images::ImageLoader;
use crate::row::Row;
use crate::section::{Section, TableSection};
use crate::theme;
use crate::types::IndexPath;
use egui::{Align2, FontId, Pos2, Sense, Vec2};

/// Owns the section list, the cell pool and the image loader; everything
/// here runs on the UI thread.
pub struct TableView {
    pub sections: Vec<Box<dyn Section>>,
    config: TableConfig,
    loader: ImageLoader,
    pool: CellPool,
}

impl Default for TableView {
    fn default() -> Self {
        Self::new()
    }
}

impl TableView {
    pub fn new() -> Self {
        Self::with_config(TableConfig::default())
    }

    pub fn with_config(config: TableConfig) -> Self {
        Self {
            sections: Vec::new(),
            loader: ImageLoader::new(config.max_concurrent_fetches),
            pool: CellPool::new(),
            config,
        }
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn push_section(&mut self, section: TableSection) {
        self.sections.push(section.boxed());
    }

    pub fn row_at(&self, index_path: IndexPath) -> Option<&dyn Row> {
        self.sections
            .get(index_path.section)?
            .rows()
            .get(index_path.row)
            .map(|row| row.as_ref())
    }

    pub fn row_at_mut(&mut self, index_path: IndexPath) -> Option<&mut dyn Row> {
        Some(
            self.sections
                .get_mut(index_path.section)?
                .rows_mut()
                .get_mut(index_path.row)?
                .as_mut(),
        )
    }

    /// Programmatic tap: same routing as a click on the cell.
    pub fn select(&self, index_path: IndexPath) {
        Self::route_selection(&self.sections, index_path);
    }

    fn route_selection(sections: &[Box<dyn Section>], index_path: IndexPath) {
        let Some(section) = sections.get(index_path.section) else {
            return;
        };
        let Some(row) = section.rows().get(index_path.row) else {
            return;
        };
        if !row.is_selectable() {
            return;
        }
        if let Some(handler) = row.selection_handler() {
            handler(index_path, true);
        }
        if let Some(handler) = section.selection_handler() {
            handler(index_path, true);
        }
        if let Some(link) = row.link() {
            link.activate();
        }
    }

    /// Renders the whole table into the given `Ui`.
    pub fn show(&mut self, ui: &mut egui::Ui) {
        let Self {
            sections,
            config,
            loader,
            pool,
        } = self;

        // Finished fetches first, so rows resolved this frame draw with
        // their real image instead of the placeholder.
        loader.apply_completed(ui.ctx(), sections);

        let mut tapped: Option<IndexPath> = None;

        for (section_idx, section) in sections.iter_mut().enumerate() {
            if let Some(header) = section.header() {
                let text = header.to_uppercase();
                paint_section_label(ui, &text, true);
            }

            let row_count = section.rows().len();
            for row_idx in 0..row_count {
                let index_path = IndexPath::new(section_idx, row_idx);

                // Resolve a pending remote image from the loader's cache,
                // or kick off the fetch on first bind.
                {
                    let row = &mut section.rows_mut()[row_idx];
                    if row.image().is_none() {
                        if let Some(url) = row.image_url().map(str::to_string) {
                            if loader.texture(&url).is_none() {
                                loader.request(ui.ctx(), &url, index_path);
                            }
                            if let Some(texture) = loader.texture(&url) {
                                row.set_resolved_image(texture.clone());
                            }
                        }
                    }
                }

                let row = &section.rows()[row_idx];
                let mut cell = pool.dequeue();
                cell.bind(
                    index_path,
                    row.display_separators() && config.display_separators,
                );
                row.configure(&mut cell, index_path);

                let response = cell.show(ui, row.as_ref(), config);
                if response.clicked() {
                    tapped = Some(index_path);
                }
                pool.recycle(cell);
            }

            if let Some(footer) = section.footer() {
                let text = footer.to_string();
                paint_section_label(ui, &text, false);
            }
        }

        if let Some(index_path) = tapped {
            Self::route_selection(sections, index_path);
        }

        loader.prune(sections);
    }
}

fn paint_section_label(ui: &mut egui::Ui, text: &str, is_header: bool) {
    let height = theme::FONT_SECTION + 2.0 * theme::SECTION_LABEL_PAD;
    let (rect, _) =
        ui.allocate_exact_size(Vec2::new(ui.available_width(), height), Sense::hover());
    if !ui.is_rect_visible(rect) {
        return;
    }
    let (pos, align) = if is_header {
        // Headers sit flush above their first row.
        (
            Pos2::new(
                rect.left() + theme::CELL_INNER_MARGIN,
                rect.bottom() - theme::SECTION_LABEL_PAD / 2.0,
            ),
            Align2::LEFT_BOTTOM,
        )
    } else {
        (
            Pos2::new(
                rect.left() + theme::CELL_INNER_MARGIN,
                rect.top() + theme::SECTION_LABEL_PAD / 2.0,
            ),
            Align2::LEFT_TOP,
        )
    };
    ui.painter().text(
        pos,
        align,
        text,
        FontId::proportional(theme::FONT_SECTION),
        theme::TEXT_DIM,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row::TableRow;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn row_lookup() {
        let mut table = TableView::new();
        table.push_section(TableSection::new(vec![
            TableRow::with_title("one").boxed(),
            TableRow::with_title("two").boxed(),
        ]));
        table.push_section(TableSection::new(vec![TableRow::with_title("three").boxed()]));

        assert_eq!(
            table.row_at(IndexPath::new(0, 1)).and_then(|r| r.title()),
            Some("two")
        );
        assert_eq!(
            table.row_at(IndexPath::new(1, 0)).and_then(|r| r.title()),
            Some("three")
        );
        assert!(table.row_at(IndexPath::new(1, 1)).is_none());
        assert!(table.row_at(IndexPath::new(2, 0)).is_none());
    }

    #[test]
    fn select_routes_row_then_section_handler() {
        let order: Rc<RefCell<Vec<&'static str>>> = Rc::new(RefCell::new(Vec::new()));
        let row_order = order.clone();
        let section_order = order.clone();

        let mut table = TableView::new();
        table.push_section(
            TableSection::new(vec![TableRow::with_title("tap")
                .on_select(move |path, selected| {
                    assert_eq!(path, IndexPath::new(0, 0));
                    assert!(selected);
                    row_order.borrow_mut().push("row");
                })
                .boxed()])
            .on_select(move |_, _| section_order.borrow_mut().push("section")),
        );

        table.select(IndexPath::new(0, 0));
        assert_eq!(*order.borrow(), ["row", "section"]);
    }

    #[test]
    fn select_ignores_plain_rows() {
        let fired: Rc<RefCell<bool>> = Rc::new(RefCell::new(false));
        let section_fired = fired.clone();

        let mut table = TableView::new();
        table.push_section(
            TableSection::new(vec![TableRow::with_title("inert").boxed()])
                .on_select(move |_, _| *section_fired.borrow_mut() = true),
        );

        // The row has no handler and no link; the section handler is a
        // fallback for selectable rows only.
        table.select(IndexPath::new(0, 0));
        table.select(IndexPath::new(0, 9));
        assert!(!*fired.borrow());
    }
}
