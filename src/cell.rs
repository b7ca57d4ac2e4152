//! Cell views - the reusable visual widgets rows are bound onto

use crate::config::TableConfig;
use crate::row::Row;
use crate::theme;
use crate::types::{Accessory, IndexPath};
use egui::{Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, Vec2};

/// A drawable separator line at the top or bottom edge of a cell.
#[derive(Clone, Debug)]
pub struct Separator {
    pub visible: bool,
    pub color: Color32,
    pub thickness: f32,
}

impl Default for Separator {
    fn default() -> Self {
        Self {
            visible: true,
            color: theme::SEPARATOR,
            thickness: theme::SEPARATOR_THICKNESS,
        }
    }
}

impl Separator {
    fn paint(&self, painter: &egui::Painter, y: f32, x_range: egui::Rangef) {
        if self.visible {
            painter.hline(x_range, y, Stroke::new(self.thickness, self.color));
        }
    }
}

/// Reusable cell widget. Recycled through a [`CellPool`]; every field the
/// renderer reads is overwritten on [`bind`](Self::bind), so a freshly
/// dequeued cell carries stale bookkeeping until the owner rebinds it.
#[derive(Clone, Debug, Default)]
pub struct CellView {
    /// Position last bound to; routes taps and async image completions
    /// back to the right row.
    pub current_index_path: Option<IndexPath>,
    pub separator_top: Separator,
    pub separator_bottom: Separator,
}

impl CellView {
    /// Rebinds the cell to a new position, overwriting all bookkeeping.
    pub fn bind(&mut self, index_path: IndexPath, display_separators: bool) {
        self.current_index_path = Some(index_path);
        self.separator_top.visible = display_separators;
        self.separator_bottom.visible = display_separators;
    }

    /// Layout size of the image slot for a row.
    ///
    /// Resolved image wins; a pending URL uses the placeholder's
    /// dimensions; a pending URL with no placeholder gets a zero-size
    /// slot until resolution.
    pub fn image_slot(row: &dyn Row) -> Vec2 {
        if let Some(texture) = row.image() {
            texture.size_vec2()
        } else if row.image_url().is_some() {
            row.image_placeholder()
                .map(|t| t.size_vec2())
                .unwrap_or(Vec2::ZERO)
        } else {
            Vec2::ZERO
        }
    }

    fn effective_accessory(row: &dyn Row, config: &TableConfig) -> Accessory {
        if row.accessory() != Accessory::None {
            row.accessory()
        } else if row.is_selectable()
            && row.display_selection_indicator()
            && config.display_selection_indicator
        {
            Accessory::Disclosure
        } else {
            Accessory::None
        }
    }

    fn height_for(row: &dyn Row, config: &TableConfig) -> f32 {
        if let Some(height) = row.estimated_height() {
            return height;
        }
        let padding = row.padding().unwrap_or(config.row_padding);
        let text_height = if row.subtitle().is_some() {
            theme::FONT_TITLE + theme::TITLE_SUBTITLE_GAP + theme::FONT_SUBTITLE
        } else {
            theme::FONT_TITLE
        };
        let content = text_height.max(Self::image_slot(row).y);
        content.max(config.min_row_height) + 2.0 * padding
    }

    /// Draws the bound row's content and returns the cell's response.
    /// Click sense is only enabled for selectable rows.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        row: &dyn Row,
        config: &TableConfig,
    ) -> egui::Response {
        let height = Self::height_for(row, config);
        let sense = if row.is_selectable() {
            Sense::click()
        } else {
            Sense::hover()
        };
        let (rect, response) =
            ui.allocate_exact_size(Vec2::new(ui.available_width(), height), sense);

        if !ui.is_rect_visible(rect) {
            return response;
        }

        let painter = ui.painter();

        if row.is_selectable() {
            if response.is_pointer_button_down_on() {
                painter.rect_filled(rect, 0.0, theme::BG_PRESSED);
            } else if response.hovered() {
                painter.rect_filled(rect, 0.0, theme::BG_HOVER);
                ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
            }
        }

        let mut left = rect.left() + theme::CELL_INNER_MARGIN;
        let mut right = rect.right() - theme::CELL_INNER_MARGIN;

        // Image slot (resolved image, else placeholder-sized)
        let slot = Self::image_slot(row);
        if slot != Vec2::ZERO {
            let image_rect = Rect::from_min_size(
                Pos2::new(left, rect.center().y - slot.y / 2.0),
                slot,
            );
            if let Some(texture) = row.image().or_else(|| row.image_placeholder()) {
                painter.image(
                    texture.id(),
                    image_rect,
                    Rect::from_min_max(Pos2::new(0.0, 0.0), Pos2::new(1.0, 1.0)),
                    Color32::WHITE,
                );
            }
            left += slot.x + theme::IMAGE_TEXT_GAP;
        }

        // Accessory glyph on the right
        let accessory = Self::effective_accessory(row, config);
        if let Some(glyph) = accessory.glyph() {
            let color = if accessory == Accessory::Checkmark {
                theme::ACCESSORY_CHECK
            } else {
                theme::ACCESSORY
            };
            painter.text(
                Pos2::new(right, rect.center().y),
                Align2::RIGHT_CENTER,
                glyph,
                FontId::proportional(theme::FONT_ACCESSORY),
                color,
            );
            right -= theme::FONT_ACCESSORY + 6.0;
        }

        // Title and subtitle, clipped short of the accessory
        let text_painter = painter.with_clip_rect(Rect::from_min_max(
            Pos2::new(left, rect.top()),
            Pos2::new(right, rect.bottom()),
        ));
        let title_color = row.text_color().unwrap_or(theme::TEXT_PRIMARY);

        match (row.title(), row.subtitle()) {
            (Some(title), Some(subtitle)) => {
                let split = theme::TITLE_SUBTITLE_GAP / 2.0;
                text_painter.text(
                    Pos2::new(left, rect.center().y - split),
                    Align2::LEFT_BOTTOM,
                    title,
                    FontId::proportional(theme::FONT_TITLE),
                    title_color,
                );
                text_painter.text(
                    Pos2::new(left, rect.center().y + split),
                    Align2::LEFT_TOP,
                    subtitle,
                    FontId::proportional(theme::FONT_SUBTITLE),
                    theme::TEXT_MUTED,
                );
            }
            (Some(title), None) => {
                text_painter.text(
                    Pos2::new(left, rect.center().y),
                    Align2::LEFT_CENTER,
                    title,
                    FontId::proportional(theme::FONT_TITLE),
                    title_color,
                );
            }
            (None, Some(subtitle)) => {
                text_painter.text(
                    Pos2::new(left, rect.center().y),
                    Align2::LEFT_CENTER,
                    subtitle,
                    FontId::proportional(theme::FONT_SUBTITLE),
                    theme::TEXT_MUTED,
                );
            }
            (None, None) => {}
        }

        self.separator_top.paint(painter, rect.top(), rect.x_range());
        self.separator_bottom
            .paint(painter, rect.bottom(), rect.x_range());

        response
    }
}

/// Reuse pool for cell views. Cells are never individually destroyed;
/// they cycle between the pool and the visible table.
#[derive(Default)]
pub struct CellPool {
    free: Vec<CellView>,
}

impl CellPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pops a recycled cell, or creates one if the pool is empty. The
    /// returned cell keeps whatever state its last binding left behind;
    /// callers must rebind before drawing.
    pub fn dequeue(&mut self) -> CellView {
        self.free.pop().unwrap_or_default()
    }

    pub fn recycle(&mut self, cell: CellView) {
        self.free.push(cell);
    }

    pub fn idle_count(&self) -> usize {
        self.free.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row::TableRow;

    #[test]
    fn bind_sets_path_and_separators() {
        let mut cell = CellView::default();
        cell.bind(IndexPath::new(0, 3), false);
        assert_eq!(cell.current_index_path, Some(IndexPath::new(0, 3)));
        assert!(!cell.separator_top.visible);
        assert!(!cell.separator_bottom.visible);

        cell.bind(IndexPath::new(1, 0), true);
        assert_eq!(cell.current_index_path, Some(IndexPath::new(1, 0)));
        assert!(cell.separator_top.visible);
        assert!(cell.separator_bottom.visible);
    }

    #[test]
    fn image_slot_is_zero_without_placeholder() {
        let row = TableRow::with_image_url("A", "B", "https://example.com/a.png");
        assert_eq!(CellView::image_slot(&row), Vec2::ZERO);
    }

    #[test]
    fn image_slot_uses_placeholder_dimensions() {
        let ctx = egui::Context::default();
        let placeholder = ctx.load_texture(
            "placeholder",
            egui::ColorImage::example(),
            egui::TextureOptions::LINEAR,
        );
        let expected = placeholder.size_vec2();

        let mut row = TableRow::with_image_url("A", "B", "https://example.com/a.png");
        row.set_image_placeholder(placeholder);
        assert_eq!(CellView::image_slot(&row), expected);
    }

    #[test]
    fn height_floors_at_min_and_grows_with_padding() {
        let config = TableConfig::default();
        let row = TableRow::with_title("Short");
        assert_eq!(
            CellView::height_for(&row, &config),
            config.min_row_height
        );

        let mut padded = TableRow::with_title("Padded");
        padded.padding = Some(10.0);
        assert_eq!(
            CellView::height_for(&padded, &config),
            config.min_row_height + 20.0
        );

        let mut fixed = TableRow::with_title("Fixed");
        fixed.padding = Some(10.0);
        let fixed = {
            // estimated_height overrides everything, padding included
            struct Fixed(TableRow);
            impl Row for Fixed {
                fn title(&self) -> Option<&str> {
                    self.0.title.as_deref()
                }
                fn estimated_height(&self) -> Option<f32> {
                    Some(50.0)
                }
            }
            Fixed(fixed)
        };
        assert_eq!(CellView::height_for(&fixed, &config), 50.0);
    }

    #[test]
    fn pool_recycles_cells() {
        let mut pool = CellPool::new();
        assert_eq!(pool.idle_count(), 0);

        let mut cell = pool.dequeue();
        cell.bind(IndexPath::new(0, 0), true);
        pool.recycle(cell);
        assert_eq!(pool.idle_count(), 1);

        // Recycled cell comes back stale; bind is the caller's job.
        let cell = pool.dequeue();
        assert_eq!(cell.current_index_path, Some(IndexPath::new(0, 0)));
        assert_eq!(pool.idle_count(), 0);
    }
}
