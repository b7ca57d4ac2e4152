//! Row descriptors - the declarative data objects behind each cell

use crate::cell::CellView;
use crate::types::{Accessory, IndexPath, Link, SelectionHandler};
use egui::{Color32, TextureHandle};

/// Data-source contract a table view reads display values through.
///
/// Every method has a default so implementors only override what they
/// actually display; `TableRow` is the ready-made property bag for the
/// common shapes.
pub trait Row {
    /// Primary text of the row.
    fn title(&self) -> Option<&str> {
        None
    }

    /// Secondary text drawn beneath the title.
    fn subtitle(&self) -> Option<&str> {
        None
    }

    /// Override for the title color.
    fn text_color(&self) -> Option<Color32> {
        None
    }

    /// Resolved bitmap for the image slot.
    fn image(&self) -> Option<&TextureHandle> {
        None
    }

    /// Remote image source, fetched lazily when the row is first bound.
    fn image_url(&self) -> Option<&str> {
        None
    }

    /// Fallback bitmap that sizes the image slot while `image_url` loads.
    fn image_placeholder(&self) -> Option<&TextureHandle> {
        None
    }

    /// Delivery point for async image completions. Default: ignore.
    fn set_resolved_image(&mut self, _texture: TextureHandle) {}

    /// Trailing decoration for the cell.
    fn accessory(&self) -> Accessory {
        Accessory::None
    }

    /// Navigation target activated when the row is selected.
    fn link(&self) -> Option<&Link> {
        None
    }

    /// Callback invoked when the row is selected.
    fn selection_handler(&self) -> Option<&SelectionHandler> {
        None
    }

    /// Whether a selectable row shows its selection indicator.
    fn display_selection_indicator(&self) -> bool {
        true
    }

    /// Whether the cell draws its top/bottom separators.
    fn display_separators(&self) -> bool {
        true
    }

    /// Per-row vertical inset; `None` falls back to the table config.
    fn padding(&self) -> Option<f32> {
        None
    }

    /// Manual height override for the cell.
    fn estimated_height(&self) -> Option<f32> {
        None
    }

    /// A row is selectable when something would respond to a tap.
    fn is_selectable(&self) -> bool {
        self.selection_handler().is_some() || self.link().is_some()
    }

    /// Hook called after every bind for custom cell overrides.
    fn configure(&self, _cell: &mut CellView, _index_path: IndexPath) {}
}

/// Concrete row: a property bag plus factory constructors for the common
/// shapes. Held by its section for the table's lifetime and mutated only
/// by the owner or by async image resolution.
pub struct TableRow {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub text_color: Option<Color32>,
    pub link: Option<Link>,
    pub accessory: Accessory,
    pub display_selection_indicator: bool,
    pub display_separators: bool,
    pub padding: Option<f32>,
    // Image state is private: at most one of {image, image_url} may drive
    // the rendered image, and setting a URL clears any resolved bitmap.
    image: Option<TextureHandle>,
    image_url: Option<String>,
    image_placeholder: Option<TextureHandle>,
    selection_handler: Option<SelectionHandler>,
}

impl Default for TableRow {
    fn default() -> Self {
        Self {
            title: None,
            subtitle: None,
            text_color: None,
            link: None,
            accessory: Accessory::None,
            display_selection_indicator: true,
            display_separators: true,
            padding: None,
            image: None,
            image_url: None,
            image_placeholder: None,
            selection_handler: None,
        }
    }
}

impl TableRow {
    /// Row with only a title.
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Row with a title in a custom color.
    pub fn with_colored_title(title: impl Into<String>, color: Color32) -> Self {
        Self {
            title: Some(title.into()),
            text_color: Some(color),
            ..Default::default()
        }
    }

    /// Row with title, subtitle and an already-resolved image.
    pub fn with_image(
        title: impl Into<String>,
        subtitle: impl Into<String>,
        image: TextureHandle,
    ) -> Self {
        Self {
            title: Some(title.into()),
            subtitle: Some(subtitle.into()),
            image: Some(image),
            ..Default::default()
        }
    }

    /// Row whose image loads asynchronously from a URL.
    ///
    /// Set a placeholder with [`set_image_placeholder`](Self::set_image_placeholder)
    /// before layout: its dimensions size the image slot until the fetch
    /// completes. Without one the slot is zero-size until resolution.
    pub fn with_image_url(
        title: impl Into<String>,
        subtitle: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            title: Some(title.into()),
            subtitle: Some(subtitle.into()),
            image_url: Some(url.into()),
            ..Default::default()
        }
    }

    /// Registers a selection callback, making the row selectable.
    pub fn on_select(mut self, handler: impl Fn(IndexPath, bool) + 'static) -> Self {
        self.selection_handler = Some(Box::new(handler));
        self
    }

    /// Attaches a navigation link, making the row selectable.
    pub fn with_link(mut self, link: Link) -> Self {
        self.link = Some(link);
        self
    }

    pub fn set_selection_handler(&mut self, handler: impl Fn(IndexPath, bool) + 'static) {
        self.selection_handler = Some(Box::new(handler));
    }

    pub fn clear_selection_handler(&mut self) {
        self.selection_handler = None;
    }

    pub fn set_image(&mut self, image: TextureHandle) {
        self.image = Some(image);
    }

    /// Points the row at a remote image, discarding any resolved bitmap.
    pub fn set_image_url(&mut self, url: impl Into<String>) {
        self.image_url = Some(url.into());
        self.image = None;
    }

    pub fn set_image_placeholder(&mut self, placeholder: TextureHandle) {
        self.image_placeholder = Some(placeholder);
    }

    /// Boxes the row for storage in a section.
    pub fn boxed(self) -> Box<dyn Row> {
        Box::new(self)
    }
}

impl Row for TableRow {
    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    fn text_color(&self) -> Option<Color32> {
        self.text_color
    }

    fn image(&self) -> Option<&TextureHandle> {
        self.image.as_ref()
    }

    fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    fn image_placeholder(&self) -> Option<&TextureHandle> {
        self.image_placeholder.as_ref()
    }

    fn set_resolved_image(&mut self, texture: TextureHandle) {
        self.image = Some(texture);
    }

    fn accessory(&self) -> Accessory {
        self.accessory
    }

    fn link(&self) -> Option<&Link> {
        self.link.as_ref()
    }

    fn selection_handler(&self) -> Option<&SelectionHandler> {
        self.selection_handler.as_ref()
    }

    fn display_selection_indicator(&self) -> bool {
        self.display_selection_indicator
    }

    fn display_separators(&self) -> bool {
        self.display_separators
    }

    fn padding(&self) -> Option<f32> {
        self.padding
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn texture(ctx: &egui::Context, name: &str) -> TextureHandle {
        ctx.load_texture(
            name,
            egui::ColorImage::example(),
            egui::TextureOptions::LINEAR,
        )
    }

    #[test]
    fn title_factory() {
        let row = TableRow::with_title("Settings");
        assert_eq!(Row::title(&row), Some("Settings"));
        assert_eq!(Row::subtitle(&row), None);
        assert!(Row::image(&row).is_none());
        assert!(Row::text_color(&row).is_none());
        assert!(row.display_selection_indicator);
        assert_eq!(Row::padding(&row), None);
        assert!(!row.is_selectable());
    }

    #[test]
    fn colored_title_factory() {
        let row = TableRow::with_colored_title("Danger", Color32::RED);
        assert_eq!(Row::title(&row), Some("Danger"));
        assert_eq!(Row::text_color(&row), Some(Color32::RED));
        assert_eq!(Row::subtitle(&row), None);
    }

    #[test]
    fn image_factory() {
        let ctx = egui::Context::default();
        let tex = texture(&ctx, "row");
        let row = TableRow::with_image("Title", "Sub", tex);
        assert_eq!(Row::title(&row), Some("Title"));
        assert_eq!(Row::subtitle(&row), Some("Sub"));
        assert!(Row::image(&row).is_some());
        assert!(Row::image_url(&row).is_none());
    }

    #[test]
    fn image_url_factory() {
        let row = TableRow::with_image_url("A", "B", "https://example.com/a.png");
        assert_eq!(Row::title(&row), Some("A"));
        assert_eq!(Row::subtitle(&row), Some("B"));
        assert_eq!(Row::image_url(&row), Some("https://example.com/a.png"));
        // No resolved image until the loader supplies one.
        assert!(Row::image(&row).is_none());
        assert!(Row::image_placeholder(&row).is_none());
    }

    #[test]
    fn on_select_flips_selectable_without_touching_content() {
        let fired = Rc::new(Cell::new(false));
        let fired2 = fired.clone();

        let row = TableRow::with_title("Tap me").on_select(move |_, _| fired2.set(true));
        assert!(row.is_selectable());
        assert_eq!(Row::title(&row), Some("Tap me"));
        assert_eq!(Row::subtitle(&row), None);
        assert!(Row::image(&row).is_none());

        let handler = row.selection_handler().unwrap();
        handler(IndexPath::new(0, 0), true);
        assert!(fired.get());
    }

    #[test]
    fn link_flips_selectable() {
        let row =
            TableRow::with_title("Docs").with_link(Link::Url("https://example.com".into()));
        assert!(row.is_selectable());
    }

    #[test]
    fn setting_url_clears_resolved_image() {
        let ctx = egui::Context::default();
        let mut row = TableRow::with_image("T", "S", texture(&ctx, "resolved"));
        assert!(Row::image(&row).is_some());

        row.set_image_url("https://example.com/b.png");
        assert!(Row::image(&row).is_none());
        assert_eq!(Row::image_url(&row), Some("https://example.com/b.png"));

        // Loader resolution brings the image back.
        row.set_resolved_image(texture(&ctx, "fetched"));
        assert!(Row::image(&row).is_some());
    }
}
