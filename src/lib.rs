//! Declarative rows, sections and cells for egui list views
//!
//! Describe table content as plain data objects instead of wiring list
//! callbacks by hand:
//!
//! ```no_run
//! use rowtable::{Link, TableRow, TableSection, TableView};
//!
//! let mut table = TableView::new();
//! table.push_section(
//!     TableSection::new(vec![
//!         TableRow::with_title("Settings")
//!             .on_select(|path, _| println!("tapped {:?}", path))
//!             .boxed(),
//!         TableRow::with_title("Project page")
//!             .with_link(Link::Url("https://example.com".into()))
//!             .boxed(),
//!     ])
//!     .with_header("General"),
//! );
//! # let _ = table;
//! ```
//!
//! Rows with an `image_url` resolve asynchronously: the cell lays out
//! against the placeholder's dimensions, the loader fetches and caches
//! the bytes in the background, and the resolved texture is swapped in
//! on the frame its completion arrives.

pub mod cell;
pub mod config;
pub mod constants;
pub mod images;
pub mod row;
pub mod section;
pub mod table;
pub mod theme;
pub mod types;

pub use cell::{CellPool, CellView, Separator};
pub use config::TableConfig;
pub use images::ImageLoader;
pub use row::{Row, TableRow};
pub use section::{Section, TableSection};
pub use table::TableView;
pub use types::{Accessory, IndexPath, Link, SelectionHandler};
