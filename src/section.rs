//! Sections - ordered groups of rows with optional header and footer text

use crate::row::Row;
use crate::types::SelectionHandler;
use std::collections::BTreeMap;

/// Contract the table view walks sections through.
pub trait Section {
    fn rows(&self) -> &[Box<dyn Row>];

    fn rows_mut(&mut self) -> &mut [Box<dyn Row>];

    /// Text drawn above the section's rows.
    fn header(&self) -> Option<&str> {
        None
    }

    /// Text drawn below the section's rows.
    fn footer(&self) -> Option<&str> {
        None
    }

    /// Section-level fallback invoked after any row in it is selected.
    fn selection_handler(&self) -> Option<&SelectionHandler> {
        None
    }
}

/// Concrete section holding boxed rows.
pub struct TableSection {
    pub header: Option<String>,
    pub footer: Option<String>,
    pub rows: Vec<Box<dyn Row>>,
    pub selection_handler: Option<SelectionHandler>,
}

impl TableSection {
    pub fn new(rows: Vec<Box<dyn Row>>) -> Self {
        Self {
            header: None,
            footer: None,
            rows,
            selection_handler: None,
        }
    }

    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    pub fn on_select(mut self, handler: impl Fn(crate::IndexPath, bool) + 'static) -> Self {
        self.selection_handler = Some(Box::new(handler));
        self
    }

    /// Groups rows into alphabetical sections keyed by the uppercased
    /// first letter of each title. Rows without a usable title land in a
    /// `"?"` section. Sections come back sorted ascending.
    pub fn sorted_sections(rows: Vec<Box<dyn Row>>) -> Vec<TableSection> {
        let mut buckets: BTreeMap<String, Vec<Box<dyn Row>>> = BTreeMap::new();

        for row in rows {
            let first_letter = row
                .title()
                .and_then(|t| t.chars().next())
                .map(|c| c.to_uppercase().to_string())
                .unwrap_or_else(|| "?".to_string());
            buckets.entry(first_letter).or_default().push(row);
        }

        buckets
            .into_iter()
            .map(|(letter, rows)| TableSection::new(rows).with_header(letter))
            .collect()
    }

    pub fn boxed(self) -> Box<dyn Section> {
        Box::new(self)
    }
}

impl Section for TableSection {
    fn rows(&self) -> &[Box<dyn Row>] {
        &self.rows
    }

    fn rows_mut(&mut self) -> &mut [Box<dyn Row>] {
        &mut self.rows
    }

    fn header(&self) -> Option<&str> {
        self.header.as_deref()
    }

    fn footer(&self) -> Option<&str> {
        self.footer.as_deref()
    }

    fn selection_handler(&self) -> Option<&SelectionHandler> {
        self.selection_handler.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row::TableRow;

    fn titled(titles: &[&str]) -> Vec<Box<dyn Row>> {
        titles
            .iter()
            .map(|t| TableRow::with_title(*t).boxed())
            .collect()
    }

    #[test]
    fn builders() {
        let section = TableSection::new(titled(&["a"]))
            .with_header("General")
            .with_footer("Fine print");
        assert_eq!(Section::header(&section), Some("General"));
        assert_eq!(Section::footer(&section), Some("Fine print"));
        assert_eq!(section.rows().len(), 1);
    }

    #[test]
    fn sorted_sections_group_alphabetically() {
        let sections =
            TableSection::sorted_sections(titled(&["banana", "Apple", "avocado", "Cherry"]));

        let headers: Vec<_> = sections.iter().map(|s| s.header.as_deref()).collect();
        assert_eq!(headers, [Some("A"), Some("B"), Some("C")]);
        assert_eq!(sections[0].rows.len(), 2);
        assert_eq!(sections[1].rows.len(), 1);
        assert_eq!(sections[2].rows.len(), 1);
    }

    #[test]
    fn untitled_rows_fall_into_question_bucket() {
        let mut rows = titled(&["Zebra"]);
        rows.push(TableRow::default().boxed());
        rows.push(TableRow::with_title("").boxed());

        let sections = TableSection::sorted_sections(rows);
        let headers: Vec<_> = sections.iter().map(|s| s.header.as_deref()).collect();
        assert_eq!(headers, [Some("?"), Some("Z")]);
        assert_eq!(sections[0].rows.len(), 2);
    }
}
