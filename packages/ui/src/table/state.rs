//! Table controller state: search, pagination, and optimistic row edits.
//!
//! The controller never performs network I/O. Mutations update the local
//! rows immediately; the component invokes a parent callback and the parent
//! reconciles with the backend by invalidating and refetching.

use super::row::{derive_columns, CellValue, Column, Row};

#[derive(Debug, Clone, PartialEq)]
pub struct TableState {
    rows: Vec<Row>,
    search: String,
    page: usize,
    page_size: usize,
    search_fields: Vec<String>,
}

impl TableState {
    pub fn new(page_size: usize, search_fields: Vec<String>) -> Self {
        Self {
            rows: Vec::new(),
            search: String::new(),
            page: 1,
            page_size: page_size.max(1),
            search_fields,
        }
    }

    /// Replace the backing rows. Resets to the first page.
    pub fn set_rows(&mut self, rows: Vec<Row>) {
        self.rows = rows;
        self.page = 1;
    }

    /// Update the search query. Resets to the first page.
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
        self.page = 1;
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Stored as given; bounds are enforced by the pager buttons, not here.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn columns(&self) -> Vec<Column> {
        derive_columns(&self.rows)
    }

    /// Rows matching the search query, in input order. Matching is a
    /// case-insensitive substring test over the configured search fields,
    /// or every field when none are configured.
    pub fn filtered(&self) -> Vec<Row> {
        if self.search.is_empty() {
            return self.rows.clone();
        }
        let needle = self.search.to_lowercase();
        self.rows
            .iter()
            .filter(|row| {
                if self.search_fields.is_empty() {
                    row.keys().any(|key| {
                        row.get(key).is_some_and(|value| value.matches(&needle))
                    })
                } else {
                    self.search_fields.iter().any(|field| {
                        row.get(field).is_some_and(|value| value.matches(&needle))
                    })
                }
            })
            .cloned()
            .collect()
    }

    /// The current page slice of the filtered rows.
    pub fn page_rows(&self) -> Vec<Row> {
        let filtered = self.filtered();
        let start = (self.page - 1).saturating_mul(self.page_size);
        filtered
            .into_iter()
            .skip(start)
            .take(self.page_size)
            .collect()
    }

    pub fn total_pages(&self) -> usize {
        self.filtered().len().div_ceil(self.page_size).max(1)
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    // -- optimistic mutations ------------------------------------------------

    pub fn update_row(&mut self, updated: Row) {
        if let Some(row) = self.rows.iter_mut().find(|row| row.id == updated.id) {
            *row = updated;
        }
    }

    pub fn update_field(&mut self, id: &str, field: &str, value: CellValue) {
        if let Some(row) = self.rows.iter_mut().find(|row| row.id == id) {
            row.set(field, value);
        }
    }

    pub fn remove(&mut self, id: &str) {
        self.rows.retain(|row| row.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task_row(id: &str, title: &str, status: &str, assignees: &[&str]) -> Row {
        Row::new(id)
            .with("title", CellValue::text(title))
            .with("status", CellValue::text(status))
            .with("assigned_to", CellValue::list(assignees.to_vec()))
    }

    fn sample_rows() -> Vec<Row> {
        vec![
            task_row("1", "Open the store", "Pending", &["Asha"]),
            task_row("2", "Stock shelves", "In Progress", &["Ravi", "Meena"]),
            task_row("3", "Close the till", "Completed", &["Asha", "Ravi"]),
        ]
    }

    #[test]
    fn search_is_case_insensitive_substring_over_configured_fields() {
        let mut state = TableState::new(10, vec!["title".to_string()]);
        state.set_rows(sample_rows());

        state.set_search("STORE");
        let filtered = state.filtered();
        let ids: Vec<&str> = filtered.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["1"]);

        // "Ravi" only appears in assigned_to, which is not a search field.
        state.set_search("ravi");
        assert!(state.filtered().is_empty());
    }

    #[test]
    fn search_without_configured_fields_checks_everything_including_lists() {
        let mut state = TableState::new(10, Vec::new());
        state.set_rows(sample_rows());

        state.set_search("ravi");
        let filtered = state.filtered();
        let ids: Vec<&str> = filtered.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["2", "3"]);

        state.set_search("");
        assert_eq!(state.filtered().len(), 3);
    }

    #[test]
    fn refetched_rows_overwrite_an_optimistic_edit() {
        let mut state = TableState::new(1, Vec::new());
        state.set_rows(sample_rows());
        state.set_page(2);
        state.update_field("1", "status", CellValue::text("Completed"));

        // The backend rejected the change, so the authoritative rows come
        // back unchanged and must win over the local edit.
        state.set_rows(sample_rows());
        let rows = state.filtered();
        let row = rows.iter().find(|row| row.id == "1").unwrap();
        assert_eq!(row.get_text("status"), "Pending");
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn search_resets_pagination() {
        let mut state = TableState::new(1, Vec::new());
        state.set_rows(sample_rows());
        state.set_page(3);
        state.set_search("a");
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn pagination_slices_filtered_rows() {
        let mut state = TableState::new(2, Vec::new());
        state.set_rows(sample_rows());

        assert_eq!(state.page_rows().len(), 2);
        assert_eq!(state.total_pages(), 2);
        assert!(!state.has_prev());
        assert!(state.has_next());

        state.set_page(2);
        let page = state.page_rows();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].id, "3");
        assert!(state.has_prev());
        assert!(!state.has_next());

        // Past the end: empty, no clamping.
        state.set_page(3);
        assert!(state.page_rows().is_empty());
    }

    #[test]
    fn optimistic_mutations_apply_locally() {
        let mut state = TableState::new(10, Vec::new());
        state.set_rows(sample_rows());

        state.update_field("1", "status", CellValue::text("Completed"));
        assert_eq!(state.filtered()[0].get_text("status"), "Completed");

        let mut replacement = task_row("2", "Restock shelves", "Pending", &["Ravi"]);
        replacement.set("status", CellValue::text("Pending"));
        state.update_row(replacement);
        assert_eq!(state.filtered()[1].get_text("title"), "Restock shelves");

        state.remove("3");
        assert_eq!(state.filtered().len(), 2);
    }

    #[test]
    fn new_rows_reset_to_first_page() {
        let mut state = TableState::new(1, Vec::new());
        state.set_rows(sample_rows());
        state.set_page(2);
        state.set_rows(sample_rows());
        assert_eq!(state.page(), 1);
    }
}
