use crate::result::QueryResult;
use crate::view::{Pagination, TableView};

/// Owns the current result set and pagination state.
///
/// State is held here, not at module scope, so the renderer can be exercised
/// against fixture consoles. A render pass follows every mutation; callers
/// get the fresh [`TableView`] back from the mutating methods.
#[derive(Debug, Default)]
pub struct Console {
    result: Option<QueryResult>,
    pagination: Pagination,
}

impl Console {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces any prior result and restarts at the first page. The page
    /// size survives across queries.
    pub fn set_result(&mut self, result: QueryResult) -> TableView {
        self.pagination.reset_page();
        let view = TableView::build(&result, &self.pagination);
        self.result = Some(result);
        view
    }

    /// Drops the result set; the next render shows the initial placeholder.
    pub fn clear(&mut self) {
        self.result = None;
        self.pagination.reset_page();
    }

    pub fn go_to_page(&mut self, page: usize) -> Option<TableView> {
        self.pagination.go_to_page(page);
        self.render()
    }

    pub fn change_rows_per_page(&mut self, size: usize) -> Option<TableView> {
        self.pagination.change_rows_per_page(size);
        self.render()
    }

    /// `None` until a query has produced a result.
    pub fn render(&self) -> Option<TableView> {
        self.result
            .as_ref()
            .map(|result| TableView::build(result, &self.pagination))
    }

    pub fn result(&self) -> Option<&QueryResult> {
        self.result.as_ref()
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered_result(count: usize) -> QueryResult {
        let rows = (1..=count).map(|i| vec![i.to_string()]).collect();
        QueryResult::new(vec!["n".to_string()], rows).unwrap()
    }

    #[test]
    fn test_new_console_renders_nothing() {
        assert!(Console::new().render().is_none());
    }

    #[test]
    fn test_new_result_resets_page_but_keeps_size() {
        let mut console = Console::new();
        console.change_rows_per_page(25);
        console.set_result(numbered_result(100));
        console.go_to_page(4);
        assert_eq!(console.pagination().current_page(), 4);

        console.set_result(numbered_result(60));
        assert_eq!(console.pagination().current_page(), 1);
        assert_eq!(console.pagination().rows_per_page(), 25);
    }

    #[test]
    fn test_size_change_resets_page() {
        let mut console = Console::new();
        console.set_result(numbered_result(300));
        console.go_to_page(3);
        let view = console.change_rows_per_page(100).unwrap();
        match view {
            TableView::Page(page) => {
                assert_eq!(page.controls.current_page, 1);
                assert_eq!(page.rows.len(), 100);
            }
            TableView::Empty => panic!("expected a table page"),
        }
    }

    #[test]
    fn test_clear_returns_to_initial_state() {
        let mut console = Console::new();
        console.set_result(numbered_result(10));
        console.clear();
        assert!(console.render().is_none());
        assert!(console.result().is_none());
    }
}
