/// Page sizes offered by the selector.
pub const PAGE_SIZES: [usize; 4] = [25, 50, 100, 200];

pub const DEFAULT_PAGE_SIZE: usize = 50;

/// Current page and page size for slicing a result set.
///
/// The stored page may point past the end of a shrunken result; slicing
/// always goes through [`Pagination::clamped_page`], which keeps the
/// effective page in `[1, max(total_pages, 1)]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    current_page: usize,
    rows_per_page: usize,
}

impl Pagination {
    pub fn new() -> Self {
        Self {
            current_page: 1,
            rows_per_page: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn rows_per_page(&self) -> usize {
        self.rows_per_page
    }

    pub fn total_pages(&self, total_rows: usize) -> usize {
        total_rows.div_ceil(self.rows_per_page)
    }

    pub fn clamped_page(&self, total_rows: usize) -> usize {
        self.current_page.clamp(1, self.total_pages(total_rows).max(1))
    }

    /// Half-open row range visible on the current page.
    pub fn visible_range(&self, total_rows: usize) -> (usize, usize) {
        let page = self.clamped_page(total_rows);
        let start = (page - 1) * self.rows_per_page;
        let end = (start + self.rows_per_page).min(total_rows);
        (start, end)
    }

    /// Moves to `page`. Bounds are not re-validated here; the renderer only
    /// offers reachable pages and slicing clamps regardless.
    pub fn go_to_page(&mut self, page: usize) {
        self.current_page = page.max(1);
    }

    /// Switches the page size and restarts at the first page. Sizes outside
    /// [`PAGE_SIZES`] leave the state unchanged.
    pub fn change_rows_per_page(&mut self, size: usize) {
        if !PAGE_SIZES.contains(&size) {
            return;
        }
        self.rows_per_page = size;
        self.current_page = 1;
    }

    pub fn reset_page(&mut self) {
        self.current_page = 1;
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new()
    }
}
