use super::escape::escape;
use super::pagination::{Pagination, PAGE_SIZES};
use crate::result::QueryResult;

/// Placeholder shown when a query succeeded but matched nothing.
pub const EMPTY_RESULT_HTML: &str = concat!(
    "<div class=\"no-data\">",
    "<h3>Query Result is Empty</h3>",
    "<p>No matching data found</p>",
    "</div>"
);

/// One rendering of the results area.
///
/// The tree is plain data so tests can assert on headers, visible rows, and
/// control flags without going through the markup. [`TableView::to_html`]
/// serializes it; the fragment is replaced wholesale on every render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableView {
    /// Empty result set: no table, no pagination controls.
    Empty,
    Page(TablePage),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TablePage {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub controls: Controls,
}

/// Pagination controls and status for the rendered page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub current_page: usize,
    pub total_pages: usize,
    pub rows_per_page: usize,
    /// 1-based index of the first visible row.
    pub showing_from: usize,
    /// 1-based index of the last visible row.
    pub showing_to: usize,
    pub total_rows: usize,
    pub first_enabled: bool,
    pub prev_enabled: bool,
    pub next_enabled: bool,
    pub last_enabled: bool,
}

impl TableView {
    pub fn build(result: &QueryResult, pagination: &Pagination) -> Self {
        if result.rows.is_empty() {
            return Self::Empty;
        }

        let total_rows = result.rows.len();
        let total_pages = pagination.total_pages(total_rows);
        let page = pagination.clamped_page(total_rows);
        let (start, end) = pagination.visible_range(total_rows);
        let at_first = page == 1;
        let at_last = page == total_pages;

        Self::Page(TablePage {
            headers: result.columns.clone(),
            rows: result.rows[start..end].to_vec(),
            controls: Controls {
                current_page: page,
                total_pages,
                rows_per_page: pagination.rows_per_page(),
                showing_from: start + 1,
                showing_to: end,
                total_rows,
                first_enabled: !at_first,
                prev_enabled: !at_first,
                next_enabled: !at_last,
                last_enabled: !at_last,
            },
        })
    }

    pub fn to_html(&self) -> String {
        match self {
            Self::Empty => EMPTY_RESULT_HTML.to_string(),
            Self::Page(page) => page.to_html(),
        }
    }
}

impl TablePage {
    pub fn to_html(&self) -> String {
        let mut html = String::from("<div class=\"table-container\"><table><thead><tr>");
        for column in &self.headers {
            html.push_str("<th>");
            html.push_str(&escape(column));
            html.push_str("</th>");
        }
        html.push_str("</tr></thead><tbody>");
        for row in &self.rows {
            html.push_str("<tr>");
            for cell in row {
                html.push_str("<td>");
                html.push_str(&escape(cell));
                html.push_str("</td>");
            }
            html.push_str("</tr>");
        }
        html.push_str("</tbody></table></div>");
        html.push_str(&self.controls.to_html());
        html
    }
}

impl Controls {
    fn page_button(label: &str, target: usize, enabled: bool) -> String {
        format!(
            "<button name=\"page\" value=\"{target}\"{}>{label}</button>",
            if enabled { "" } else { " disabled" }
        )
    }

    pub fn to_html(&self) -> String {
        let mut options = String::new();
        for size in PAGE_SIZES {
            options.push_str(&format!(
                "<option value=\"{size}\"{}>{size} / page</option>",
                if size == self.rows_per_page { " selected" } else { "" }
            ));
        }

        format!(
            concat!(
                "<div class=\"pagination\">",
                "<div class=\"pagination-info\">Showing {from} to {to} of {total} rows</div>",
                "<div class=\"pagination-controls\">",
                "<form method=\"get\" action=\"/page-size\">",
                "<select name=\"size\">{options}</select>",
                "<button type=\"submit\">Apply</button>",
                "</form>",
                "<form method=\"get\" action=\"/page\">",
                "{first}{prev}",
                "<span class=\"page-status\">Page {page} of {pages}</span>",
                "{next}{last}",
                "</form>",
                "</div></div>"
            ),
            from = self.showing_from,
            to = self.showing_to,
            total = self.total_rows,
            options = options,
            first = Self::page_button("First", 1, self.first_enabled),
            prev = Self::page_button("Previous", self.current_page - 1, self.prev_enabled),
            page = self.current_page,
            pages = self.total_pages,
            next = Self::page_button("Next", self.current_page + 1, self.next_enabled),
            last = Self::page_button("Last", self.total_pages, self.last_enabled),
        )
    }
}
