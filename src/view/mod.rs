mod escape;
mod page;
mod pagination;
mod table;

pub use escape::escape;
pub use page::{render_page, Banner, NO_RESULTS_HTML, STYLE_CSS};
pub use pagination::{Pagination, DEFAULT_PAGE_SIZE, PAGE_SIZES};
pub use table::{Controls, TablePage, TableView, EMPTY_RESULT_HTML};
